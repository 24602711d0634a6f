//! Equality filters and the result cap applied to the upstream aircraft list.

use serde_json::Value;

/// Exact-match filters on the two fields this tool inspects.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AircraftFilter {
    pub aircraft_type: Option<String>,
    pub registration: Option<String>,
}

impl AircraftFilter {
    /// Empty strings are treated as no filter.
    pub fn new(aircraft_type: Option<String>, registration: Option<String>) -> Self {
        Self {
            aircraft_type: aircraft_type.filter(|v| !v.is_empty()),
            registration: registration.filter(|v| !v.is_empty()),
        }
    }

    /// A record passes when every active filter equals the record's field.
    /// Missing or non-string fields never satisfy an active filter.
    pub fn matches(&self, record: &Value) -> bool {
        field_matches(record, "aircraft_type", self.aircraft_type.as_deref())
            && field_matches(record, "registration", self.registration.as_deref())
    }
}

fn field_matches(record: &Value, field: &str, wanted: Option<&str>) -> bool {
    match wanted {
        None | Some("") => true,
        Some(wanted) => record.get(field).and_then(Value::as_str) == Some(wanted),
    }
}

/// The `aircraft` array of a decoded response body, if it has one.
pub fn aircraft_list(body: &Value) -> Option<&[Value]> {
    body.get("aircraft")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
}

/// Walks `records` once, in order, keeping matches until `limit` are kept.
/// Records past the cut are never looked at.
pub fn select(records: &[Value], filter: &AircraftFilter, limit: usize) -> Vec<Value> {
    let mut kept = Vec::new();
    if limit == 0 {
        return kept;
    }

    for record in records {
        if !filter.matches(record) {
            continue;
        }
        kept.push(record.clone());
        if kept.len() >= limit {
            break;
        }
    }
    kept
}
