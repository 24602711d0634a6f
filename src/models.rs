//! Query inputs and the result envelope printed by the CLI.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Flags the live feed expects on every request, all set to `"1"`.
pub const FEED_FLAGS: [&str; 9] = [
    "faa", "mlat", "flarm", "adsb", "gnd", "air", "vehicles", "estimated", "stats",
];

pub const DEFAULT_LIMIT: usize = 50;

/// A `minLat,minLon,maxLat,maxLon` rectangle.
///
/// The text is kept exactly as the user typed it so it can be forwarded to
/// the upstream service untouched; parsing only checks that it holds four
/// finite numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bounds(String);

impl Bounds {
    pub const WORLD: &'static str = "90,-180,-90,180";

    pub fn world() -> Self {
        Self(Self::WORLD.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::world()
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Bounds {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').collect();
        if parts.len() != 4 {
            return Err(format!(
                "expected 4 comma-separated values (minLat,minLon,maxLat,maxLon), got {}",
                parts.len()
            ));
        }
        for part in &parts {
            match part.trim().parse::<f64>() {
                Ok(v) if v.is_finite() => {}
                _ => return Err(format!("'{}' is not a number", part.trim())),
            }
        }
        Ok(Self(s.to_string()))
    }
}

/// Which upstream surface a query went to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiTier {
    Public,
    Premium,
}

/// Everything one invocation asks for.
#[derive(Debug, Clone, PartialEq)]
pub struct AircraftQuery {
    pub aircraft_type: Option<String>,
    pub registration: Option<String>,
    pub bounds: Option<Bounds>,
    pub limit: usize,
    pub api_key: Option<String>,
}

impl Default for AircraftQuery {
    fn default() -> Self {
        Self {
            aircraft_type: None,
            registration: None,
            bounds: None,
            limit: DEFAULT_LIMIT,
            api_key: None,
        }
    }
}

impl AircraftQuery {
    pub fn tier(&self) -> ApiTier {
        if self.api_key.is_some() {
            ApiTier::Premium
        } else {
            ApiTier::Public
        }
    }

    /// Query string pairs in the order they are sent: `bounds` first, then
    /// the fixed feed flags.
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let bounds = self
            .bounds
            .as_ref()
            .map(|b| b.as_str().to_string())
            .unwrap_or_else(|| Bounds::WORLD.to_string());

        let mut params = Vec::with_capacity(FEED_FLAGS.len() + 1);
        params.push(("bounds", bounds));
        params.extend(FEED_FLAGS.iter().map(|flag| (*flag, "1".to_string())));
        params
    }
}

/// Success or failure of a single query.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Outcome {
    Success {
        count: usize,
        aircraft: Vec<Value>,
        raw_response: Value,
    },
    Error {
        message: String,
    },
}

/// The uniform wrapper printed to stdout.
///
/// Serializes flat, e.g. `{"status":"error","message":"...","api_type":"public"}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryEnvelope {
    #[serde(flatten)]
    pub outcome: Outcome,
    pub api_type: ApiTier,
}

impl QueryEnvelope {
    pub fn success(aircraft: Vec<Value>, raw_response: Value, api_type: ApiTier) -> Self {
        Self {
            outcome: Outcome::Success {
                count: aircraft.len(),
                aircraft,
                raw_response,
            },
            api_type,
        }
    }

    pub fn error(message: impl Into<String>, api_type: ApiTier) -> Self {
        Self {
            outcome: Outcome::Error {
                message: message.into(),
            },
            api_type,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.outcome, Outcome::Success { .. })
    }

    pub fn count(&self) -> Option<usize> {
        match &self.outcome {
            Outcome::Success { count, .. } => Some(*count),
            Outcome::Error { .. } => None,
        }
    }

    pub fn aircraft(&self) -> Option<&[Value]> {
        match &self.outcome {
            Outcome::Success { aircraft, .. } => Some(aircraft),
            Outcome::Error { .. } => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match &self.outcome {
            Outcome::Error { message } => Some(message),
            Outcome::Success { .. } => None,
        }
    }
}
