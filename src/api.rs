use crate::config::ApiConfig;
use crate::filter::{aircraft_list, select, AircraftFilter};
use crate::models::{AircraftQuery, ApiTier, QueryEnvelope};
use color_eyre::{eyre::WrapErr, Result};
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::Client;
use serde_json::Value;
use std::fmt;
use std::time::Duration;
use tracing::{debug, error, info, warn};

/// The two ways a query can fail. Both end up as an error envelope.
#[derive(Debug)]
pub enum FetchError {
    /// Connection failure, timeout, or a non-2xx status.
    Request(reqwest::Error),
    /// The body was not JSON.
    Decode(serde_json::Error),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Request(e) => write!(f, "API request failed: {}", e),
            FetchError::Decode(e) => write!(f, "Failed to parse JSON response: {}", e),
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::Request(e) => Some(e),
            FetchError::Decode(e) => Some(e),
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        FetchError::Request(e)
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Decode(e)
    }
}

pub struct FlightProvider {
    client: Client,
    public_url: String,
    premium_url: String,
}

impl FlightProvider {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .wrap_err("failed to build HTTP client")?;

        Ok(Self {
            client,
            public_url: config.public_url.clone(),
            premium_url: config.premium_url.clone(),
        })
    }

    pub fn endpoint(&self, tier: ApiTier) -> &str {
        match tier {
            ApiTier::Public => &self.public_url,
            ApiTier::Premium => &self.premium_url,
        }
    }

    /// Runs one query and wraps whatever happens in a [`QueryEnvelope`].
    ///
    /// Never fails: transport and decode errors come back as an error envelope
    /// so the caller can print them like any other result.
    pub async fn fetch_aircraft(&self, query: &AircraftQuery) -> QueryEnvelope {
        let tier = query.tier();

        let body = match self.fetch_raw(query).await {
            Ok(body) => body,
            Err(e) => {
                error!("{}", e);
                return QueryEnvelope::error(e.to_string(), tier);
            }
        };

        let filter = AircraftFilter::new(query.aircraft_type.clone(), query.registration.clone());
        let kept = match aircraft_list(&body) {
            Some(records) => {
                let kept = select(records, &filter, query.limit);
                info!("Kept {} of {} aircraft", kept.len(), records.len());
                kept
            }
            None => {
                info!("Response has no 'aircraft' list");
                Vec::new()
            }
        };

        QueryEnvelope::success(kept, body, tier)
    }

    /// Sends the GET and decodes the body, without filtering.
    pub async fn fetch_raw(&self, query: &AircraftQuery) -> Result<Value, FetchError> {
        let tier = query.tier();
        let url = self.endpoint(tier);
        let params = query.query_params();
        debug!("GET {} ({:?}) params={:?}", url, tier, params);

        let mut request = self.client.get(url).query(&params);
        if let Some(key) = &query.api_key {
            // search.json has not been confirmed to accept feed-style parameters.
            warn!("Premium endpoint is sent public feed parameters; results may be empty");
            request = request
                .bearer_auth(key)
                .header(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }

        let res = request.send().await?.error_for_status()?;
        debug!("Response status {}", res.status());

        let text = res.text().await?;
        Ok(serde_json::from_str(&text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_follows_tier() {
        let config = ApiConfig {
            public_url: "http://public.test/feed.js".into(),
            premium_url: "http://premium.test/search.json".into(),
            ..ApiConfig::default()
        };
        let provider = FlightProvider::new(&config).unwrap();
        assert_eq!(provider.endpoint(ApiTier::Public), "http://public.test/feed.js");
        assert_eq!(provider.endpoint(ApiTier::Premium), "http://premium.test/search.json");
    }

    #[test]
    fn decode_error_message() {
        let err: FetchError = serde_json::from_str::<Value>("<html>").unwrap_err().into();
        assert!(err.to_string().starts_with("Failed to parse JSON response: "));
    }
}
