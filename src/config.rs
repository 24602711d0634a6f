use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::models::DEFAULT_LIMIT;

pub const DEFAULT_CONFIG_PATH: &str = "fr24-probe.toml";
pub const PUBLIC_FEED_URL: &str = "https://data-live.flightradar24.com/zones/fcgi/feed.js";
pub const PREMIUM_SEARCH_URL: &str = "https://api.flightradar24.com/common/v1/search.json";

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub query: QueryConfig,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ApiConfig {
    pub public_url: String,        // Used when no API key is supplied
    pub premium_url: String,       // Used with a bearer API key
    pub timeout_seconds: u64,
    pub api_key_env: String,       // Environment variable holding the API key
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            public_url: PUBLIC_FEED_URL.to_string(),
            premium_url: PREMIUM_SEARCH_URL.to_string(),
            timeout_seconds: 30,
            api_key_env: "FR24_API_KEY".to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct QueryConfig {
    pub default_limit: usize,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            default_limit: DEFAULT_LIMIT,
        }
    }
}

impl Config {
    /// Loads the TOML config at `path`.
    /// A missing or unreadable file yields the defaults; nothing is written back.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();

        match fs::read_to_string(path) {
            Ok(content) => match Self::from_toml(&content) {
                Ok(config) => {
                    info!("Loaded configuration from {}", path.display());
                    return config;
                }
                Err(e) => warn!("Failed to parse {}: {}. Using defaults.", path.display(), e),
            },
            Err(e) => debug!("No config at {} ({}). Using defaults.", path.display(), e),
        }

        Self::default()
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
