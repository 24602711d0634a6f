//! Command-line flags.

use crate::config::DEFAULT_CONFIG_PATH;
use crate::models::{AircraftQuery, Bounds};
use clap::{ArgAction, Parser};
use std::path::PathBuf;

const EXAMPLES: &str = "\
Examples:
  fr24-probe --aircraft_type C17 --limit 20
  fr24-probe --bounds 30,-120,40,-110 --limit 100
  fr24-probe --registration N12345
  fr24-probe                    # first 50 aircraft worldwide
  fr24-probe --use_env_key      # premium endpoint, key from FR24_API_KEY or .env";

#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "fr24-probe", version)]
#[command(about = "Query FlightRadar24 for live aircraft data and print it as JSON")]
#[command(after_long_help = EXAMPLES)]
pub struct Cli {
    /// Filter by aircraft type (e.g. C17, KC135)
    #[arg(long = "aircraft_type", value_name = "TYPE")]
    pub aircraft_type: Option<String>,

    /// Filter by aircraft registration (e.g. N12345)
    #[arg(long, value_name = "REG")]
    pub registration: Option<String>,

    /// Bounding box as minLat,minLon,maxLat,maxLon (e.g. 30,-120,40,-110)
    #[arg(long, value_name = "BOUNDS", allow_hyphen_values = true, value_parser = parse_bounds_arg)]
    pub bounds: Option<String>,

    /// Maximum number of results to return [default: 50]
    #[arg(long, value_name = "N")]
    pub limit: Option<usize>,

    /// Use the API key from the FR24_API_KEY environment variable
    #[arg(long = "use_env_key")]
    pub use_env_key: bool,

    /// Path to an optional TOML config file
    #[arg(long, value_name = "PATH", default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Increase log output on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// An empty value means "no bounds"; anything else must be a valid box.
fn parse_bounds_arg(s: &str) -> Result<String, String> {
    if s.is_empty() {
        return Ok(String::new());
    }
    s.parse::<Bounds>().map(|_| s.to_string())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl Cli {
    /// Empty filter and bounds values count as not supplied.
    pub fn into_query(self, default_limit: usize, api_key: Option<String>) -> AircraftQuery {
        AircraftQuery {
            aircraft_type: non_empty(self.aircraft_type),
            registration: non_empty(self.registration),
            bounds: non_empty(self.bounds).and_then(|b| b.parse().ok()),
            limit: self.limit.unwrap_or(default_limit),
            api_key,
        }
    }
}
