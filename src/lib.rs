pub mod api;
pub mod cli;
pub mod config;
pub mod credentials;
pub mod filter;
pub mod logging;
pub mod models;

pub use api::{FetchError, FlightProvider};
pub use models::{AircraftQuery, ApiTier, Bounds, QueryEnvelope};
