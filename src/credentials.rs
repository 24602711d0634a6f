//! API key lookup from the process environment.
//!
//! A `.env` file in the working directory (or any parent) is loaded first
//! when present, so `FR24_API_KEY=...` can live next to the project.

use std::env;
use tracing::{debug, info};

/// Loads `.env` into the environment if one can be found.
pub fn load_dotenv() {
    match dotenv::dotenv() {
        Ok(path) => info!("Loaded environment from {}", path.display()),
        Err(e) => debug!("No .env loaded: {}", e),
    }
}

/// Reads the key from `var_name`. Unset, empty, and blank values are all absent.
pub fn api_key_from_env(var_name: &str) -> Option<String> {
    normalize(env::var(var_name).ok())
}

fn normalize(raw: Option<String>) -> Option<String> {
    raw.map(|key| key.trim().to_string())
        .filter(|key| !key.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_values_are_absent() {
        assert_eq!(normalize(None), None);
        assert_eq!(normalize(Some(String::new())), None);
        assert_eq!(normalize(Some("  \t".into())), None);
        assert_eq!(normalize(Some(" abc123 ".into())), Some("abc123".into()));
    }

    #[test]
    fn reads_named_variable() {
        let name = "FR24_PROBE_TEST_KEY_READS";
        env::set_var(name, "token-xyz");
        assert_eq!(api_key_from_env(name), Some("token-xyz".into()));
        env::remove_var(name);
        assert_eq!(api_key_from_env(name), None);
    }
}
