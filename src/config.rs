// Runtime configuration
// Everything comes from the environment (.env supported); CLI flags may
// override the bind address and staging directory.

use std::env;
use std::path::PathBuf;

use crate::constants::{METADATA_TIMEOUT_SECS, SEARCH_TIMEOUT_SECS};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub staging_dir: PathBuf,
    pub extract_timeout_secs: u64,
    pub search_timeout_secs: u64,
    /// Content search is disabled unless a key is configured.
    pub search_api_key: Option<String>,
    pub search_base_url: String,
    pub search_index: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            host: env::var("MILKMOB_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("MILKMOB_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5001),
            staging_dir: env::var("MILKMOB_STAGING_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("uploads")),
            extract_timeout_secs: env::var("MILKMOB_EXTRACT_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(METADATA_TIMEOUT_SECS),
            search_timeout_secs: env::var("MILKMOB_SEARCH_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(SEARCH_TIMEOUT_SECS),
            search_api_key: env::var("MILKMOB_SEARCH_API_KEY")
                .ok()
                .filter(|k| !k.is_empty()),
            search_base_url: env::var("MILKMOB_SEARCH_URL")
                .unwrap_or_else(|_| "https://api.twelvelabs.io/v1.2".to_string()),
            search_index: env::var("MILKMOB_SEARCH_INDEX")
                .unwrap_or_else(|_| "milk-campaign-videos".to_string()),
        }
    }

    pub fn search_enabled(&self) -> bool {
        self.search_api_key.is_some()
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_env() {
        // Keys unlikely to exist in the test environment.
        env::remove_var("MILKMOB_HOST");
        env::remove_var("MILKMOB_PORT");
        env::remove_var("MILKMOB_SEARCH_API_KEY");

        let config = AppConfig::from_env();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 5001);
        assert_eq!(config.bind_addr(), "127.0.0.1:5001");
        assert!(!config.search_enabled());
    }

    #[test]
    fn test_empty_search_key_stays_disabled() {
        env::set_var("MILKMOB_SEARCH_API_KEY", "");
        let config = AppConfig::from_env();
        assert!(!config.search_enabled());
        env::remove_var("MILKMOB_SEARCH_API_KEY");
    }
}
