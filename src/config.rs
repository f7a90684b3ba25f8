//! # Configuration Management
//!
//! This module handles loading and parsing configuration from the
//! tabua-mare.toml file. The file is optional: without it the client
//! talks to the public production endpoint with default HTTP settings.

use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::client::DEFAULT_BASE_URL;
use crate::transport::{DEFAULT_TIMEOUT_SECS, USER_AGENT};

/// Client configuration loaded from tabua-mare.toml
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// Service endpoint configuration
    pub api: ApiConfig,
    /// HTTP behavior configuration
    pub http: HttpConfig,
}

/// Service endpoint configuration
#[derive(Debug, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Base URL of the deployment to talk to
    pub base_url: String,
}

/// HTTP behavior configuration
#[derive(Debug, Deserialize, Serialize)]
pub struct HttpConfig {
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api: ApiConfig {
                base_url: DEFAULT_BASE_URL.to_string(),
            },
            http: HttpConfig {
                timeout_secs: DEFAULT_TIMEOUT_SECS,
                user_agent: USER_AGENT.to_string(),
            },
        }
    }
}

impl Config {
    /// Load configuration from tabua-mare.toml
    /// Falls back to default configuration if file doesn't exist or is invalid
    pub fn load() -> Self {
        Self::load_from_path("tabua-mare.toml")
    }

    /// Load configuration from specified path
    /// Falls back to default configuration if file doesn't exist or is invalid
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Self {
        match fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str::<Config>(&contents) {
                Ok(config) => config,
                Err(e) => {
                    warn!("invalid config file format: {e}; using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                info!("no config file found, using defaults");
                Self::default()
            }
        }
    }

    /// Save current configuration to the given path
    pub fn save_to_path<P: AsRef<Path>>(&self, path: P) -> Result<(), Box<dyn std::error::Error>> {
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.http.timeout_secs, 30);
        assert!(config.http.user_agent.starts_with("tabua-mare/"));
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(config.api.base_url, parsed.api.base_url);
        assert_eq!(config.http.timeout_secs, parsed.http.timeout_secs);
    }

    #[test]
    fn test_load_nonexistent_file() {
        let config = Config::load_from_path("/nonexistent/path");
        // Should fallback to default
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_load_from_file_overrides_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[api]\nbase_url = \"https://staging.tide.test/api/v1\"\n\n\
             [http]\ntimeout_secs = 5\nuser_agent = \"tide-smoke-test\""
        )
        .unwrap();

        let config = Config::load_from_path(file.path());
        assert_eq!(config.api.base_url, "https://staging.tide.test/api/v1");
        assert_eq!(config.http.timeout_secs, 5);
        assert_eq!(config.http.user_agent, "tide-smoke-test");
    }

    #[test]
    fn test_invalid_file_falls_back_to_default() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "this is not toml at all [").unwrap();

        let config = Config::load_from_path(file.path());
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_save_roundtrip() {
        let file = NamedTempFile::new().unwrap();
        let config = Config::default();
        config.save_to_path(file.path()).unwrap();

        let loaded = Config::load_from_path(file.path());
        assert_eq!(loaded.api.base_url, config.api.base_url);
    }
}
