//! Application configuration
//!
//! This module provides centralized configuration management using the `config` crate.
//! Configuration can be loaded from environment variables and config files.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub fleet_api: FleetApiConfig,
}

/// HTTP server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Number of worker threads
    #[serde(default = "default_workers")]
    pub workers: usize,

    /// Comma-separated list of allowed CORS origins
    #[serde(default = "default_cors_origins")]
    pub cors_origins: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_workers() -> usize {
    num_cpus::get()
}

fn default_cors_origins() -> String {
    "http://localhost:5173,http://127.0.0.1:5173".to_string()
}

/// Remote fleet/reservation REST API configuration
#[derive(Debug, Deserialize, Clone)]
pub struct FleetApiConfig {
    /// Base URL, e.g. `http://localhost:8081/api`
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Bearer token attached to every request
    #[serde(default)]
    pub auth_token: Option<String>,
}

fn default_timeout() -> u64 {
    10
}

impl ServerConfig {
    /// Allowed CORS origins, trimmed, blanks dropped
    pub fn cors_origin_list(&self) -> Vec<String> {
        self.cors_origins
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(str::to_string)
            .collect()
    }
}

impl AppConfig {
    /// Load configuration from environment and optional config file
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = Config::builder()
            // Start with default values
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("server.workers", num_cpus::get() as i64)?
            .set_default("server.cors_origins", default_cors_origins())?
            .set_default("fleet_api.base_url", "http://localhost:8081/api")?
            .set_default("fleet_api.timeout_secs", 10)?
            // Load config file if exists
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Load from environment variables with ELITE_ prefix
            .add_source(
                Environment::with_prefix("ELITE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Get the server bind address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cors_origin_list() {
        let server = ServerConfig {
            host: default_host(),
            port: default_port(),
            workers: 1,
            cors_origins: " http://a.test ,,http://b.test".to_string(),
        };
        assert_eq!(server.cors_origin_list(), vec!["http://a.test", "http://b.test"]);
    }

    #[test]
    fn test_defaults_deserialize() {
        let config: AppConfig = Config::builder()
            .set_default("fleet_api.base_url", "http://fleet.test/api")
            .unwrap()
            .set_default("server.port", 9000)
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.fleet_api.timeout_secs, 10);
        assert!(config.fleet_api.auth_token.is_none());
        assert_eq!(config.server_addr(), "0.0.0.0:9000");
    }
}
