//! Application configuration
//!
//! This module provides centralized configuration management using the
//! `config` crate. Configuration can be loaded from an optional TOML file
//! and from `CALLDECK_`-prefixed environment variables.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::collections::HashMap;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub upstream: UpstreamConfig,
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
    "http://localhost:3000,http://127.0.0.1:3000".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: default_workers(),
            cors_origins: default_cors_origins(),
        }
    }
}

/// Voice-assistant upstream API configuration
///
/// The two endpoints live on logically distinct hosts in some deployments
/// (the call list and the outbound batch list), so each gets its own base
/// URL. `extra_headers` is sent with every request; the production
/// deployment uses it to suppress the interstitial warning page of its
/// tunneling host.
#[derive(Debug, Deserialize, Clone)]
pub struct UpstreamConfig {
    /// Base URL for the paginated call list endpoint
    #[serde(default = "default_base_url")]
    pub calls_base_url: String,

    /// Base URL for the paginated outbound batch list endpoint
    #[serde(default = "default_base_url")]
    pub batches_base_url: String,

    /// Page size for the call list
    #[serde(default = "default_page_size")]
    pub page_size: u64,

    /// Page size for the outbound batch list
    #[serde(default = "default_batch_page_size")]
    pub batch_page_size: u64,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Arbitrary headers attached to every upstream request
    #[serde(default)]
    pub extra_headers: HashMap<String, String>,
}

fn default_base_url() -> String {
    "http://localhost:9000".to_string()
}

fn default_page_size() -> u64 {
    10
}

fn default_batch_page_size() -> u64 {
    20
}

fn default_timeout() -> u64 {
    30
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            calls_base_url: default_base_url(),
            batches_base_url: default_base_url(),
            page_size: default_page_size(),
            batch_page_size: default_batch_page_size(),
            timeout_secs: default_timeout(),
            extra_headers: HashMap::new(),
        }
    }
}

impl AppConfig {
    /// Load configuration from file and environment
    ///
    /// Precedence (lowest to highest): built-in defaults, `config/default.toml`
    /// if present, then `CALLDECK_*` environment variables
    /// (e.g. `CALLDECK_UPSTREAM__CALLS_BASE_URL`).
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(Environment::with_prefix("CALLDECK").separator("__"))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = AppConfig {
            server: ServerConfig::default(),
            upstream: UpstreamConfig::default(),
        };
        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.upstream.page_size, 10);
        assert_eq!(cfg.upstream.batch_page_size, 20);
        assert!(cfg.upstream.extra_headers.is_empty());
    }

    #[test]
    fn test_upstream_config_deserialization() {
        let cfg: UpstreamConfig = serde_json::from_value(serde_json::json!({
            "calls_base_url": "https://calls.example.com",
            "extra_headers": { "ngrok-skip-browser-warning": "true" }
        }))
        .unwrap();
        assert_eq!(cfg.calls_base_url, "https://calls.example.com");
        assert_eq!(cfg.batches_base_url, default_base_url());
        assert_eq!(
            cfg.extra_headers.get("ngrok-skip-browser-warning"),
            Some(&"true".to_string())
        );
    }
}
