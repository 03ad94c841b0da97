//! Configuration management for signal-notify.
//!
//! Settings are loaded once at startup by layering sources with `figment`:
//! built-in defaults, a TOML file, and `SIGNAL_NOTIFY_`-prefixed environment
//! variables. There is no reload path; reconfiguration means restarting,
//! which for a one-shot notification command is every invocation anyway.

use anyhow::Result;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default config file path, next to the Nagios command definitions.
pub const DEFAULT_CONFIG_PATH: &str = "/etc/signal-notify/signal-notify.toml";

/// The main configuration struct for the application.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    /// The logging level for the application.
    pub log_level: String,
    /// Connection settings for the Signal REST gateway.
    pub gateway: GatewayConfig,
    /// Pre-send jitter applied to desynchronize notification bursts.
    pub delay: DelayConfig,
}

/// Connection settings for the Signal REST gateway.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct GatewayConfig {
    /// Full URL of the send-message endpoint.
    pub url: String,
    /// Whether to attach HTTP Basic credentials to requests.
    #[serde(default)]
    pub auth_enabled: bool,
    pub username: Option<String>,
    pub password: Option<String>,
    /// Request timeout in seconds.
    pub timeout_seconds: u64,
}

/// Bounds for the uniformly random pre-send delay, in seconds.
///
/// Many monitoring hosts fire notifications at the same moment; the jitter
/// spreads their gateway requests out. An empty range disables the delay.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DelayConfig {
    pub min_seconds: f64,
    pub max_seconds: f64,
}

impl Config {
    /// Loads the configuration, layering file and environment over defaults.
    pub fn load(config_path: &Path) -> Result<Self> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(config_path))
            // Allow overriding with environment variables, e.g.
            // SIGNAL_NOTIFY_LOG_LEVEL=debug
            .merge(Env::prefixed("SIGNAL_NOTIFY_"))
            .extract()?;
        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            gateway: GatewayConfig {
                url: "http://localhost:8080/v2/send".to_string(),
                auth_enabled: false,
                username: None,
                password: None,
                timeout_seconds: 10,
            },
            delay: DelayConfig {
                min_seconds: 0.1,
                max_seconds: 3.0,
            },
        }
    }
}
