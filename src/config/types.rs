// Configuration types module
// Defines all configuration-related data structures

use serde::Deserialize;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub performance: PerformanceConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Tokio worker threads (CPU cores when unset)
    #[serde(default)]
    pub workers: Option<usize>,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// Minimum level: error, warn, info or debug
    pub level: String,
    pub access_log: bool,
    /// Access log format (combined, common, json, or custom pattern)
    #[serde(default = "default_access_log_format")]
    pub access_log_format: String,
    /// Access log file path (optional, stdout if not set)
    #[serde(default)]
    pub access_log_file: Option<String>,
    /// Error log file path (optional, stderr if not set)
    #[serde(default)]
    pub error_log_file: Option<String>,
}

#[allow(clippy::missing_const_for_fn)]
fn default_access_log_format() -> String {
    "combined".to_string()
}

/// Performance configuration
///
/// A connection's whole lifetime, keep-alive idle time included, is capped at
/// `max(read_timeout, write_timeout)` seconds. `keep_alive_timeout` only
/// switches keep-alive on (`> 0`) or off (`0`); its value is not a duration
/// that outlasts that cap.
#[derive(Debug, Deserialize, Clone)]
pub struct PerformanceConfig {
    /// Non-zero enables HTTP/1.1 keep-alive
    pub keep_alive_timeout: u64,
    pub read_timeout: u64,
    pub write_timeout: u64,
    #[serde(default)]
    pub max_connections: Option<u64>,
}
