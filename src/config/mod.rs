// Configuration module entry point
// Layered configuration: optional file, then VANAKAM_* environment, then defaults

mod state;
mod types;

use std::net::SocketAddr;

pub use state::AppState;
pub use types::Config;

/// Default config file name (without extension)
pub const DEFAULT_CONFIG_PATH: &str = "config";

impl Config {
    /// Load configuration from specified file path (without extension)
    pub fn load_from(config_path: &str) -> Result<Self, ::config::ConfigError> {
        Self::load_with_env(config_path, environment())
    }

    fn load_with_env(
        config_path: &str,
        env: ::config::Environment,
    ) -> Result<Self, ::config::ConfigError> {
        let settings = ::config::Config::builder()
            .add_source(::config::File::with_name(config_path).required(false))
            .add_source(env)
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("logging.access_log_format", "combined")?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .build()?;

        settings.try_deserialize()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

/// `VANAKAM_<SECTION>__<KEY>` environment source, e.g. `VANAKAM_SERVER__PORT`
fn environment() -> ::config::Environment {
    ::config::Environment::with_prefix("VANAKAM")
        .prefix_separator("_")
        .separator("__")
}
