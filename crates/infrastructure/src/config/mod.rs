//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP server settings
//! - `latency`: Delay bounds, error rate, and global injection toggle
//!
//! Values are layered: built-in defaults, then an optional `lagify.toml`
//! (or an explicit path), then `LAGIFY_`-prefixed environment variables
//! using `__` between sections, e.g. `LAGIFY_LATENCY__ERROR_RATE=0.5`.

mod latency;
mod server;

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

pub use latency::LatencyAppConfig;
pub use server::ServerConfig;

/// Environment variable prefix
pub const ENV_PREFIX: &str = "LAGIFY";

/// Default configuration file name, without extension
pub const DEFAULT_CONFIG_FILE: &str = "lagify";

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Seed for the random source; operating system entropy when unset
    #[serde(default)]
    pub seed: Option<u64>,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Latency injection configuration
    #[serde(default)]
    pub latency: LatencyAppConfig,
}

impl AppConfig {
    /// Load configuration from `lagify.toml` (if present) and environment
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration from an explicit file, falling back to
    /// `lagify.toml` in the working directory when `path` is `None`
    ///
    /// An explicit path must exist; the default file is optional.
    pub fn load_from(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        Self::build(path, None)
    }

    fn build(
        path: Option<&Path>,
        env: Option<config::Map<String, String>>,
    ) -> Result<Self, config::ConfigError> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let builder = config::Config::builder()
            .add_source(file)
            // Override with environment variables (e.g., LAGIFY_SERVER__PORT)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .source(env),
            );

        let config: Self = builder.build()?.try_deserialize()?;
        debug!(
            host = %config.server.host,
            port = config.server.port,
            min = config.latency.min,
            max = config.latency.max,
            error_rate = config.latency.error_rate,
            seeded = config.seed.is_some(),
            "Configuration loaded"
        );
        Ok(config)
    }
}
