//! Application configuration schemas.
//!
//! Configuration is deserialized from TOML files via the `config` crate and
//! overlaid with `ORGTREE__`-prefixed environment variables. Every field has
//! a default, so running without any configuration file is valid.

pub mod logging;
pub mod seed;

use serde::{Deserialize, Serialize};

use self::logging::LoggingConfig;
use self::seed::SeedConfig;

use crate::error::AppError;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Sample data generation settings.
    #[serde(default)]
    pub seed: SeedConfig,
}

impl AppConfig {
    /// Load configuration.
    ///
    /// Merges `config_path` (any format the `config` crate understands, the
    /// extension may be omitted), an optional `config/{env}` overlay, and
    /// environment variables such as `ORGTREE__LOGGING__LEVEL=debug`.
    pub fn load(config_path: &str, env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("ORGTREE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}
