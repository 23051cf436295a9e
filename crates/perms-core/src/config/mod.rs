//! Configuration schemas.
//!
//! The root [`AppConfig`] is deserialized through the `config` crate from
//! an optional TOML file overlaid with `PACKED_PERMS__*` environment
//! variables. Every section has defaults, so an empty source is valid.

pub mod logging;
pub mod output;

use serde::{Deserialize, Serialize};

pub use self::logging::LoggingConfig;
pub use self::output::OutputConfig;

use crate::error::AppError;

/// Environment variable prefix for configuration overrides.
pub const ENV_PREFIX: &str = "PACKED_PERMS";

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Command output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file and the environment.
    ///
    /// The file is optional; a missing file yields the defaults.
    /// Variables such as `PACKED_PERMS__OUTPUT__FORMAT=json` override it.
    pub fn load(path: &str) -> Result<Self, AppError> {
        let builder = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            );
        Self::build(builder)
    }

    /// Parse configuration from an in-memory TOML document.
    pub fn from_toml_str(toml: &str) -> Result<Self, AppError> {
        let builder = config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml));
        Self::build(builder)
    }

    fn build(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self, AppError> {
        let config = builder
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}
