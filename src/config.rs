//! Configuration System
//!
//! Layered configuration for the penhub binary: built-in defaults, the user
//! config file, then workspace `config/config.toml` and
//! `config/{PENHUB_ENV}.toml`, then `PENHUB_*` environment overrides.

use crate::error::ApiError;
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;
pub use sources::global_file::global_config_path;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PenhubConfig {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Query output settings
    #[serde(default)]
    pub output: OutputConfig,
}

/// How query results are printed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// text or json
    #[serde(default = "default_output_format")]
    pub format: String,

    /// Pretty-print JSON output
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

fn default_output_format() -> String {
    "text".to_string()
}

fn default_pretty() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_output_format(),
            pretty: default_pretty(),
        }
    }
}

impl OutputConfig {
    pub fn validate(&self) -> Result<(), String> {
        match self.format.as_str() {
            "text" | "json" => Ok(()),
            other => Err(format!(
                "Invalid output format: {} (must be 'text' or 'json')",
                other
            )),
        }
    }
}

impl PenhubConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), ApiError> {
        let mut errors = Vec::new();
        if let Err(e) = self.logging.validate() {
            errors.push(format!("logging: {}", e));
        }
        if let Err(e) = self.output.validate() {
            errors.push(format!("output: {}", e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ApiError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                errors.join("\n")
            )))
        }
    }
}
