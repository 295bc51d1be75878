//! Config loader: assembles sources in precedence order and validates.

use super::merge::merge_policy;
use super::sources::global_file;
use super::PenhubConfig;
use crate::error::ApiError;
use config::{Environment, File};
use std::path::{Path, PathBuf};

const DEFAULT_ENV: &str = "development";

/// Loads [`PenhubConfig`] from layered sources.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a workspace root.
    ///
    /// Precedence (lowest to highest): defaults, user config file, workspace
    /// `config/config.toml`, workspace `config/{PENHUB_ENV}.toml`,
    /// `PENHUB_<SECTION>__<KEY>` environment variables.
    pub fn load(workspace_root: &Path) -> Result<PenhubConfig, ApiError> {
        let mut builder = global_file::add_to_builder(merge_policy::builder_with_defaults()?)?;

        let env_name = std::env::var("PENHUB_ENV").unwrap_or_else(|_| DEFAULT_ENV.to_string());
        for path in workspace_config_files(workspace_root, &env_name) {
            builder = builder.add_source(File::from(path).required(false));
        }

        let builder = builder.add_source(
            Environment::with_prefix("PENHUB")
                .prefix_separator("_")
                .separator("__"),
        );

        let config: PenhubConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a single TOML file, bypassing layering.
    pub fn load_from_file(path: &Path) -> Result<PenhubConfig, ApiError> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            ApiError::ConfigError(format!("Failed to read config file {:?}: {}", path, e))
        })?;
        let config: PenhubConfig = toml::from_str(&raw).map_err(|e| {
            ApiError::ConfigError(format!("Failed to parse config file {:?}: {}", path, e))
        })?;
        config.validate()?;
        Ok(config)
    }
}

/// Existing workspace config files, base file first, then the one for `env_name`.
fn workspace_config_files(workspace_root: &Path, env_name: &str) -> Vec<PathBuf> {
    let config_dir = workspace_root.join("config");
    [
        config_dir.join("config.toml"),
        config_dir.join(format!("{}.toml", env_name)),
    ]
    .into_iter()
    .filter(|path| path.exists())
    .collect()
}
