//! CLI route: run context and command dispatch.

use crate::cli::parse::Commands;
use crate::cli::presentation::{format_records, format_summary, to_json};
use crate::config::{ConfigLoader, OutputConfig, PenhubConfig};
use crate::error::ApiError;
use crate::hub::StrokeHub;
use crate::session::replay_file;
use crate::store::StudentStrokeRecord;
use crate::types::GroupKey;
use std::path::{Path, PathBuf};
use tracing::info;

/// Runtime context for CLI execution. Built from the workspace path and an
/// optional config path using ConfigLoader only.
pub struct RunContext {
    config: PenhubConfig,
}

impl RunContext {
    pub fn new(workspace_root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, ApiError> {
        let config = if let Some(ref cfg_path) = config_path {
            ConfigLoader::load_from_file(cfg_path)?
        } else {
            ConfigLoader::load(&workspace_root)?
        };
        Ok(Self { config })
    }

    pub fn from_config(config: PenhubConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PenhubConfig {
        &self.config
    }

    /// Execute a command and return its printable output.
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        match command {
            Commands::Replay {
                file,
                group,
                user,
                format,
            } => self.handle_replay(file, group.as_deref(), user.as_deref(), format.as_deref()),
            Commands::Summary { file, format } => self.handle_summary(file, format.as_deref()),
        }
    }

    fn handle_replay(
        &self,
        file: &Path,
        group: Option<&str>,
        user: Option<&str>,
        format: Option<&str>,
    ) -> Result<String, ApiError> {
        let output = self.output(format)?;
        let hub = StrokeHub::new();
        let report = replay_file(&hub, file)?;
        info!(file = %file.display(), failed = report.failed, "Replayed session");
        let snapshot = hub.snapshot();

        if let Some(user_id) = user {
            if output.format == "json" {
                return to_json(&snapshot.get_by_user_id(user_id), output.pretty);
            }
            return match snapshot.locate_user(user_id) {
                Some((group, record)) => {
                    format_records(&[(group, vec![record])], &output.format, output.pretty)
                }
                None => Ok(format!("No stroke record for student {}.", user_id)),
            };
        }

        let rows: Vec<(GroupKey, Vec<StudentStrokeRecord>)> = match group {
            Some(raw) => {
                let key = parse_group_key(raw);
                let records = snapshot.get_by_group(&key);
                vec![(key, records)]
            }
            None => snapshot
                .group_keys()
                .into_iter()
                .map(|key| {
                    let records = snapshot.get_by_group(&key);
                    (key, records)
                })
                .collect(),
        };
        format_records(&rows, &output.format, output.pretty)
    }

    fn handle_summary(&self, file: &Path, format: Option<&str>) -> Result<String, ApiError> {
        let output = self.output(format)?;
        let hub = StrokeHub::new();
        let report = replay_file(&hub, file)?;
        format_summary(&hub.summaries(), &report, &output.format, output.pretty)
    }

    fn output(&self, format: Option<&str>) -> Result<OutputConfig, ApiError> {
        let mut output = self.config.output.clone();
        if let Some(format) = format {
            output.format = format.to_string();
        }
        output.validate().map_err(ApiError::ConfigError)?;
        Ok(output)
    }
}

/// Group flags accept the same spellings as the wire (`7`, `"7"`, `7.0`).
fn parse_group_key(raw: &str) -> GroupKey {
    serde_json::from_str::<serde_json::Value>(raw)
        .ok()
        .and_then(|v| GroupKey::from_value(&v))
        .unwrap_or_else(|| GroupKey::new(raw))
}
