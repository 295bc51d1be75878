//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::ApiError;
use std::io::ErrorKind;

/// Map domain/service errors to a message for stderr.
///
/// I/O errors only arise from reading the session file, so they are reported
/// against it; configuration errors point at the config sources.
pub fn map_error(e: &ApiError) -> String {
    match e {
        ApiError::Io(io) if io.kind() == ErrorKind::NotFound => {
            format!("Session file not found: {}", io)
        }
        ApiError::Io(io) => format!("Could not read session file: {}", io),
        ApiError::ConfigError(msg) => format!(
            "Configuration error: {}\nCheck --config, config/config.toml, or PENHUB_* variables.",
            msg
        ),
        ApiError::Json(err) => format!("Could not encode output: {}", err),
        ApiError::Store(err) => err.to_string(),
    }
}
