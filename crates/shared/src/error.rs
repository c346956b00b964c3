use std::path::PathBuf;

use thiserror::Error;

/// Marker every failed command result starts with.
pub const ERROR_MARKER: &str = "Error:";

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("invalid launch target '{target}': {reason}")]
    InvalidTarget { target: String, reason: String },
    #[error("failed to launch '{target}': {source}")]
    Launch {
        target: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{0}")]
    Other(String),
}

impl CommandError {
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other(message.into())
    }

    /// Text shown in the transcript when a handler fails.
    pub fn to_result_text(&self) -> String {
        format!("{ERROR_MARKER} {self}")
    }
}

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read content file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed boot script: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("boot script has no sections")]
    Empty,
}
