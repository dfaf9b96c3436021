//! Error types for pdftoogg-spk

use pdftoogg_core::ConfigError;
use std::path::PathBuf;
use thiserror::Error;

use crate::tools::Tool;

/// Conversion pipeline errors
#[derive(Error, Debug)]
pub enum ConvertError {
    /// The tool ran and reported failure through its exit status.
    #[error("{tool} ({program}) {}: {stderr}", describe_status(.code))]
    ToolFailed {
        tool: Tool,
        program: String,
        /// `None` when the process was killed by a signal
        code: Option<i32>,
        stderr: String,
    },

    #[error("Failed to run {tool} ({program}): {source}")]
    ToolLaunch {
        tool: Tool,
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{tool} ({program}) did not finish within {secs} seconds")]
    ToolTimeout { tool: Tool, program: String, secs: u64 },

    #[error("{tool} ({program}) not found. Install it or set its path in the config file")]
    ToolUnavailable { tool: Tool, program: String },

    #[error("Expected {} to exist: {source}", .path.display())]
    MissingArtifact {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No text could be extracted from {}", .0.display())]
    NoText(PathBuf),

    /// The user refused to overwrite a file. Not a failure.
    #[error("Not overwriting {}", .0.display())]
    Declined(PathBuf),

    #[error("Invalid options: {0}")]
    Options(#[from] ConfigError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConvertError {
    /// True when the run stopped because the user declined an overwrite.
    pub fn is_declined(&self) -> bool {
        matches!(self, ConvertError::Declined(_))
    }
}

fn describe_status(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exited with status {}", code),
        None => "was terminated by a signal".to_string(),
    }
}
