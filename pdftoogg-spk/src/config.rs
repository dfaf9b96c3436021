//! Configuration for the external tools and transient files

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::ConvertError;
use crate::segment::MAX_SEGMENT_CHARS;

/// Tool and working-directory configuration.
///
/// Every field has a default, so a config file only needs the keys it
/// changes:
///
/// ```toml
/// synthesizer = "/opt/pico/bin/pico2wave"
/// work_dir = "/tmp"
/// timeout_secs = 120
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolsConfig {
    /// Text extractor program (`pdftotext <input> <output.txt>`)
    pub extractor: PathBuf,

    /// Speech synthesizer program (`pico2wave -w <out.wav> -l <lang> -- <text>`)
    pub synthesizer: PathBuf,

    /// Audio transcoder program (`sox`)
    pub transcoder: PathBuf,

    /// Directory transient artifacts are written to
    pub work_dir: PathBuf,

    /// File-name stem of transient artifacts
    pub temp_stem: String,

    /// Per-invocation timeout in seconds, 0 disables it
    pub timeout_secs: u64,

    /// Check that every tool can be found before starting
    pub check_tools: bool,

    /// Characters handed to the synthesizer per call
    pub segment_chars: usize,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            extractor: PathBuf::from("pdftotext"),
            synthesizer: PathBuf::from("pico2wave"),
            transcoder: PathBuf::from("sox"),
            work_dir: PathBuf::from("."),
            temp_stem: ".pdfTemp".to_string(),
            timeout_secs: 600,
            check_tools: true,
            segment_chars: MAX_SEGMENT_CHARS,
        }
    }
}

impl ToolsConfig {
    /// Longest accepted timeout, one day
    pub const MAX_TIMEOUT_SECS: u64 = 24 * 60 * 60;

    /// Load and validate a TOML config file.
    pub fn from_file(path: &Path) -> Result<Self, ConvertError> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            ConvertError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConvertError> {
        let config: Self = toml::from_str(contents)
            .map_err(|e| ConvertError::Config(format!("Invalid config file: {}", e)))?;
        config.validate().map_err(ConvertError::Config)?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        for (name, program) in [
            ("extractor", &self.extractor),
            ("synthesizer", &self.synthesizer),
            ("transcoder", &self.transcoder),
        ] {
            if program.as_os_str().is_empty() {
                return Err(format!("{} program cannot be empty", name));
            }
        }

        if self.work_dir.as_os_str().is_empty() {
            return Err("Work directory cannot be empty".to_string());
        }

        if self.temp_stem.is_empty() {
            return Err("Temporary file stem cannot be empty".to_string());
        }

        // The stem becomes a file name inside work_dir, never a path.
        if self.temp_stem.contains("..")
            || self.temp_stem.contains('/')
            || self.temp_stem.contains('\\')
            || self.temp_stem.chars().any(|c| c == '\0' || c.is_control())
        {
            return Err("Temporary file stem contains invalid characters".to_string());
        }

        if self.timeout_secs > Self::MAX_TIMEOUT_SECS {
            return Err(format!(
                "Timeout too large (max {} seconds)",
                Self::MAX_TIMEOUT_SECS
            ));
        }

        if self.segment_chars == 0 || self.segment_chars > MAX_SEGMENT_CHARS {
            return Err(format!(
                "Segment size must be between 1 and {} characters",
                MAX_SEGMENT_CHARS
            ));
        }

        Ok(())
    }

    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}
