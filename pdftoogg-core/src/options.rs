//! Conversion options and their validation

use std::ffi::OsString;
use std::fmt;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::ConfigError;

/// Valid speech rate, in percent of normal speed.
pub const RATE_RANGE: RangeInclusive<i32> = 10..=300;

/// Valid pitch shift, in semitones.
pub const PITCH_RANGE: RangeInclusive<i32> = -20..=20;

pub const DEFAULT_RATE: i32 = 100;
pub const DEFAULT_PITCH: i32 = 0;

/// Appended to the input path when no output path is given.
pub const OUTPUT_SUFFIX: &str = ".ogg";

/// Languages the synthesizer ships voices for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    EnUs,
    EnGb,
    DeDe,
    EsEs,
    FrFr,
    ItIt,
}

impl Language {
    pub const ALL: [Language; 6] = [
        Language::EnUs,
        Language::EnGb,
        Language::DeDe,
        Language::EsEs,
        Language::FrFr,
        Language::ItIt,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            Language::EnUs => "en-US",
            Language::EnGb => "en-GB",
            Language::DeDe => "de-DE",
            Language::EsEs => "es-ES",
            Language::FrFr => "fr-FR",
            Language::ItIt => "it-IT",
        }
    }

    /// "en-US, en-GB, ... and it-IT"
    pub fn describe_all() -> String {
        let tags: Vec<&str> = Self::ALL.iter().map(Language::tag).collect();
        match tags.split_last() {
            Some((last, rest)) if !rest.is_empty() => format!("{} and {}", rest.join(", "), last),
            Some((last, _)) => last.to_string(),
            None => String::new(),
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::EnUs
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Language {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|lang| lang.tag() == s)
            .ok_or_else(|| ConfigError::UnsupportedLanguage(s.to_string()))
    }
}

/// Options as they arrive from the command line, before any checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawOptions {
    /// Value of `-i/--input`
    pub input: Option<PathBuf>,
    /// Positional arguments, in order
    pub positional: Vec<PathBuf>,
    pub output: Option<PathBuf>,
    pub language: String,
    pub rate: i32,
    pub pitch: i32,
}

impl Default for RawOptions {
    fn default() -> Self {
        Self {
            input: None,
            positional: Vec::new(),
            output: None,
            language: Language::default().tag().to_string(),
            rate: DEFAULT_RATE,
            pitch: DEFAULT_PITCH,
        }
    }
}

/// Fully resolved conversion options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub input: PathBuf,
    pub output: PathBuf,
    pub language: Language,
    pub rate: i32,
    pub pitch: i32,
}

impl RawOptions {
    /// Resolve raw command-line values into [`Options`].
    ///
    /// Checks run in a fixed order and the first failure wins: argument
    /// count, input conflict, input existence, language, rate, pitch.
    pub fn validate(self) -> Result<Options, ConfigError> {
        let input = resolve_input(self.input, self.positional)?;

        if !input.exists() {
            return Err(ConfigError::InputNotFound(input));
        }

        let language: Language = self.language.parse()?;

        if !RATE_RANGE.contains(&self.rate) {
            return Err(ConfigError::RateOutOfRange(self.rate));
        }

        if !PITCH_RANGE.contains(&self.pitch) {
            return Err(ConfigError::PitchOutOfRange(self.pitch));
        }

        let output = self.output.unwrap_or_else(|| default_output_path(&input));

        Ok(Options {
            input,
            output,
            language,
            rate: self.rate,
            pitch: self.pitch,
        })
    }
}

/// Pick the input file from the flag and the positional arguments.
fn resolve_input(flag: Option<PathBuf>, mut positional: Vec<PathBuf>) -> Result<PathBuf, ConfigError> {
    if positional.len() > 1 {
        return Err(ConfigError::TooManyArguments(positional.len()));
    }

    match (flag, positional.pop()) {
        (Some(flag), Some(positional)) if flag == positional => Ok(flag),
        (Some(flag), Some(positional)) => Err(ConfigError::ConflictingInput { flag, positional }),
        (Some(path), None) | (None, Some(path)) => Ok(path),
        (None, None) => Err(ConfigError::MissingInput),
    }
}

/// `report.pdf` -> `report.pdf.ogg`
pub fn default_output_path(input: &Path) -> PathBuf {
    let mut name = OsString::from(input.as_os_str());
    name.push(OUTPUT_SUFFIX);
    PathBuf::from(name)
}
