use std::path::PathBuf;
use thiserror::Error;

use crate::options::{Language, PITCH_RANGE, RATE_RANGE};

/// Option validation failures. Each one ends the run with status 1.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Too many arguments ({0} given, at most 1 input file is accepted).")]
    TooManyArguments(usize),

    #[error(
        "Conflicting input files: --input {} and positional argument {}.",
        .flag.display(),
        .positional.display()
    )]
    ConflictingInput { flag: PathBuf, positional: PathBuf },

    #[error("No input file specified. Try using -i <file name>")]
    MissingInput,

    #[error("Could not open the specified PDF file: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error(
        "Language {} is currently not available. Available languages are {}.",
        .0,
        Language::describe_all()
    )]
    UnsupportedLanguage(String),

    #[error(
        "Rate must be between {} and {} (default is 100), got {}.",
        RATE_RANGE.start(),
        RATE_RANGE.end(),
        .0
    )]
    RateOutOfRange(i32),

    #[error(
        "Pitch must be between {} and {} (default is 0), got {}.",
        PITCH_RANGE.start(),
        PITCH_RANGE.end(),
        .0
    )]
    PitchOutOfRange(i32),
}
