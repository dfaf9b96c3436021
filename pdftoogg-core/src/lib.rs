//! pdftoogg-core: options, validation and overwrite policy
//!
//! Everything here is free of process spawning and terminal I/O so it can be
//! checked in isolation; the pipeline lives in `pdftoogg-spk`.

pub mod error;
pub mod guard;
pub mod options;

pub use error::ConfigError;
pub use guard::{check_path, decide, AssumeYes, Confirm, OverwriteDecision, ScriptedAnswers};
pub use options::{default_output_path, Language, Options, RawOptions};
