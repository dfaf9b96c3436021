//! pdftoogg-spk: speak a document into an Ogg file
//!
//! Chains three external programs:
//! - a text extractor (`pdftotext`)
//! - a speech synthesizer with a per-call length limit (`pico2wave`)
//! - an audio transcoder applying pitch and tempo (`sox`)
//!
//! Long text is synthesized in fixed-size segments which are concatenated
//! back together by the transcoder.

pub mod error;
pub mod config;
pub mod tools;
pub mod segment;
pub mod artifacts;
pub mod extract;
pub mod synthesize;
pub mod assemble;
pub mod pipeline;

pub use error::ConvertError;
pub use config::ToolsConfig;
pub use pipeline::{ConversionReport, Converter};
pub use synthesize::Synthesis;
pub use tools::{Invocation, ProcessRunner, Tool, ToolRunner};
