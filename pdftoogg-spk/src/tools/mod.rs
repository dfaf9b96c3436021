//! External tool invocations
//!
//! The three collaborators (extractor, synthesizer, transcoder) are opaque
//! programs. An [`Invocation`] is the complete description of one call; a
//! [`ToolRunner`] carries it out and reports success only through the exit
//! status.

pub mod process;

use crate::error::ConvertError;
use async_trait::async_trait;
use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};

use pdftoogg_core::Language;

pub use process::ProcessRunner;

/// Which collaborator a program plays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tool {
    Extractor,
    Synthesizer,
    Transcoder,
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Tool::Extractor => "text extractor",
            Tool::Synthesizer => "speech synthesizer",
            Tool::Transcoder => "audio transcoder",
        })
    }
}

/// One call of an external program
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub tool: Tool,
    pub program: PathBuf,
    pub args: Vec<OsString>,
}

impl Invocation {
    /// `pdftotext <input> <output>`
    pub fn extract(program: &Path, input: &Path, output: &Path) -> Self {
        Self {
            tool: Tool::Extractor,
            program: program.to_path_buf(),
            args: vec![input.into(), output.into()],
        }
    }

    /// `pico2wave -w <output> -l <language> -- <text>`
    pub fn synthesize(program: &Path, output: &Path, language: Language, text: &str) -> Self {
        Self {
            tool: Tool::Synthesizer,
            program: program.to_path_buf(),
            args: vec![
                "-w".into(),
                output.into(),
                "-l".into(),
                language.tag().into(),
                "--".into(),
                text.into(),
            ],
        }
    }

    /// `sox [--ignore-length <in>]... -t ogg <output> pitch <cents> tempo -s <ratio>`
    ///
    /// `--ignore-length` keeps sox from trusting the data length in the WAV
    /// headers pico2wave writes, which is what produces the length mismatch
    /// warning when several segments are concatenated. It is an input file
    /// option, so every input gets its own.
    pub fn transcode(program: &Path, inputs: &[PathBuf], output: &Path, pitch: i32, rate: i32) -> Self {
        let mut args: Vec<OsString> = Vec::with_capacity(2 * inputs.len() + 9);
        for input in inputs {
            args.push("--ignore-length".into());
            args.push(input.into());
        }
        args.push("-t".into());
        args.push("ogg".into());
        args.push(output.into());
        args.push("pitch".into());
        args.push(pitch_cents(pitch).to_string().into());
        args.push("tempo".into());
        args.push("-s".into());
        args.push(tempo_ratio(rate).to_string().into());
        Self {
            tool: Tool::Transcoder,
            program: program.to_path_buf(),
            args,
        }
    }

    pub fn program_name(&self) -> String {
        self.program.display().to_string()
    }
}

/// Pitch option (semitones) to the transcoder's pitch effect (cents).
pub fn pitch_cents(pitch: i32) -> i32 {
    pitch * 100
}

/// Rate option (percent of normal speed) to the transcoder's tempo factor.
pub fn tempo_ratio(rate: i32) -> f64 {
    f64::from(rate) / 100.0
}

/// Runs external tool invocations
#[async_trait]
pub trait ToolRunner: Send + Sync {
    /// Run the invocation to completion. Any exit status other than
    /// success is an error.
    async fn run(&self, invocation: &Invocation) -> Result<(), ConvertError>;

    /// Check if a program can be started
    fn is_available(&self, program: &Path) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(inv: &Invocation) -> Vec<String> {
        inv.args.iter().map(|a| a.to_string_lossy().into_owned()).collect()
    }

    #[test]
    fn test_extract_args() {
        let inv = Invocation::extract(Path::new("pdftotext"), Path::new("in.pdf"), Path::new(".pdfTemp.txt"));
        assert_eq!(inv.tool, Tool::Extractor);
        assert_eq!(args(&inv), ["in.pdf", ".pdfTemp.txt"]);
    }

    #[test]
    fn test_synthesize_args_keep_text_after_separator() {
        let inv = Invocation::synthesize(
            Path::new("pico2wave"),
            Path::new(".pdfTemp0.wav"),
            Language::FrFr,
            "-n looks like a flag",
        );
        assert_eq!(
            args(&inv),
            ["-w", ".pdfTemp0.wav", "-l", "fr-FR", "--", "-n looks like a flag"]
        );
    }

    #[test]
    fn test_transcode_args() {
        let inputs = vec![PathBuf::from("a0.wav"), PathBuf::from("a1.wav")];
        let inv = Invocation::transcode(Path::new("sox"), &inputs, Path::new("out.ogg"), -3, 150);
        assert_eq!(
            args(&inv),
            [
                "--ignore-length", "a0.wav", "--ignore-length", "a1.wav", "-t", "ogg", "out.ogg",
                "pitch", "-300", "tempo", "-s", "1.5"
            ]
        );
    }

    #[test]
    fn test_effect_conversions() {
        assert_eq!(pitch_cents(0), 0);
        assert_eq!(pitch_cents(20), 2000);
        assert_eq!(pitch_cents(-20), -2000);
        assert_eq!(tempo_ratio(100), 1.0);
        assert_eq!(tempo_ratio(10), 0.1);
        assert_eq!(tempo_ratio(300), 3.0);
    }

    #[test]
    fn test_tool_names() {
        assert_eq!(Tool::Extractor.to_string(), "text extractor");
        assert_eq!(Tool::Synthesizer.to_string(), "speech synthesizer");
        assert_eq!(Tool::Transcoder.to_string(), "audio transcoder");
    }
}
