//! Shared test helpers: a runner that plays the three external tools.

#![allow(dead_code)]

use async_trait::async_trait;
use parking_lot::Mutex;
use pdftoogg_spk::{ConvertError, Invocation, Tool, ToolRunner, ToolsConfig};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Stands in for pdftotext, pico2wave and sox.
///
/// The extractor writes `text` (with a line break every `line_width`
/// characters), the synthesizer writes its text argument, and the transcoder
/// concatenates its inputs into the output file.
pub struct FakeTools {
    text: String,
    line_width: usize,
    calls: Mutex<Vec<Invocation>>,
    fail_on: Option<(Tool, usize)>,
    write_before_failing: bool,
    silent: HashSet<Tool>,
    missing: HashSet<PathBuf>,
}

impl FakeTools {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            line_width: 0,
            calls: Mutex::new(Vec::new()),
            fail_on: None,
            write_before_failing: false,
            silent: HashSet::new(),
            missing: HashSet::new(),
        }
    }

    /// Emit the text with a newline after every `width` characters.
    pub fn with_line_width(mut self, width: usize) -> Self {
        self.line_width = width;
        self
    }

    /// Fail the `nth` (0-based) call of `tool` with exit status 1.
    pub fn failing(mut self, tool: Tool, nth: usize) -> Self {
        self.fail_on = Some((tool, nth));
        self
    }

    /// Let the failing call write its output before it fails.
    pub fn writing_before_failure(mut self) -> Self {
        self.write_before_failing = true;
        self
    }

    /// Report success for `tool` without writing anything.
    pub fn silent(mut self, tool: Tool) -> Self {
        self.silent.insert(tool);
        self
    }

    /// Pretend `program` is not installed.
    pub fn without(mut self, program: &str) -> Self {
        self.missing.insert(PathBuf::from(program));
        self
    }

    pub fn calls(&self) -> Vec<Invocation> {
        self.calls.lock().clone()
    }

    pub fn calls_of(&self, tool: Tool) -> Vec<Invocation> {
        self.calls().into_iter().filter(|c| c.tool == tool).collect()
    }

    fn extractor_output(&self) -> String {
        if self.line_width == 0 {
            return self.text.clone();
        }
        let mut out = String::new();
        for (i, c) in self.text.chars().enumerate() {
            if i > 0 && i % self.line_width == 0 {
                out.push('\n');
            }
            out.push(c);
        }
        out.push('\n');
        out
    }
}

fn arg(invocation: &Invocation, index: usize) -> String {
    invocation.args[index].to_string_lossy().into_owned()
}

#[async_trait]
impl ToolRunner for FakeTools {
    async fn run(&self, invocation: &Invocation) -> Result<(), ConvertError> {
        let nth = {
            let mut calls = self.calls.lock();
            calls.push(invocation.clone());
            calls.iter().filter(|c| c.tool == invocation.tool).count() - 1
        };

        let fails = self.fail_on == Some((invocation.tool, nth));
        let failure = || ConvertError::ToolFailed {
            tool: invocation.tool,
            program: invocation.program_name(),
            code: Some(1),
            stderr: "simulated failure".to_string(),
        };
        if fails && !self.write_before_failing {
            return Err(failure());
        }
        if self.silent.contains(&invocation.tool) {
            return Ok(());
        }

        match invocation.tool {
            Tool::Extractor => {
                std::fs::write(arg(invocation, 1), self.extractor_output())?;
            }
            Tool::Synthesizer => {
                // -w <out> -l <lang> -- <text>
                std::fs::write(arg(invocation, 1), arg(invocation, 5))?;
            }
            Tool::Transcoder => {
                let args: Vec<String> = (0..invocation.args.len()).map(|i| arg(invocation, i)).collect();
                let format = args
                    .iter()
                    .position(|a| a == "-t")
                    .expect("transcoder call without -t");
                let mut audio = Vec::new();
                for input in args[..format].iter().filter(|a| *a != "--ignore-length") {
                    audio.extend(std::fs::read(input)?);
                }
                std::fs::write(&args[format + 2], audio)?;
            }
        }
        if fails {
            return Err(failure());
        }
        Ok(())
    }

    fn is_available(&self, program: &Path) -> bool {
        !self.missing.contains(program)
    }
}

/// Tool config writing transient files into `work_dir`.
pub fn config_in(work_dir: &Path) -> ToolsConfig {
    ToolsConfig {
        work_dir: work_dir.to_path_buf(),
        ..ToolsConfig::default()
    }
}

/// Every file left in `dir`, sorted. A missing directory has none.
pub fn files_in(dir: &Path) -> Vec<String> {
    if !dir.exists() {
        return Vec::new();
    }
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
