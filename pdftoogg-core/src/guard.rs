//! Overwrite policy
//!
//! Deciding whether an existing file may be replaced is kept apart from
//! asking the user about it. [`decide`] is pure; [`Confirm`] is the seam the
//! command line (stdin) and tests (scripted answers) plug into.

use std::collections::VecDeque;
use std::io;
use std::path::{Path, PathBuf};

/// Outcome of checking a path before writing to it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverwriteDecision {
    /// Nothing there, write away
    Vacant,
    /// Something there and the user agreed to replace it
    Overwrite,
    /// Something there and the user did not agree; the run stops
    Abort,
}

impl OverwriteDecision {
    pub fn may_write(&self) -> bool {
        !matches!(self, OverwriteDecision::Abort)
    }
}

/// `y` and `yes` in any case, surrounding whitespace ignored.
pub fn is_affirmative(answer: &str) -> bool {
    let answer = answer.trim();
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}

/// `answer` is only consulted when `exists` is true.
pub fn decide(exists: bool, answer: Option<&str>) -> OverwriteDecision {
    if !exists {
        return OverwriteDecision::Vacant;
    }
    match answer {
        Some(answer) if is_affirmative(answer) => OverwriteDecision::Overwrite,
        _ => OverwriteDecision::Abort,
    }
}

/// Source of yes/no answers for overwrite prompts
pub trait Confirm {
    /// Ask whether `path` may be overwritten and return the raw answer.
    /// `Ok(None)` means the input ended without an answer.
    fn ask(&mut self, path: &Path) -> io::Result<Option<String>>;
}

/// Answers yes to everything. Backs `--force`.
#[derive(Debug, Default, Clone, Copy)]
pub struct AssumeYes;

impl Confirm for AssumeYes {
    fn ask(&mut self, _path: &Path) -> io::Result<Option<String>> {
        Ok(Some("yes".to_string()))
    }
}

/// Replays a fixed list of answers, then reports end of input.
#[derive(Debug, Default, Clone)]
pub struct ScriptedAnswers {
    answers: VecDeque<String>,
    asked: Vec<PathBuf>,
}

impl ScriptedAnswers {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            asked: Vec::new(),
        }
    }

    /// Paths that were asked about, in order
    pub fn asked(&self) -> &[PathBuf] {
        &self.asked
    }
}

impl Confirm for ScriptedAnswers {
    fn ask(&mut self, path: &Path) -> io::Result<Option<String>> {
        self.asked.push(path.to_path_buf());
        Ok(self.answers.pop_front())
    }
}

/// Check `path` and ask through `confirm` only when something is already there.
pub fn check_path<C: Confirm + ?Sized>(path: &Path, confirm: &mut C) -> io::Result<OverwriteDecision> {
    let exists = path.exists();
    if !exists {
        return Ok(OverwriteDecision::Vacant);
    }
    let answer = confirm.ask(path)?;
    Ok(decide(exists, answer.as_deref()))
}
