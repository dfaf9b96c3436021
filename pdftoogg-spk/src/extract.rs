//! Text extraction stage

use std::path::Path;
use tracing::{debug, info};

use crate::artifacts::ArtifactGuard;
use crate::error::ConvertError;
use crate::tools::{Invocation, ToolRunner};

/// Run the extractor on `input`, read its output back and flatten it.
///
/// The transient text file at `temp` is removed once read. A tool that
/// reports success without writing `temp` is an error, never empty text.
pub async fn extract_text(
    runner: &dyn ToolRunner,
    program: &Path,
    input: &Path,
    temp: &Path,
    guard: &mut ArtifactGuard<'_>,
) -> Result<String, ConvertError> {
    guard.claim(temp)?;

    info!("Extracting text from {}", input.display());
    runner.run(&Invocation::extract(program, input, temp)).await?;

    let raw = std::fs::read(temp).map_err(|source| ConvertError::MissingArtifact {
        path: temp.to_path_buf(),
        source,
    })?;
    guard.release(temp);

    let text = flatten(&String::from_utf8_lossy(&raw));
    debug!("Extracted {} characters", text.chars().count());
    Ok(text)
}

/// Drop every line break. Words split across lines run together.
pub fn flatten(text: &str) -> String {
    text.replace('\n', "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flatten_removes_newlines_without_spacing() {
        assert_eq!(flatten("first line\nsecond\n\nthird\n"), "first linesecondthird");
        assert_eq!(flatten("no breaks"), "no breaks");
        assert_eq!(flatten("\n"), "");
    }

    #[test]
    fn test_flatten_keeps_other_whitespace() {
        assert_eq!(flatten("a\tb\x0cc\n"), "a\tb\x0cc");
    }
}
