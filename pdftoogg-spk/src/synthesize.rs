//! Chunking synthesis stage

use pdftoogg_core::Language;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::artifacts::{ArtifactGuard, TransientPaths};
use crate::error::ConvertError;
use crate::segment::split_segments;
use crate::tools::{Invocation, ToolRunner};

/// Audio produced by the synthesis stage, in playback order.
///
/// This is the only channel between synthesis and assembly: the assembler
/// consumes exactly these paths.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Synthesis {
    pub segments: Vec<PathBuf>,
}

impl Synthesis {
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }
}

/// Synthesize `text` one window of `segment_chars` at a time.
///
/// Segment `i` is written to `paths.segment(i)`; each path is checked for
/// overwrite before the synthesizer runs.
pub async fn synthesize_segments(
    runner: &dyn ToolRunner,
    program: &Path,
    language: Language,
    text: &str,
    segment_chars: usize,
    paths: &TransientPaths,
    guard: &mut ArtifactGuard<'_>,
) -> Result<Synthesis, ConvertError> {
    let windows = split_segments(text, segment_chars);
    let total = windows.len();
    info!("Synthesizing {} segment(s) in {}", total, language);

    let mut synthesis = Synthesis {
        segments: Vec::with_capacity(total),
    };
    for (index, window) in windows.into_iter().enumerate() {
        let wav = paths.segment(index);
        guard.claim(&wav)?;

        debug!(
            "Segment {}/{}: {} characters -> {}",
            index + 1,
            total,
            window.chars().count(),
            wav.display()
        );
        runner
            .run(&Invocation::synthesize(program, &wav, language, window))
            .await?;
        synthesis.segments.push(wav);
    }

    Ok(synthesis)
}
