//! Audio assembly stage

use std::path::Path;
use tracing::info;

use crate::artifacts::ArtifactGuard;
use crate::error::ConvertError;
use crate::synthesize::Synthesis;
use crate::tools::{Invocation, ToolRunner};

/// Concatenate every synthesized segment into `output` in one transcoder
/// call, applying pitch and tempo, then delete the segments.
///
/// The caller checks `output` for overwrite before the run starts. While
/// the transcoder runs the output is tracked like a transient file, so a
/// failed call leaves no partial output behind.
pub async fn assemble(
    runner: &dyn ToolRunner,
    program: &Path,
    synthesis: &Synthesis,
    output: &Path,
    pitch: i32,
    rate: i32,
    guard: &mut ArtifactGuard<'_>,
) -> Result<(), ConvertError> {
    for segment in &synthesis.segments {
        if !segment.exists() {
            return Err(ConvertError::MissingArtifact {
                path: segment.clone(),
                source: std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "synthesizer produced no audio",
                ),
            });
        }
    }

    info!(
        "Assembling {} segment(s) into {}",
        synthesis.segment_count(),
        output.display()
    );
    guard.track(output);
    runner
        .run(&Invocation::transcode(program, &synthesis.segments, output, pitch, rate))
        .await?;
    guard.keep(output);

    for segment in &synthesis.segments {
        guard.release(segment);
    }
    Ok(())
}
