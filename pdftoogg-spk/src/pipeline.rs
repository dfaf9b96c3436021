//! Document-to-speech conversion pipeline

use pdftoogg_core::{Confirm, Options};
use std::path::PathBuf;
use tracing::{info, warn};

use crate::artifacts::{ArtifactGuard, TransientPaths};
use crate::assemble::assemble;
use crate::config::ToolsConfig;
use crate::error::ConvertError;
use crate::extract::extract_text;
use crate::synthesize::synthesize_segments;
use crate::tools::{ProcessRunner, Tool, ToolRunner};

/// Summary of a finished conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionReport {
    pub output: PathBuf,
    pub characters: usize,
    pub segments: usize,
}

/// Extract -> synthesize -> assemble, one stage at a time.
pub struct Converter {
    config: ToolsConfig,
    runner: Box<dyn ToolRunner>,
    paths: TransientPaths,
}

impl Converter {
    /// Converter running the configured programs as child processes
    pub fn new(config: ToolsConfig) -> Result<Self, ConvertError> {
        let runner = ProcessRunner::new(config.timeout());
        Self::with_runner(config, Box::new(runner))
    }

    pub fn with_runner(config: ToolsConfig, runner: Box<dyn ToolRunner>) -> Result<Self, ConvertError> {
        config.validate().map_err(ConvertError::Config)?;
        let paths = TransientPaths::from_config(&config);
        Ok(Self {
            config,
            runner,
            paths,
        })
    }

    pub fn config(&self) -> &ToolsConfig {
        &self.config
    }

    pub fn transient_paths(&self) -> &TransientPaths {
        &self.paths
    }

    /// Make sure every configured program can be started.
    pub fn preflight(&self) -> Result<(), ConvertError> {
        for (tool, program) in [
            (Tool::Extractor, &self.config.extractor),
            (Tool::Synthesizer, &self.config.synthesizer),
            (Tool::Transcoder, &self.config.transcoder),
        ] {
            if !self.runner.is_available(program) {
                return Err(ConvertError::ToolUnavailable {
                    tool,
                    program: program.display().to_string(),
                });
            }
        }
        Ok(())
    }

    /// Run the whole conversion for validated `options`.
    ///
    /// Every file about to be written is checked through `confirm` first.
    /// On success no transient file remains; on failure the ones this run
    /// created are removed on a best-effort basis, including a partly
    /// written output. Directories created for transient files are removed
    /// again either way.
    pub async fn convert(
        &self,
        options: &Options,
        confirm: &mut dyn Confirm,
    ) -> Result<ConversionReport, ConvertError> {
        if self.config.check_tools {
            self.preflight()?;
        }

        let mut guard = ArtifactGuard::new(confirm);
        let result = self.run_stages(options, &mut guard).await;
        if result.is_err() && !guard.claimed().is_empty() {
            warn!("Conversion stopped, removing {} temporary file(s)", guard.claimed().len());
        }
        guard.cleanup();
        result
    }

    async fn run_stages(
        &self,
        options: &Options,
        guard: &mut ArtifactGuard<'_>,
    ) -> Result<ConversionReport, ConvertError> {
        guard.check(&options.output)?;
        guard.create_dir(self.paths.dir())?;

        let text = extract_text(
            self.runner.as_ref(),
            &self.config.extractor,
            &options.input,
            &self.paths.text(),
            guard,
        )
        .await?;
        if text.is_empty() {
            return Err(ConvertError::NoText(options.input.clone()));
        }

        let synthesis = synthesize_segments(
            self.runner.as_ref(),
            &self.config.synthesizer,
            options.language,
            &text,
            self.config.segment_chars,
            &self.paths,
            guard,
        )
        .await?;

        assemble(
            self.runner.as_ref(),
            &self.config.transcoder,
            &synthesis,
            &options.output,
            options.pitch,
            options.rate,
            guard,
        )
        .await?;

        info!("Wrote {}", options.output.display());
        Ok(ConversionReport {
            output: options.output.clone(),
            characters: text.chars().count(),
            segments: synthesis.segment_count(),
        })
    }
}
