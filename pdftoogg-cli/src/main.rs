// pdftoogg command line interface
// Reads a PDF document aloud into an Ogg audio file

mod prompt;

use clap::Parser;
use pdftoogg_core::{AssumeYes, ConfigError, Confirm, RawOptions};
use pdftoogg_spk::{ConvertError, Converter, ToolsConfig};
use prompt::Prompt;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Invalid options or arguments
const EXIT_INVALID: u8 = 1;
/// The conversion itself failed
const EXIT_FAILED: u8 = 2;

#[derive(Parser, Debug)]
#[command(name = "pdftoogg")]
#[command(about = "Convert a PDF document into spoken-word Ogg audio", long_about = None)]
#[command(version)]
struct Cli {
    /// The PDF file to be converted (alternative to --input)
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// The PDF file to be converted
    #[arg(long, short)]
    input: Option<PathBuf>,

    /// Output to the specified file, ogg format (default is <input>.ogg)
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Language to speak: en-US, en-GB, de-DE, es-ES, fr-FR or it-IT
    #[arg(long, short, default_value = "en-US")]
    language: String,

    /// Rate of speech from 10 to 300; 50 is half speed, 200 is double speed
    #[arg(long, short, default_value_t = 100, allow_negative_numbers = true)]
    rate: i32,

    /// Voice pitch from -20 to 20
    #[arg(long, short, default_value_t = 0, allow_negative_numbers = true)]
    pitch: i32,

    /// Overwrite existing files without asking
    #[arg(long, short)]
    force: bool,

    /// Tool configuration file (TOML)
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Log every step to stderr
    #[arg(long, short)]
    verbose: bool,
}

impl Cli {
    fn raw_options(&self) -> RawOptions {
        RawOptions {
            input: self.input.clone(),
            positional: self.files.clone(),
            output: self.output.clone(),
            language: self.language.clone(),
            rate: self.rate,
            pitch: self.pitch,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help and --version land here too, on stdout.
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::from(EXIT_INVALID)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    init_logging(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report_error(&err),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    // Everything is checked before anything is written.
    let options = cli.raw_options().validate()?;
    debug!("Resolved options: {:?}", options);

    let config = match &cli.config {
        Some(path) => ToolsConfig::from_file(path)?,
        None => ToolsConfig::default(),
    };
    let converter = Converter::new(config)?;

    let mut confirm: Box<dyn Confirm> = if cli.force {
        Box::new(AssumeYes)
    } else {
        Box::new(Prompt::stdio())
    };

    let report = converter.convert(&options, confirm.as_mut()).await?;
    info!(
        "{} characters in {} segment(s)",
        report.characters, report.segments
    );
    println!("✅ Wrote {}", report.output.display());
    Ok(())
}

fn report_error(err: &anyhow::Error) -> ExitCode {
    if let Some(convert) = err.downcast_ref::<ConvertError>() {
        if convert.is_declined() {
            eprintln!("Aborted. {}", convert);
            return ExitCode::SUCCESS;
        }
    }

    eprintln!("❌ {}", err);
    ExitCode::from(exit_code(err))
}

fn exit_code(err: &anyhow::Error) -> u8 {
    if err.downcast_ref::<ConfigError>().is_some() {
        return EXIT_INVALID;
    }
    match err.downcast_ref::<ConvertError>() {
        Some(ConvertError::Declined(_)) => 0,
        Some(ConvertError::Options(_)) | Some(ConvertError::Config(_)) => EXIT_INVALID,
        _ => EXIT_FAILED,
    }
}
