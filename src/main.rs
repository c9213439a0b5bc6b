use clap::{Parser, Subcommand};
use image_advisor::advice::Thresholds;
use image_advisor::batch::{self, BatchOptions};
use image_advisor::config::{self, OnDecodeError, ReportFormat};
use image_advisor::imaging::RustBackend;
use image_advisor::output;
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

/// Flags for the analyze command.
#[derive(clap::Args, Clone, Default)]
struct AnalyzeArgs {
    /// Report format (overrides `report.format` in the config file)
    #[arg(long, value_enum)]
    format: Option<ReportFormat>,

    /// Skip images that fail to decode instead of stopping
    #[arg(long)]
    skip_unreadable: bool,
}

#[derive(Parser)]
#[command(name = "image-advisor")]
#[command(version)]
#[command(about = "Diagnose photo quality and print bilingual advice")]
#[command(long_about = "\
Diagnose photo quality and print bilingual advice

Every .png, .jpg and .jpeg file in the source directory is measured for
brightness, contrast, sharpness and noise, then compared against fixed
thresholds:

  brightness   80 - 150     (mean luminance)
  contrast     >= 30        (standard deviation of luminance)
  sharpness    >= 400       (variance of the Laplacian)
  noise        <= 50        (spread of the residual after a 5x5 Gaussian blur)
  focus        >= 500       (variance of the Laplacian)

Advice is printed in Portuguese and English.

Settings are read from image-advisor.toml when present.
Run 'image-advisor gen-config' to print a documented config file.")]
struct Cli {
    /// Directory of images to analyze [default: sample_test]
    #[arg(long, global = true)]
    source: Option<PathBuf>,

    /// Config file
    #[arg(long, default_value = config::DEFAULT_CONFIG_FILE, global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Analyze the source directory (the default)
    Analyze(AnalyzeArgs),
    /// Print a stock image-advisor.toml with all options documented
    GenConfig,
}

fn main() -> ExitCode {
    // RUST_LOG overrides the default level
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            let mut cause = err.source();
            while let Some(inner) = cause {
                eprintln!("  Caused by: {inner}");
                cause = inner.source();
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let args = match cli.command {
        Some(Command::GenConfig) => {
            print!("{}", config::stock_config_toml());
            return Ok(());
        }
        Some(Command::Analyze(args)) => args,
        None => AnalyzeArgs::default(),
    };

    let settings = config::load_config(&cli.config)?;
    let source = cli
        .source
        .unwrap_or_else(|| PathBuf::from(&settings.source));
    let format = args.format.unwrap_or(settings.report.format);
    let on_decode_error = if args.skip_unreadable {
        OnDecodeError::Skip
    } else {
        settings.batch.on_decode_error
    };

    let options = BatchOptions {
        thresholds: Thresholds::STANDARD,
        on_decode_error,
    };
    let backend = RustBackend::new();

    match format {
        ReportFormat::Text => {
            batch::run_batch(&source, &options, &backend, output::print_image_report)?;
        }
        ReportFormat::Json => {
            let report = batch::run_batch(&source, &options, &backend, |_| {})?;
            output::print_json_report(&report)?;
        }
    }

    Ok(())
}
