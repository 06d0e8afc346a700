mod commands;
mod error;
mod util;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use crate::commands::{completions, filename, generate, inspect, preview, qr, validate, Context};
use crate::error::{exit_code_for, report_error};
use kontakt_config as config;

#[derive(Debug, Parser)]
#[command(name = "kontakt", version, about = "Build vCard 3.0 files from contact records")]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[arg(long, global = true)]
    json: bool,
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Check a record and list field errors
    Validate(validate::ValidateArgs),
    /// Write the record as a .vcf file
    Generate(generate::GenerateArgs),
    /// Show the business card and vCard preview
    Preview(preview::PreviewArgs),
    /// Render the record as a QR code
    Qr(qr::QrArgs),
    /// Print the file name a record would be saved under
    Filename(filename::FilenameArgs),
    /// List the content lines of an existing .vcf file
    Inspect(inspect::InspectArgs),
    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_logging(verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, verbose);
            exit_code_for(&err)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        config: config_path,
        json,
        verbose,
        command,
    } = cli;

    match command {
        Command::Completions(args) => completions::emit(args),
        command => {
            let app_config = config::load(config_path.clone()).with_context(|| "load config")?;
            if verbose {
                match config::resolve_config_path(config_path) {
                    Ok(path) => {
                        if path.exists() {
                            debug!(path = %path.display(), "config resolved");
                        } else {
                            debug!(path = %path.display(), "config missing, using defaults");
                        }
                    }
                    Err(err) => {
                        debug!(error = %err, "config unavailable");
                    }
                }
            }

            let ctx = Context {
                json,
                config: &app_config,
            };

            match command {
                Command::Validate(args) => validate::validate(&ctx, args),
                Command::Generate(args) => generate::generate(&ctx, args),
                Command::Preview(args) => preview::preview(&ctx, args),
                Command::Qr(args) => qr::qr(&ctx, args),
                Command::Filename(args) => filename::filename(&ctx, args),
                Command::Inspect(args) => inspect::inspect(&ctx, args),
                Command::Completions(_) => {
                    unreachable!("completions command handled before config load")
                }
            }
        }
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
