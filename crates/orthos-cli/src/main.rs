mod commands;
mod error;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use crate::commands::{completions, convert, fields, record, Context};
use crate::error::{exit_code_for, report_error};
use orthos_config as config;
use orthos_core::{CaseConverter, Normalizer};

#[derive(Debug, Parser)]
#[command(name = "orthos", version, about = "orthos checkout field normalizer")]
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
    /// Uppercase a value (Greek accents stripped per config)
    Upper(convert::UpperArgs),
    /// Trim and lowercase a value (email fields)
    Lower(convert::LowerArgs),
    /// Canonicalize a phone number into national format
    Phone(convert::PhoneArgs),
    /// Normalize a whole record of classified fields
    Record(record::RecordArgs),
    /// Show the active field classification
    Fields(fields::FieldsArgs),
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

            let case = CaseConverter::new(app_config.remove_greek_accents);
            debug!(
                transform = case.transform_name(),
                remove_greek_accents = app_config.remove_greek_accents,
                "uppercase transform selected"
            );
            let normalizer = Normalizer::new(case, app_config.phone, app_config.fields);

            let ctx = Context {
                normalizer: &normalizer,
                json,
            };

            match command {
                Command::Upper(args) => convert::upper(&ctx, args),
                Command::Lower(args) => convert::lower(&ctx, args),
                Command::Phone(args) => convert::phone(&ctx, args),
                Command::Record(args) => record::normalize(&ctx, args),
                Command::Fields(args) => fields::list(&ctx, args),
                Command::Completions(_) => {
                    unreachable!("completions command handled before config loading")
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
        .with_target(false)
        .without_time()
        .try_init();
}
