//! # nndata CLI entry point
//!
//! Parses command-line arguments, initializes logging, and runs the
//! validate command.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use nndata_cli::validate::{run_validate, ValidateArgs};

/// Training-data episode validator.
///
/// Checks every episode file in a directory: one or more decision records
/// followed by exactly one outcome record, one JSON object per line.
#[derive(Parser, Debug)]
#[command(name = "nndata", version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(flatten)]
    validate: ValidateArgs,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("nndata CLI v{} starting", env!("CARGO_PKG_VERSION"));

    match run_validate(&cli.validate) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
