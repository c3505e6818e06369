//! # Validate Command
//!
//! Validates every episode file in one directory and prints per-file
//! status plus a summary.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use nndata_core::STATE_SIZE;
use nndata_validate::{validate_directory, DirectoryReport, DiscoveryError, ValidationConfig};

/// Arguments for episode validation.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Directory containing episode files.
    #[arg(value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Also check the optional recorder fields (decisionType, options, turns).
    #[arg(long)]
    pub strict: bool,

    /// Episode file extension.
    #[arg(long, default_value = "jsonl")]
    pub extension: String,

    /// Required length of each decision's state vector.
    #[arg(long, default_value_t = STATE_SIZE)]
    pub state_size: usize,
}

impl ValidateArgs {
    /// Validation settings selected by these arguments.
    pub fn config(&self) -> ValidationConfig {
        ValidationConfig::default()
            .with_extension(&self.extension)
            .with_state_size(self.state_size)
            .with_strict(self.strict)
    }
}

/// Execute the validate command, writing status lines to stdout.
///
/// Returns exit code: 0 when every file passed, 1 on usage error, when no
/// files are found, or when any file failed.
pub fn run_validate(args: &ValidateArgs) -> Result<u8> {
    let stdout = io::stdout();
    run_validate_to(args, &mut stdout.lock())
}

/// Execute the validate command, writing status lines to `out`.
///
/// A DIR that is missing or is not a directory yields the same no-files
/// line as an empty directory; the I/O failure is only logged.
pub fn run_validate_to(args: &ValidateArgs, out: &mut impl Write) -> Result<u8> {
    let Some(dir) = args.dir.as_deref() else {
        writeln!(out, "Usage: nndata [OPTIONS] <DIR>")?;
        return Ok(1);
    };

    let config = args.config();
    tracing::debug!(dir = %dir.display(), ?config, "starting validation");

    let report = match validate_directory(dir, &config) {
        Ok(report) => report,
        Err(e) => {
            let e = match e {
                DiscoveryError::Unreadable { dir, source } => {
                    tracing::warn!(%dir, error = %source, "cannot read directory");
                    DiscoveryError::NoFiles {
                        dir,
                        extension: config.extension.clone(),
                    }
                }
                e @ DiscoveryError::NoFiles { .. } => e,
            };
            writeln!(out, "{e}")?;
            return Ok(1);
        }
    };

    write_report(&report, out).context("failed to write report")?;

    Ok(if report.is_success() { 0 } else { 1 })
}

/// Write one line per file, a blank line, and the summary.
pub fn write_report(report: &DirectoryReport, out: &mut impl Write) -> io::Result<()> {
    for file in &report.files {
        writeln!(out, "{file}")?;
    }
    writeln!(out)?;
    writeln!(out, "{}", report.summary())?;
    out.flush()
}
