//! # Episode Validation
//!
//! Validates a single episode file: one or more decision records followed
//! by exactly one outcome record, one JSON object per line.
//!
//! Checks run line by line and stop at the first violation. For a decision
//! line the order is: type tag, state size, index range, option count,
//! index sign, then (strict only) recorder fields. For the outcome line:
//! type tag, result value, then (strict only) recorder fields.

use std::fmt;
use std::path::Path;

use nndata_core::{RawRecord, RecordError, RecordKind};
use thiserror::Error;

use crate::config::ValidationConfig;

/// Why an episode file is invalid.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Fewer than one decision plus one outcome.
    #[error("{found} lines < 2 (need at least 1 decision + outcome)")]
    InsufficientLines {
        /// Lines found in the file.
        found: usize,
    },

    /// A line before the last is not tagged `decision`.
    #[error("line {line} is not decision")]
    NotDecision {
        /// Zero-based line number.
        line: usize,
        /// The tag that was found.
        found: String,
    },

    /// The last line is not tagged `outcome`.
    #[error("last line is not outcome")]
    NotOutcome {
        /// The tag that was found.
        found: String,
    },

    /// A decoded record broke a field constraint.
    #[error("{source}")]
    Record {
        /// Zero-based line number.
        line: usize,
        /// The violated constraint.
        #[source]
        source: RecordError,
    },

    /// A line is not valid JSON or does not decode into its record type.
    #[error("line {line}: {source}")]
    Parse {
        /// Zero-based line number.
        line: usize,
        /// The decoder's message.
        #[source]
        source: serde_json::Error,
    },

    /// The file could not be read.
    #[error("{0}")]
    Io(#[from] std::io::Error),
}

impl ValidationError {
    /// Zero-based line the error refers to, when it refers to one line.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::NotDecision { line, .. }
            | Self::Record { line, .. }
            | Self::Parse { line, .. } => Some(*line),
            Self::InsufficientLines { .. } | Self::NotOutcome { .. } | Self::Io(_) => None,
        }
    }
}

/// Result of validating one episode file.
#[derive(Debug)]
pub enum FileStatus {
    /// Structurally valid.
    Ok {
        /// Number of decision records (lines minus the outcome).
        decisions: usize,
    },
    /// First violated constraint.
    Error(ValidationError),
}

impl FileStatus {
    /// True for a valid file.
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok { .. })
    }

    /// True for an invalid or unreadable file.
    pub fn is_error(&self) -> bool {
        !self.is_ok()
    }

    /// The failure, if any.
    pub fn error(&self) -> Option<&ValidationError> {
        match self {
            Self::Ok { .. } => None,
            Self::Error(e) => Some(e),
        }
    }

    /// The decision count, if the file is valid.
    pub fn decisions(&self) -> Option<usize> {
        match self {
            Self::Ok { decisions } => Some(*decisions),
            Self::Error(_) => None,
        }
    }
}

impl From<Result<usize, ValidationError>> for FileStatus {
    fn from(result: Result<usize, ValidationError>) -> Self {
        match result {
            Ok(decisions) => Self::Ok { decisions },
            Err(e) => Self::Error(e),
        }
    }
}

impl fmt::Display for FileStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok { decisions } => write!(f, "OK ({decisions} decisions)"),
            Self::Error(e) => write!(f, "ERROR: {e}"),
        }
    }
}

/// Validate the episode file at `path`.
///
/// The file handle is closed before this returns; read failures are
/// reported in the status.
pub fn validate_file(path: &Path, config: &ValidationConfig) -> FileStatus {
    let status: FileStatus = std::fs::read_to_string(path)
        .map_err(ValidationError::from)
        .and_then(|content| validate_episode(&content, config))
        .into();

    match status.error() {
        None => tracing::debug!(path = %path.display(), %status, "episode valid"),
        Some(e) => tracing::debug!(path = %path.display(), line = ?e.line(), error = %e, "episode invalid"),
    }
    status
}

/// Validate episode text already in memory.
///
/// Returns the number of decision records on success.
pub fn validate_episode(content: &str, config: &ValidationConfig) -> Result<usize, ValidationError> {
    let lines: Vec<&str> = content.lines().collect();
    let (last, decision_lines) = match lines.split_last() {
        Some((last, rest)) if !rest.is_empty() => (*last, rest),
        _ => return Err(ValidationError::InsufficientLines { found: lines.len() }),
    };

    for (line, text) in decision_lines.iter().enumerate() {
        validate_decision_line(line, text, config)?;
    }
    validate_outcome_line(decision_lines.len(), last, config)?;

    Ok(decision_lines.len())
}

fn validate_decision_line(
    line: usize,
    text: &str,
    config: &ValidationConfig,
) -> Result<(), ValidationError> {
    let raw = RawRecord::parse(text).map_err(|source| ValidationError::Parse { line, source })?;
    if !raw.is(RecordKind::Decision) {
        return Err(ValidationError::NotDecision {
            line,
            found: raw.kind().to_string(),
        });
    }

    let record = raw
        .into_decision()
        .map_err(|source| ValidationError::Parse { line, source })?;
    record
        .check(config.state_size)
        .and_then(|()| {
            if config.strict {
                record.check_recorder_fields()
            } else {
                Ok(())
            }
        })
        .map_err(|source| ValidationError::Record { line, source })
}

fn validate_outcome_line(
    line: usize,
    text: &str,
    config: &ValidationConfig,
) -> Result<(), ValidationError> {
    let raw = RawRecord::parse(text).map_err(|source| ValidationError::Parse { line, source })?;
    if !raw.is(RecordKind::Outcome) {
        return Err(ValidationError::NotOutcome {
            found: raw.kind().to_string(),
        });
    }

    let record = raw
        .into_outcome()
        .map_err(|source| ValidationError::Parse { line, source })?;
    record
        .check()
        .and_then(|()| {
            if config.strict {
                record.check_recorder_fields()
            } else {
                Ok(())
            }
        })
        .map_err(|source| ValidationError::Record { line, source })
}
