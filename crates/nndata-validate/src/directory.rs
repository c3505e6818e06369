//! # Directory Validation
//!
//! Discovers the episode files directly under a directory and validates
//! each one independently. Files are processed sequentially in sorted path
//! order; one file's failure never stops the files after it.

use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::ValidationConfig;
use crate::episode::{validate_file, FileStatus};

/// The directory pass could not start.
#[derive(Error, Debug)]
pub enum DiscoveryError {
    /// No episode files under the directory.
    #[error("No .{extension} files found in {dir}")]
    NoFiles {
        /// Directory that was scanned.
        dir: String,
        /// Extension that was searched for.
        extension: String,
    },

    /// The directory itself could not be listed.
    #[error("cannot read directory {dir}")]
    Unreadable {
        /// Directory that was scanned.
        dir: String,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}

/// One validated file.
#[derive(Debug)]
pub struct FileReport {
    /// Path of the episode file.
    pub path: PathBuf,
    /// Its validation status.
    pub status: FileStatus,
}

impl fmt::Display for FileReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.status)
    }
}

/// Results of validating every episode file in a directory.
#[derive(Debug)]
pub struct DirectoryReport {
    /// Number of files validated.
    pub total: usize,
    /// Number that passed.
    pub passed: usize,
    /// Number that failed.
    pub failed: usize,
    /// Per-file results in processing order.
    pub files: Vec<FileReport>,
}

impl DirectoryReport {
    /// True when no file failed.
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    /// The failed files, in processing order.
    pub fn failures(&self) -> impl Iterator<Item = &FileReport> {
        self.files.iter().filter(|r| r.status.is_error())
    }

    /// The closing summary line.
    pub fn summary(&self) -> String {
        format!("{} files checked, {} errors", self.total, self.failed)
    }
}

impl FromIterator<FileReport> for DirectoryReport {
    fn from_iter<I: IntoIterator<Item = FileReport>>(iter: I) -> Self {
        let files: Vec<FileReport> = iter.into_iter().collect();
        let failed = files.iter().filter(|r| r.status.is_error()).count();
        Self {
            total: files.len(),
            passed: files.len() - failed,
            failed,
            files,
        }
    }
}

/// List the episode files directly under `dir`, sorted by path.
///
/// Only regular files whose name ends in `.<extension>` are returned;
/// subdirectories are not descended into. An empty result is not an error
/// here.
pub fn discover_files(dir: &Path, config: &ValidationConfig) -> Result<Vec<PathBuf>, DiscoveryError> {
    let entries = std::fs::read_dir(dir).map_err(|source| DiscoveryError::Unreadable {
        dir: dir.display().to_string(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                tracing::warn!(dir = %dir.display(), error = %e, "failed to read directory entry");
                continue;
            }
        };
        let path = entry.path();
        if path.is_file() && config.matches(&path) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Validate every episode file directly under `dir`.
///
/// # Errors
///
/// Returns `DiscoveryError::NoFiles` if nothing matches, or
/// `DiscoveryError::Unreadable` if `dir` is missing, is not a directory,
/// or cannot be listed.
/// Per-file failures are recorded in the report, never returned.
pub fn validate_directory(
    dir: &Path,
    config: &ValidationConfig,
) -> Result<DirectoryReport, DiscoveryError> {
    let files = discover_files(dir, config)?;
    if files.is_empty() {
        return Err(DiscoveryError::NoFiles {
            dir: dir.display().to_string(),
            extension: config.extension.clone(),
        });
    }

    tracing::info!(dir = %dir.display(), count = files.len(), "validating episode files");

    let report: DirectoryReport = files
        .into_iter()
        .map(|path| {
            let status = validate_file(&path, config);
            FileReport { path, status }
        })
        .collect();

    tracing::info!(
        total = report.total,
        passed = report.passed,
        failed = report.failed,
        "directory validation complete"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = concat!(
        r#"{"type": "decision", "state": [], "chosenIndex": 0, "numOptions": 1}"#,
        "\n",
        r#"{"type": "outcome", "result": 1.0}"#,
        "\n",
    );

    fn empty_state_config() -> ValidationConfig {
        ValidationConfig::default().with_state_size(0)
    }

    #[test]
    fn discover_files_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b.jsonl"), VALID).unwrap();
        std::fs::write(dir.path().join("a.jsonl"), VALID).unwrap();
        std::fs::write(dir.path().join("notes.txt"), "x").unwrap();
        std::fs::write(dir.path().join(".hidden.jsonl"), VALID).unwrap();

        let files = discover_files(dir.path(), &ValidationConfig::default()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.jsonl", "b.jsonl"]);
    }

    #[test]
    fn discover_files_is_not_recursive() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(nested.join("deep.jsonl"), VALID).unwrap();
        std::fs::create_dir_all(dir.path().join("dir.jsonl")).unwrap();

        let files = discover_files(dir.path(), &ValidationConfig::default()).unwrap();
        assert!(files.is_empty(), "found {files:?}");
    }

    #[test]
    fn discover_files_unreadable_dir() {
        let err = discover_files(
            Path::new("/tmp/nndata-test-nonexistent-dir-xyz"),
            &ValidationConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, DiscoveryError::Unreadable { .. }));
        assert_eq!(
            err.to_string(),
            "cannot read directory /tmp/nndata-test-nonexistent-dir-xyz"
        );
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn discover_files_regular_file_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("game.jsonl");
        std::fs::write(&file, VALID).unwrap();
        let err = discover_files(&file, &ValidationConfig::default()).unwrap_err();
        assert!(matches!(err, DiscoveryError::Unreadable { .. }));
    }

    #[test]
    fn validate_directory_no_files() {
        let dir = tempfile::tempdir().unwrap();
        let err = validate_directory(dir.path(), &ValidationConfig::default()).unwrap_err();
        assert!(matches!(err, DiscoveryError::NoFiles { .. }));
        assert!(err.to_string().starts_with("No .jsonl files found in "));
    }

    #[test]
    fn validate_directory_counts_failures() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("good.jsonl"), VALID).unwrap();
        std::fs::write(dir.path().join("bad.jsonl"), "{}\n").unwrap();

        let report = validate_directory(dir.path(), &empty_state_config()).unwrap();
        assert_eq!(report.total, 2);
        assert_eq!(report.passed, 1);
        assert_eq!(report.failed, 1);
        assert!(!report.is_success());
        assert_eq!(report.summary(), "2 files checked, 1 errors");

        let failures: Vec<_> = report.failures().collect();
        assert_eq!(failures.len(), 1);
        assert!(failures[0].path.ends_with("bad.jsonl"));
    }

    #[test]
    fn file_report_display() {
        let report = FileReport {
            path: PathBuf::from("/data/game.jsonl"),
            status: FileStatus::Ok { decisions: 4 },
        };
        assert_eq!(report.to_string(), "/data/game.jsonl: OK (4 decisions)");
    }

    #[test]
    fn report_from_empty_iterator() {
        let report: DirectoryReport = std::iter::empty::<FileReport>().collect();
        assert_eq!(report.total, 0);
        assert!(report.is_success());
    }
}
