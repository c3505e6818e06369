//! # nndata-validate — Episode Validation
//!
//! Checks training-data episode files for structural correctness and
//! aggregates the results across a directory.
//!
//! ## Per-file validation (`episode`)
//!
//! [`validate_file`] reads one JSON-Lines file and returns a
//! [`FileStatus`]: either the number of decision records, or the first
//! violated constraint. It never panics and never returns an error past
//! its boundary; read and parse failures become `FileStatus::Error`.
//!
//! ## Directory validation (`directory`)
//!
//! [`validate_directory`] discovers the episode files directly under a
//! directory (non-recursive, by extension), validates each independently,
//! and returns a [`DirectoryReport`]. Finding no files is a
//! [`DiscoveryError`], not an empty report.
//!
//! ## Crate Policy
//!
//! - Depends only on `nndata-core` internally.
//! - Failure is an explicit discriminant. Callers never inspect status
//!   text to decide whether a file failed.

pub mod config;
pub mod directory;
pub mod episode;

pub use config::ValidationConfig;
pub use directory::{
    discover_files, validate_directory, DirectoryReport, DiscoveryError, FileReport,
};
pub use episode::{validate_episode, validate_file, FileStatus, ValidationError};
