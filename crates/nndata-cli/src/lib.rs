//! # nndata-cli — Episode Validation CLI
//!
//! Provides the `nndata` command-line interface over `nndata-validate`.
//!
//! ```bash
//! nndata training-data/
//! nndata training-data/ --strict
//! nndata exports/ --extension ndjson -v
//! ```
//!
//! ## Output
//!
//! Standard output carries exactly one `<path>: <status>` line per file
//! followed by a blank line and a summary. Logs go to standard error.
//! The exit code is the only machine-readable signal: 0 when every file
//! passed, 1 otherwise.
//!
//! A DIR that does not exist or is not a directory is reported with the
//! same `No .<ext> files found in <dir>` line as an empty directory.
//!
//! ## Checks
//!
//! Besides the state-size, index-range, option-count and result checks,
//! a negative `chosenIndex` is rejected (`chosenIndex -1 < 0`), even when
//! it is below `numOptions`. Validators that apply only the base checks
//! accept such a line.
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from validation logic.
//! - Handlers delegate to `nndata-validate`; no record checks here.

pub mod validate;
