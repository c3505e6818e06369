//! # Error Types — Record-Level Violations
//!
//! Each variant names one violated constraint of a single decoded record.
//! The `Display` text is the reason shown in a file's status line, so it
//! quotes the offending values.

use thiserror::Error;

/// A decoded record that breaks a structural constraint.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecordError {
    /// `state` does not have the fixed feature count.
    #[error("state size {actual} != {expected}")]
    BadStateSize {
        /// Length found in the record.
        actual: usize,
        /// Required length.
        expected: usize,
    },

    /// `chosenIndex` is not below `numOptions`.
    #[error("chosenIndex {chosen_index} >= numOptions {num_options}")]
    IndexOutOfRange {
        /// Index the controller chose.
        chosen_index: i64,
        /// Number of options offered.
        num_options: i64,
    },

    /// `numOptions` is zero or negative.
    #[error("numOptions must be >= 1")]
    InvalidOptionCount {
        /// Count found in the record.
        num_options: i64,
    },

    /// `chosenIndex` is negative.
    #[error("chosenIndex {chosen_index} < 0")]
    NegativeIndex {
        /// Index found in the record.
        chosen_index: i64,
    },

    /// `result` is not a binary label.
    #[error("result must be 0.0 or 1.0, got {value:?}")]
    InvalidResult {
        /// Value found in the record.
        value: f64,
    },

    /// Strict: more options than the encoder supports.
    #[error("numOptions {num_options} > max {max}")]
    TooManyOptions {
        /// Count found in the record.
        num_options: i64,
        /// Maximum the encoder emits.
        max: usize,
    },

    /// Strict: `options` length disagrees with `numOptions`.
    #[error("options length {actual} != numOptions {num_options}")]
    OptionsLengthMismatch {
        /// Number of option vectors present.
        actual: usize,
        /// Count declared by the record.
        num_options: i64,
    },

    /// Strict: an option vector has the wrong feature count.
    #[error("option {index} has {actual} features, expected {expected}")]
    BadOptionSize {
        /// Position of the option within `options`.
        index: usize,
        /// Features found.
        actual: usize,
        /// Required features per option.
        expected: usize,
    },

    /// Strict: `decisionType` is not a known decision type.
    #[error("unknown decisionType {0:?}")]
    UnknownDecisionType(String),

    /// Strict: a turn counter is negative.
    #[error("{field} {value} < 0")]
    NegativeTurn {
        /// Field name (`turn` or `turns`).
        field: &'static str,
        /// Value found in the record.
        value: i64,
    },
}
