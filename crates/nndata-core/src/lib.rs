//! # nndata-core — Foundational Types for Training-Data Episodes
//!
//! Defines the two record kinds that make up a training-data episode and
//! the record-level checks applied to them. Every other crate in the
//! workspace depends on `nndata-core`; it depends on nothing internal.
//!
//! An episode is a JSON-Lines file: one or more decision records, one per
//! line, followed by exactly one outcome record on the last line.
//!
//! ```text
//! {"type": "decision", "state": [<664 numbers>], "chosenIndex": 2, "numOptions": 3}
//! {"type": "outcome", "result": 1.0}
//! ```
//!
//! ## Key Design Principles
//!
//! 1. **Strongly-typed decoding.** Each line decodes into [`DecisionRecord`]
//!    or [`OutcomeRecord`]. A missing required field or a wrong JSON type is
//!    a decode error, never a silent default.
//!
//! 2. **Tag before body.** [`RawRecord`] reads the `type` tag first so a line
//!    of the wrong kind is reported as such rather than as a missing field.
//!
//! 3. **Layout constants are derived.** [`layout::STATE_SIZE`] is computed
//!    from the per-section feature counts, not written down as a literal.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `nndata-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod decision_type;
pub mod error;
pub mod layout;
pub mod record;

// Re-export primary types for ergonomic imports.
pub use decision_type::{DecisionType, DECISION_TYPE_COUNT};
pub use error::RecordError;
pub use layout::{CARD_FEATURES, MAX_OPTIONS, STATE_SIZE};
pub use record::{DecisionRecord, OutcomeRecord, RawRecord, RecordKind};
