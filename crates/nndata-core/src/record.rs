//! # Episode Records
//!
//! Typed forms of the two line kinds in an episode file, plus the
//! record-level checks each must pass.
//!
//! ## Decoding
//!
//! A line is first parsed into a [`RawRecord`], which holds the JSON value
//! and its `type` tag. Callers compare the tag against the expected
//! [`RecordKind`] before decoding the body with
//! [`RawRecord::into_decision`] or [`RawRecord::into_outcome`]. Required
//! fields that are absent or of the wrong JSON type fail decoding.
//!
//! Recorder fields (`turn`, `phase`, `decisionType`, `options`, `turns`,
//! `reason`) are optional. When present they must still have the right
//! JSON type; their values are only checked by `check_recorder_fields`.

use serde::de::Error as _;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::decision_type::DecisionType;
use crate::error::RecordError;
use crate::layout::{CARD_FEATURES, MAX_OPTIONS};

/// The `type` tag of an episode line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    /// One choice made by the controller.
    Decision,
    /// Terminal result of the episode.
    Outcome,
}

impl RecordKind {
    /// Returns the wire tag for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Decision => "decision",
            Self::Outcome => "outcome",
        }
    }
}

/// One choice among `numOptions` alternatives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionRecord {
    /// Encoded game state; see [`crate::layout`].
    pub state: Vec<f64>,
    /// Index of the option taken.
    pub chosen_index: i64,
    /// Number of options offered.
    pub num_options: i64,
    /// Game turn the decision was made on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub turn: Option<i64>,
    /// Game phase name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phase: Option<String>,
    /// Wire name of the [`DecisionType`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decision_type: Option<String>,
    /// One feature vector per option.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<Vec<f64>>>,
}

impl DecisionRecord {
    /// A decision carrying only the required fields.
    pub fn new(state: Vec<f64>, chosen_index: i64, num_options: i64) -> Self {
        Self {
            state,
            chosen_index,
            num_options,
            turn: None,
            phase: None,
            decision_type: None,
            options: None,
        }
    }

    /// Check the required-field constraints, first failure wins.
    ///
    /// Order: state size, index range, option count, index sign. With
    /// `numOptions == 0` and `chosenIndex == 0` the index-range violation
    /// is the one reported.
    pub fn check(&self, state_size: usize) -> Result<(), RecordError> {
        if self.state.len() != state_size {
            return Err(RecordError::BadStateSize {
                actual: self.state.len(),
                expected: state_size,
            });
        }
        if self.chosen_index >= self.num_options {
            return Err(RecordError::IndexOutOfRange {
                chosen_index: self.chosen_index,
                num_options: self.num_options,
            });
        }
        if self.num_options < 1 {
            return Err(RecordError::InvalidOptionCount {
                num_options: self.num_options,
            });
        }
        if self.chosen_index < 0 {
            return Err(RecordError::NegativeIndex {
                chosen_index: self.chosen_index,
            });
        }
        Ok(())
    }

    /// Check the optional recorder fields against what the encoder emits.
    pub fn check_recorder_fields(&self) -> Result<(), RecordError> {
        if self.num_options > MAX_OPTIONS as i64 {
            return Err(RecordError::TooManyOptions {
                num_options: self.num_options,
                max: MAX_OPTIONS,
            });
        }
        if let Some(options) = &self.options {
            if options.len() as i64 != self.num_options {
                return Err(RecordError::OptionsLengthMismatch {
                    actual: options.len(),
                    num_options: self.num_options,
                });
            }
            if let Some((index, option)) = options
                .iter()
                .enumerate()
                .find(|(_, o)| o.len() != CARD_FEATURES)
            {
                return Err(RecordError::BadOptionSize {
                    index,
                    actual: option.len(),
                    expected: CARD_FEATURES,
                });
            }
        }
        if let Some(name) = &self.decision_type {
            name.parse::<DecisionType>()?;
        }
        if let Some(turn) = self.turn.filter(|t| *t < 0) {
            return Err(RecordError::NegativeTurn { field: "turn", value: turn });
        }
        Ok(())
    }
}

/// Terminal line of an episode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutcomeRecord {
    /// 1.0 for a win, 0.0 otherwise.
    pub result: f64,
    /// Turns the game lasted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub turns: Option<i64>,
    /// Free-form end reason.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl OutcomeRecord {
    /// An outcome carrying only the result.
    pub fn new(result: f64) -> Self {
        Self {
            result,
            turns: None,
            reason: None,
        }
    }

    /// `result` must be exactly 0.0 or 1.0.
    pub fn check(&self) -> Result<(), RecordError> {
        if self.result == 0.0 || self.result == 1.0 {
            Ok(())
        } else {
            Err(RecordError::InvalidResult { value: self.result })
        }
    }

    /// Check the optional recorder fields.
    pub fn check_recorder_fields(&self) -> Result<(), RecordError> {
        match self.turns {
            Some(turns) if turns < 0 => Err(RecordError::NegativeTurn {
                field: "turns",
                value: turns,
            }),
            _ => Ok(()),
        }
    }
}

#[derive(Deserialize)]
struct Tag {
    #[serde(rename = "type")]
    kind: String,
}

/// A parsed line whose body has not been decoded yet.
#[derive(Debug, Clone)]
pub struct RawRecord {
    kind: String,
    value: Value,
}

impl RawRecord {
    /// Parse one line as a JSON object and read its `type` tag.
    ///
    /// # Errors
    ///
    /// Fails if the line is not valid JSON, is not an object, or has no
    /// string `type` field.
    pub fn parse(line: &str) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(line)?;
        if !value.is_object() {
            return Err(serde_json::Error::custom("expected a JSON object"));
        }
        let tag = Tag::deserialize(&value)?;
        Ok(Self {
            kind: tag.kind,
            value,
        })
    }

    /// The raw `type` tag.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Whether the tag names `kind`.
    pub fn is(&self, kind: RecordKind) -> bool {
        self.kind == kind.as_str()
    }

    /// Decode the body as a decision record.
    pub fn into_decision(self) -> Result<DecisionRecord, serde_json::Error> {
        serde_json::from_value(self.value)
    }

    /// Decode the body as an outcome record.
    pub fn into_outcome(self) -> Result<OutcomeRecord, serde_json::Error> {
        serde_json::from_value(self.value)
    }
}
