//! # Decision Types
//!
//! The kinds of choice a controller records. Carried in the optional
//! `decisionType` field of a decision record as the SCREAMING_SNAKE_CASE
//! variant name.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::RecordError;

/// The category of a recorded decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DecisionType {
    /// Pick a spell or ability to play from the candidates.
    SpellSelection,
    /// Keep or mulligan the opening hand.
    Mulligan,
    /// Per-creature attack declaration.
    Attack,
    /// Per-attacker blocker assignment.
    Block,
    /// Generic pick-from-list (sacrifice, discard, target).
    CardChoice,
    /// Yes/no confirmation.
    Boolean,
    /// Choose a number.
    Number,
    /// Fallback for anything else.
    Generic,
}

/// Total number of decision types.
pub const DECISION_TYPE_COUNT: usize = 8;

impl DecisionType {
    /// Returns all decision types in canonical order.
    pub fn all() -> &'static [DecisionType] {
        &[
            Self::SpellSelection,
            Self::Mulligan,
            Self::Attack,
            Self::Block,
            Self::CardChoice,
            Self::Boolean,
            Self::Number,
            Self::Generic,
        ]
    }

    /// Returns the wire identifier, matching the serde format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SpellSelection => "SPELL_SELECTION",
            Self::Mulligan => "MULLIGAN",
            Self::Attack => "ATTACK",
            Self::Block => "BLOCK",
            Self::CardChoice => "CARD_CHOICE",
            Self::Boolean => "BOOLEAN",
            Self::Number => "NUMBER",
            Self::Generic => "GENERIC",
        }
    }
}

impl std::fmt::Display for DecisionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DecisionType {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| RecordError::UnknownDecisionType(s.to_string()))
    }
}
