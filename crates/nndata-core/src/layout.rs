//! # State Vector Layout
//!
//! Feature counts for the encoded game state carried by every decision
//! record. The state vector is laid out as:
//!
//! | Section                 | Slots | Features/slot | Total |
//! |-------------------------|-------|---------------|-------|
//! | Global (life, mana, ...) | 1     | 24            | 24    |
//! | Own battlefield         | 16    | 16            | 256   |
//! | Opponent battlefield    | 16    | 16            | 256   |
//! | Own hand                | 8     | 16            | 128   |
//!
//! for a total of 664 features.

/// Features per encoded card. Also the width of each option vector.
pub const CARD_FEATURES: usize = 16;

/// Global features: life totals, mana, phase, turn counters.
pub const GLOBAL_FEATURES: usize = 24;

/// Battlefield slots encoded per player.
pub const BATTLEFIELD_SLOTS: usize = 16;

/// Hand slots encoded for the deciding player.
pub const HAND_SLOTS: usize = 8;

/// Length of every decision record's `state` vector.
pub const STATE_SIZE: usize = GLOBAL_FEATURES
    + (BATTLEFIELD_SLOTS * CARD_FEATURES * 2)
    + (HAND_SLOTS * CARD_FEATURES);

/// Upper bound on `numOptions` enforced in strict mode.
pub const MAX_OPTIONS: usize = 64;
