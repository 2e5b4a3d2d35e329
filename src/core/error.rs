//! Error types.
//!
//! Only operations whose failure the caller must act on return these.
//! Expected negative outcomes of queries (no solution, no handler, hand
//! slot empty) are plain values instead.

use thiserror::Error;

use super::ids::CardId;

/// Invalid rules configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("hand must have at least one slot")]
    EmptyHand,

    #[error("max hp must be positive, got {0}")]
    NonPositiveMaxHp(i64),

    #[error("starting hp {starting} outside 1..={max}")]
    StartingHpOutOfRange { starting: i64, max: i64 },

    #[error("starting tier {starting} outside 1..={max}")]
    TierOutOfRange { starting: u8, max: u8 },
}

/// A cost could not be paid from the ledger.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PaymentError {
    #[error("insufficient energy: {requested} requirement(s) against {available} unit(s)")]
    Insufficient { requested: usize, available: usize },
}

/// Hand slot operations that can be refused.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HandError {
    #[error("hand is full ({capacity} slots)")]
    Full { capacity: usize },

    #[error("{0} is not in hand")]
    NotFound(CardId),

    #[error("slot {index} out of range for hand of {capacity}")]
    SlotOutOfRange { index: usize, capacity: usize },
}

/// Process-wide registry misuse.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("global capability registry already installed")]
    AlreadyInstalled,
}
