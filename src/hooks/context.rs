//! What handlers see and what they return.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::PlayerState;
use crate::effects::SideEffect;

/// A capability tag (e.g. `MILITIA_GROWTH`, `EPHEMERAL`).
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TraitKey(pub String);

impl TraitKey {
    /// Create a new tag.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Borrow the raw key.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TraitKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for TraitKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::borrow::Borrow<str> for TraitKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TraitKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Anything hooks can run on: an id plus an ordered set of tags.
pub trait TraitEntity {
    /// Identifier type, used in logs.
    type Id: Copy + std::fmt::Display;

    /// The entity's id.
    fn entity_id(&self) -> Self::Id;

    /// Capability tags, in activation order.
    fn capability_tags(&self) -> impl Iterator<Item = &str> + '_;
}

/// Event-specific parameters passed to handlers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HookParams {
    /// Running value inside `process_value`.
    pub current_value: Option<i64>,

    /// Cards sold earlier this turn (for sell reactions).
    pub cards_sold_this_turn: Option<u32>,

    /// The card that was just sold.
    pub sold_card: Option<Card>,

    /// Anything else, keyed by name.
    pub extra: FxHashMap<String, i64>,
}

impl HookParams {
    /// No parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the running value (builder pattern).
    #[must_use]
    pub fn with_current_value(mut self, value: i64) -> Self {
        self.current_value = Some(value);
        self
    }

    /// Set the sold-this-turn counter (builder pattern).
    #[must_use]
    pub fn with_cards_sold(mut self, count: u32) -> Self {
        self.cards_sold_this_turn = Some(count);
        self
    }

    /// Set the sold card (builder pattern).
    #[must_use]
    pub fn with_sold_card(mut self, card: Card) -> Self {
        self.sold_card = Some(card);
        self
    }

    /// Add a named value (builder pattern).
    #[must_use]
    pub fn with_extra(mut self, key: impl Into<String>, value: i64) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// Read a named value.
    #[must_use]
    pub fn extra(&self, key: &str) -> Option<i64> {
        self.extra.get(key).copied()
    }
}

/// Read-only view handed to a handler.
pub struct HookContext<'a, E> {
    /// The entity whose tag matched.
    pub entity: &'a E,

    /// Snapshot of the player state.
    pub state: &'a PlayerState,

    /// Event parameters.
    pub params: &'a HookParams,
}

/// What a handler asks for.
///
/// Handlers never mutate state; every intended change is a
/// [`SideEffect`] in `side_effects`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HookResult {
    /// Block the action (checks only).
    pub prevented: bool,

    /// Replacement for the running value (modifiers only).
    pub modified_value: Option<i64>,

    /// State changes to apply.
    pub side_effects: Vec<SideEffect>,

    /// Message for the player.
    pub notification: Option<String>,
}

impl HookResult {
    /// Nothing to do.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Block the action with a reason.
    pub fn prevent(reason: impl Into<String>) -> Self {
        Self {
            prevented: true,
            notification: Some(reason.into()),
            ..Self::default()
        }
    }

    /// Replace the running value.
    #[must_use]
    pub fn modify(value: i64) -> Self {
        Self {
            modified_value: Some(value),
            ..Self::default()
        }
    }

    /// Emit side-effects.
    #[must_use]
    pub fn effects(side_effects: Vec<SideEffect>) -> Self {
        Self {
            side_effects,
            ..Self::default()
        }
    }

    /// Emit a single side-effect.
    #[must_use]
    pub fn effect(side_effect: SideEffect) -> Self {
        Self::effects(vec![side_effect])
    }

    /// Attach a notification (builder pattern).
    #[must_use]
    pub fn with_notification(mut self, message: impl Into<String>) -> Self {
        self.notification = Some(message.into());
        self
    }
}
