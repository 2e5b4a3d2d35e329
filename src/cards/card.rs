//! Card instances.
//!
//! A [`Card`] is a concrete unit stack sitting in a hand slot. The core
//! reads only its id and capability tags; the remaining fields are the
//! payload trait handlers inspect (unit type, count, golden flag, ...).

use serde::{Deserialize, Serialize};

use crate::core::{CardId, TemplateId};
use crate::hooks::{TraitEntity, TraitKey};

/// Battlefield role of a card's units.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitType {
    Melee,
    Ranged,
    Splasher,
    Buffer,
    Hero,
}

impl UnitType {
    /// Front-line combat units (melee or ranged).
    #[must_use]
    pub const fn is_combatant(self) -> bool {
        matches!(self, UnitType::Melee | UnitType::Ranged)
    }
}

/// A card instance.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Unique instance id.
    pub id: CardId,

    /// Template this card was created from.
    pub template_id: TemplateId,

    /// Display name.
    pub name: String,

    /// Tavern tier the card belongs to.
    pub tier: u8,

    /// Purchase cost in energy units.
    pub cost: u32,

    /// Unit role.
    pub unit_type: UnitType,

    /// Number of units in the stack.
    pub unit_count: i64,

    /// Golden cards apply their traits twice.
    #[serde(default)]
    pub is_golden: bool,

    /// Capability tags, in activation order.
    #[serde(default)]
    pub traits: Vec<TraitKey>,

    /// Upgrades applied to this card.
    #[serde(default)]
    pub upgrades: Vec<String>,
}

impl Card {
    /// Create a bare card.
    pub fn new(id: CardId, template_id: impl Into<TemplateId>, unit_type: UnitType) -> Self {
        let template_id = template_id.into();
        Self {
            id,
            name: template_id.to_string(),
            template_id,
            tier: 1,
            cost: 3,
            unit_type,
            unit_count: 1,
            is_golden: false,
            traits: Vec::new(),
            upgrades: Vec::new(),
        }
    }

    /// Add a capability tag (builder pattern). Duplicates are ignored.
    #[must_use]
    pub fn with_trait(mut self, tag: impl Into<TraitKey>) -> Self {
        let tag = tag.into();
        if !self.traits.contains(&tag) {
            self.traits.push(tag);
        }
        self
    }

    /// Set the unit count (builder pattern).
    #[must_use]
    pub fn with_unit_count(mut self, count: i64) -> Self {
        self.unit_count = count;
        self
    }

    /// Mark as golden (builder pattern).
    #[must_use]
    pub fn golden(mut self) -> Self {
        self.is_golden = true;
        self
    }

    /// Add an upgrade (builder pattern).
    #[must_use]
    pub fn with_upgrade(mut self, upgrade: impl Into<String>) -> Self {
        self.upgrades.push(upgrade.into());
        self
    }

    /// Trait magnitude multiplier: 2 for golden cards, 1 otherwise.
    #[must_use]
    pub const fn multiplier(&self) -> i64 {
        if self.is_golden {
            2
        } else {
            1
        }
    }

    /// Check whether the card carries a capability tag.
    #[must_use]
    pub fn has_trait(&self, tag: &str) -> bool {
        self.traits.iter().any(|t| t.as_str() == tag)
    }
}

impl TraitEntity for Card {
    type Id = CardId;

    fn entity_id(&self) -> CardId {
        self.id
    }

    fn capability_tags(&self) -> impl Iterator<Item = &str> + '_ {
        self.traits.iter().map(TraitKey::as_str)
    }
}
