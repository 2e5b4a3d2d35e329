//! Energy units and their building blocks.
//!
//! An [`EnergyUnit`] is a single typed, taggable token spent to pay
//! costs. Units are immutable once created; the ledger that holds one
//! owns it exclusively until it is consumed.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::UnitId;
use crate::hooks::TraitEntity;

/// The closed color palette of energy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EnergyType {
    /// Gold. Earned from selling and passive income.
    White,
    Red,
    Green,
    Blue,
    Black,
}

impl EnergyType {
    /// Every color, in palette order.
    pub const ALL: [EnergyType; 5] = [
        EnergyType::White,
        EnergyType::Red,
        EnergyType::Green,
        EnergyType::Blue,
        EnergyType::Black,
    ];
}

impl std::fmt::Display for EnergyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EnergyType::White => "WHITE",
            EnergyType::Red => "RED",
            EnergyType::Green => "GREEN",
            EnergyType::Blue => "BLUE",
            EnergyType::Black => "BLACK",
        };
        f.write_str(name)
    }
}

/// Trait tags an energy unit can carry.
///
/// Each trait doubles as a capability tag for the hook system.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EnergyTrait {
    /// Cosmetic marker with no rules of its own.
    Shiny,
    /// Destroyed at the end of the turn it was created in.
    Ephemeral,
}

impl EnergyTrait {
    /// Capability tag key for this trait.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            EnergyTrait::Shiny => "SHINY",
            EnergyTrait::Ephemeral => "EPHEMERAL",
        }
    }
}

impl std::fmt::Display for EnergyTrait {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Set of energy traits, in insertion order.
pub type TraitSet = SmallVec<[EnergyTrait; 2]>;

/// Metadata key for the turn a unit was created on.
pub const META_CREATED_TURN: &str = "created_turn";

/// A single energy unit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnergyUnit {
    /// Unique identity.
    pub id: UnitId,

    /// Color.
    pub kind: EnergyType,

    /// Trait tags. No duplicates.
    pub traits: TraitSet,

    /// Free-form creation metadata (creation turn, origin codes, ...).
    #[serde(default)]
    pub metadata: FxHashMap<String, i64>,
}

impl EnergyUnit {
    /// Create a plain unit.
    pub fn new(id: UnitId, kind: EnergyType) -> Self {
        Self {
            id,
            kind,
            traits: TraitSet::new(),
            metadata: FxHashMap::default(),
        }
    }

    /// Instantiate a configured unit.
    pub fn from_config(id: UnitId, config: &EnergyConfig) -> Self {
        let mut unit = Self::new(id, config.kind);
        for &t in &config.traits {
            unit = unit.with_trait(t);
        }
        unit
    }

    /// Add a trait (builder pattern). Duplicates are ignored.
    #[must_use]
    pub fn with_trait(mut self, energy_trait: EnergyTrait) -> Self {
        if !self.traits.contains(&energy_trait) {
            self.traits.push(energy_trait);
        }
        self
    }

    /// Attach a metadata value (builder pattern).
    #[must_use]
    pub fn with_meta(mut self, key: impl Into<String>, value: i64) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }

    /// Check whether the unit carries a trait.
    #[must_use]
    pub fn has_trait(&self, energy_trait: EnergyTrait) -> bool {
        self.traits.contains(&energy_trait)
    }

    /// Read a metadata value.
    #[must_use]
    pub fn meta(&self, key: &str) -> Option<i64> {
        self.metadata.get(key).copied()
    }
}

impl TraitEntity for EnergyUnit {
    type Id = UnitId;

    fn entity_id(&self) -> UnitId {
        self.id
    }

    fn capability_tags(&self) -> impl Iterator<Item = &str> + '_ {
        self.traits.iter().map(|t| t.key())
    }
}

/// Description of a unit that does not exist yet (income).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnergyConfig {
    /// Color to create.
    pub kind: EnergyType,

    /// Traits the created unit starts with.
    #[serde(default)]
    pub traits: TraitSet,
}

impl EnergyConfig {
    /// Configuration for a plain unit.
    pub fn new(kind: EnergyType) -> Self {
        Self {
            kind,
            traits: TraitSet::new(),
        }
    }

    /// Add a trait (builder pattern).
    #[must_use]
    pub fn with_trait(mut self, energy_trait: EnergyTrait) -> Self {
        if !self.traits.contains(&energy_trait) {
            self.traits.push(energy_trait);
        }
        self
    }

    /// `count` identical configurations.
    pub fn repeat(kind: EnergyType, count: usize) -> Vec<EnergyConfig> {
        vec![Self::new(kind); count]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_builder() {
        let unit = EnergyUnit::new(UnitId::new(1), EnergyType::Red)
            .with_trait(EnergyTrait::Shiny)
            .with_trait(EnergyTrait::Shiny)
            .with_meta(META_CREATED_TURN, 4);

        assert_eq!(unit.kind, EnergyType::Red);
        assert_eq!(unit.traits.len(), 1);
        assert!(unit.has_trait(EnergyTrait::Shiny));
        assert!(!unit.has_trait(EnergyTrait::Ephemeral));
        assert_eq!(unit.meta(META_CREATED_TURN), Some(4));
        assert_eq!(unit.meta("missing"), None);
    }

    #[test]
    fn test_unit_capability_tags() {
        let unit = EnergyUnit::new(UnitId::new(2), EnergyType::Blue)
            .with_trait(EnergyTrait::Ephemeral)
            .with_trait(EnergyTrait::Shiny);

        let tags: Vec<_> = unit.capability_tags().collect();
        assert_eq!(tags, vec!["EPHEMERAL", "SHINY"]);
        assert_eq!(unit.entity_id(), UnitId::new(2));
    }

    #[test]
    fn test_from_config() {
        let config = EnergyConfig::new(EnergyType::Blue).with_trait(EnergyTrait::Ephemeral);
        let unit = EnergyUnit::from_config(UnitId::new(9), &config);

        assert_eq!(unit.id, UnitId::new(9));
        assert_eq!(unit.kind, EnergyType::Blue);
        assert!(unit.has_trait(EnergyTrait::Ephemeral));
    }

    #[test]
    fn test_trait_keys() {
        assert_eq!(EnergyTrait::Shiny.key(), "SHINY");
        assert_eq!(EnergyTrait::Ephemeral.to_string(), "EPHEMERAL");
        assert_eq!(EnergyType::White.to_string(), "WHITE");
    }

    #[test]
    fn test_repeat_config() {
        let income = EnergyConfig::repeat(EnergyType::White, 3);
        assert_eq!(income.len(), 3);
        assert!(income.iter().all(|c| c.kind == EnergyType::White));
    }
}
