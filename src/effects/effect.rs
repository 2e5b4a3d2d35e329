//! Side-effect descriptors.
//!
//! A [`SideEffect`] is a declarative request for a state change, produced
//! by a hook handler and consumed by the
//! [`SideEffectProcessor`](super::SideEffectProcessor). The kind is an open
//! string so catalogs can introduce new kinds without touching this type;
//! unknown kinds are skipped when applied.
//!
//! ## Payload
//!
//! Which payload fields a kind reads:
//!
//! | Kind              | Fields                    |
//! |-------------------|---------------------------|
//! | `ADD_UNIT_COUNT`  | `target`, `amount`        |
//! | `SET_UNIT_COUNT`  | `target`, `amount`        |
//! | `ADD_CARD`        | `template`                |
//! | `REMOVE_CARD`     | `target`                  |
//! | `GAIN_GOLD`       | `amount`                  |
//! | `GAIN_ENERGY`     | `amount`, `energy_type`   |
//! | `GAIN_INCOME`     | `amount`, `energy_type`, optional `energy_trait` |
//! | `DESTROY_ENERGY`  | `unit`                    |
//! | `HEAL_PLAYER`     | `amount`                  |
//! | `DAMAGE_PLAYER`   | `amount`                  |
//! | `GAIN_XP`         | `amount`                  |
//! | `SET_TAVERN_TIER` | `amount`                  |

use serde::{Deserialize, Serialize};

use crate::core::{CardId, TemplateId, UnitId};
use crate::energy::{EnergyTrait, EnergyType};

/// Standard effect kinds.
pub mod kinds {
    // === Hand ===
    /// Raise a card's unit count.
    pub const ADD_UNIT_COUNT: &str = "ADD_UNIT_COUNT";
    /// Overwrite a card's unit count.
    pub const SET_UNIT_COUNT: &str = "SET_UNIT_COUNT";
    /// Summon a card from a template.
    pub const ADD_CARD: &str = "ADD_CARD";
    /// Clear a card's slot.
    pub const REMOVE_CARD: &str = "REMOVE_CARD";

    // === Economy ===
    /// Gain white energy units.
    pub const GAIN_GOLD: &str = "GAIN_GOLD";
    /// Gain energy units of one color.
    pub const GAIN_ENERGY: &str = "GAIN_ENERGY";
    /// Gain per-turn income entries.
    pub const GAIN_INCOME: &str = "GAIN_INCOME";
    /// Remove one unit from the ledger.
    pub const DESTROY_ENERGY: &str = "DESTROY_ENERGY";

    // === Vital ===
    /// Restore health.
    pub const HEAL_PLAYER: &str = "HEAL_PLAYER";
    /// Lose health.
    pub const DAMAGE_PLAYER: &str = "DAMAGE_PLAYER";
    /// Gain adventure points.
    pub const GAIN_XP: &str = "GAIN_XP";
    /// Change the tavern tier.
    pub const SET_TAVERN_TIER: &str = "SET_TAVERN_TIER";
}

/// A requested state change.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideEffect {
    /// Effect kind, e.g. `ADD_UNIT_COUNT`.
    pub kind: String,

    /// Card the effect applies to.
    #[serde(default)]
    pub target: Option<CardId>,

    /// Energy unit the effect applies to.
    #[serde(default)]
    pub unit: Option<UnitId>,

    #[serde(default)]
    pub amount: Option<i64>,

    /// Template to instantiate.
    #[serde(default)]
    pub template: Option<TemplateId>,

    #[serde(default)]
    pub energy_type: Option<EnergyType>,

    #[serde(default)]
    pub energy_trait: Option<EnergyTrait>,
}

impl SideEffect {
    /// Create an effect with no payload.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            target: None,
            unit: None,
            amount: None,
            template: None,
            energy_type: None,
            energy_trait: None,
        }
    }

    /// Set the target card (builder pattern).
    #[must_use]
    pub fn with_target(mut self, target: CardId) -> Self {
        self.target = Some(target);
        self
    }

    /// Set the target unit (builder pattern).
    #[must_use]
    pub fn with_unit(mut self, unit: UnitId) -> Self {
        self.unit = Some(unit);
        self
    }

    /// Set the amount (builder pattern).
    #[must_use]
    pub fn with_amount(mut self, amount: i64) -> Self {
        self.amount = Some(amount);
        self
    }

    /// Set the template (builder pattern).
    #[must_use]
    pub fn with_template(mut self, template: impl Into<TemplateId>) -> Self {
        self.template = Some(template.into());
        self
    }

    /// Set the energy color (builder pattern).
    #[must_use]
    pub fn with_energy_type(mut self, kind: EnergyType) -> Self {
        self.energy_type = Some(kind);
        self
    }

    /// Set the energy trait (builder pattern).
    #[must_use]
    pub fn with_energy_trait(mut self, energy_trait: EnergyTrait) -> Self {
        self.energy_trait = Some(energy_trait);
        self
    }

    // === Standard kinds ===

    /// `ADD_UNIT_COUNT` on `target`.
    pub fn add_unit_count(target: CardId, amount: i64) -> Self {
        Self::new(kinds::ADD_UNIT_COUNT)
            .with_target(target)
            .with_amount(amount)
    }

    /// `SET_UNIT_COUNT` on `target`.
    pub fn set_unit_count(target: CardId, amount: i64) -> Self {
        Self::new(kinds::SET_UNIT_COUNT)
            .with_target(target)
            .with_amount(amount)
    }

    /// `ADD_CARD` from `template`.
    pub fn add_card(template: impl Into<TemplateId>) -> Self {
        Self::new(kinds::ADD_CARD).with_template(template)
    }

    /// `REMOVE_CARD` for `target`.
    pub fn remove_card(target: CardId) -> Self {
        Self::new(kinds::REMOVE_CARD).with_target(target)
    }

    /// `GAIN_GOLD` of `amount` units.
    pub fn gain_gold(amount: i64) -> Self {
        Self::new(kinds::GAIN_GOLD).with_amount(amount)
    }

    /// `GAIN_ENERGY` of `amount` units of `kind`.
    pub fn gain_energy(kind: EnergyType, amount: i64) -> Self {
        Self::new(kinds::GAIN_ENERGY)
            .with_energy_type(kind)
            .with_amount(amount)
    }

    /// `GAIN_INCOME` of `amount` entries of `kind`.
    pub fn gain_income(kind: EnergyType, amount: i64) -> Self {
        Self::new(kinds::GAIN_INCOME)
            .with_energy_type(kind)
            .with_amount(amount)
    }

    /// `DESTROY_ENERGY` for `unit`.
    pub fn destroy_energy(unit: UnitId) -> Self {
        Self::new(kinds::DESTROY_ENERGY).with_unit(unit)
    }

    /// `HEAL_PLAYER` by `amount`.
    pub fn heal_player(amount: i64) -> Self {
        Self::new(kinds::HEAL_PLAYER).with_amount(amount)
    }

    /// `DAMAGE_PLAYER` by `amount`.
    pub fn damage_player(amount: i64) -> Self {
        Self::new(kinds::DAMAGE_PLAYER).with_amount(amount)
    }

    /// `GAIN_XP` of `amount`.
    pub fn gain_xp(amount: i64) -> Self {
        Self::new(kinds::GAIN_XP).with_amount(amount)
    }

    /// `SET_TAVERN_TIER` to `tier`.
    pub fn set_tavern_tier(tier: i64) -> Self {
        Self::new(kinds::SET_TAVERN_TIER).with_amount(tier)
    }
}
