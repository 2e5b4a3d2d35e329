//! The standard content catalog.
//!
//! Trait handlers for cards (by tier) and energy units, plus the card
//! templates they ship on. Everything here is data built from the
//! [`hooks`](crate::hooks) and [`effects`](crate::effects) building blocks;
//! an orchestrator loads it once at startup.
//!
//! ```
//! use rust_tavern::catalog;
//!
//! let cards = catalog::standard_card_hooks();
//! assert!(cards.contains(catalog::keys::MILITIA_GROWTH));
//!
//! let templates = catalog::standard_templates();
//! assert!(templates.contains(catalog::ESCORT));
//! ```
//!
//! Amounts are multiplied by [`Card::multiplier`](crate::cards::Card::multiplier),
//! so golden cards apply every trait twice.

pub mod energy;
pub mod templates;
pub mod tier1;
pub mod tier2;
pub mod tier3;
pub mod tier4;

use tracing::info;

use crate::cards::{Card, TemplateCatalog};
use crate::core::RegistryError;
use crate::energy::EnergyUnit;
use crate::hooks::{global, CapabilityRegistry, TraitDefinition};

/// Template summoned by `SUMMON_ESCORT`.
pub const ESCORT: &str = "c_escort";

/// Card capability tags.
pub mod keys {
    pub const MILITIA_GROWTH: &str = "MILITIA_GROWTH";
    pub const TAVERN_GROWTH: &str = "TAVERN_GROWTH";
    pub const SELL_BUFF_RIGHT: &str = "SELL_BUFF_RIGHT";
    pub const SUMMON_ESCORT: &str = "SUMMON_ESCORT";

    pub const ADJACENT_GROWTH: &str = "ADJACENT_GROWTH";
    pub const PASSIVE_GOLD: &str = "PASSIVE_GOLD";
    pub const ENTRY_TYPE_GROWTH: &str = "ENTRY_TYPE_GROWTH";
    pub const SELL_TRIGGER_GROWTH: &str = "SELL_TRIGGER_GROWTH";

    pub const MELEE_BUFF_ON_ENTER: &str = "MELEE_BUFF_ON_ENTER";
    pub const GROWTH_ON_SELL: &str = "GROWTH_ON_SELL";
    pub const GROWTH_ON_LARGE_SELL: &str = "GROWTH_ON_LARGE_SELL";
    pub const LEFTMOST_GROWTH: &str = "LEFTMOST_GROWTH";

    pub const ALL_MELEE_GROWTH: &str = "ALL_MELEE_GROWTH";
    pub const INHERIT_HALF_ON_SELL: &str = "INHERIT_HALF_ON_SELL";
    pub const GROWTH_ON_UPGRADED_SELL: &str = "GROWTH_ON_UPGRADED_SELL";
}

/// Every card trait definition, tier by tier.
pub fn card_traits() -> Vec<TraitDefinition<Card>> {
    let mut all = tier1::traits();
    all.extend(tier2::traits());
    all.extend(tier3::traits());
    all.extend(tier4::traits());
    all
}

/// Registry of every card trait.
pub fn standard_card_hooks() -> CapabilityRegistry<Card> {
    card_traits().into_iter().collect()
}

/// Registry of every energy trait.
pub fn standard_energy_hooks() -> CapabilityRegistry<EnergyUnit> {
    energy::traits().into_iter().collect()
}

/// Every standard template.
pub fn standard_templates() -> TemplateCatalog {
    templates::catalog()
}

/// Install the standard registries as the process-wide ones.
///
/// Fails if either was already installed; the other is still installed if
/// it was free.
pub fn install_global() -> Result<(), RegistryError> {
    let cards = global::install_card_registry(standard_card_hooks());
    let energy = global::install_energy_registry(standard_energy_hooks());
    cards?;
    energy?;
    info!("standard catalog installed");
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_template_trait_is_registered() {
        let hooks = standard_card_hooks();
        for template in templates::all() {
            for tag in &template.traits {
                assert!(hooks.contains(tag.as_str()), "{} has unregistered {tag}", template.id);
            }
        }
    }

    #[test]
    fn test_card_trait_count() {
        assert_eq!(standard_card_hooks().len(), 15);
        assert_eq!(standard_energy_hooks().len(), 2);
    }
}
