//! Standard card templates.

use crate::cards::{CardTemplate, TemplateCatalog, UnitType};

use super::{keys, ESCORT};

#[allow(clippy::too_many_arguments)]
fn card(
    id: &str,
    name: &str,
    tier: u8,
    value: u32,
    unit_type: UnitType,
    unit_count: i64,
    tag: &str,
    description: &str,
) -> CardTemplate {
    CardTemplate::new(id, name, unit_type)
        .with_tier(tier)
        .with_value(value)
        .with_unit_count(unit_count)
        .with_trait(tag)
        .with_description(description)
}

/// Every standard template, ordered by tier.
#[rustfmt::skip]
pub fn all() -> Vec<CardTemplate> {
    use UnitType::*;
    vec![
        // === Tier 1 ===
        card("c_militia", "Militia", 1, 10, Melee, 3, keys::MILITIA_GROWTH, "Pitchforks and stubbornness."),
        card("c_archers", "Archers", 1, 15, Ranged, 2, keys::TAVERN_GROWTH, "Volleys from the high towers."),
        card("c_ranger", "Ranger", 1, 20, Ranged, 1, keys::SELL_BUFF_RIGHT, "Leaves their craft to whoever stands beside them."),
        card("c_ballista", "Ballista", 1, 18, Splasher, 1, keys::SUMMON_ESCORT, "Too valuable to leave unguarded."),
        // === Tier 2 ===
        card("c_shielder", "Shielder", 2, 25, Melee, 2, keys::ADJACENT_GROWTH, "Stronger shoulder to shoulder."),
        card("c_scouts", "Scouts", 2, 22, Ranged, 3, keys::PASSIVE_GOLD, "Return from the border with stolen coin."),
        card("c_mage", "Mage", 2, 30, Splasher, 1, keys::ENTRY_TYPE_GROWTH, "Draws on a varied legion."),
        card("c_veteran", "Veteran", 2, 40, Buffer, 1, keys::SELL_TRIGGER_GROWTH, "Rallies the ranks when they thin."),
        // === Tier 3 ===
        card("c_centurion", "Centurion", 3, 35, Melee, 2, keys::MELEE_BUFF_ON_ENTER, "Steadies the front line on arrival."),
        card("c_crossbow", "Crossbowmen", 3, 32, Ranged, 2, keys::GROWTH_ON_SELL, "Recruit from the spoils."),
        card("c_mangonel", "Mangonel", 3, 45, Splasher, 1, keys::GROWTH_ON_LARGE_SELL, "Crews up when a big squad disbands."),
        card("c_observer", "Observer", 3, 50, Buffer, 1, keys::LEFTMOST_GROWTH, "Watches over the vanguard."),
        // === Tier 4 ===
        card("c_commander", "High Commander", 4, 80, Hero, 1, keys::ALL_MELEE_GROWTH, "Leads every blade from the front."),
        card("c_merc", "Mercenary", 4, 60, Melee, 3, keys::INHERIT_HALF_ON_SELL, "Absorbs dismissed squads."),
        card("c_arcanist", "Arcanist", 4, 75, Splasher, 1, keys::ENTRY_TYPE_GROWTH, "Needs a diverse army to channel."),
        card("c_musketeer", "Musketeer", 4, 70, Ranged, 5, keys::GROWTH_ON_UPGRADED_SELL, "Quality of kit over numbers."),
        // === Tokens ===
        CardTemplate::new(ESCORT, "Escort", Melee)
            .with_tier(0)
            .with_cost(0)
            .with_value(5)
            .with_description("Sworn guards of the siege train."),
    ]
}

/// [`all`] as a lookup table.
pub fn catalog() -> TemplateCatalog {
    all().into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_contents() {
        let catalog = catalog();
        assert_eq!(catalog.len(), 17);

        let escort = catalog.get(ESCORT).unwrap();
        assert_eq!(escort.cost, 0);
        assert!(escort.traits.is_empty());

        let musketeer = catalog.get("c_musketeer").unwrap();
        assert_eq!(musketeer.unit_count, 5);
        assert_eq!(musketeer.tier, 4);
    }

    #[test]
    fn test_tokens_excluded_from_tiers() {
        let catalog = catalog();
        assert_eq!(catalog.up_to_tier(1).count(), 4);
        assert_eq!(catalog.up_to_tier(4).count(), 16);
    }
}
