//! Tier 4 card traits.

use crate::cards::{Card, UnitType};
use crate::effects::SideEffect;
use crate::hooks::{define_trait, HandlerBundle, HookResult, LifecycleEvent, TraitDefinition};

use super::keys;

/// Units gained per upgrade on a sold card.
pub const UNITS_PER_UPGRADE: i64 = 3;

pub fn traits() -> Vec<TraitDefinition<Card>> {
    vec![
        define_trait(
            keys::ALL_MELEE_GROWTH,
            "Warlord",
            "At turn end, every melee card in hand gains 1 unit.",
            HandlerBundle::<Card>::new().on(LifecycleEvent::TurnEnd, |ctx| {
                let amount = ctx.entity.multiplier();
                HookResult::effects(
                    ctx.state
                        .hand
                        .cards()
                        .filter(|c| c.unit_type == UnitType::Melee)
                        .map(|c| SideEffect::add_unit_count(c.id, amount))
                        .collect(),
                )
            }),
        ),
        define_trait(
            keys::INHERIT_HALF_ON_SELL,
            "Recruit the Fallen",
            "Whenever a card is sold, gain half its units (rounded down).",
            HandlerBundle::<Card>::new().on(LifecycleEvent::AnyCardSold, |ctx| {
                let me = ctx.entity;
                let bonus = ctx
                    .params
                    .sold_card
                    .as_ref()
                    .map_or(0, |sold| sold.unit_count.div_euclid(2) * me.multiplier());
                if bonus > 0 {
                    HookResult::effect(SideEffect::add_unit_count(me.id, bonus))
                } else {
                    HookResult::none()
                }
            }),
        ),
        define_trait(
            keys::GROWTH_ON_UPGRADED_SELL,
            "Armory",
            "Whenever an upgraded card is sold, gain 3 units per upgrade.",
            HandlerBundle::<Card>::new().on(LifecycleEvent::AnyCardSold, |ctx| {
                let me = ctx.entity;
                let upgrades = ctx.params.sold_card.as_ref().map_or(0, |c| c.upgrades.len());
                if upgrades == 0 {
                    return HookResult::none();
                }
                let bonus = upgrades as i64 * UNITS_PER_UPGRADE * me.multiplier();
                HookResult::effect(SideEffect::add_unit_count(me.id, bonus))
            }),
        ),
    ]
}
