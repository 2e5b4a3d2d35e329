//! Tier 3 card traits.

use crate::cards::{Card, UnitType};
use crate::effects::SideEffect;
use crate::hooks::{define_trait, HandlerBundle, HookResult, LifecycleEvent, TraitDefinition};

use super::keys;

/// Sold stacks above this size count as large.
pub const LARGE_SELL_THRESHOLD: i64 = 10;

pub fn traits() -> Vec<TraitDefinition<Card>> {
    vec![
        define_trait(
            keys::MELEE_BUFF_ON_ENTER,
            "Rally",
            "When bought, every melee card in hand gains 1 unit.",
            HandlerBundle::<Card>::new().on(LifecycleEvent::Buy, |ctx| {
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
            keys::GROWTH_ON_SELL,
            "Scavenge",
            "Whenever a card is sold, gain 1 unit.",
            HandlerBundle::<Card>::new().on(LifecycleEvent::AnyCardSold, |ctx| {
                let me = ctx.entity;
                HookResult::effect(SideEffect::add_unit_count(me.id, me.multiplier()))
            }),
        ),
        define_trait(
            keys::GROWTH_ON_LARGE_SELL,
            "Salvage",
            "Whenever a card with more than 10 units is sold, gain 2 units.",
            HandlerBundle::<Card>::new().on(LifecycleEvent::AnyCardSold, |ctx| {
                let me = ctx.entity;
                match &ctx.params.sold_card {
                    Some(sold) if sold.unit_count > LARGE_SELL_THRESHOLD => {
                        HookResult::effect(SideEffect::add_unit_count(me.id, 2 * me.multiplier()))
                    }
                    _ => HookResult::none(),
                }
            }),
        ),
        define_trait(
            keys::LEFTMOST_GROWTH,
            "Vanguard Watch",
            "At turn end, the leftmost card gains 1 unit.",
            HandlerBundle::<Card>::new().on(LifecycleEvent::TurnEnd, |ctx| {
                match ctx.state.hand.cards().next() {
                    Some(first) => HookResult::effect(SideEffect::add_unit_count(
                        first.id,
                        ctx.entity.multiplier(),
                    )),
                    None => HookResult::none(),
                }
            }),
        ),
    ]
}
