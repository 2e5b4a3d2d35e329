//! Tier 2 card traits.

use rustc_hash::FxHashSet;

use crate::cards::{Card, UnitType};
use crate::effects::SideEffect;
use crate::hooks::{define_trait, HandlerBundle, HookResult, LifecycleEvent, TraitDefinition};

use super::keys;

pub fn traits() -> Vec<TraitDefinition<Card>> {
    vec![
        define_trait(
            keys::ADJACENT_GROWTH,
            "Formation",
            "At turn end, gain 1 unit per adjacent melee or ranged card.",
            HandlerBundle::<Card>::new().on(LifecycleEvent::TurnEnd, |ctx| {
                let me = ctx.entity;
                let hand = &ctx.state.hand;
                let Some(index) = hand.position(me.id) else {
                    return HookResult::none();
                };
                let left = index.checked_sub(1).and_then(|i| hand.get(i));
                let right = hand.get(index + 1);
                let adjacent = [left, right]
                    .into_iter()
                    .flatten()
                    .filter(|c| c.unit_type.is_combatant())
                    .count() as i64;

                if adjacent > 0 {
                    HookResult::effect(SideEffect::add_unit_count(me.id, adjacent * me.multiplier()))
                } else {
                    HookResult::none()
                }
            }),
        ),
        define_trait(
            keys::PASSIVE_GOLD,
            "Tribute",
            "At turn end, gain 1 gold.",
            HandlerBundle::<Card>::new().on(LifecycleEvent::TurnEnd, |ctx| {
                HookResult::effect(SideEffect::gain_gold(ctx.entity.multiplier()))
            }),
        ),
        define_trait(
            keys::ENTRY_TYPE_GROWTH,
            "Combined Arms",
            "When bought, gain 1 unit per distinct unit type in hand.",
            HandlerBundle::<Card>::new().on(LifecycleEvent::Buy, |ctx| {
                let me = ctx.entity;
                let types: FxHashSet<UnitType> = ctx
                    .state
                    .hand
                    .cards()
                    .map(|c| c.unit_type)
                    .chain(std::iter::once(me.unit_type))
                    .collect();
                HookResult::effect(SideEffect::add_unit_count(
                    me.id,
                    types.len() as i64 * me.multiplier(),
                ))
            }),
        ),
        define_trait(
            keys::SELL_TRIGGER_GROWTH,
            "First Blood",
            "When the first card of a turn is sold, gain 1 unit.",
            HandlerBundle::<Card>::new().on(LifecycleEvent::AnyCardSold, |ctx| {
                if ctx.params.cards_sold_this_turn == Some(0) {
                    let me = ctx.entity;
                    HookResult::effect(SideEffect::add_unit_count(me.id, me.multiplier()))
                } else {
                    HookResult::none()
                }
            }),
        ),
    ]
}
