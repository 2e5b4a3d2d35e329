//! Tier 1 card traits.

use crate::cards::Card;
use crate::effects::SideEffect;
use crate::hooks::{define_trait, HandlerBundle, HookResult, LifecycleEvent, TraitDefinition};

use super::{keys, ESCORT};

pub fn traits() -> Vec<TraitDefinition<Card>> {
    vec![
        define_trait(
            keys::MILITIA_GROWTH,
            "Militia Growth",
            "At turn end, gain 2 units.",
            HandlerBundle::<Card>::new().on(LifecycleEvent::TurnEnd, |ctx| {
                let me = ctx.entity;
                HookResult::effect(SideEffect::add_unit_count(me.id, 2 * me.multiplier()))
                    .with_notification("Militia Growth")
            }),
        ),
        define_trait(
            keys::TAVERN_GROWTH,
            "Tavern Growth",
            "When the tavern is upgraded, gain 2 units.",
            HandlerBundle::<Card>::new().on(LifecycleEvent::TavernUpgrade, |ctx| {
                let me = ctx.entity;
                HookResult::effect(SideEffect::add_unit_count(me.id, 2 * me.multiplier()))
                    .with_notification("Tavern Growth")
            }),
        ),
        define_trait(
            keys::SELL_BUFF_RIGHT,
            "Legacy",
            "When sold, the card to the right gains 1 unit.",
            HandlerBundle::<Card>::new().on(LifecycleEvent::Sell, |ctx| {
                let me = ctx.entity;
                let hand = &ctx.state.hand;
                let right = hand
                    .position(me.id)
                    .and_then(|i| hand.get(i + 1));
                match right {
                    Some(card) => HookResult::effect(SideEffect::add_unit_count(card.id, me.multiplier()))
                        .with_notification("Legacy Buff"),
                    None => HookResult::none(),
                }
            }),
        ),
        define_trait(
            keys::SUMMON_ESCORT,
            "Summon Escort",
            "When bought, summon an Escort if there is room.",
            // The bought card still needs a slot of its own.
            HandlerBundle::<Card>::new().on(LifecycleEvent::Buy, |ctx| {
                if ctx.state.hand.empty_count() >= 2 {
                    HookResult::effect(SideEffect::add_card(ESCORT)).with_notification("Summoned Escort")
                } else {
                    HookResult::none().with_notification("No space for Escort")
                }
            }),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::test_support::{card, fire, hand_state};
    use crate::cards::UnitType;
    use crate::core::CardId;
    use crate::hooks::HookParams;

    fn tagged(id: u32, tag: &str) -> Card {
        card(id, UnitType::Melee).with_trait(tag)
    }

    #[test]
    fn test_militia_growth_golden_doubles() {
        let plain = tagged(1, keys::MILITIA_GROWTH);
        let golden = tagged(2, keys::MILITIA_GROWTH).golden();
        let state = hand_state(&[Some(plain.clone()), Some(golden.clone())]);

        let a = fire(LifecycleEvent::TurnEnd, &plain, &state, &HookParams::new());
        let b = fire(LifecycleEvent::TurnEnd, &golden, &state, &HookParams::new());
        assert_eq!(a.side_effects, vec![SideEffect::add_unit_count(CardId::new(1), 2)]);
        assert_eq!(b.side_effects, vec![SideEffect::add_unit_count(CardId::new(2), 4)]);
        assert_eq!(a.notifications, vec!["Militia Growth"]);
    }

    #[test]
    fn test_tavern_growth_only_on_upgrade() {
        let me = tagged(1, keys::TAVERN_GROWTH);
        let state = hand_state(&[Some(me.clone())]);

        assert!(fire(LifecycleEvent::TurnEnd, &me, &state, &HookParams::new()).is_empty());
        let out = fire(LifecycleEvent::TavernUpgrade, &me, &state, &HookParams::new());
        assert_eq!(out.side_effects, vec![SideEffect::add_unit_count(CardId::new(1), 2)]);
    }

    #[test]
    fn test_sell_buff_right() {
        let seller = tagged(1, keys::SELL_BUFF_RIGHT);
        let state = hand_state(&[Some(seller.clone()), Some(card(2, UnitType::Ranged))]);
        let out = fire(LifecycleEvent::Sell, &seller, &state, &HookParams::new());
        assert_eq!(out.side_effects, vec![SideEffect::add_unit_count(CardId::new(2), 1)]);

        let gap = hand_state(&[Some(seller.clone()), None, Some(card(3, UnitType::Ranged))]);
        assert!(fire(LifecycleEvent::Sell, &seller, &gap, &HookParams::new()).is_empty());
    }

    #[test]
    fn test_summon_escort_needs_two_empty_slots() {
        let buyer = tagged(1, keys::SUMMON_ESCORT);

        let roomy = hand_state(&[None, None, Some(card(2, UnitType::Melee))]);
        let out = fire(LifecycleEvent::Buy, &buyer, &roomy, &HookParams::new());
        assert_eq!(out.side_effects, vec![SideEffect::add_card(ESCORT)]);

        let tight = hand_state(&[None, Some(card(2, UnitType::Melee)), Some(card(3, UnitType::Melee))]);
        let out = fire(LifecycleEvent::Buy, &buyer, &tight, &HookParams::new());
        assert!(out.side_effects.is_empty());
        assert_eq!(out.notifications, vec!["No space for Escort"]);
    }
}
