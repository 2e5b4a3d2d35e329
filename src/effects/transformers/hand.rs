//! Hand transformers: card fields and slots.

use tracing::{debug, warn};

use super::{StateTransformer, TransformContext};
use crate::core::PlayerState;
use crate::effects::effect::{kinds, SideEffect};

pub const TRANSFORMERS: &[(&str, StateTransformer)] = &[
    (kinds::ADD_UNIT_COUNT, add_unit_count),
    (kinds::SET_UNIT_COUNT, set_unit_count),
    (kinds::ADD_CARD, add_card),
    (kinds::REMOVE_CARD, remove_card),
];

/// `target.unit_count += amount`.
pub fn add_unit_count(state: PlayerState, effect: &SideEffect, _: &TransformContext<'_>) -> PlayerState {
    let (Some(target), Some(amount)) = (effect.target, effect.amount) else {
        warn!(kind = %effect.kind, "skipped: missing target or amount");
        return state;
    };
    state.map_card(target, |card| {
        let next = card.unit_count.saturating_add(amount);
        debug!(card = %card.id, from = card.unit_count, to = next, "unit count increased");
        card.unit_count = next;
    })
}

/// `target.unit_count = amount`.
pub fn set_unit_count(state: PlayerState, effect: &SideEffect, _: &TransformContext<'_>) -> PlayerState {
    let (Some(target), Some(amount)) = (effect.target, effect.amount) else {
        warn!(kind = %effect.kind, "skipped: missing target or amount");
        return state;
    };
    state.map_card(target, |card| card.unit_count = amount)
}

/// Instantiate a template into the first empty slot.
///
/// Summoned cards start bare: the template's traits are not copied.
pub fn add_card(state: PlayerState, effect: &SideEffect, ctx: &TransformContext<'_>) -> PlayerState {
    let Some(template_id) = &effect.template else {
        warn!(kind = %effect.kind, "skipped: missing template");
        return state;
    };
    let Some(template) = ctx.templates.get(template_id.as_str()) else {
        warn!(template = %template_id, "skipped: unknown template");
        return state;
    };
    if state.hand.is_full() {
        warn!(template = %template_id, "skipped: hand is full");
        return state;
    }

    state.map_hand(|hand, ids| {
        let mut card = template.instantiate(ids.next_card());
        card.traits.clear();
        match hand.place(card) {
            Ok(slot) => debug!(template = %template_id, slot, "card added"),
            Err(err) => warn!(%err, "card not placed"),
        }
    })
}

/// Clear the slot holding `target`.
pub fn remove_card(state: PlayerState, effect: &SideEffect, _: &TransformContext<'_>) -> PlayerState {
    let Some(target) = effect.target else {
        warn!(kind = %effect.kind, "skipped: missing target");
        return state;
    };
    state.map_hand(|hand, _| {
        if let Err(err) = hand.remove(target) {
            warn!(%err, "remove skipped");
        }
    })
}
