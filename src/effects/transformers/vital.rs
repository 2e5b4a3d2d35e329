//! Vital transformers: hp, experience, tavern tier.

use tracing::warn;

use super::{StateTransformer, TransformContext};
use crate::core::{PlayerState, Stats};
use crate::effects::effect::{kinds, SideEffect};

pub const TRANSFORMERS: &[(&str, StateTransformer)] = &[
    (kinds::HEAL_PLAYER, heal_player),
    (kinds::DAMAGE_PLAYER, damage_player),
    (kinds::GAIN_XP, gain_xp),
    (kinds::SET_TAVERN_TIER, set_tavern_tier),
];

/// Heal, capped at `max_hp`.
pub fn heal_player(state: PlayerState, effect: &SideEffect, _: &TransformContext<'_>) -> PlayerState {
    match effect.amount {
        Some(amount) if amount > 0 => state.map_stats(|s| Stats {
            hp: s.max_hp.min(s.hp.saturating_add(amount)),
            ..s
        }),
        _ => state,
    }
}

/// Damage, floored at 0.
pub fn damage_player(state: PlayerState, effect: &SideEffect, _: &TransformContext<'_>) -> PlayerState {
    match effect.amount {
        Some(amount) if amount > 0 => state.map_stats(|s| Stats {
            hp: s.hp.saturating_sub(amount).max(0),
            ..s
        }),
        _ => state,
    }
}

/// Add experience, saturating at the `i64` bounds.
pub fn gain_xp(state: PlayerState, effect: &SideEffect, _: &TransformContext<'_>) -> PlayerState {
    match effect.amount {
        Some(amount) if amount != 0 => state.map_stats(|s| Stats {
            adventure_points: s.adventure_points.saturating_add(amount),
            ..s
        }),
        _ => state,
    }
}

/// Set the tier, clamped to `1..=max_tier`.
pub fn set_tavern_tier(state: PlayerState, effect: &SideEffect, ctx: &TransformContext<'_>) -> PlayerState {
    let Some(tier) = effect.amount else {
        warn!(kind = %effect.kind, "skipped: missing amount");
        return state;
    };
    let max = ctx.config.max_tier.max(1);
    let clamped = u8::try_from(tier.clamp(1, i64::from(max))).unwrap_or(max);
    state.map_stats(|s| Stats {
        tavern_tier: clamped,
        ..s
    })
}
