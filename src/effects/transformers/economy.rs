//! Economy transformers: the ledger and income.

use tracing::{debug, warn};

use super::{StateTransformer, TransformContext};
use crate::core::PlayerState;
use crate::effects::effect::{kinds, SideEffect};
use crate::energy::{EnergyConfig, EnergyType};

pub const TRANSFORMERS: &[(&str, StateTransformer)] = &[
    (kinds::GAIN_GOLD, gain_gold),
    (kinds::GAIN_ENERGY, gain_energy),
    (kinds::GAIN_INCOME, gain_income),
    (kinds::DESTROY_ENERGY, destroy_energy),
];

/// Positive amount as a count, or `None`. Amounts above the configured
/// per-effect cap are rejected.
fn positive(effect: &SideEffect, ctx: &TransformContext<'_>) -> Option<usize> {
    let amount = effect.amount.filter(|&a| a > 0)?;
    let cap = ctx.config.max_energy_per_effect;
    match usize::try_from(amount) {
        Ok(count) if count <= cap => Some(count),
        _ => {
            warn!(kind = %effect.kind, amount, cap, "skipped: amount above per-effect cap");
            None
        }
    }
}

fn config_of(effect: &SideEffect, kind: EnergyType) -> EnergyConfig {
    match effect.energy_trait {
        Some(t) => EnergyConfig::new(kind).with_trait(t),
        None => EnergyConfig::new(kind),
    }
}

/// Append `amount` white units.
pub fn gain_gold(state: PlayerState, effect: &SideEffect, ctx: &TransformContext<'_>) -> PlayerState {
    let Some(count) = positive(effect, ctx) else {
        return state;
    };
    debug!(count, "gold gained");
    state.grant_energy(EnergyType::White, count)
}

/// Append `amount` units of `energy_type`, carrying `energy_trait` if set.
pub fn gain_energy(mut state: PlayerState, effect: &SideEffect, ctx: &TransformContext<'_>) -> PlayerState {
    let (Some(count), Some(kind)) = (positive(effect, ctx), effect.energy_type) else {
        warn!(kind = %effect.kind, "skipped: missing energy type or positive amount");
        return state;
    };
    let config = config_of(effect, kind);
    for _ in 0..count {
        let unit = state.mint_unit(&config);
        state.ledger.push(unit);
    }
    debug!(%kind, count, "energy gained");
    state
}

/// Add `amount` income entries of `energy_type`.
pub fn gain_income(state: PlayerState, effect: &SideEffect, ctx: &TransformContext<'_>) -> PlayerState {
    let (Some(count), Some(kind)) = (positive(effect, ctx), effect.energy_type) else {
        warn!(kind = %effect.kind, "skipped: missing energy type or positive amount");
        return state;
    };
    let config = config_of(effect, kind);
    state.map_economy(|_, income, _, _| {
        income.extend(std::iter::repeat(config).take(count));
    })
}

/// Remove one unit from the ledger by id.
pub fn destroy_energy(state: PlayerState, effect: &SideEffect, _: &TransformContext<'_>) -> PlayerState {
    let Some(unit) = effect.unit else {
        warn!(kind = %effect.kind, "skipped: missing unit");
        return state;
    };
    state.map_economy(|ledger, _, _, _| {
        if ledger.position(unit).is_some() {
            *ledger = ledger.without_unit(unit);
            debug!(%unit, "energy destroyed");
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::TemplateCatalog;
    use crate::core::RulesConfig;
    use crate::energy::EnergyTrait;

    fn run(f: StateTransformer, state: PlayerState, effect: SideEffect) -> PlayerState {
        let templates = TemplateCatalog::new();
        let config = RulesConfig::default();
        f(state, &effect, &TransformContext::new(&templates, &config))
    }

    fn state() -> PlayerState {
        PlayerState::new(&RulesConfig::default())
    }

    #[test]
    fn test_gain_gold() {
        let s = run(gain_gold, state(), SideEffect::gain_gold(3));
        assert_eq!(s.ledger.count_of(EnergyType::White), 3);

        let s = run(gain_gold, s, SideEffect::gain_gold(0));
        assert_eq!(s.ledger.len(), 3);

        let s = run(gain_gold, s, SideEffect::gain_gold(-2));
        assert_eq!(s.ledger.len(), 3);
    }

    #[test]
    fn test_gain_energy_with_trait() {
        let effect = SideEffect::gain_energy(EnergyType::Blue, 2).with_energy_trait(EnergyTrait::Shiny);
        let s = run(gain_energy, state(), effect);

        assert_eq!(s.ledger.count_of(EnergyType::Blue), 2);
        assert!(s.ledger.iter().all(|u| u.has_trait(EnergyTrait::Shiny)));
    }

    #[test]
    fn test_gain_energy_requires_type() {
        let s = run(gain_energy, state(), SideEffect::new(kinds::GAIN_ENERGY).with_amount(2));
        assert!(s.ledger.is_empty());
    }

    #[test]
    fn test_gain_income() {
        let s = run(gain_income, state(), SideEffect::gain_income(EnergyType::Green, 2));
        assert_eq!(s.income, EnergyConfig::repeat(EnergyType::Green, 2));
        assert!(s.ledger.is_empty());
    }

    #[test]
    fn test_amount_above_cap_is_skipped() {
        let base = state();
        let cap = RulesConfig::default().max_energy_per_effect as i64;

        assert_eq!(run(gain_gold, base.clone(), SideEffect::gain_gold(i64::MAX)), base);
        assert_eq!(run(gain_gold, base.clone(), SideEffect::gain_gold(cap + 1)), base);
        assert_eq!(
            run(gain_energy, base.clone(), SideEffect::gain_energy(EnergyType::Red, i64::MAX)),
            base
        );
        assert_eq!(
            run(gain_income, base.clone(), SideEffect::gain_income(EnergyType::Red, i64::MAX)),
            base
        );

        let at_cap = run(gain_gold, base, SideEffect::gain_gold(cap));
        assert_eq!(at_cap.ledger.len(), cap as usize);
    }

    #[test]
    fn test_destroy_energy() {
        let s = state().grant_energy(EnergyType::Red, 3);
        let victim = s.ledger.get(1).unwrap().id;

        let s = run(destroy_energy, s, SideEffect::destroy_energy(victim));
        assert_eq!(s.ledger.len(), 2);
        assert!(s.ledger.position(victim).is_none());

        let again = run(destroy_energy, s.clone(), SideEffect::destroy_energy(victim));
        assert_eq!(again, s);
    }
}
