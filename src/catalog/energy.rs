//! Energy unit traits.

use crate::effects::SideEffect;
use crate::energy::{EnergyTrait, EnergyUnit};
use crate::hooks::{define_trait, HandlerBundle, HookResult, LifecycleEvent, TraitDefinition};

pub fn traits() -> Vec<TraitDefinition<EnergyUnit>> {
    vec![
        define_trait(
            EnergyTrait::Ephemeral.key(),
            "Ephemeral",
            "Destroyed at the end of the turn.",
            HandlerBundle::<EnergyUnit>::new().on(LifecycleEvent::TurnEnd, |ctx| {
                HookResult::effect(SideEffect::destroy_energy(ctx.entity.id))
            }),
        ),
        define_trait(
            EnergyTrait::Shiny.key(),
            "Shiny",
            "No effect.",
            HandlerBundle::new(),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{PlayerState, RulesConfig, UnitId};
    use crate::energy::EnergyType;
    use crate::hooks::{CapabilityRegistry, HookExecutor, HookParams};

    #[test]
    fn test_ephemeral_destroys_itself() {
        let registry: CapabilityRegistry<EnergyUnit> = traits().into_iter().collect();
        let state = PlayerState::new(&RulesConfig::default());
        let units = [
            EnergyUnit::new(UnitId::new(1), EnergyType::Red).with_trait(EnergyTrait::Ephemeral),
            EnergyUnit::new(UnitId::new(2), EnergyType::Red).with_trait(EnergyTrait::Shiny),
        ];

        let out = HookExecutor::new(&registry).trigger_batch(
            LifecycleEvent::TurnEnd,
            units.iter().map(Some),
            &state,
            &HookParams::new(),
        );
        assert_eq!(out.side_effects, vec![SideEffect::destroy_energy(UnitId::new(1))]);
    }
}
