//! Side-effect processor.
//!
//! Folds a batch of [`SideEffect`]s over a [`PlayerState`], strictly in
//! order. Each effect sees the state left by the previous one, so
//! `[SET_UNIT_COUNT 5, ADD_UNIT_COUNT 1]` ends at 6 while the reverse order
//! ends at 5.
//!
//! Unknown kinds are logged and skipped; they never abort the batch.
//!
//! ```
//! use rust_tavern::cards::TemplateCatalog;
//! use rust_tavern::core::{PlayerState, RulesConfig};
//! use rust_tavern::effects::{SideEffect, SideEffectProcessor};
//!
//! let processor = SideEffectProcessor::new(TemplateCatalog::new(), RulesConfig::default());
//! let state = PlayerState::new(processor.config());
//!
//! let next = processor.apply(
//!     state,
//!     &[SideEffect::gain_gold(2), SideEffect::new("NOT_A_KIND"), SideEffect::damage_player(5)],
//! );
//! assert_eq!(next.ledger.len(), 2);
//! assert_eq!(next.hp, 35);
//! ```

use tracing::{debug, warn};

use super::effect::SideEffect;
use super::transformers::{TransformContext, TransformerRegistry};
use crate::cards::TemplateCatalog;
use crate::core::{PlayerState, RulesConfig};

/// What happened to each effect in a batch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApplyReport {
    /// Kinds that had a transformer, in application order.
    pub applied: Vec<String>,

    /// Kinds with no transformer, in batch order.
    pub skipped: Vec<String>,
}

impl ApplyReport {
    /// True if every effect had a transformer.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Applies side-effects through a [`TransformerRegistry`].
#[derive(Clone, Debug)]
pub struct SideEffectProcessor {
    transformers: TransformerRegistry,
    templates: TemplateCatalog,
    config: RulesConfig,
}

impl SideEffectProcessor {
    /// Processor with the standard transformers.
    #[must_use]
    pub fn new(templates: TemplateCatalog, config: RulesConfig) -> Self {
        Self {
            transformers: TransformerRegistry::standard(),
            templates,
            config,
        }
    }

    /// Replace the transformer table (builder pattern).
    #[must_use]
    pub fn with_transformers(mut self, transformers: TransformerRegistry) -> Self {
        self.transformers = transformers;
        self
    }

    pub fn transformers(&self) -> &TransformerRegistry {
        &self.transformers
    }

    /// Mutable access for registering extra kinds.
    pub fn transformers_mut(&mut self) -> &mut TransformerRegistry {
        &mut self.transformers
    }

    pub fn templates(&self) -> &TemplateCatalog {
        &self.templates
    }

    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    /// Fold `effects` over `state` in order.
    #[must_use]
    pub fn apply(&self, state: PlayerState, effects: &[SideEffect]) -> PlayerState {
        self.apply_with_report(state, effects).0
    }

    /// Like [`apply`](Self::apply), also reporting which kinds were skipped.
    pub fn apply_with_report(
        &self,
        state: PlayerState,
        effects: &[SideEffect],
    ) -> (PlayerState, ApplyReport) {
        let ctx = TransformContext::new(&self.templates, &self.config);
        let mut report = ApplyReport::default();

        let state = effects.iter().fold(state, |state, effect| {
            match self.transformers.get(&effect.kind) {
                Some(transform) => {
                    debug!(kind = %effect.kind, "applying side effect");
                    report.applied.push(effect.kind.clone());
                    transform(state, effect, &ctx)
                }
                None => {
                    warn!(kind = %effect.kind, "no transformer for side effect; skipped");
                    report.skipped.push(effect.kind.clone());
                    state
                }
            }
        });

        (state, report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardTemplate, UnitType};
    use crate::core::CardId;

    fn processor() -> SideEffectProcessor {
        let templates = std::iter::once(CardTemplate::new("c_escort", "Escort", UnitType::Melee)).collect();
        SideEffectProcessor::new(templates, RulesConfig::default())
    }

    fn with_card(p: &SideEffectProcessor) -> (PlayerState, CardId) {
        let mut state = PlayerState::new(p.config());
        let card = state.mint_card(p.templates().get("c_escort").unwrap());
        let id = card.id;
        state.hand.place(card).unwrap();
        (state, id)
    }

    #[test]
    fn test_empty_batch_is_identity() {
        let p = processor();
        let (state, _) = with_card(&p);
        assert_eq!(p.apply(state.clone(), &[]), state);
    }

    #[test]
    fn test_unknown_kind_passes_through() {
        let p = processor();
        let (state, _) = with_card(&p);

        let (after, report) = p.apply_with_report(state.clone(), &[SideEffect::new("UNKNOWN")]);
        assert_eq!(after, state);
        assert_eq!(report.skipped, vec!["UNKNOWN"]);
        assert!(!report.is_complete());
    }

    #[test]
    fn test_fold_order_matters() {
        let p = processor();
        let (state, id) = with_card(&p);

        let set_then_add = p.apply(
            state.clone(),
            &[SideEffect::set_unit_count(id, 5), SideEffect::add_unit_count(id, 1)],
        );
        let add_then_set = p.apply(
            state,
            &[SideEffect::add_unit_count(id, 1), SideEffect::set_unit_count(id, 5)],
        );

        assert_eq!(set_then_add.hand.card(id).unwrap().unit_count, 6);
        assert_eq!(add_then_set.hand.card(id).unwrap().unit_count, 5);
    }

    #[test]
    fn test_report_lists_applied_in_order() {
        let p = processor();
        let (state, id) = with_card(&p);

        let (_, report) = p.apply_with_report(
            state,
            &[SideEffect::gain_gold(1), SideEffect::new("X"), SideEffect::remove_card(id)],
        );
        assert_eq!(report.applied, vec!["GAIN_GOLD", "REMOVE_CARD"]);
        assert_eq!(report.skipped, vec!["X"]);
    }

    #[test]
    fn test_custom_transformer() {
        fn double_hp(mut state: PlayerState, _: &SideEffect, _: &TransformContext<'_>) -> PlayerState {
            state.hp *= 2;
            state
        }

        let mut p = processor();
        p.transformers_mut().register("DOUBLE_HP", double_hp);

        let state = PlayerState::new(p.config());
        let hp = state.hp;
        assert_eq!(p.apply(state, &[SideEffect::new("DOUBLE_HP")]).hp, hp * 2);
    }
}
