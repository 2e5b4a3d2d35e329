//! State transformers.
//!
//! A transformer turns one [`SideEffect`] into a state transition. They are
//! grouped by the part of [`PlayerState`] they touch:
//!
//! - [`hand`]: card slots and card fields
//! - [`economy`]: ledger and income
//! - [`vital`]: hp, experience, tavern tier
//!
//! The processor only needs kind → transformer, so the groups are merged
//! into one [`TransformerRegistry`].

pub mod economy;
pub mod hand;
pub mod vital;

use rustc_hash::FxHashMap;

use super::effect::SideEffect;
use crate::cards::TemplateCatalog;
use crate::core::{PlayerState, RulesConfig};

/// Read-only data a transformer may consult.
#[derive(Clone, Copy, Debug)]
pub struct TransformContext<'a> {
    /// Templates `ADD_CARD` instantiates from.
    pub templates: &'a TemplateCatalog,

    /// Rules limits (tier bounds, ...).
    pub config: &'a RulesConfig,
}

impl<'a> TransformContext<'a> {
    pub fn new(templates: &'a TemplateCatalog, config: &'a RulesConfig) -> Self {
        Self { templates, config }
    }
}

/// Apply one effect to a state, producing the next state.
///
/// Malformed payloads return the input state unchanged.
pub type StateTransformer = fn(PlayerState, &SideEffect, &TransformContext<'_>) -> PlayerState;

/// Effect kind to transformer.
#[derive(Clone, Debug, Default)]
pub struct TransformerRegistry {
    transformers: FxHashMap<String, StateTransformer>,
}

impl TransformerRegistry {
    /// Empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every standard kind.
    #[must_use]
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.extend(hand::TRANSFORMERS.iter().copied());
        registry.extend(economy::TRANSFORMERS.iter().copied());
        registry.extend(vital::TRANSFORMERS.iter().copied());
        registry
    }

    /// Register a transformer, replacing any previous one for the kind.
    pub fn register(&mut self, kind: impl Into<String>, transformer: StateTransformer) {
        self.transformers.insert(kind.into(), transformer);
    }

    /// Transformer for a kind.
    #[must_use]
    pub fn get(&self, kind: &str) -> Option<StateTransformer> {
        self.transformers.get(kind).copied()
    }

    /// True if the kind is known.
    #[must_use]
    pub fn contains(&self, kind: &str) -> bool {
        self.transformers.contains_key(kind)
    }

    /// Number of known kinds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.transformers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.transformers.is_empty()
    }

    /// Known kinds, in no particular order.
    pub fn kinds(&self) -> impl Iterator<Item = &str> + '_ {
        self.transformers.keys().map(String::as_str)
    }
}

impl<'k> Extend<(&'k str, StateTransformer)> for TransformerRegistry {
    fn extend<I: IntoIterator<Item = (&'k str, StateTransformer)>>(&mut self, iter: I) {
        for (kind, transformer) in iter {
            self.register(kind, transformer);
        }
    }
}
