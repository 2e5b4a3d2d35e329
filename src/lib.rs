//! # rust-tavern
//!
//! Rules core for a tavern-style auto-battler economy: energy payment,
//! capability hooks and a side-effect pipeline.
//!
//! ## Design Principles
//!
//! 1. **State In, State Out**: Every mutation takes a [`PlayerState`] and
//!    returns the next one. Nothing is mutated in place behind a caller's
//!    back.
//!
//! 2. **Handlers Describe, Processor Applies**: Hook handlers only read.
//!    They return [`SideEffect`]s; the [`SideEffectProcessor`] folds them
//!    over the state in order.
//!
//! 3. **Open Tags**: Cards and energy units carry string capability tags.
//!    Content lives in catalogs, not in the core.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: The ledger and hand are `im` vectors,
//!   so cloning a state is O(1).
//!
//! - **Deterministic Payment**: The [`LedgerSolver`] finds the first
//!   assignment of ledger units to cost requirements by ordered
//!   backtracking. Same inputs, same positions.
//!
//! ## Modules
//!
//! - `core`: Ids, configuration, errors, player state
//! - `energy`: Energy units, cost requirements, ledger and solver
//! - `cards`: Card instances, templates, the hand
//! - `hooks`: Lifecycle events, capability registry, executor
//! - `effects`: Side-effects, state transformers, processor
//! - `catalog`: Standard traits and templates
//!
//! ## Turn Sketch
//!
//! ```
//! use rust_tavern::catalog;
//! use rust_tavern::core::{PlayerState, RulesConfig};
//! use rust_tavern::effects::SideEffectProcessor;
//! use rust_tavern::hooks::{HookExecutor, HookParams, LifecycleEvent};
//!
//! let config = RulesConfig::default();
//! let hooks = catalog::standard_card_hooks();
//! let processor = SideEffectProcessor::new(catalog::standard_templates(), config.clone());
//!
//! let mut state = PlayerState::new(&config);
//! let militia = state.mint_card(processor.templates().get("c_militia").unwrap());
//! let id = militia.id;
//! state.hand.place(militia).unwrap();
//!
//! let out = HookExecutor::new(&hooks).trigger_batch(
//!     LifecycleEvent::TurnEnd,
//!     state.hand.slots(),
//!     &state,
//!     &HookParams::new(),
//! );
//! let state = processor.apply(state, &out.side_effects);
//! assert_eq!(state.hand.card(id).unwrap().unit_count, 5);
//! ```

pub mod core;
pub mod energy;
pub mod cards;
pub mod hooks;
pub mod effects;
pub mod catalog;

// Re-export commonly used types
pub use crate::core::{
    CardId, UnitId, TemplateId, IdAllocator,
    RulesConfig, PlayerState, Stats,
    ConfigError, HandError, PaymentError, RegistryError,
};

pub use crate::energy::{
    EnergyType, EnergyTrait, EnergyUnit, EnergyConfig,
    CostConstraint, Requirement, CostRequest, cost, simple_cost, simple_cost_any_of,
    Ledger, LedgerSolver, SolveResult, PaymentOutcome,
};

pub use crate::cards::{Card, UnitType, CardTemplate, TemplateCatalog, Hand};

pub use crate::hooks::{
    LifecycleEvent, TraitEntity, TraitKey,
    HookContext, HookParams, HookResult,
    HookHandler, HandlerBundle, TraitDefinition, CapabilityRegistry, define_trait,
    HookExecutor, CheckOutcome, TriggerOutcome,
};

pub use crate::effects::{
    SideEffect, SideEffectProcessor, ApplyReport,
    StateTransformer, TransformContext, TransformerRegistry,
};
