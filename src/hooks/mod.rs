//! Capability hooks.
//!
//! Entities carry capability tags. The [`CapabilityRegistry`] maps each tag
//! to handlers keyed by [`LifecycleEvent`], and the [`HookExecutor`] runs
//! them when the orchestrator fires an event.
//!
//! ## Key Types
//!
//! - [`TraitEntity`]: anything with an id and ordered tags
//! - [`HookContext`] / [`HookParams`]: what a handler reads
//! - [`HookResult`]: what a handler asks for
//! - [`CapabilityRegistry`] / [`HandlerBundle`]: tag to handlers
//! - [`HookExecutor`]: `check`, `process_value`, `trigger`, `trigger_batch`
//!
//! Handlers never mutate state. Every intended change comes back as a
//! [`SideEffect`](crate::effects::SideEffect) for the
//! [`SideEffectProcessor`](crate::effects::SideEffectProcessor).

pub mod context;
pub mod event;
pub mod executor;
pub mod global;
pub mod registry;

pub use context::{HookContext, HookParams, HookResult, TraitEntity, TraitKey};
pub use event::LifecycleEvent;
pub use executor::{CheckOutcome, HookExecutor, TriggerOutcome};
pub use registry::{
    define_trait, CapabilityRegistry, HandlerBundle, HandlerFn, HookHandler, TraitDefinition,
};
