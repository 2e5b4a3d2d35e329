//! Hook executor.
//!
//! Runs the handlers attached to an entity's capability tags for one
//! lifecycle event. Handlers are visited in tag order; the executor never
//! touches the state it is given.
//!
//! ## Operation Shapes
//!
//! | Operation        | Combines handler results by         |
//! |------------------|-------------------------------------|
//! | `check`          | first `prevented` wins              |
//! | `process_value`  | threading `current_value`           |
//! | `trigger`        | concatenating side-effects          |
//! | `trigger_batch`  | `trigger` per occupied slot, joined |
//!
//! ```
//! use rust_tavern::cards::{Card, UnitType};
//! use rust_tavern::core::{CardId, PlayerState, RulesConfig};
//! use rust_tavern::hooks::{
//!     CapabilityRegistry, HandlerBundle, HookExecutor, HookParams, HookResult, LifecycleEvent,
//! };
//!
//! let mut registry = CapabilityRegistry::<Card>::new();
//! registry.register(
//!     "DISCOUNT",
//!     HandlerBundle::new().on(LifecycleEvent::ModifyCost, |ctx| {
//!         HookResult::modify(ctx.params.current_value.unwrap_or(0) - 1)
//!     }),
//! );
//!
//! let card = Card::new(CardId::new(1), "c_test", UnitType::Melee).with_trait("DISCOUNT");
//! let state = PlayerState::new(&RulesConfig::default());
//! let cost = HookExecutor::new(&registry).process_value(
//!     LifecycleEvent::ModifyCost,
//!     &card,
//!     3,
//!     &state,
//!     &HookParams::new(),
//! );
//! assert_eq!(cost, 2);
//! ```

use tracing::trace;

use super::context::{HookContext, HookParams, HookResult, TraitEntity};
use super::event::LifecycleEvent;
use super::registry::CapabilityRegistry;
use crate::core::PlayerState;
use crate::effects::SideEffect;

/// Result of [`HookExecutor::check`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckOutcome {
    pub allowed: bool,
    pub reason: Option<String>,
}

impl CheckOutcome {
    /// Nothing objected.
    #[must_use]
    pub fn allowed() -> Self {
        Self {
            allowed: true,
            reason: None,
        }
    }

    /// Blocked with an optional reason.
    #[must_use]
    pub fn denied(reason: Option<String>) -> Self {
        Self {
            allowed: false,
            reason,
        }
    }
}

/// Combined output of [`HookExecutor::trigger`] and
/// [`HookExecutor::trigger_batch`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TriggerOutcome {
    pub side_effects: Vec<SideEffect>,
    pub notifications: Vec<String>,
}

impl TriggerOutcome {
    /// True if no handler asked for anything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.side_effects.is_empty() && self.notifications.is_empty()
    }

    fn absorb(&mut self, result: HookResult) {
        self.side_effects.extend(result.side_effects);
        self.notifications.extend(result.notification);
    }

    fn append(&mut self, other: TriggerOutcome) {
        self.side_effects.extend(other.side_effects);
        self.notifications.extend(other.notifications);
    }
}

/// Dispatches lifecycle events against a registry.
pub struct HookExecutor<'r, E> {
    registry: &'r CapabilityRegistry<E>,
}

impl<'r, E> Clone for HookExecutor<'r, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'r, E> Copy for HookExecutor<'r, E> {}

impl<'r, E: TraitEntity> HookExecutor<'r, E> {
    /// Executor over a registry.
    #[must_use]
    pub fn new(registry: &'r CapabilityRegistry<E>) -> Self {
        Self { registry }
    }

    /// Ask every handler whether the action may go ahead.
    ///
    /// The first handler that prevents it short-circuits; its notification
    /// becomes the reason.
    pub fn check(
        &self,
        event: LifecycleEvent,
        entity: &E,
        state: &PlayerState,
        params: &HookParams,
    ) -> CheckOutcome {
        let ctx = HookContext {
            entity,
            state,
            params,
        };
        for tag in entity.capability_tags() {
            let Some(handler) = self.registry.get_handler(tag, event) else {
                continue;
            };
            let result = handler.call(&ctx);
            if result.prevented {
                trace!(%event, entity = %entity.entity_id(), tag, "action prevented");
                return CheckOutcome::denied(result.notification);
            }
        }
        CheckOutcome::allowed()
    }

    /// Thread a value through every handler.
    ///
    /// Each handler sees the running value in `params.current_value`;
    /// handlers that do not set `modified_value` leave it unchanged.
    pub fn process_value(
        &self,
        event: LifecycleEvent,
        entity: &E,
        initial: i64,
        state: &PlayerState,
        params: &HookParams,
    ) -> i64 {
        let mut running = params.clone();
        let mut value = initial;
        for tag in entity.capability_tags() {
            let Some(handler) = self.registry.get_handler(tag, event) else {
                continue;
            };
            running.current_value = Some(value);
            let result = handler.call(&HookContext {
                entity,
                state,
                params: &running,
            });
            if let Some(next) = result.modified_value {
                trace!(%event, entity = %entity.entity_id(), tag, from = value, to = next, "value modified");
                value = next;
            }
        }
        value
    }

    /// Run every handler and collect what they ask for.
    pub fn trigger(
        &self,
        event: LifecycleEvent,
        entity: &E,
        state: &PlayerState,
        params: &HookParams,
    ) -> TriggerOutcome {
        let ctx = HookContext {
            entity,
            state,
            params,
        };
        let mut outcome = TriggerOutcome::default();
        for handler in entity
            .capability_tags()
            .filter_map(|tag| self.registry.get_handler(tag, event))
        {
            outcome.absorb(handler.call(&ctx));
        }
        outcome
    }

    /// [`trigger`](Self::trigger) over a row of slots, skipping empty ones.
    pub fn trigger_batch<'a, I>(
        &self,
        event: LifecycleEvent,
        entities: I,
        state: &PlayerState,
        params: &HookParams,
    ) -> TriggerOutcome
    where
        I: IntoIterator<Item = Option<&'a E>>,
        E: 'a,
    {
        let mut outcome = TriggerOutcome::default();
        for entity in entities.into_iter().flatten() {
            outcome.append(self.trigger(event, entity, state, params));
        }
        outcome
    }
}
