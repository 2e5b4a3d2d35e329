//! Capability registry.
//!
//! The registry maps a capability tag to a bundle of handlers, one per
//! lifecycle event. Catalogs build a registry once at startup; after that
//! the executor only reads from it.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use tracing::{debug, info};

use super::context::{HookContext, HookResult, TraitKey};
use super::event::LifecycleEvent;

/// Handler closure signature.
pub type HandlerFn<E> = dyn Fn(&HookContext<'_, E>) -> HookResult + Send + Sync;

/// A single event handler.
pub struct HookHandler<E> {
    /// Declared ordering hint. Stored, but execution follows tag order.
    pub priority: i32,

    execute: Arc<HandlerFn<E>>,
}

impl<E> HookHandler<E> {
    /// Wrap a closure with default priority.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&HookContext<'_, E>) -> HookResult + Send + Sync + 'static,
    {
        Self {
            priority: 0,
            execute: Arc::new(f),
        }
    }

    /// Set the priority (builder pattern).
    #[must_use]
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Run the handler.
    pub fn call(&self, ctx: &HookContext<'_, E>) -> HookResult {
        (self.execute)(ctx)
    }
}

impl<E> Clone for HookHandler<E> {
    fn clone(&self) -> Self {
        Self {
            priority: self.priority,
            execute: Arc::clone(&self.execute),
        }
    }
}

impl<E> std::fmt::Debug for HookHandler<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HookHandler")
            .field("priority", &self.priority)
            .finish_non_exhaustive()
    }
}

/// Handlers for one capability tag, keyed by event.
pub struct HandlerBundle<E> {
    handlers: FxHashMap<LifecycleEvent, HookHandler<E>>,
}

impl<E> HandlerBundle<E> {
    /// Empty bundle.
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlers: FxHashMap::default(),
        }
    }

    /// Attach a closure to an event (builder pattern).
    #[must_use]
    pub fn on<F>(self, event: LifecycleEvent, f: F) -> Self
    where
        F: Fn(&HookContext<'_, E>) -> HookResult + Send + Sync + 'static,
    {
        self.with_handler(event, HookHandler::new(f))
    }

    /// Attach a prepared handler to an event (builder pattern).
    #[must_use]
    pub fn with_handler(mut self, event: LifecycleEvent, handler: HookHandler<E>) -> Self {
        self.handlers.insert(event, handler);
        self
    }

    /// Handler for an event.
    #[must_use]
    pub fn get(&self, event: LifecycleEvent) -> Option<&HookHandler<E>> {
        self.handlers.get(&event)
    }

    /// Events this bundle reacts to.
    pub fn events(&self) -> impl Iterator<Item = LifecycleEvent> + '_ {
        self.handlers.keys().copied()
    }

    /// Number of handlers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// True if the bundle reacts to nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl<E> Default for HandlerBundle<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for HandlerBundle<E> {
    fn clone(&self) -> Self {
        Self {
            handlers: self.handlers.clone(),
        }
    }
}

impl<E> std::fmt::Debug for HandlerBundle<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.handlers.iter()).finish()
    }
}

/// A catalog entry: a tag, its description, and its handlers.
pub struct TraitDefinition<E> {
    pub key: TraitKey,
    pub name: String,
    pub description: String,
    pub bundle: HandlerBundle<E>,
}

/// Shorthand for building a [`TraitDefinition`].
pub fn define_trait<E>(
    key: impl Into<TraitKey>,
    name: impl Into<String>,
    description: impl Into<String>,
    bundle: HandlerBundle<E>,
) -> TraitDefinition<E> {
    TraitDefinition {
        key: key.into(),
        name: name.into(),
        description: description.into(),
        bundle,
    }
}

/// Tag to handler-bundle map.
pub struct CapabilityRegistry<E> {
    bundles: FxHashMap<TraitKey, HandlerBundle<E>>,
}

impl<E> CapabilityRegistry<E> {
    /// Empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            bundles: FxHashMap::default(),
        }
    }

    /// Store a bundle under a tag, replacing any previous one.
    ///
    /// Returns the replaced bundle.
    pub fn register(
        &mut self,
        tag: impl Into<TraitKey>,
        bundle: HandlerBundle<E>,
    ) -> Option<HandlerBundle<E>> {
        let tag = tag.into();
        debug!(tag = %tag, handlers = bundle.len(), "registering capability");
        self.bundles.insert(tag, bundle)
    }

    /// Register every definition of a catalog.
    pub fn register_traits(&mut self, definitions: impl IntoIterator<Item = TraitDefinition<E>>) {
        let before = self.bundles.len();
        for def in definitions {
            self.register(def.key, def.bundle);
        }
        info!(
            added = self.bundles.len().saturating_sub(before),
            total = self.bundles.len(),
            "capability catalog registered"
        );
    }

    /// Look up the handler for a tag and event.
    #[must_use]
    pub fn get_handler(&self, tag: &str, event: LifecycleEvent) -> Option<&HookHandler<E>> {
        self.bundles.get(tag).and_then(|b| b.get(event))
    }

    /// Bundle registered under a tag.
    #[must_use]
    pub fn bundle(&self, tag: &str) -> Option<&HandlerBundle<E>> {
        self.bundles.get(tag)
    }

    /// True if the tag is known.
    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.bundles.contains_key(tag)
    }

    /// Registered tags, in no particular order.
    pub fn tags(&self) -> impl Iterator<Item = &TraitKey> + '_ {
        self.bundles.keys()
    }

    /// Number of registered tags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bundles.len()
    }

    /// True if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bundles.is_empty()
    }
}

impl<E> Default for CapabilityRegistry<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> FromIterator<TraitDefinition<E>> for CapabilityRegistry<E> {
    fn from_iter<I: IntoIterator<Item = TraitDefinition<E>>>(iter: I) -> Self {
        let mut registry = Self::new();
        registry.register_traits(iter);
        registry
    }
}

impl<E> std::fmt::Debug for CapabilityRegistry<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CapabilityRegistry")
            .field("tags", &self.bundles.len())
            .finish()
    }
}
