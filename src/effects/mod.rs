//! Side-effects and their application.
//!
//! Hook handlers describe state changes as [`SideEffect`] values. The
//! [`SideEffectProcessor`] folds a batch of them over a
//! [`PlayerState`](crate::core::PlayerState) using the
//! [`TransformerRegistry`].

pub mod effect;
pub mod processor;
pub mod transformers;

pub use effect::{kinds, SideEffect};
pub use processor::{ApplyReport, SideEffectProcessor};
pub use transformers::{StateTransformer, TransformContext, TransformerRegistry};
