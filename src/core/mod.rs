//! Core types: identifiers, configuration, errors, and player state.

pub mod config;
pub mod error;
pub mod ids;
pub mod state;

pub use config::RulesConfig;
pub use error::{ConfigError, HandError, PaymentError, RegistryError};
pub use ids::{CardId, IdAllocator, TemplateId, UnitId};
pub use state::{PlayerState, Stats};
