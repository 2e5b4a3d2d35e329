//! Card system: instances, templates, and the hand.
//!
//! ## Key Types
//!
//! - [`Card`]: a card instance; the entity most hooks run on
//! - [`UnitType`]: battlefield role, read by several traits
//! - [`CardTemplate`] / [`TemplateCatalog`]: static definitions and lookup
//! - [`Hand`]: fixed-capacity slot row holding the player's cards

pub mod card;
pub mod hand;
pub mod template;

pub use card::{Card, UnitType};
pub use hand::Hand;
pub use template::{CardTemplate, TemplateCatalog};
