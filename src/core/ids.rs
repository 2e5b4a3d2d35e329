//! Identifier types and allocation.
//!
//! Every energy unit and every card instance carries a unique id.
//! Ids are minted by the [`IdAllocator`] stored on the player state, so
//! state transformers stay pure: minting a unit is "old allocator in,
//! new allocator out" like every other state change.
//!
//! ## Usage
//!
//! ```
//! use rust_tavern::core::{IdAllocator, UnitId};
//!
//! let mut ids = IdAllocator::new();
//! let first = ids.next_unit();
//! let second = ids.next_unit();
//!
//! assert_eq!(first, UnitId::new(1));
//! assert_ne!(first, second);
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for an energy unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UnitId(pub u64);

impl UnitId {
    /// Create a new unit ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for UnitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unit({})", self.0)
    }
}

/// Unique identifier for a card instance.
///
/// Distinct from [`TemplateId`]: many instances can share one template.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Identifier of a card template (e.g. `c_militia`).
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TemplateId(pub String);

impl TemplateId {
    /// Create a new template ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw key.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TemplateId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl std::borrow::Borrow<str> for TemplateId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TemplateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Monotonic id source for units and cards.
///
/// Ids start at 1; zero is never handed out.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdAllocator {
    next_unit: u64,
    next_card: u32,
}

impl IdAllocator {
    /// Create a fresh allocator.
    #[must_use]
    pub fn new() -> Self {
        Self {
            next_unit: 1,
            next_card: 1,
        }
    }

    /// Allocate the next unit ID.
    pub fn next_unit(&mut self) -> UnitId {
        let id = UnitId(self.next_unit);
        self.next_unit += 1;
        id
    }

    /// Allocate the next card ID.
    pub fn next_card(&mut self) -> CardId {
        let id = CardId(self.next_card);
        self.next_card += 1;
        id
    }

    /// Number of unit IDs handed out so far.
    #[must_use]
    pub fn units_allocated(&self) -> u64 {
        self.next_unit - 1
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}
