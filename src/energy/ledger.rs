//! The energy ledger.
//!
//! An ordered pool of [`EnergyUnit`]s, oldest first. Backed by an
//! `im::Vector` so a ledger snapshot clones in O(1) and every mutation
//! produces a new ledger without disturbing the old one.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::unit::{EnergyTrait, EnergyType, EnergyUnit};
use crate::core::UnitId;

/// Ordered pool of energy units.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    units: Vector<EnergyUnit>,
}

impl Ledger {
    /// Create an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of units held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Check if the ledger is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Unit at a position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&EnergyUnit> {
        self.units.get(index)
    }

    /// Iterate units, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &EnergyUnit> {
        self.units.iter()
    }

    /// Position of a unit by id.
    #[must_use]
    pub fn position(&self, id: UnitId) -> Option<usize> {
        self.units.iter().position(|u| u.id == id)
    }

    /// Append a unit at the back (newest).
    pub fn push(&mut self, unit: EnergyUnit) {
        self.units.push_back(unit);
    }

    /// Append several units, preserving their order.
    pub fn extend(&mut self, units: impl IntoIterator<Item = EnergyUnit>) {
        self.units.extend(units);
    }

    /// Count units of a color.
    #[must_use]
    pub fn count_of(&self, kind: EnergyType) -> usize {
        self.units.iter().filter(|u| u.kind == kind).count()
    }

    /// A new ledger without the given positions.
    ///
    /// Out-of-range positions are ignored.
    #[must_use]
    pub fn without_indices(&self, indices: &[usize]) -> Ledger {
        let units = self
            .units
            .iter()
            .enumerate()
            .filter(|(i, _)| !indices.contains(i))
            .map(|(_, u)| u.clone())
            .collect();
        Ledger { units }
    }

    /// A new ledger without the unit with the given id.
    #[must_use]
    pub fn without_unit(&self, id: UnitId) -> Ledger {
        match self.position(id) {
            Some(index) => {
                let mut units = self.units.clone();
                units.remove(index);
                Ledger { units }
            }
            None => self.clone(),
        }
    }

    /// A new ledger keeping only the `count` newest units.
    #[must_use]
    pub fn retain_newest(&self, count: usize) -> Ledger {
        let len = self.units.len();
        if count >= len {
            return self.clone();
        }
        Ledger {
            units: self.units.clone().slice(len - count..),
        }
    }

    /// A new ledger with every unit carrying `energy_trait` removed.
    #[must_use]
    pub fn without_trait(&self, energy_trait: EnergyTrait) -> Ledger {
        let units = self
            .units
            .iter()
            .filter(|u| !u.has_trait(energy_trait))
            .cloned()
            .collect();
        Ledger { units }
    }
}

impl FromIterator<EnergyUnit> for Ledger {
    fn from_iter<I: IntoIterator<Item = EnergyUnit>>(iter: I) -> Self {
        Ledger {
            units: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Ledger {
    type Item = &'a EnergyUnit;
    type IntoIter = im::vector::Iter<'a, EnergyUnit>;

    fn into_iter(self) -> Self::IntoIter {
        self.units.iter()
    }
}
