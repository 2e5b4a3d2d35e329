//! Payment requirements.
//!
//! A [`CostRequest`] is an ordered list of [`Requirement`]s, each of which
//! must be matched by a distinct energy unit. A requirement is either an
//! exact color or a [`CostConstraint`] with three independent clauses:
//!
//! - `allowed_types`: non-empty means the unit's color must be listed;
//!   empty means any color
//! - `required_traits`: the unit must carry every listed trait
//! - `forbidden_traits`: the unit must carry none of the listed traits
//!
//! ```
//! use rust_tavern::energy::{cost, EnergyType, Requirement};
//!
//! // One red, then one red-or-blue
//! let request = cost([
//!     Requirement::exact(EnergyType::Red),
//!     Requirement::any_of([EnergyType::Red, EnergyType::Blue]),
//! ]);
//! assert_eq!(request.len(), 2);
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::unit::{EnergyTrait, EnergyType, EnergyUnit};

/// Ordered list of requirements.
pub type CostRequest = SmallVec<[Requirement; 4]>;

/// Constraint clauses on a single unit.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostConstraint {
    /// Allowed colors. Empty accepts any color.
    pub allowed_types: SmallVec<[EnergyType; 2]>,

    /// Traits the unit must all carry.
    pub required_traits: SmallVec<[EnergyTrait; 2]>,

    /// Traits the unit must not carry.
    pub forbidden_traits: SmallVec<[EnergyTrait; 2]>,
}

impl CostConstraint {
    /// A constraint accepting any unit.
    #[must_use]
    pub fn any() -> Self {
        Self::default()
    }

    /// Restrict colors (builder pattern).
    #[must_use]
    pub fn allow(mut self, kinds: impl IntoIterator<Item = EnergyType>) -> Self {
        self.allowed_types.extend(kinds);
        self
    }

    /// Require a trait (builder pattern).
    #[must_use]
    pub fn require(mut self, energy_trait: EnergyTrait) -> Self {
        self.required_traits.push(energy_trait);
        self
    }

    /// Forbid a trait (builder pattern).
    #[must_use]
    pub fn forbid(mut self, energy_trait: EnergyTrait) -> Self {
        self.forbidden_traits.push(energy_trait);
        self
    }

    /// Evaluate all three clauses against a unit.
    #[must_use]
    pub fn accepts(&self, unit: &EnergyUnit) -> bool {
        if !self.allowed_types.is_empty() && !self.allowed_types.contains(&unit.kind) {
            return false;
        }
        if !self.required_traits.iter().all(|&t| unit.has_trait(t)) {
            return false;
        }
        !self.forbidden_traits.iter().any(|&t| unit.has_trait(t))
    }
}

/// A single payment requirement.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Requirement {
    /// Exactly this color. Traits are ignored.
    Exact(EnergyType),

    /// Clause-based constraint.
    Constraint(CostConstraint),
}

impl Requirement {
    /// Exact-color requirement.
    pub fn exact(kind: EnergyType) -> Self {
        Self::Exact(kind)
    }

    /// One of several colors.
    pub fn any_of(kinds: impl IntoIterator<Item = EnergyType>) -> Self {
        Self::Constraint(CostConstraint::any().allow(kinds))
    }

    /// Any color at all.
    pub fn wildcard() -> Self {
        Self::Constraint(CostConstraint::any())
    }

    /// Does `unit` satisfy this requirement?
    #[must_use]
    pub fn matches(&self, unit: &EnergyUnit) -> bool {
        match self {
            Requirement::Exact(kind) => unit.kind == *kind,
            Requirement::Constraint(constraint) => constraint.accepts(unit),
        }
    }
}

impl From<EnergyType> for Requirement {
    fn from(kind: EnergyType) -> Self {
        Self::Exact(kind)
    }
}

impl From<CostConstraint> for Requirement {
    fn from(constraint: CostConstraint) -> Self {
        Self::Constraint(constraint)
    }
}

/// Build a cost request from anything convertible to requirements.
pub fn cost<R: Into<Requirement>>(requirements: impl IntoIterator<Item = R>) -> CostRequest {
    requirements.into_iter().map(Into::into).collect()
}

/// `count` exact requirements of one color.
pub fn simple_cost(kind: EnergyType, count: usize) -> CostRequest {
    (0..count).map(|_| Requirement::Exact(kind)).collect()
}

/// `count` requirements each accepting any of `kinds`.
pub fn simple_cost_any_of(kinds: &[EnergyType], count: usize) -> CostRequest {
    (0..count)
        .map(|_| Requirement::any_of(kinds.iter().copied()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::UnitId;

    fn unit(kind: EnergyType) -> EnergyUnit {
        EnergyUnit::new(UnitId::new(1), kind)
    }

    #[test]
    fn test_exact_ignores_traits() {
        let shiny = unit(EnergyType::Red).with_trait(EnergyTrait::Shiny);
        assert!(Requirement::exact(EnergyType::Red).matches(&shiny));
        assert!(!Requirement::exact(EnergyType::Blue).matches(&shiny));
    }

    #[test]
    fn test_empty_allowed_types_is_wildcard() {
        for kind in EnergyType::ALL {
            assert!(Requirement::wildcard().matches(&unit(kind)));
        }
    }

    #[test]
    fn test_allowed_types() {
        let req = Requirement::any_of([EnergyType::Red, EnergyType::Blue]);
        assert!(req.matches(&unit(EnergyType::Blue)));
        assert!(!req.matches(&unit(EnergyType::Green)));
    }

    #[test]
    fn test_required_and_forbidden_traits() {
        let req: Requirement = CostConstraint::any()
            .require(EnergyTrait::Shiny)
            .forbid(EnergyTrait::Ephemeral)
            .into();

        let plain = unit(EnergyType::White);
        let shiny = unit(EnergyType::White).with_trait(EnergyTrait::Shiny);
        let both = shiny.clone().with_trait(EnergyTrait::Ephemeral);

        assert!(!req.matches(&plain));
        assert!(req.matches(&shiny));
        assert!(!req.matches(&both));
    }

    #[test]
    fn test_cost_builders() {
        let request = cost([EnergyType::Red, EnergyType::White]);
        assert_eq!(
            request.as_slice(),
            &[Requirement::Exact(EnergyType::Red), Requirement::Exact(EnergyType::White)]
        );

        assert_eq!(simple_cost(EnergyType::White, 3).len(), 3);

        let mixed = simple_cost_any_of(&[EnergyType::Red, EnergyType::Green], 2);
        assert!(mixed.iter().all(|r| r.matches(&unit(EnergyType::Green))));
    }
}
