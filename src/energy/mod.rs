//! Energy: the resource economy.
//!
//! - [`EnergyUnit`]: a typed, taggable token
//! - [`Ledger`]: the ordered pool of units a player holds
//! - [`Requirement`] / [`CostRequest`]: what a cost asks for
//! - [`LedgerSolver`]: decides whether a ledger can pay a cost, and with
//!   which units
//!
//! ## Design Philosophy
//!
//! Nothing in this module mutates a ledger in place from the caller's
//! point of view. Solving is a pure query; paying returns a new ledger.
//! "Not enough energy" is an ordinary result, never an error.

mod ledger;
mod requirement;
mod solver;
mod unit;

pub use ledger::Ledger;
pub use requirement::{cost, simple_cost, simple_cost_any_of, CostConstraint, CostRequest, Requirement};
pub use solver::{LedgerSolver, PaymentOutcome, SolveResult};
pub use unit::{EnergyConfig, EnergyTrait, EnergyType, EnergyUnit, TraitSet, META_CREATED_TURN};
