//! Cost solving: which units pay for a cost request.
//!
//! The solver walks the requirements in request order. For each one it
//! scans the ledger left to right, skipping units already committed to an
//! earlier requirement, and commits the first unit that matches. It then
//! recurses into the next requirement; when that fails, the commitment is
//! released and the scan continues with the next candidate.
//!
//! The result is deterministic first-match backtracking. Which units get
//! spent is observable (previews highlight them), so the search order is
//! part of the contract: [`LedgerSolver::used_indices`] always reports
//! exactly the positions [`LedgerSolver::solve`] would consume.
//!
//! ```
//! use rust_tavern::core::UnitId;
//! use rust_tavern::energy::{simple_cost, EnergyType, EnergyUnit, Ledger, LedgerSolver, SolveResult};
//!
//! let ledger: Ledger = (1..=3)
//!     .map(|i| EnergyUnit::new(UnitId::new(i), EnergyType::White))
//!     .collect();
//!
//! let result = LedgerSolver::solve(&simple_cost(EnergyType::White, 2), &ledger);
//! assert_eq!(result, SolveResult::Satisfied(vec![0, 1]));
//! ```

use super::ledger::Ledger;
use super::requirement::Requirement;
use super::unit::EnergyUnit;

/// Outcome of a solve.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SolveResult {
    /// Every requirement matched. Consumed ledger positions, ascending.
    Satisfied(Vec<usize>),

    /// No assignment exists.
    Unsatisfied,
}

impl SolveResult {
    /// Did the solve succeed?
    #[must_use]
    pub fn is_satisfied(&self) -> bool {
        matches!(self, SolveResult::Satisfied(_))
    }

    /// Consumed positions, if satisfied.
    #[must_use]
    pub fn into_indices(self) -> Option<Vec<usize>> {
        match self {
            SolveResult::Satisfied(indices) => Some(indices),
            SolveResult::Unsatisfied => None,
        }
    }
}

/// Outcome of actually paying a cost.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PaymentOutcome {
    /// Paid. `remaining` is the ledger with the consumed units removed.
    Paid {
        remaining: Ledger,
        consumed: Vec<EnergyUnit>,
    },

    /// Not enough matching units. The ledger is handed back unchanged.
    Insufficient { ledger: Ledger },
}

impl PaymentOutcome {
    /// Did the payment go through?
    #[must_use]
    pub fn is_paid(&self) -> bool {
        matches!(self, PaymentOutcome::Paid { .. })
    }

    /// The ledger after the attempt (remaining on success, original on failure).
    #[must_use]
    pub fn into_ledger(self) -> Ledger {
        match self {
            PaymentOutcome::Paid { remaining, .. } => remaining,
            PaymentOutcome::Insufficient { ledger } => ledger,
        }
    }
}

/// Matches cost requests against ledgers.
pub struct LedgerSolver;

impl LedgerSolver {
    /// Find the units that pay for `cost`.
    ///
    /// Never mutates `ledger`. An empty request is trivially satisfied.
    pub fn solve(cost: &[Requirement], ledger: &Ledger) -> SolveResult {
        let units: Vec<&EnergyUnit> = ledger.iter().collect();
        let mut committed = vec![false; units.len()];

        if Self::search(0, cost, &units, &mut committed) {
            let indices = committed
                .iter()
                .enumerate()
                .filter_map(|(i, &used)| used.then_some(i))
                .collect();
            SolveResult::Satisfied(indices)
        } else {
            SolveResult::Unsatisfied
        }
    }

    /// Preview the positions a [`solve`](Self::solve) would consume.
    pub fn used_indices(cost: &[Requirement], ledger: &Ledger) -> Option<Vec<usize>> {
        Self::solve(cost, ledger).into_indices()
    }

    /// Quick affordability check.
    pub fn can_pay(cost: &[Requirement], ledger: &Ledger) -> bool {
        Self::solve(cost, ledger).is_satisfied()
    }

    /// Pay `cost`, producing the remaining ledger.
    pub fn try_pay(cost: &[Requirement], ledger: &Ledger) -> PaymentOutcome {
        match Self::solve(cost, ledger) {
            SolveResult::Satisfied(indices) => {
                let consumed = indices
                    .iter()
                    .filter_map(|&i| ledger.get(i).cloned())
                    .collect();
                PaymentOutcome::Paid {
                    remaining: ledger.without_indices(&indices),
                    consumed,
                }
            }
            SolveResult::Unsatisfied => PaymentOutcome::Insufficient {
                ledger: ledger.clone(),
            },
        }
    }

    fn search(
        request_idx: usize,
        cost: &[Requirement],
        units: &[&EnergyUnit],
        committed: &mut [bool],
    ) -> bool {
        let Some(requirement) = cost.get(request_idx) else {
            return true;
        };

        for i in 0..units.len() {
            if committed[i] || !requirement.matches(units[i]) {
                continue;
            }

            committed[i] = true;
            if Self::search(request_idx + 1, cost, units, committed) {
                return true;
            }
            committed[i] = false;
        }

        false
    }
}
