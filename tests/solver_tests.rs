//! Ledger solver integration tests.
//!
//! Payment through the public API: solve, used_indices, try_pay and
//! `PlayerState::pay`, plus property tests over random ledgers.

use proptest::prelude::*;

use rust_tavern::core::{PaymentError, PlayerState, RulesConfig, UnitId};
use rust_tavern::energy::{
    cost, simple_cost, CostConstraint, EnergyTrait, EnergyType, EnergyUnit, Ledger, LedgerSolver,
    PaymentOutcome, Requirement, SolveResult,
};

fn ledger_of(kinds: &[EnergyType]) -> Ledger {
    kinds
        .iter()
        .enumerate()
        .map(|(i, &k)| EnergyUnit::new(UnitId::new(i as u64 + 1), k))
        .collect()
}

fn state() -> PlayerState {
    PlayerState::new(&RulesConfig::default())
}

/// Three white units pay two white requirements, leaving one.
#[test]
fn test_scenario_three_white_pay_two() {
    let state = state().grant_energy(EnergyType::White, 3);
    let request = simple_cost(EnergyType::White, 2);

    assert_eq!(state.preview_payment(&request), Some(vec![0, 1]));
    let after = state.pay(&request).unwrap();
    assert_eq!(after.ledger.len(), 1);
    assert_eq!(after.ledger.count_of(EnergyType::White), 1);
}

/// One white unit cannot pay two; the ledger is untouched.
#[test]
fn test_scenario_one_white_fails() {
    let state = state().grant_energy(EnergyType::White, 1);
    let request = simple_cost(EnergyType::White, 2);

    assert_eq!(LedgerSolver::solve(&request, &state.ledger), SolveResult::Unsatisfied);
    match LedgerSolver::try_pay(&request, &state.ledger) {
        PaymentOutcome::Insufficient { ledger } => assert_eq!(ledger, state.ledger),
        other => panic!("expected insufficient, got {other:?}"),
    }
    assert_eq!(
        state.pay(&request).unwrap_err(),
        PaymentError::Insufficient { requested: 2, available: 1 }
    );
}

/// A greedy first pick would strand the second requirement; backtracking
/// moves the wildcard off the only red unit.
#[test]
fn test_backtracking_reassigns_wildcard() {
    let ledger = ledger_of(&[EnergyType::Red, EnergyType::Blue]);
    let request = cost([Requirement::wildcard(), Requirement::exact(EnergyType::Red)]);

    match LedgerSolver::try_pay(&request, &ledger) {
        PaymentOutcome::Paid { remaining, consumed } => {
            assert!(remaining.is_empty());
            let ids: Vec<_> = consumed.iter().map(|u| u.id).collect();
            assert_eq!(ids, vec![UnitId::new(1), UnitId::new(2)]);
        }
        other => panic!("expected payment, got {other:?}"),
    }
}

#[test]
fn test_constraint_traits_enforced() {
    let ledger: Ledger = vec![
        EnergyUnit::new(UnitId::new(1), EnergyType::Green).with_trait(EnergyTrait::Ephemeral),
        EnergyUnit::new(UnitId::new(2), EnergyType::Black).with_trait(EnergyTrait::Shiny),
    ]
    .into_iter()
    .collect();

    let shiny = cost([CostConstraint::any().require(EnergyTrait::Shiny)]);
    assert_eq!(LedgerSolver::used_indices(&shiny, &ledger), Some(vec![1]));

    let no_ephemeral = cost([CostConstraint::any().forbid(EnergyTrait::Ephemeral)]);
    assert_eq!(LedgerSolver::used_indices(&no_ephemeral, &ledger), Some(vec![1]));

    let ephemeral_black = cost([CostConstraint::any()
        .allow([EnergyType::Black])
        .require(EnergyTrait::Ephemeral)]);
    assert!(!LedgerSolver::can_pay(&ephemeral_black, &ledger));
}

#[test]
fn test_empty_request_always_satisfied() {
    let ledger = Ledger::new();
    assert_eq!(LedgerSolver::used_indices(&[], &ledger), Some(vec![]));
}

fn kind_strategy() -> impl Strategy<Value = EnergyType> {
    prop::sample::select(EnergyType::ALL.to_vec())
}

proptest! {
    /// N exact requirements against at least N units of that color succeed
    /// and consume only that color.
    #[test]
    fn prop_exact_color_satisfied(
        others in prop::collection::vec(kind_strategy(), 0..12),
        extra in 0usize..4,
        n in 0usize..6,
        kind in kind_strategy(),
    ) {
        let mut kinds = others;
        kinds.extend(std::iter::repeat(kind).take(n + extra));
        let ledger = ledger_of(&kinds);

        let used = LedgerSolver::used_indices(&simple_cost(kind, n), &ledger);
        prop_assert!(used.is_some());
        let used = used.unwrap();
        prop_assert_eq!(used.len(), n);
        for i in used {
            prop_assert_eq!(ledger.get(i).map(|u| u.kind), Some(kind));
        }
    }

    /// Asking for more units than exist always fails.
    #[test]
    fn prop_oversized_request_fails(kinds in prop::collection::vec(kind_strategy(), 0..10)) {
        let ledger = ledger_of(&kinds);
        let request = cost(std::iter::repeat(Requirement::wildcard()).take(kinds.len() + 1));

        prop_assert!(!LedgerSolver::solve(&request, &ledger).is_satisfied());
        prop_assert!(LedgerSolver::used_indices(&request, &ledger).is_none());
    }

    /// Removing `used_indices` by hand matches the remaining ledger of `try_pay`.
    #[test]
    fn prop_used_indices_matches_try_pay(
        kinds in prop::collection::vec(kind_strategy(), 0..12),
        wanted in prop::collection::vec(kind_strategy(), 0..5),
    ) {
        let ledger = ledger_of(&kinds);
        let request = cost(wanted.iter().copied());

        match (LedgerSolver::used_indices(&request, &ledger), LedgerSolver::try_pay(&request, &ledger)) {
            (Some(indices), PaymentOutcome::Paid { remaining, consumed }) => {
                prop_assert_eq!(ledger.without_indices(&indices), remaining);
                prop_assert_eq!(consumed.len(), request.len());
            }
            (None, PaymentOutcome::Insufficient { ledger: back }) => prop_assert_eq!(back, ledger),
            (indices, outcome) => prop_assert!(false, "disagreement: {:?} vs {:?}", indices, outcome),
        }
    }

    /// An empty allowed set accepts every color.
    #[test]
    fn prop_empty_allowed_types_accepts_any(kind in kind_strategy()) {
        let ledger = ledger_of(&[kind]);
        let request = cost([CostConstraint::any()]);
        prop_assert_eq!(LedgerSolver::used_indices(&request, &ledger), Some(vec![0]));
    }

    /// The solver is deterministic.
    #[test]
    fn prop_solve_is_deterministic(
        kinds in prop::collection::vec(kind_strategy(), 0..10),
        wanted in prop::collection::vec(kind_strategy(), 0..4),
    ) {
        let ledger = ledger_of(&kinds);
        let request = cost(wanted.iter().copied());
        prop_assert_eq!(
            LedgerSolver::solve(&request, &ledger),
            LedgerSolver::solve(&request, &ledger)
        );
    }
}
