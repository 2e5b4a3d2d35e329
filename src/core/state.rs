//! Player state.
//!
//! [`PlayerState`] is the aggregate every side-effect rewrites: the energy
//! ledger and income, the hand, and the scalar progression fields.
//!
//! ## Value Semantics
//!
//! The ledger and hand are `im` persistent vectors, so cloning a state is
//! O(1). All state-changing helpers take `self` by value and return the
//! next state; callers keep the old value if they need it. Two call sites
//! never share and mutate one instance.
//!
//! ```
//! use rust_tavern::core::{PlayerState, RulesConfig};
//! use rust_tavern::energy::{simple_cost, EnergyType};
//!
//! let state = PlayerState::new(&RulesConfig::default())
//!     .grant_energy(EnergyType::White, 3);
//!
//! let after = state.clone().pay(&simple_cost(EnergyType::White, 2)).unwrap();
//! assert_eq!(after.ledger.len(), 1);
//! assert_eq!(state.ledger.len(), 3);
//! ```

use serde::{Deserialize, Serialize};

use super::config::RulesConfig;
use super::error::PaymentError;
use super::ids::{CardId, IdAllocator};
use crate::cards::{Card, CardTemplate, Hand};
use crate::energy::{
    EnergyConfig, EnergyType, EnergyUnit, Ledger, LedgerSolver, PaymentOutcome, Requirement,
    META_CREATED_TURN,
};

/// Scalar progression fields, grouped for stat transformers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub hp: i64,
    pub max_hp: i64,
    pub tavern_tier: u8,
    pub adventure_points: i64,
}

/// Everything the core knows about one player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    /// Energy currently held, oldest first.
    pub ledger: Ledger,

    /// Units granted at the start of every turn.
    pub income: Vec<EnergyConfig>,

    /// Card slots.
    pub hand: Hand,

    /// Current health.
    pub hp: i64,

    /// Health cap.
    pub max_hp: i64,

    /// Current tavern tier.
    pub tavern_tier: u8,

    /// Experience toward the next adventure.
    pub adventure_points: i64,

    /// How many of the newest units survive turn end.
    pub energy_retention: usize,

    /// Turn counter, starting at 1.
    pub turn: u32,

    /// Source of unit and card ids.
    pub ids: IdAllocator,
}

impl PlayerState {
    /// Create a fresh state for a session.
    #[must_use]
    pub fn new(config: &RulesConfig) -> Self {
        Self {
            ledger: Ledger::new(),
            income: Vec::new(),
            hand: Hand::new(config.hand_size),
            hp: config.starting_hp,
            max_hp: config.max_hp,
            tavern_tier: config.starting_tier,
            adventure_points: 0,
            energy_retention: config.energy_retention,
            turn: 1,
            ids: IdAllocator::new(),
        }
    }

    /// Set the income (builder pattern).
    #[must_use]
    pub fn with_income(mut self, income: Vec<EnergyConfig>) -> Self {
        self.income = income;
        self
    }

    /// Scalar fields as one value.
    #[must_use]
    pub fn stats(&self) -> Stats {
        Stats {
            hp: self.hp,
            max_hp: self.max_hp,
            tavern_tier: self.tavern_tier,
            adventure_points: self.adventure_points,
        }
    }

    // === Minting ===

    /// Mint a new unit stamped with the current turn.
    pub fn mint_unit(&mut self, config: &EnergyConfig) -> EnergyUnit {
        let id = self.ids.next_unit();
        EnergyUnit::from_config(id, config).with_meta(META_CREATED_TURN, i64::from(self.turn))
    }

    /// Mint `count` plain units of one color.
    pub fn mint_units(&mut self, kind: EnergyType, count: usize) -> Vec<EnergyUnit> {
        let config = EnergyConfig::new(kind);
        (0..count).map(|_| self.mint_unit(&config)).collect()
    }

    /// Mint a card instance from a template.
    pub fn mint_card(&mut self, template: &CardTemplate) -> Card {
        let id: CardId = self.ids.next_card();
        template.instantiate(id)
    }

    // === Domain helpers ===

    /// Rewrite the hand.
    #[must_use]
    pub fn map_hand(mut self, f: impl FnOnce(&mut Hand, &mut IdAllocator)) -> Self {
        f(&mut self.hand, &mut self.ids);
        self
    }

    /// Rewrite one card. A missing target leaves the state unchanged.
    #[must_use]
    pub fn map_card(mut self, id: CardId, f: impl FnOnce(&mut Card)) -> Self {
        self.hand.update(id, f);
        self
    }

    /// Rewrite the economy (ledger, income and the id source together).
    #[must_use]
    pub fn map_economy(
        mut self,
        f: impl FnOnce(&mut Ledger, &mut Vec<EnergyConfig>, &mut IdAllocator, u32),
    ) -> Self {
        f(&mut self.ledger, &mut self.income, &mut self.ids, self.turn);
        self
    }

    /// Rewrite the scalar stats.
    #[must_use]
    pub fn map_stats(mut self, f: impl FnOnce(Stats) -> Stats) -> Self {
        let next = f(self.stats());
        self.hp = next.hp;
        self.max_hp = next.max_hp;
        self.tavern_tier = next.tavern_tier;
        self.adventure_points = next.adventure_points;
        self
    }

    // === Economy ===

    /// Append `count` plain units of a color.
    #[must_use]
    pub fn grant_energy(mut self, kind: EnergyType, count: usize) -> Self {
        let units = self.mint_units(kind, count);
        self.ledger.extend(units);
        self
    }

    /// Instantiate the income into the ledger.
    #[must_use]
    pub fn collect_income(mut self) -> Self {
        let income = self.income.clone();
        for config in &income {
            let unit = self.mint_unit(config);
            self.ledger.push(unit);
        }
        self
    }

    /// Preview which ledger positions a payment would consume.
    #[must_use]
    pub fn preview_payment(&self, cost: &[Requirement]) -> Option<Vec<usize>> {
        LedgerSolver::used_indices(cost, &self.ledger)
    }

    /// Pay a cost from the ledger.
    pub fn pay(mut self, cost: &[Requirement]) -> Result<Self, PaymentError> {
        match LedgerSolver::try_pay(cost, &self.ledger) {
            PaymentOutcome::Paid { remaining, .. } => {
                self.ledger = remaining;
                Ok(self)
            }
            PaymentOutcome::Insufficient { ledger } => Err(PaymentError::Insufficient {
                requested: cost.len(),
                available: ledger.len(),
            }),
        }
    }

    /// Turn-end retention: keep only the `energy_retention` newest units.
    ///
    /// Ephemeral units are not special here; their own turn-end hook
    /// destroys them before retention runs.
    #[must_use]
    pub fn retain_energy(mut self) -> Self {
        self.ledger = self.ledger.retain_newest(self.energy_retention);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::UnitType;
    use crate::energy::{simple_cost, EnergyTrait};

    fn state() -> PlayerState {
        PlayerState::new(&RulesConfig::default())
    }

    #[test]
    fn test_new_from_config() {
        let config = RulesConfig::default().with_hand_size(5).with_starting_hp(12);
        let state = PlayerState::new(&config);

        assert_eq!(state.hand.capacity(), 5);
        assert_eq!(state.hp, 12);
        assert_eq!(state.tavern_tier, config.starting_tier);
        assert!(state.ledger.is_empty());
    }

    #[test]
    fn test_minted_ids_are_unique() {
        let state = state().grant_energy(EnergyType::White, 4);
        let mut ids: Vec<_> = state.ledger.iter().map(|u| u.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), 4);
        assert!(state
            .ledger
            .iter()
            .all(|u| u.meta(META_CREATED_TURN) == Some(1)));
    }

    #[test]
    fn test_pay_failure_reports_counts() {
        let state = state().grant_energy(EnergyType::White, 1);
        let err = state.pay(&simple_cost(EnergyType::White, 2)).unwrap_err();
        assert_eq!(err, PaymentError::Insufficient { requested: 2, available: 1 });
    }

    #[test]
    fn test_collect_income() {
        let state = state()
            .with_income(vec![
                EnergyConfig::new(EnergyType::White),
                EnergyConfig::new(EnergyType::Red).with_trait(EnergyTrait::Ephemeral),
            ])
            .collect_income();

        assert_eq!(state.ledger.len(), 2);
        assert!(state.ledger.get(1).is_some_and(|u| u.has_trait(EnergyTrait::Ephemeral)));
    }

    #[test]
    fn test_retain_energy_keeps_newest() {
        let mut state = state().grant_energy(EnergyType::White, 3);
        state.energy_retention = 2;
        let red = state.mint_unit(&EnergyConfig::new(EnergyType::Red));
        let red_id = red.id;
        state.ledger.push(red);

        let settled = state.retain_energy();
        assert_eq!(settled.ledger.len(), 2);
        assert_eq!(settled.ledger.get(1).map(|u| u.id), Some(red_id));
    }

    #[test]
    fn test_map_stats_and_card() {
        let mut state = state();
        let template = CardTemplate::new("c_test", "Test", UnitType::Melee);
        let card = state.mint_card(&template);
        let id = card.id;
        state.hand.place(card).unwrap();

        let state = state
            .map_card(id, |c| c.unit_count = 9)
            .map_stats(|s| Stats { hp: s.hp - 1, ..s });

        assert_eq!(state.hand.card(id).map(|c| c.unit_count), Some(9));
        assert_eq!(state.hp, RulesConfig::default().starting_hp - 1);
    }
}
