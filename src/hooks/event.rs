//! Lifecycle events.
//!
//! A lifecycle event is a named moment in the turn structure at which
//! capability handlers may run. The orchestrator decides when each event
//! fires; the core only dispatches.

use serde::{Deserialize, Serialize};

/// Every moment a handler can attach to.
///
/// Grouped by how the executor is expected to run them:
/// - checks (`CanAct`, `CanPayEnergy`) go through `check`
/// - modifiers (`ModifyDamage`, `ModifyCost`) go through `process_value`
/// - everything else goes through `trigger` / `trigger_batch`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LifecycleEvent {
    // === Checks ===
    CanAct,
    CanPayEnergy,

    // === Value modifiers ===
    ModifyDamage,
    ModifyCost,

    // === Turn structure ===
    TurnStart,
    TurnEnd,

    // === Player actions ===
    Buy,
    /// The card itself is being sold.
    Sell,
    /// Some other card in hand was sold.
    AnyCardSold,
    Refresh,
    TavernUpgrade,
    Lock,
    PayEnergy,
}

impl LifecycleEvent {
    /// All events, in declaration order.
    pub const ALL: [LifecycleEvent; 13] = [
        LifecycleEvent::CanAct,
        LifecycleEvent::CanPayEnergy,
        LifecycleEvent::ModifyDamage,
        LifecycleEvent::ModifyCost,
        LifecycleEvent::TurnStart,
        LifecycleEvent::TurnEnd,
        LifecycleEvent::Buy,
        LifecycleEvent::Sell,
        LifecycleEvent::AnyCardSold,
        LifecycleEvent::Refresh,
        LifecycleEvent::TavernUpgrade,
        LifecycleEvent::Lock,
        LifecycleEvent::PayEnergy,
    ];

    /// Stable upper-case name, used in logs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            LifecycleEvent::CanAct => "CAN_ACT",
            LifecycleEvent::CanPayEnergy => "CAN_PAY_ENERGY",
            LifecycleEvent::ModifyDamage => "MODIFY_DAMAGE",
            LifecycleEvent::ModifyCost => "MODIFY_COST",
            LifecycleEvent::TurnStart => "ON_TURN_START",
            LifecycleEvent::TurnEnd => "ON_TURN_END",
            LifecycleEvent::Buy => "ON_BUY",
            LifecycleEvent::Sell => "ON_SELL",
            LifecycleEvent::AnyCardSold => "ON_ANY_CARD_SOLD",
            LifecycleEvent::Refresh => "ON_REFRESH",
            LifecycleEvent::TavernUpgrade => "ON_TAVERN_UPGRADE",
            LifecycleEvent::Lock => "ON_LOCK",
            LifecycleEvent::PayEnergy => "ON_PAY_ENERGY",
        }
    }
}

impl std::fmt::Display for LifecycleEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<_> = LifecycleEvent::ALL.iter().map(|e| e.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), LifecycleEvent::ALL.len());
    }

    #[test]
    fn test_display() {
        assert_eq!(LifecycleEvent::TurnEnd.to_string(), "ON_TURN_END");
    }
}
