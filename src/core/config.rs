//! Rules configuration.
//!
//! The orchestrator configures the core at session start with a
//! [`RulesConfig`]. It fixes the hand size for the lifetime of the
//! session and provides the numeric limits the state transformers clamp
//! against (maximum health, tavern tier range).
//!
//! ```
//! use rust_tavern::core::RulesConfig;
//!
//! let config = RulesConfig::default()
//!     .with_hand_size(5)
//!     .with_max_hp(30);
//!
//! assert!(config.validate().is_ok());
//! assert_eq!(config.hand_size, 5);
//! ```

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Session-wide rules parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Number of hand slots. Fixed for the whole session.
    pub hand_size: usize,

    /// Health at the start of a session.
    pub starting_hp: i64,

    /// Upper bound for healing.
    pub max_hp: i64,

    /// How many of the newest energy units survive the end of a turn.
    pub energy_retention: usize,

    /// Tavern tier at the start of a session.
    pub starting_tier: u8,

    /// Highest reachable tavern tier.
    pub max_tier: u8,

    /// Most energy units or income entries a single effect may add.
    /// Larger amounts are rejected by the economy transformers.
    pub max_energy_per_effect: usize,
}

impl RulesConfig {
    /// Set the hand size.
    #[must_use]
    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Set the starting health.
    #[must_use]
    pub fn with_starting_hp(mut self, hp: i64) -> Self {
        self.starting_hp = hp;
        self
    }

    /// Set the health cap.
    #[must_use]
    pub fn with_max_hp(mut self, max_hp: i64) -> Self {
        self.max_hp = max_hp;
        self
    }

    /// Set the turn-end energy retention.
    #[must_use]
    pub fn with_energy_retention(mut self, retention: usize) -> Self {
        self.energy_retention = retention;
        self
    }

    /// Set the tier range.
    #[must_use]
    pub fn with_tiers(mut self, starting: u8, max: u8) -> Self {
        self.starting_tier = starting;
        self.max_tier = max;
        self
    }

    /// Set the per-effect energy cap.
    #[must_use]
    pub fn with_max_energy_per_effect(mut self, cap: usize) -> Self {
        self.max_energy_per_effect = cap;
        self
    }

    /// Check the configuration for inconsistent values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.hand_size == 0 {
            return Err(ConfigError::EmptyHand);
        }
        if self.max_hp <= 0 {
            return Err(ConfigError::NonPositiveMaxHp(self.max_hp));
        }
        if self.starting_hp <= 0 || self.starting_hp > self.max_hp {
            return Err(ConfigError::StartingHpOutOfRange {
                starting: self.starting_hp,
                max: self.max_hp,
            });
        }
        if self.starting_tier == 0 || self.starting_tier > self.max_tier {
            return Err(ConfigError::TierOutOfRange {
                starting: self.starting_tier,
                max: self.max_tier,
            });
        }
        Ok(())
    }
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            hand_size: 7,
            starting_hp: 40,
            max_hp: 50,
            energy_retention: 3,
            starting_tier: 1,
            max_tier: 6,
            max_energy_per_effect: 100,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(RulesConfig::default().validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = RulesConfig::default()
            .with_hand_size(4)
            .with_starting_hp(10)
            .with_max_hp(20)
            .with_energy_retention(0)
            .with_tiers(2, 3)
            .with_max_energy_per_effect(8);

        assert_eq!(config.hand_size, 4);
        assert_eq!(config.starting_hp, 10);
        assert_eq!(config.max_hp, 20);
        assert_eq!(config.energy_retention, 0);
        assert_eq!((config.starting_tier, config.max_tier), (2, 3));
        assert_eq!(config.max_energy_per_effect, 8);
    }

    #[test]
    fn test_validate_rejects_empty_hand() {
        let config = RulesConfig::default().with_hand_size(0);
        assert_eq!(config.validate(), Err(ConfigError::EmptyHand));
    }

    #[test]
    fn test_validate_rejects_starting_hp_above_cap() {
        let config = RulesConfig::default().with_starting_hp(60).with_max_hp(50);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::StartingHpOutOfRange { starting: 60, max: 50 })
        ));
    }

    #[test]
    fn test_validate_rejects_bad_tiers() {
        let config = RulesConfig::default().with_tiers(4, 3);
        assert!(matches!(config.validate(), Err(ConfigError::TierOutOfRange { .. })));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: RulesConfig = serde_json::from_str(r#"{"hand_size": 3}"#).unwrap();
        assert_eq!(config.hand_size, 3);
        assert_eq!(config.max_hp, RulesConfig::default().max_hp);
    }
}
