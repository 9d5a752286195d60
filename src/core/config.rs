//! Game configuration types.
//!
//! - `RulesConfig`: Rule variants the engine consults on every transition
//! - `BotTiming`: Presentation delays attached to scheduled bot actions
//! - `GameConfig`: Combines all configuration for one game
//!
//! Defaults reproduce the classic house behavior: any number matches any
//! number, and an exhausted draw pile is never refilled.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// How number cards of different colors match each other.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NumberMatch {
    /// Any number card is playable on any number card.
    #[default]
    AnyNumber,
    /// A number card of another color must show the same value.
    SameValue,
}

/// Rule variants.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesConfig {
    pub number_match: NumberMatch,

    /// Refill an exhausted draw pile from the discard pile (all but the top).
    ///
    /// When false, forced draws transfer only what is left.
    pub reshuffle_discard: bool,
}

impl RulesConfig {
    #[must_use]
    pub fn with_number_match(mut self, number_match: NumberMatch) -> Self {
        self.number_match = number_match;
        self
    }

    #[must_use]
    pub fn with_reshuffle(mut self, reshuffle: bool) -> Self {
        self.reshuffle_discard = reshuffle;
        self
    }
}

/// Delays before scheduled bot actions fire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotTiming {
    /// Before a bot decides to play or draw.
    pub think_delay: Duration,
    /// Between a bot's draw and its follow-up play or pass.
    pub follow_up_delay: Duration,
}

impl Default for BotTiming {
    fn default() -> Self {
        Self {
            think_delay: Duration::from_millis(1500),
            follow_up_delay: Duration::from_millis(500),
        }
    }
}

impl BotTiming {
    /// No delays (tests, simulations).
    #[must_use]
    pub fn immediate() -> Self {
        Self {
            think_delay: Duration::ZERO,
            follow_up_delay: Duration::ZERO,
        }
    }
}

/// Complete game configuration.
///
/// ```
/// use rust_uno::core::{GameConfig, NumberMatch, RulesConfig};
///
/// let config = GameConfig::new()
///     .with_seed(7)
///     .with_rules(RulesConfig::default().with_number_match(NumberMatch::SameValue));
///
/// assert_eq!(config.hand_size, 7);
/// assert_eq!(config.seed, Some(7));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Cards dealt to each player.
    pub hand_size: usize,

    /// RNG seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,

    pub rules: RulesConfig,

    pub timing: BotTiming,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            hand_size: 7,
            seed: None,
            rules: RulesConfig::default(),
            timing: BotTiming::default(),
        }
    }
}

impl GameConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_hand_size(mut self, size: usize) -> Self {
        self.hand_size = size;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_rules(mut self, rules: RulesConfig) -> Self {
        self.rules = rules;
        self
    }

    #[must_use]
    pub fn with_timing(mut self, timing: BotTiming) -> Self {
        self.timing = timing;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.hand_size, 7);
        assert_eq!(config.seed, None);
        assert_eq!(config.rules.number_match, NumberMatch::AnyNumber);
        assert!(!config.rules.reshuffle_discard);
        assert_eq!(config.timing.think_delay, Duration::from_millis(1500));
        assert_eq!(config.timing.follow_up_delay, Duration::from_millis(500));
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::new()
            .with_hand_size(5)
            .with_seed(3)
            .with_rules(RulesConfig::default().with_reshuffle(true))
            .with_timing(BotTiming::immediate());

        assert_eq!(config.hand_size, 5);
        assert_eq!(config.seed, Some(3));
        assert!(config.rules.reshuffle_discard);
        assert_eq!(config.timing.think_delay, Duration::ZERO);
    }

    #[test]
    fn test_config_serialization() {
        let config = GameConfig::new().with_seed(11);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
