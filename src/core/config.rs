//! Game configuration.
//!
//! A `GameConfig` is fixed when the game is created and travels inside the
//! game snapshot, so every later operation sees the same rules:
//!
//! - hand size and the player range
//! - the full-hand bonus
//! - whether an isolated placement is legal
//! - the tile distribution and the board layout
//!
//! ## Usage
//!
//! ```
//! use rust_mathable::core::GameConfig;
//!
//! let config = GameConfig::standard()
//!     .with_hand_size(5)
//!     .with_require_equation(true);
//!
//! assert!(config.validate().is_ok());
//! assert_eq!(config.hand_size, 5);
//! assert_eq!(config.tile_count(), 109);
//! ```

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::board::BoardLayout;

/// Standard tile distribution as `(value, count)` pairs.
pub const STANDARD_DISTRIBUTION: &[(i32, u32)] = &[
    (0, 1),
    (1, 7),
    (2, 7),
    (3, 7),
    (4, 7),
    (5, 7),
    (6, 7),
    (7, 7),
    (8, 7),
    (9, 7),
    (10, 7),
    (11, 1),
    (12, 2),
    (13, 1),
    (14, 1),
    (15, 1),
    (16, 1),
    (17, 1),
    (18, 1),
    (19, 1),
    (20, 1),
    (21, 1),
    (24, 2),
    (25, 1),
    (27, 1),
    (28, 1),
    (30, 1),
    (32, 1),
    (35, 1),
    (36, 2),
    (40, 1),
    (42, 1),
    (45, 1),
    (48, 1),
    (49, 1),
    (50, 1),
    (54, 1),
    (56, 1),
    (60, 1),
    (63, 1),
    (64, 1),
    (70, 1),
    (72, 1),
    (80, 1),
    (81, 1),
    (90, 1),
];

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Tiles a hand is dealt and refilled to.
    pub hand_size: usize,

    /// Players required before the owner may start.
    pub min_players: usize,

    /// Join limit.
    pub max_players: usize,

    /// Points for placing every tile held at turn start.
    pub full_hand_bonus: i64,

    /// Reject placements that complete no equation.
    pub require_equation: bool,

    /// `(value, count)` pairs making up the tile set.
    pub distribution: Vec<(i32, u32)>,

    /// Board description.
    pub layout: BoardLayout,
}

impl GameConfig {
    /// The published rules: 7-tile hands, 2 to 4 players, the standard
    /// distribution and the 14×14 board.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            hand_size: 7,
            min_players: 2,
            max_players: 4,
            full_hand_bonus: 50,
            require_equation: false,
            distribution: STANDARD_DISTRIBUTION.to_vec(),
            layout: BoardLayout::standard(),
        }
    }

    /// Set the hand size.
    #[must_use]
    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Set the allowed player range.
    #[must_use]
    pub fn with_players(mut self, min: usize, max: usize) -> Self {
        self.min_players = min;
        self.max_players = max;
        self
    }

    /// Set the full-hand bonus.
    #[must_use]
    pub fn with_full_hand_bonus(mut self, bonus: i64) -> Self {
        self.full_hand_bonus = bonus;
        self
    }

    /// Require every placement to complete an equation.
    #[must_use]
    pub fn with_require_equation(mut self, require: bool) -> Self {
        self.require_equation = require;
        self
    }

    /// Replace the tile distribution.
    #[must_use]
    pub fn with_distribution(mut self, distribution: impl IntoIterator<Item = (i32, u32)>) -> Self {
        self.distribution = distribution.into_iter().collect();
        self
    }

    /// Replace the board layout.
    #[must_use]
    pub fn with_layout(mut self, layout: BoardLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Total number of tiles in the distribution.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.distribution.iter().map(|&(_, count)| count as usize).sum()
    }

    /// Check the configuration is playable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.hand_size == 0 {
            return Err(ConfigError::ZeroHandSize);
        }
        if self.min_players < 2 {
            return Err(ConfigError::TooFewPlayers(self.min_players));
        }
        if self.max_players < self.min_players || self.max_players > usize::from(u8::MAX) {
            return Err(ConfigError::PlayerRange {
                min: self.min_players,
                max: self.max_players,
            });
        }
        if self.tile_count() == 0 {
            return Err(ConfigError::EmptyDistribution);
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_config() {
        let config = GameConfig::standard();

        assert_eq!(config.hand_size, 7);
        assert_eq!(config.min_players, 2);
        assert_eq!(config.max_players, 4);
        assert_eq!(config.full_hand_bonus, 50);
        assert!(!config.require_equation);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_standard_distribution() {
        let config = GameConfig::standard();
        let count_of = |value: i32| {
            config
                .distribution
                .iter()
                .find(|&&(v, _)| v == value)
                .map_or(0, |&(_, n)| n)
        };

        assert_eq!(config.tile_count(), 109);
        assert_eq!(count_of(0), 1);
        assert_eq!(count_of(7), 7);
        assert_eq!(count_of(12), 2);
        assert_eq!(count_of(36), 2);
        assert_eq!(count_of(90), 1);
        assert_eq!(count_of(22), 0);
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::standard()
            .with_hand_size(3)
            .with_players(2, 2)
            .with_full_hand_bonus(10)
            .with_distribution([(1, 4), (2, 4)]);

        assert_eq!(config.hand_size, 3);
        assert_eq!(config.max_players, 2);
        assert_eq!(config.full_hand_bonus, 10);
        assert_eq!(config.tile_count(), 8);
    }

    #[test]
    fn test_validate() {
        let base = GameConfig::standard();

        assert_eq!(
            base.clone().with_hand_size(0).validate(),
            Err(ConfigError::ZeroHandSize)
        );
        assert_eq!(
            base.clone().with_players(1, 4).validate(),
            Err(ConfigError::TooFewPlayers(1))
        );
        assert_eq!(
            base.clone().with_players(3, 2).validate(),
            Err(ConfigError::PlayerRange { min: 3, max: 2 })
        );
        assert_eq!(
            base.with_distribution([(5, 0)]).validate(),
            Err(ConfigError::EmptyDistribution)
        );
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::standard().with_hand_size(4);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
