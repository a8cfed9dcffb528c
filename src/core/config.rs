//! Round configuration.
//!
//! The engine is configured once at construction. `RoundConfig::default()`
//! is the standard round: five dice per player, no cap on bid quantity.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Most players a round can seat, bounded by `PlayerId`.
pub const MAX_PLAYERS: usize = u8::MAX as usize;

/// Fewest players a round can seat.
pub const MIN_PLAYERS: usize = 2;

/// Configuration for a single round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundConfig {
    /// Dice rolled by each player at round start.
    pub dice_per_player: usize,

    /// Treat a bid claiming more dice than are on the table as a forfeit.
    ///
    /// Off by default: such a bid is legal and simply loses to any challenge.
    pub cap_quantity: bool,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            dice_per_player: 5,
            cap_quantity: false,
        }
    }
}

impl RoundConfig {
    /// Create the standard configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set dice per player.
    #[must_use]
    pub fn with_dice_per_player(mut self, count: usize) -> Self {
        self.dice_per_player = count;
        self
    }

    /// Enable or disable the quantity cap.
    #[must_use]
    pub fn with_quantity_cap(mut self, enabled: bool) -> Self {
        self.cap_quantity = enabled;
        self
    }

    /// Total dice on the table for a given number of players.
    #[must_use]
    pub fn total_dice(&self, player_count: usize) -> usize {
        self.dice_per_player * player_count
    }

    /// Check this configuration against a player count.
    pub fn validate(&self, player_count: usize) -> Result<(), ConfigError> {
        if player_count < MIN_PLAYERS {
            return Err(ConfigError::TooFewPlayers { count: player_count });
        }
        if player_count > MAX_PLAYERS {
            return Err(ConfigError::TooManyPlayers { count: player_count });
        }
        if self.dice_per_player == 0 {
            return Err(ConfigError::NoDice);
        }
        Ok(())
    }
}
