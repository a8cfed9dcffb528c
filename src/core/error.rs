//! Construction-time errors.
//!
//! Rule violations during play are round outcomes, not errors; see
//! `round::Resolution`.

use thiserror::Error;

use super::config::{MAX_PLAYERS, MIN_PLAYERS};

/// A round cannot be set up with the given policies and configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("a round needs at least {min} players, got {count}", min = MIN_PLAYERS)]
    TooFewPlayers { count: usize },

    #[error("a round seats at most {max} players, got {count}", max = MAX_PLAYERS)]
    TooManyPlayers { count: usize },

    #[error("each player must roll at least one die")]
    NoDice,
}
