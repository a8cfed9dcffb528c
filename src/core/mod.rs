//! Core types: players, dice, bids, actions, RNG, configuration, errors.
//!
//! Everything here is policy-agnostic. The round engine in `round` and the
//! policies in `policy` are both built on these types.

pub mod player;
pub mod dice;
pub mod bid;
pub mod action;
pub mod rng;
pub mod config;
pub mod error;

pub use player::{PlayerId, PlayerMap};
pub use dice::{count_face, DiceSet, Face};
pub use bid::{is_legal_bid, Bid, History};
pub use action::{Action, ActionRecord};
pub use rng::{DiceSource, GameRng, GameRngState, LoadedDice};
pub use config::{RoundConfig, MAX_PLAYERS, MIN_PLAYERS};
pub use error::ConfigError;
