//! # liars-dice
//!
//! A single-round Liar's Dice engine with pluggable decision policies.
//!
//! ## Design Principles
//!
//! 1. **N-Player First**: Any number of players from 2 to 255. Turn order is
//!    strictly cyclic from seat 0.
//!
//! 2. **Policies Are Pure**: A policy sees only its own dice and the public
//!    bid history, and cannot mutate itself while choosing.
//!
//! 3. **Injected Randomness**: Dice come from a `DiceSource` handed to the
//!    engine. Seeded rounds are fully reproducible.
//!
//! 4. **Rule Violations Are Outcomes**: An illegal bid, a zero-quantity bid,
//!    or an opening challenge forfeits the round to the previous player.
//!    Only construction can fail.
//!
//! ## Modules
//!
//! - `core`: Players, dice, bids, history, actions, RNG, configuration
//! - `policy`: The `DecisionPolicy` contract and built-in policies
//! - `round`: The round engine and round outcomes

pub mod core;
pub mod policy;
pub mod round;

// Re-export commonly used types
pub use crate::core::{
    count_face, is_legal_bid,
    PlayerId, PlayerMap,
    Face, DiceSet, Bid, History,
    Action, ActionRecord,
    DiceSource, GameRng, GameRngState, LoadedDice,
    RoundConfig, ConfigError,
};

pub use crate::policy::{
    DecisionPolicy,
    RandomBidder, ExpectedValuePolicy, ConservativeChallenger,
};

pub use crate::round::{RoundEngine, RoundOutcome, RoundPhase, Resolution, Forfeit};
