//! Single-round play.
//!
//! `RoundEngine` runs the state machine
//! `Rolling -> Turn(player) -> { Turn(next) | Resolved(winner) }`.
//! Rule violations end the round in favor of the previous player; they are
//! outcomes, not errors.

mod engine;
mod outcome;

pub use engine::RoundEngine;
pub use outcome::{Forfeit, Resolution, RoundOutcome, RoundPhase};
