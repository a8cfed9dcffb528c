//! Player actions and the per-turn action log.

use serde::{Deserialize, Serialize};

use super::bid::Bid;
use super::player::PlayerId;

/// What a player does on their turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Raise with a new bid.
    Bid(Bid),
    /// Dispute the last bid.
    Challenge,
}

impl Action {
    /// Shorthand for a bid action from raw values.
    ///
    /// Returns `None` if `face` is not in `1..=6`.
    #[must_use]
    pub fn bid(quantity: u32, face: u8) -> Option<Self> {
        Bid::from_values(quantity, face).map(Action::Bid)
    }

    /// Check if this action is a challenge.
    #[must_use]
    pub fn is_challenge(&self) -> bool {
        matches!(self, Action::Challenge)
    }
}

impl From<Bid> for Action {
    fn from(bid: Bid) -> Self {
        Action::Bid(bid)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Bid(bid) => write!(f, "bid {bid}"),
            Action::Challenge => write!(f, "challenge"),
        }
    }
}

/// An action as it happened in a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who acted.
    pub player: PlayerId,

    /// The action returned by the player's policy.
    pub action: Action,

    /// Turn number, starting at 0 for the opening bid.
    pub turn: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: PlayerId, action: Action, turn: u32) -> Self {
        Self {
            player,
            action,
            turn,
        }
    }
}
