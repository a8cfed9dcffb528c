//! How a round ended.

use serde::{Deserialize, Serialize};

use crate::core::{
    ActionRecord, Bid, DiceSet, GameRngState, History, PlayerId, PlayerMap, RoundConfig,
};

/// Where the round is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Dice not yet rolled.
    Rolling,
    /// Waiting on this player's policy.
    Turn(PlayerId),
    /// Round over; this player won.
    Resolved(PlayerId),
}

/// Why a player forfeited the round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Forfeit {
    /// The bid did not outrank the last bid.
    IllegalBid { bid: Bid, last: Bid },
    /// The bid claimed zero dice.
    MalformedBid { bid: Bid },
    /// A challenge on the opening turn, with no bid to dispute.
    ChallengeWithoutBid,
    /// The bid claimed more dice than are on the table, with the cap enabled.
    ImplausibleBid { bid: Bid, total_dice: u32 },
}

/// The event that ended a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Resolution {
    /// A challenge was resolved by counting the dice.
    Challenge {
        challenger: PlayerId,
        bidder: PlayerId,
        bid: Bid,
        /// Dice on the table showing the bid's face.
        count: u32,
    },
    /// A player broke the rules; the player before them wins.
    Forfeit {
        offender: PlayerId,
        winner: PlayerId,
        reason: Forfeit,
    },
}

impl Resolution {
    /// The player who won the round.
    ///
    /// A truthful bid (enough dice on the table) means the challenger wins;
    /// a false bid means the bidder wins.
    #[must_use]
    pub fn winner(&self) -> PlayerId {
        match *self {
            Resolution::Challenge {
                challenger,
                bidder,
                bid,
                count,
            } => {
                if count >= bid.quantity {
                    challenger
                } else {
                    bidder
                }
            }
            Resolution::Forfeit { winner, .. } => winner,
        }
    }

    /// Check if the round ended by forfeit.
    #[must_use]
    pub fn is_forfeit(&self) -> bool {
        matches!(self, Resolution::Forfeit { .. })
    }
}

/// A complete record of one played round.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RoundOutcome {
    /// The winning player.
    pub winner: PlayerId,

    /// What ended the round.
    pub resolution: Resolution,

    /// Every player's dice.
    pub dice: PlayerMap<DiceSet>,

    /// All accepted bids.
    pub history: History,

    /// Every action returned by a policy, including the final one.
    pub actions: Vec<ActionRecord>,

    /// Policy name for each seat.
    pub policies: Vec<String>,

    /// Dice source state before rolling, if the source can be checkpointed.
    pub rng_checkpoint: Option<GameRngState>,

    /// Configuration the round was played under.
    pub config: RoundConfig,
}

impl RoundOutcome {
    /// Number of turns taken.
    pub fn turns(&self) -> usize {
        self.actions.len()
    }

    /// Number of players seated.
    pub fn player_count(&self) -> usize {
        self.dice.player_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bid(quantity: u32, face: u8) -> Bid {
        Bid::from_values(quantity, face).unwrap()
    }

    #[test]
    fn test_truthful_bid_challenger_wins() {
        let resolution = Resolution::Challenge {
            challenger: PlayerId::new(1),
            bidder: PlayerId::new(0),
            bid: bid(3, 2),
            count: 3,
        };
        assert_eq!(resolution.winner(), PlayerId::new(1));
        assert!(!resolution.is_forfeit());
    }

    #[test]
    fn test_false_bid_bidder_wins() {
        let resolution = Resolution::Challenge {
            challenger: PlayerId::new(1),
            bidder: PlayerId::new(0),
            bid: bid(3, 2),
            count: 2,
        };
        assert_eq!(resolution.winner(), PlayerId::new(0));
    }

    #[test]
    fn test_forfeit_winner() {
        let resolution = Resolution::Forfeit {
            offender: PlayerId::new(0),
            winner: PlayerId::new(2),
            reason: Forfeit::ChallengeWithoutBid,
        };
        assert_eq!(resolution.winner(), PlayerId::new(2));
        assert!(resolution.is_forfeit());
    }

    #[test]
    fn test_resolution_serialization() {
        let resolution = Resolution::Forfeit {
            offender: PlayerId::new(1),
            winner: PlayerId::new(0),
            reason: Forfeit::IllegalBid {
                bid: bid(2, 3),
                last: bid(2, 4),
            },
        };

        let json = serde_json::to_string(&resolution).unwrap();
        let deserialized: Resolution = serde_json::from_str(&json).unwrap();
        assert_eq!(resolution, deserialized);
    }
}
