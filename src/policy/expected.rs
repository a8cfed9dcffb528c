//! Expected-count policy.
//!
//! Treats every unseen die as showing any given face with probability 1/6,
//! so the expected number of dice showing `face` on the table is
//! `own count + unseen / 6`.

use crate::core::{Action, Bid, DiceSet, Face, History, RoundConfig};

use super::{minimal_raise, DecisionPolicy};

/// Challenges bids that overshoot the expected count, otherwise makes the
/// minimal raise with the most headroom.
#[derive(Clone, Debug)]
pub struct ExpectedValuePolicy {
    total_dice: u32,
    tolerance: f64,
}

impl ExpectedValuePolicy {
    /// Create a policy for a table with `total_dice` dice in play.
    pub fn new(total_dice: u32) -> Self {
        Self {
            total_dice,
            tolerance: 0.5,
        }
    }

    /// Create a policy sized for a round's configuration.
    pub fn for_round(config: &RoundConfig, player_count: usize) -> Self {
        Self::new(config.total_dice(player_count) as u32)
    }

    /// How far past the expectation a bid may go before it is challenged.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance.max(0.0);
        self
    }

    /// Expected number of dice showing `face`, from this player's view.
    #[must_use]
    pub fn expected_count(&self, my_dice: &DiceSet, face: Face) -> f64 {
        let unseen = self.total_dice.saturating_sub(my_dice.len() as u32);
        f64::from(my_dice.count(face)) + f64::from(unseen) / 6.0
    }

    fn headroom(&self, my_dice: &DiceSet, bid: &Bid) -> f64 {
        self.expected_count(my_dice, bid.face) - f64::from(bid.quantity)
    }
}

impl DecisionPolicy for ExpectedValuePolicy {
    fn choose_action(&self, my_dice: &DiceSet, history: &History) -> Action {
        let last = history.last();

        if let Some(last) = last {
            if self.headroom(my_dice, last) < -self.tolerance {
                return Action::Challenge;
            }
        }

        // Most headroom wins; on a tie the smaller bid does.
        let best = Face::all()
            .filter_map(|face| minimal_raise(last, face))
            .max_by(|a, b| {
                self.headroom(my_dice, a)
                    .total_cmp(&self.headroom(my_dice, b))
                    .then_with(|| b.cmp(a))
            });

        match best {
            Some(bid) if last.is_none() || self.headroom(my_dice, &bid) >= -self.tolerance => {
                Action::Bid(bid)
            }
            _ => Action::Challenge,
        }
    }

    fn name(&self) -> &str {
        "expected-value"
    }
}
