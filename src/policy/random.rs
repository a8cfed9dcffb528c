//! Random bidder.

use crate::core::{Action, DiceSet, Face, GameRng, History};

use super::{minimal_raise, DecisionPolicy};

/// Bids a random face, sometimes jumping the quantity, and challenges at a
/// fixed rate once there is something to challenge.
///
/// Challenges when the drawn face has no legal raise left.
///
/// The random stream is seeded from `(seed, my_dice, history)`, so the same
/// situation always produces the same action.
#[derive(Clone, Debug)]
pub struct RandomBidder {
    seed: u64,
    challenge_probability: f64,
    max_jump: u32,
}

impl RandomBidder {
    /// Create a random bidder with a 30% challenge rate and no quantity jumps.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            challenge_probability: 0.3,
            max_jump: 0,
        }
    }

    /// Set the probability of challenging when a bid exists.
    #[must_use]
    pub fn with_challenge_probability(mut self, probability: f64) -> Self {
        self.challenge_probability = probability.clamp(0.0, 1.0);
        self
    }

    /// Allow raising the quantity by up to `jump` beyond the minimum.
    #[must_use]
    pub fn with_max_jump(mut self, jump: u32) -> Self {
        self.max_jump = jump;
        self
    }
}

impl DecisionPolicy for RandomBidder {
    fn choose_action(&self, my_dice: &DiceSet, history: &History) -> Action {
        let mut rng = GameRng::for_context(self.seed, &(my_dice, history));

        if !history.is_empty() && rng.gen_bool(self.challenge_probability) {
            return Action::Challenge;
        }

        let face = Face::new(rng.gen_range(1..=6) as u8).unwrap_or(Face::ONE);
        let Some(mut bid) = minimal_raise(history.last(), face) else {
            return Action::Challenge;
        };
        bid.quantity = bid.quantity.saturating_add(rng.gen_range(0..=self.max_jump));
        Action::Bid(bid)
    }

    fn name(&self) -> &str {
        "random-bidder"
    }
}
