//! Conservative challenger.

use crate::core::{Action, Bid, DiceSet, History};

use super::{most_common_face, DecisionPolicy};

/// Trusts only what it can see.
///
/// Opens with its most common face at the count it holds. Challenges any bid
/// claiming more than `own count + slack` of a face; otherwise raises the
/// quantity by one on the same face, or challenges if that would overflow.
#[derive(Clone, Debug)]
pub struct ConservativeChallenger {
    slack: u32,
}

impl ConservativeChallenger {
    /// Create a challenger that tolerates bids up to `slack` dice beyond
    /// what it holds.
    pub fn new(slack: u32) -> Self {
        Self { slack }
    }
}

impl Default for ConservativeChallenger {
    fn default() -> Self {
        Self::new(1)
    }
}

impl DecisionPolicy for ConservativeChallenger {
    fn choose_action(&self, my_dice: &DiceSet, history: &History) -> Action {
        let Some(last) = history.last() else {
            let face = most_common_face(my_dice);
            return Action::Bid(Bid::new(my_dice.count(face).max(1), face));
        };

        if last.quantity > my_dice.count(last.face).saturating_add(self.slack) {
            return Action::Challenge;
        }
        match last.quantity.checked_add(1) {
            Some(quantity) => Action::Bid(Bid::new(quantity, last.face)),
            None => Action::Challenge,
        }
    }

    fn name(&self) -> &str {
        "conservative"
    }
}
