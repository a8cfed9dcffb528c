//! Decision policies: how a player picks an action.
//!
//! A policy sees only its own dice and the public bid history. It returns a
//! raise or a challenge; the engine decides whether that action is legal.
//!
//! Policies take `&self` and must be pure functions of what they are shown.
//! Randomized policies derive their randomness from their inputs (see
//! [`RandomBidder`]).
//!
//! Any `Fn(&DiceSet, &History) -> Action` is also a policy:
//!
//! ```
//! use liars_dice::core::{Action, DiceSet, History};
//! use liars_dice::policy::DecisionPolicy;
//!
//! let always_call = |_: &DiceSet, _: &History| Action::Challenge;
//! let dice = DiceSet::from_values(&[1, 2, 3]).unwrap();
//! assert_eq!(always_call.choose_action(&dice, &History::new()), Action::Challenge);
//! ```

mod conservative;
mod expected;
mod random;

pub use conservative::ConservativeChallenger;
pub use expected::ExpectedValuePolicy;
pub use random::RandomBidder;

use crate::core::{Action, Bid, DiceSet, Face, History};

// =============================================================================
// Policy Contract
// =============================================================================

/// Decision logic for one seat.
pub trait DecisionPolicy: Send + Sync {
    /// Choose an action given this player's dice and the bids so far.
    ///
    /// `history` is empty only on the opening turn, where a challenge
    /// forfeits the round.
    fn choose_action(&self, my_dice: &DiceSet, history: &History) -> Action;

    /// Short name for logs.
    fn name(&self) -> &str {
        "anonymous"
    }
}

impl<F> DecisionPolicy for F
where
    F: Fn(&DiceSet, &History) -> Action + Send + Sync,
{
    fn choose_action(&self, my_dice: &DiceSet, history: &History) -> Action {
        self(my_dice, history)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// The lowest legal bid on `face` that follows `last`.
///
/// `None` when no such bid exists, because raising the quantity would
/// overflow.
///
/// ```
/// use liars_dice::core::{Bid, Face};
/// use liars_dice::policy::minimal_raise;
///
/// let four = Face::new(4).unwrap();
/// let last = Bid::from_values(3, 2).unwrap();
/// assert_eq!(minimal_raise(Some(&last), four), Some(Bid::new(3, four)));
/// assert_eq!(minimal_raise(Some(&last), Face::ONE), Some(Bid::new(4, Face::ONE)));
/// assert_eq!(minimal_raise(None, four), Some(Bid::new(1, four)));
///
/// let top = Bid::new(u32::MAX, Face::SIX);
/// assert_eq!(minimal_raise(Some(&top), four), None);
/// ```
#[must_use]
pub fn minimal_raise(last: Option<&Bid>, face: Face) -> Option<Bid> {
    match last {
        None => Some(Bid::new(1, face)),
        Some(last) if face > last.face => Some(Bid::new(last.quantity, face)),
        Some(last) => last.quantity.checked_add(1).map(|quantity| Bid::new(quantity, face)),
    }
}

/// The face this player holds most of. Ties go to the higher face.
#[must_use]
pub fn most_common_face(dice: &DiceSet) -> Face {
    Face::all()
        .max_by_key(|&face| (dice.count(face), face))
        .unwrap_or(Face::SIX)
}
