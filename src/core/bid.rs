//! Bids, the bid order, and the public bid history.
//!
//! Bids are ordered lexicographically by `(quantity, face)`: a higher
//! quantity always outranks, and at equal quantity the higher face does.
//! A bid may only be placed if it outranks the last one.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::dice::Face;

/// A claim that at least `quantity` dice on the table show `face`.
///
/// Field order matters: the derived `Ord` compares `quantity` first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Bid {
    pub quantity: u32,
    pub face: Face,
}

impl Bid {
    /// Create a new bid.
    #[must_use]
    pub const fn new(quantity: u32, face: Face) -> Self {
        Self { quantity, face }
    }

    /// Build a bid from a raw face value, or `None` if the face is out of range.
    #[must_use]
    pub fn from_values(quantity: u32, face: u8) -> Option<Self> {
        Face::new(face).map(|face| Self { quantity, face })
    }

    /// A bid is well-formed when it claims at least one die.
    #[must_use]
    pub const fn is_well_formed(&self) -> bool {
        self.quantity >= 1
    }
}

impl std::fmt::Display for Bid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} x {}", self.quantity, self.face)
    }
}

/// Check whether `new` may follow `last`.
///
/// Any bid may open the round. After that a bid must raise the quantity, or
/// keep it and raise the face.
///
/// ```
/// use liars_dice::core::{is_legal_bid, Bid};
///
/// let last = Bid::from_values(3, 4).unwrap();
/// assert!(is_legal_bid(&Bid::from_values(3, 5).unwrap(), Some(&last)));
/// assert!(is_legal_bid(&Bid::from_values(4, 1).unwrap(), Some(&last)));
/// assert!(!is_legal_bid(&Bid::from_values(3, 4).unwrap(), Some(&last)));
/// assert!(!is_legal_bid(&Bid::from_values(2, 6).unwrap(), Some(&last)));
/// ```
#[must_use]
pub fn is_legal_bid(new: &Bid, last: Option<&Bid>) -> bool {
    match last {
        None => true,
        Some(last) => {
            new.quantity > last.quantity
                || (new.quantity == last.quantity && new.face > last.face)
        }
    }
}

/// The public, append-only sequence of bids in a round.
///
/// Every player sees the same history. Backed by a persistent vector, so
/// cloning for a snapshot is O(1).
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct History {
    bids: Vector<Bid>,
}

impl History {
    /// Create an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent bid, if any.
    #[must_use]
    pub fn last(&self) -> Option<&Bid> {
        self.bids.last()
    }

    /// Number of bids placed so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bids.len()
    }

    /// Check if no bid has been placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bids.is_empty()
    }

    /// Get the bid at a position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Bid> {
        self.bids.get(index)
    }

    /// Iterate over bids, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Bid> {
        self.bids.iter()
    }

    /// Check that every bid outranks the one before it.
    #[must_use]
    pub fn is_strictly_increasing(&self) -> bool {
        self.bids
            .iter()
            .zip(self.bids.iter().skip(1))
            .all(|(prev, next)| next > prev)
    }

    /// Record a bid. Only the round engine appends, after checking legality.
    pub(crate) fn push(&mut self, bid: Bid) {
        self.bids.push_back(bid);
    }
}

impl FromIterator<Bid> for History {
    /// Collect bids into a history as given, without legality checks.
    ///
    /// Useful for presenting a hypothetical history to a policy.
    fn from_iter<I: IntoIterator<Item = Bid>>(iter: I) -> Self {
        Self {
            bids: iter.into_iter().collect(),
        }
    }
}
