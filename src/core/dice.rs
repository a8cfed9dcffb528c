//! Die faces and per-player dice sets.
//!
//! A `Face` is always in `1..=6`; there is no way to construct one outside
//! that range, so an out-of-range bid face cannot exist.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::PlayerMap;
use super::rng::DiceSource;

/// The value shown on one die.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Face(u8);

impl Face {
    /// Lowest face value.
    pub const MIN: u8 = 1;
    /// Highest face value.
    pub const MAX: u8 = 6;

    pub const ONE: Face = Face(1);
    pub const SIX: Face = Face(6);

    /// Create a face, or `None` if `value` is not in `1..=6`.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value >= Self::MIN && value <= Self::MAX {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Get the pip count.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// All six faces in ascending order.
    pub fn all() -> impl Iterator<Item = Face> {
        (Self::MIN..=Self::MAX).map(Face)
    }
}

impl TryFrom<u8> for Face {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Face::new(value).ok_or_else(|| format!("die face must be 1-6, got {value}"))
    }
}

impl From<Face> for u8 {
    fn from(face: Face) -> u8 {
        face.0
    }
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One player's dice for the round.
///
/// Rolled once at round start and never changed. Inline storage covers the
/// standard five dice without a heap allocation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiceSet {
    faces: SmallVec<[Face; 5]>,
}

impl DiceSet {
    /// Roll `count` dice from the given source.
    pub fn roll(source: &mut impl DiceSource, count: usize) -> Self {
        Self {
            faces: (0..count).map(|_| source.roll_face()).collect(),
        }
    }

    /// Build a dice set from known faces.
    #[must_use]
    pub fn from_faces(faces: &[Face]) -> Self {
        Self {
            faces: SmallVec::from_slice(faces),
        }
    }

    /// Build a dice set from raw values, or `None` if any value is not a face.
    #[must_use]
    pub fn from_values(values: &[u8]) -> Option<Self> {
        let faces = values
            .iter()
            .map(|&v| Face::new(v))
            .collect::<Option<SmallVec<[Face; 5]>>>()?;
        Some(Self { faces })
    }

    /// Number of dice in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    /// Check if the set holds no dice.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// The faces, in roll order.
    #[must_use]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Number of dice in this set showing `face`.
    #[must_use]
    pub fn count(&self, face: Face) -> u32 {
        self.faces.iter().filter(|&&f| f == face).count() as u32
    }
}

/// Total dice showing `face` across every player's set.
///
/// ```
/// use liars_dice::core::{count_face, DiceSet, Face, PlayerMap};
///
/// let sets = [
///     DiceSet::from_values(&[2, 2, 5, 6, 1]).unwrap(),
///     DiceSet::from_values(&[2, 3, 3, 2, 6]).unwrap(),
/// ];
/// let dice = PlayerMap::new(2, |p| sets[p.index()].clone());
/// assert_eq!(count_face(&dice, Face::new(2).unwrap()), 4);
/// ```
#[must_use]
pub fn count_face(dice: &PlayerMap<DiceSet>, face: Face) -> u32 {
    dice.values().map(|set| set.count(face)).sum()
}
