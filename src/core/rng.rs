//! Injectable randomness for dice rolls.
//!
//! The engine never touches a global RNG. It rolls through a `DiceSource`
//! handed to it at construction:
//!
//! - [`GameRng`]: seeded ChaCha8 stream, deterministic and checkpointable.
//! - [`LoadedDice`]: replays a fixed face sequence, for tests and replays.
//!
//! ```
//! use liars_dice::core::{DiceSource, GameRng};
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! assert_eq!(a.roll_face(), b.roll_face());
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

use super::dice::Face;

/// Source of die faces for a round.
pub trait DiceSource {
    /// Roll one die.
    fn roll_face(&mut self) -> Face;

    /// Checkpoint of the source before any dice are rolled, if it has one.
    ///
    /// Recorded in round outcomes so a round can be replayed.
    fn checkpoint(&self) -> Option<GameRngState> {
        None
    }
}

/// Deterministic RNG for dice rolls and randomized policies.
///
/// Uses ChaCha8 for speed with good statistical quality. The same seed always
/// produces the same rolls.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Derive an RNG from a seed and an arbitrary hashable context.
    ///
    /// The same `(seed, context)` pair always yields the same stream. Policies
    /// use this to stay pure functions of what they observe.
    #[must_use]
    pub fn for_context(seed: u64, context: &impl Hash) -> Self {
        use std::collections::hash_map::DefaultHasher;

        let mut hasher = DefaultHasher::new();
        seed.hash(&mut hasher);
        context.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random u32 in the given inclusive range.
    pub fn gen_range(&mut self, range: std::ops::RangeInclusive<u32>) -> u32 {
        self.inner.gen_range(range)
    }

    /// Generate a random boolean with given probability of true.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability.clamp(0.0, 1.0))
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl DiceSource for GameRng {
    fn roll_face(&mut self) -> Face {
        let value = self.inner.gen_range(Face::MIN..=Face::MAX);
        Face::new(value).unwrap_or(Face::ONE)
    }

    fn checkpoint(&self) -> Option<GameRngState> {
        Some(self.state())
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses the ChaCha8 word position, so capture and restore are O(1) regardless
/// of how many dice have been rolled.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

/// Dice that come up in a fixed order.
///
/// Faces are handed out in sequence, wrapping around when exhausted. Rolling
/// a round with `N` players and `k` dice each consumes faces in seat order:
/// seat 0 gets the first `k`, seat 1 the next `k`, and so on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadedDice {
    faces: Vec<Face>,
    cursor: usize,
}

impl LoadedDice {
    /// Create loaded dice from a non-empty face sequence.
    #[must_use]
    pub fn new(faces: Vec<Face>) -> Self {
        assert!(!faces.is_empty(), "Loaded dice need at least one face");
        Self { faces, cursor: 0 }
    }

    /// Create loaded dice from raw values, or `None` if any value is not a face.
    #[must_use]
    pub fn from_values(values: &[u8]) -> Option<Self> {
        let faces = values
            .iter()
            .map(|&v| Face::new(v))
            .collect::<Option<Vec<_>>>()?;
        (!faces.is_empty()).then(|| Self::new(faces))
    }
}

impl DiceSource for LoadedDice {
    fn roll_face(&mut self) -> Face {
        let face = self.faces[self.cursor];
        self.cursor = (self.cursor + 1) % self.faces.len();
        face
    }
}
