//! Deterministic random number generation for puzzle generation.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces the identical grid
//! - **Forkable**: Derive independent streams for regenerated puzzles
//! - **Context streams**: Independent sequences for placement and fill
//! - **Serializable**: O(1) state capture and restore
//!
//! ```
//! use word_puzzles::core::PuzzleRng;
//!
//! let mut rng = PuzzleRng::new(42);
//! let mut again = PuzzleRng::new(42);
//! assert_eq!(rng.gen_index(14), again.gen_index(14));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHasher;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Seedable RNG injected into grid generation.
///
/// Uses ChaCha8 so a seed yields the same sequence on every platform.
#[derive(Clone, Debug)]
pub struct PuzzleRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl PuzzleRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Seed from the operating system, for non-reproducible play.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// The seed this stream was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// Create an independent stream for a named context.
    ///
    /// The same context always yields the same stream for the same seed, and
    /// drawing from it leaves this RNG untouched.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        let mut hasher = FxHasher::default();
        self.seed.hash(&mut hasher);
        self.fork_counter.hash(&mut hasher);
        context.hash(&mut hasher);
        let context_seed = hasher.finish();

        Self {
            inner: ChaCha8Rng::seed_from_u64(context_seed),
            seed: context_seed,
            fork_counter: 0,
        }
    }

    /// Uniform index in `0..bound`. `bound` must be non-zero.
    pub fn gen_index(&mut self, bound: usize) -> usize {
        self.inner.gen_range(0..bound)
    }

    /// Generate a random boolean with given probability of true.
    ///
    /// `probability` is clamped to `0.0..=1.0`.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability.clamp(0.0, 1.0))
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> PuzzleRngState {
        PuzzleRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            fork_counter: self.fork_counter,
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &PuzzleRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
            fork_counter: state.fork_counter,
        }
    }
}

/// Serializable RNG state for replaying a generation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
    /// Fork counter for deterministic branching
    pub fork_counter: u64,
}
