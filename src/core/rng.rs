//! Deterministic random number generation for deck shuffles.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces the identical shuffle
//! - **Injectable**: Tests pick a seed, or bypass the RNG by passing an
//!   explicit shuffle to `Board::deal`
//!
//! ```
//! use klondike_engine::core::GameRng;
//!
//! let a = GameRng::new(42).shuffled_deck();
//! let b = GameRng::new(42).shuffled_deck();
//! assert_eq!(a, b);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::card::CardId;

/// Deterministic RNG used to shuffle new games.
///
/// Uses ChaCha8 for speed while keeping shuffles reproducible across
/// platforms.
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

    /// Create an RNG seeded from the thread-local entropy source.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// Seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }

    /// A freshly shuffled 52-card deck.
    #[must_use]
    pub fn shuffled_deck(&mut self) -> Vec<CardId> {
        let mut deck = CardId::deck();
        self.shuffle(&mut deck);
        deck
    }
}
