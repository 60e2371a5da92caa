//! Deterministic random number generation for sample card numbers.
//!
//! The same seed always produces the same digits and choices, so generated
//! fixtures are reproducible across runs and platforms.
//!
//! ```
//! use rust_cardnum::core::CardRng;
//!
//! let mut a = CardRng::new(7);
//! let mut b = CardRng::new(7);
//! assert_eq!(a.digit(), b.digit());
//! ```

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::digit::Digit;

/// Seeded ChaCha8 source of digits and prefix choices.
#[derive(Clone, Debug)]
pub struct CardRng {
    inner: ChaCha8Rng,
}

impl CardRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Uniformly random decimal digit.
    pub fn digit(&mut self) -> Digit {
        let value = self.inner.gen_range(0..10u8);
        // gen_range(0..10) is always a valid digit
        Digit::new(value).unwrap_or_default()
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.inner)
    }
}
