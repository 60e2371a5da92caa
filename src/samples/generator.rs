//! Deterministic generation of Luhn-valid sample numbers.
//!
//! Samples start with a prefix that digit-by-digit entry actually recognises
//! for the requested network, so feeding one into a `CardNumberEngine` ends
//! on that network with `Correct` validity.

use crate::core::rng::CardRng;
use crate::issuers::{CardNetwork, IssuerCatalog};
use crate::validation::luhn_check_digit;

/// Seeded sample number generator.
///
/// ```
/// use rust_cardnum::issuers::CardNetwork;
/// use rust_cardnum::samples::SampleGenerator;
/// use rust_cardnum::validation::luhn_check;
///
/// let mut generator = SampleGenerator::new(42);
/// let number = generator.generate(CardNetwork::Jcb).unwrap();
/// assert_eq!(number.len(), 16);
/// assert!(luhn_check(&number));
/// ```
#[derive(Clone, Debug)]
pub struct SampleGenerator<'c> {
    catalog: &'c IssuerCatalog,
    rng: CardRng,
}

impl SampleGenerator<'static> {
    /// Generator over the standard catalog.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_catalog(IssuerCatalog::standard(), seed)
    }
}

impl<'c> SampleGenerator<'c> {
    /// Generator over a caller-owned catalog.
    #[must_use]
    pub fn with_catalog(catalog: &'c IssuerCatalog, seed: u64) -> Self {
        Self {
            catalog,
            rng: CardRng::new(seed),
        }
    }

    /// Generate one number for `network`.
    ///
    /// Returns `None` when the network cannot be reached by entry at all
    /// (`Unidentified`, and Maestro, which has no row in the candidate
    /// table).
    pub fn generate(&mut self, network: CardNetwork) -> Option<String> {
        let prefixes = self.catalog.reachable_prefixes(network);
        let prefix = self.rng.choose(prefixes)?;
        let length = self.catalog.get(network).digit_length();

        let mut number = String::with_capacity(length);
        number.push_str(prefix);
        while number.len() + 1 < length {
            number.push(self.rng.digit().to_char());
        }

        let check = luhn_check_digit(&number)?;
        number.push(char::from(b'0' + check));
        Some(number)
    }

    /// Generate `count` numbers for `network`.
    pub fn generate_many(&mut self, network: CardNetwork, count: usize) -> Vec<String> {
        (0..count).filter_map(|_| self.generate(network)).collect()
    }
}
