//! Incremental card-number recognizer.
//!
//! One `CardNumberEngine` lives for one input session. Every keystroke is a
//! [`CardEdit`]; the engine updates its buffer, re-derives the network and
//! reports an [`EngineResult`].
//!
//! ## Recognition
//!
//! While the network is `Unidentified`, each insertion looks up the digits
//! typed so far in the catalog's candidate table. Once identified, the
//! network only changes on deletion: if none of its prefixes still matches
//! the remaining digits (see [`PrefixMatch`](crate::core::PrefixMatch)) it falls back to
//! `Unidentified`. Either switch re-lays the mask without moving entered
//! digits.
//!
//! ## Validity
//!
//! An insertion that fills the last digit slot runs the Luhn check. Every
//! other edit, deletions included, reports `NotIdentified`.

use super::buffer::CardBuffer;
use super::observer::EngineObserver;
use super::state::{CardEdit, CardValidity, EngineResult};
use crate::core::config::EngineConfig;
use crate::core::digit::{parse_digits, Digit};
use crate::core::error::CardError;
use crate::issuers::{CardNetwork, IssuerCatalog, IssuerDefinition};
use crate::validation::luhn_check;

/// Stateful recognizer and validator for one card number entry.
///
/// ## Example
///
/// ```
/// use rust_cardnum::engine::{CardNumberEngine, CardValidity};
/// use rust_cardnum::issuers::CardNetwork;
///
/// let mut engine = CardNumberEngine::new();
/// let result = engine.insert_str("5105105105105100").unwrap();
///
/// assert_eq!(result.network, CardNetwork::MasterCard);
/// assert_eq!(result.validity, CardValidity::Correct);
/// assert_eq!(engine.display_text(), "5105 1051 0510 5100");
/// ```
#[derive(Clone, Debug)]
pub struct CardNumberEngine<'c> {
    catalog: &'c IssuerCatalog,
    config: EngineConfig,
    buffer: CardBuffer,
    network: CardNetwork,
    validity: CardValidity,
}

impl CardNumberEngine<'static> {
    /// Engine over the standard catalog with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Engine over the standard catalog.
    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self::with_catalog(IssuerCatalog::standard(), config)
    }
}

impl Default for CardNumberEngine<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'c> CardNumberEngine<'c> {
    /// Engine over a caller-owned catalog.
    #[must_use]
    pub fn with_catalog(catalog: &'c IssuerCatalog, config: EngineConfig) -> Self {
        Self {
            catalog,
            config,
            buffer: CardBuffer::new(CardNetwork::Unidentified.mask()),
            network: CardNetwork::Unidentified,
            validity: CardValidity::NotIdentified,
        }
    }

    // === Events ===

    /// Append a digit.
    ///
    /// A full buffer is left untouched and the current state returned.
    pub fn insert_digit(&mut self, digit: Digit) -> EngineResult {
        self.apply(CardEdit::Insert(digit))
    }

    /// Remove the last digit.
    ///
    /// An empty buffer is left untouched and the current state returned.
    pub fn delete_last_digit(&mut self) -> EngineResult {
        self.apply(CardEdit::Delete)
    }

    /// Apply one edit.
    pub fn apply(&mut self, edit: CardEdit) -> EngineResult {
        self.apply_observed(edit, &mut ())
    }

    /// Apply one edit, notifying `observer` of what changed.
    pub fn apply_observed(
        &mut self,
        edit: CardEdit,
        observer: &mut dyn EngineObserver,
    ) -> EngineResult {
        let before = self.network;

        let applied = match edit {
            CardEdit::Insert(digit) => self.insert(digit),
            CardEdit::Delete => self.delete(),
        };

        if applied {
            if self.network != before {
                observer.network_changed(self.definition());
            }
            observer.state_reported(self.validity);
        }

        self.result()
    }

    /// Append a character, rejecting anything but a decimal digit.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::NotADigit`]; the engine is unchanged.
    pub fn insert_char(&mut self, c: char) -> Result<EngineResult, CardError> {
        let digit = Digit::try_from(c)?;
        Ok(self.insert_digit(digit))
    }

    /// Append every digit of `input`, ignoring spaces.
    ///
    /// Input is checked in full before any digit is applied.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::NotADigit`] for the first invalid character; the
    /// engine is unchanged.
    pub fn insert_str(&mut self, input: &str) -> Result<EngineResult, CardError> {
        let digits = parse_digits(input)?;
        let mut result = self.result();
        for digit in digits {
            result = self.insert_digit(digit);
        }
        Ok(result)
    }

    /// Start a fresh session.
    pub fn reset(&mut self) {
        self.buffer = CardBuffer::new(CardNetwork::Unidentified.mask());
        self.network = CardNetwork::Unidentified;
        self.validity = CardValidity::NotIdentified;
    }

    fn insert(&mut self, digit: Digit) -> bool {
        if !self.buffer.push(digit) {
            return false;
        }

        if !self.network.is_identified() {
            let leading = self.buffer.leading_digits();
            let found = self.catalog.identify(&leading);
            if found.is_identified() {
                self.switch_to(found);
            }
        }

        self.validity = if self.buffer.filled_count() == self.definition().digit_length() {
            if luhn_check(&self.buffer.leading_digits()) {
                CardValidity::Correct
            } else {
                CardValidity::Wrong
            }
        } else {
            CardValidity::NotIdentified
        };

        #[cfg(feature = "telemetry")]
        self.trace_completion();

        true
    }

    #[cfg(feature = "telemetry")]
    fn trace_completion(&self) {
        if self.validity != CardValidity::NotIdentified {
            tracing::debug!(
                network = %self.network,
                validity = ?self.validity,
                "card number complete"
            );
        }
    }

    fn delete(&mut self) -> bool {
        if self.buffer.pop().is_none() {
            return false;
        }

        if self.network.is_identified() {
            let leading = self.buffer.leading_digits();
            if !self.still_matches(&leading) {
                self.switch_to(CardNetwork::Unidentified);
            }
        }

        self.validity = CardValidity::NotIdentified;
        true
    }

    fn still_matches(&self, leading: &str) -> bool {
        self.definition()
            .prefixes
            .any_matches(leading, self.config.prefix_match)
    }

    fn switch_to(&mut self, network: CardNetwork) {
        #[cfg(feature = "telemetry")]
        tracing::debug!(from = %self.network, to = %network, "card network changed");

        self.network = network;
        self.buffer.relayout(network.mask());
    }

    // === Queries ===

    /// Network and validity as of the last edit.
    #[must_use]
    pub fn result(&self) -> EngineResult {
        EngineResult {
            network: self.network,
            validity: self.validity,
        }
    }

    /// Identified network.
    #[must_use]
    pub fn network(&self) -> CardNetwork {
        self.network
    }

    /// Catalog entry for the identified network.
    #[must_use]
    pub fn definition(&self) -> &'c IssuerDefinition {
        self.catalog.get(self.network)
    }

    /// Validity as of the last edit.
    #[must_use]
    pub fn validity(&self) -> CardValidity {
        self.validity
    }

    /// Mask pattern of the identified network.
    #[must_use]
    pub fn current_mask(&self) -> &'static str {
        self.network.mask().pattern()
    }

    /// Number of digits entered.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.buffer.filled_count()
    }

    /// Cursor position in the mask, separators included.
    ///
    /// Display layers colour `display_text()[..cursor]` as entered text.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.buffer.cursor()
    }

    /// Entered digits without separators.
    #[must_use]
    pub fn digits(&self) -> String {
        self.buffer.leading_digits()
    }

    /// Mask with entered digits written in.
    #[must_use]
    pub fn display_text(&self) -> String {
        self.buffer.render(self.config.placeholder)
    }

    /// Engine configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Underlying buffer.
    #[must_use]
    pub fn buffer(&self) -> &CardBuffer {
        &self.buffer
    }
}
