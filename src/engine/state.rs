//! Recognition results and edit events.

use serde::{Deserialize, Serialize};

use crate::core::digit::Digit;
use crate::issuers::CardNetwork;

/// Validity of the number in the buffer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardValidity {
    /// Complete and Luhn-valid.
    Correct,
    /// Complete but failing the Luhn check.
    Wrong,
    /// Incomplete, or the last edit was a deletion.
    #[default]
    NotIdentified,
}

/// One keystroke from the input surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardEdit {
    /// Append a digit at the cursor.
    Insert(Digit),
    /// Remove the digit before the cursor.
    Delete,
}

/// State reported back after every edit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineResult {
    /// Network identified so far.
    pub network: CardNetwork,
    /// Validity of the buffer contents.
    pub validity: CardValidity,
}

impl EngineResult {
    /// Display name of the network, empty when unidentified.
    #[must_use]
    pub fn network_name(&self) -> &'static str {
        self.network.name()
    }

    /// True once a complete number passed the checksum.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.validity == CardValidity::Correct
    }
}
