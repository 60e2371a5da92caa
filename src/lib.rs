//! # rust-cardnum
//!
//! Incremental card-number recognition, masking and Luhn validation.
//!
//! An input surface feeds one keystroke at a time into a
//! [`CardNumberEngine`]; after each edit the engine reports which card
//! network the digits belong to and, once the number is complete, whether it
//! passes the Luhn checksum. Rendering is left to the caller, driven by
//! [`CardNumberEngine::current_mask`], [`CardNumberEngine::cursor`] and
//! [`CardNumberEngine::display_text`].
//!
//! ## Design Principles
//!
//! 1. **No global session state**: Each engine is an independent value.
//!    Only the immutable issuer table is shared.
//!
//! 2. **Edits never fail**: Out-of-range edits are no-ops, unknown numbers
//!    are `Unidentified`. Errors exist only where raw characters become
//!    digits.
//!
//! 3. **Exact prefix table**: Ranges are expanded once; recognition is a set
//!    lookup keyed by the number of digits typed.
//!
//! ## Modules
//!
//! - `core`: Digits, masks, configuration, errors, RNG
//! - `issuers`: Card networks and the issuer catalog
//! - `engine`: Buffer, recognizer and notifications
//! - `validation`: Luhn checksum
//! - `samples`: Deterministic Luhn-valid sample numbers
//!
//! ## Features
//!
//! - `telemetry` - `tracing` debug events on network changes and completion
//! - `python` - PyO3 bindings

pub mod core;
pub mod engine;
pub mod issuers;
pub mod samples;
pub mod validation;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{CardError, Digit, EngineConfig, Mask, PrefixMatch};

pub use crate::engine::{
    CardBuffer, CardEdit, CardNumberEngine, CardValidity, EngineNotification, EngineObserver,
    EngineResult,
};

pub use crate::issuers::{CardNetwork, IssuerCatalog, IssuerDefinition, PrefixSet};

pub use crate::samples::SampleGenerator;

pub use crate::validation::{luhn_check, luhn_check_digit};
