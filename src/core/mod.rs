//! Core value types: digits, masks, configuration, errors, RNG.
//!
//! Everything here is independent of the issuer table and the engine.

pub mod config;
pub mod digit;
pub mod error;
pub mod mask;
pub mod rng;

pub use config::{EngineConfig, PrefixMatch};
pub use digit::{parse_digits, Digit};
pub use error::CardError;
pub use mask::{Mask, SlotKind};
pub use rng::CardRng;
