//! Checksum validation.

pub mod luhn;

pub use luhn::{luhn_check, luhn_check_digit};
