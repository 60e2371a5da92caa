//! Errors raised at the input boundary.
//!
//! The recognition engine itself never fails: out-of-range edits are no-ops
//! and unknown numbers resolve to `Unidentified`. Only the conversions that
//! turn raw caller input into digits can be rejected.

/// Error converting caller input into card digits.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CardError {
    /// Character is not an ASCII decimal digit.
    #[error("{0:?} is not a decimal digit")]
    NotADigit(char),

    /// Numeric value does not fit a single digit.
    #[error("digit value {0} is out of range 0-9")]
    DigitOutOfRange(u8),
}
