//! Single decimal digit, the unit of every buffer edit.

use serde::{Deserialize, Serialize};

use super::error::CardError;

/// A decimal digit `0..=9`.
///
/// Callers that already filter keystrokes can build digits with
/// [`Digit::new`]; raw characters go through `TryFrom<char>`.
///
/// ```
/// use rust_cardnum::core::Digit;
///
/// let seven = Digit::try_from('7').unwrap();
/// assert_eq!(seven.value(), 7);
/// assert!(Digit::try_from('x').is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Digit(u8);

impl Digit {
    /// Create a digit from its numeric value.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::DigitOutOfRange`] when `value > 9`.
    pub const fn new(value: u8) -> Result<Self, CardError> {
        if value <= 9 {
            Ok(Self(value))
        } else {
            Err(CardError::DigitOutOfRange(value))
        }
    }

    /// Numeric value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// ASCII character for this digit.
    #[must_use]
    pub const fn to_char(self) -> char {
        (b'0' + self.0) as char
    }
}

impl TryFrom<char> for Digit {
    type Error = CardError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_digit(10) {
            // to_digit(10) never yields more than 9
            Some(value) => Ok(Self(value as u8)),
            None => Err(CardError::NotADigit(c)),
        }
    }
}

impl TryFrom<u8> for Digit {
    type Error = CardError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}

impl std::fmt::Display for Digit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parse a string of digits, skipping ASCII spaces.
///
/// Spaces are accepted so that masked display text ("4111 1111 ...") can be
/// fed back in unchanged.
///
/// # Errors
///
/// Returns [`CardError::NotADigit`] for the first character that is neither
/// a digit nor a space.
pub fn parse_digits(input: &str) -> Result<Vec<Digit>, CardError> {
    input
        .chars()
        .filter(|&c| c != ' ')
        .map(Digit::try_from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_from_char() {
        assert_eq!(Digit::try_from('0').unwrap().value(), 0);
        assert_eq!(Digit::try_from('9').unwrap().value(), 9);
        assert_eq!(Digit::try_from('a'), Err(CardError::NotADigit('a')));
        // Non-ASCII digits are not card digits
        assert!(Digit::try_from('٣').is_err());
    }

    #[test]
    fn test_digit_range() {
        assert!(Digit::new(9).is_ok());
        assert_eq!(Digit::new(10), Err(CardError::DigitOutOfRange(10)));
    }

    #[test]
    fn test_digit_char_round_trip() {
        for c in '0'..='9' {
            assert_eq!(Digit::try_from(c).unwrap().to_char(), c);
        }
    }

    #[test]
    fn test_parse_digits_skips_spaces() {
        let digits = parse_digits("4111 1111").unwrap();
        assert_eq!(digits.len(), 8);
        assert_eq!(digits[0].value(), 4);

        assert_eq!(parse_digits("41-11"), Err(CardError::NotADigit('-')));
        assert!(parse_digits("").unwrap().is_empty());
    }

    #[test]
    fn test_digit_serde_rejects_out_of_range() {
        let json = serde_json::to_string(&Digit::new(4).unwrap()).unwrap();
        assert_eq!(json, "4");
        assert!(serde_json::from_str::<Digit>("12").is_err());
    }
}
