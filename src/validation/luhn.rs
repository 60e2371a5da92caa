//! Luhn (mod 10) checksum.
//!
//! Counting from the right of the payload (the number without its check
//! digit), every first, third, fifth... digit is doubled, with doubled values
//! above 9 reduced by 9. The check digit is whatever brings the total to a
//! multiple of ten.

/// Parse ASCII decimal digits; `None` on anything else.
fn parse(number: &str) -> Option<Vec<u8>> {
    number
        .bytes()
        .map(|b| b.is_ascii_digit().then(|| b - b'0'))
        .collect()
}

fn payload_sum(payload: &[u8]) -> u32 {
    payload
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| {
            if i % 2 == 0 {
                let doubled = d * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                d
            }
        })
        .map(u32::from)
        .sum()
}

/// Validate a complete number, check digit last.
///
/// Fails closed: empty input or any non-digit character (spaces included)
/// returns `false`.
///
/// ```
/// use rust_cardnum::validation::luhn_check;
///
/// assert!(luhn_check("4111111111111111"));
/// assert!(!luhn_check("4111111111111112"));
/// assert!(!luhn_check(""));
/// ```
#[must_use]
pub fn luhn_check(number: &str) -> bool {
    let Some(digits) = parse(number) else {
        return false;
    };
    let Some((&check, payload)) = digits.split_last() else {
        return false;
    };
    (payload_sum(payload) + u32::from(check)) % 10 == 0
}

/// Check digit that completes `payload`.
///
/// Returns `None` if the payload contains a non-digit. An empty payload
/// yields `Some(0)`.
#[must_use]
pub fn luhn_check_digit(payload: &str) -> Option<u8> {
    let digits = parse(payload)?;
    let remainder = payload_sum(&digits) % 10;
    // remainder < 10, so the result fits in a digit
    Some(((10 - remainder) % 10) as u8)
}
