//! Display masks.
//!
//! A mask is a template such as `"XXXX XXXX XXXX XXXX"`: every `X` is a slot
//! the user fills with a digit and every space is a fixed separator that the
//! cursor skips over. The mask length (separators included) is the buffer
//! capacity; the number of `X` slots is the network's digit length.

/// Placeholder character marking a digit slot in a mask pattern.
pub const DIGIT_SLOT: char = 'X';

/// Separator character between digit groups.
pub const SEPARATOR: char = ' ';

/// Kind of a single mask position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlotKind {
    /// Fillable digit position.
    Digit,
    /// Fixed group separator.
    Separator,
}

/// Static display mask for a card network.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Mask(&'static str);

impl Mask {
    /// Four groups of four: the default placeholder and most networks.
    pub const FOUR_BY_FOUR: Self = Self("XXXX XXXX XXXX XXXX");

    /// American Express grouping, 4/6/5.
    pub const AMEX: Self = Self("XXXX XXXXXX XXXXX");

    /// Diners Club grouping, 4/6/4.
    pub const DINERS: Self = Self("XXXX XXXXXX XXXX");

    /// The pattern string.
    #[must_use]
    pub const fn pattern(self) -> &'static str {
        self.0
    }

    /// Total positions, separators included.
    #[must_use]
    pub const fn len(self) -> usize {
        // Patterns are ASCII, so bytes == chars
        self.0.len()
    }

    /// True for an empty pattern.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0.is_empty()
    }

    /// Number of fillable digit slots.
    #[must_use]
    pub fn digit_length(self) -> usize {
        self.0.chars().filter(|&c| c == DIGIT_SLOT).count()
    }

    /// Kind of the slot at `position`, or `None` past the end.
    #[must_use]
    pub fn slot(self, position: usize) -> Option<SlotKind> {
        self.0.as_bytes().get(position).map(|&b| {
            if b as char == SEPARATOR {
                SlotKind::Separator
            } else {
                SlotKind::Digit
            }
        })
    }

    /// True if `position` holds a separator.
    #[must_use]
    pub fn is_separator(self, position: usize) -> bool {
        self.slot(position) == Some(SlotKind::Separator)
    }

    /// Iterate over slot kinds in order.
    pub fn slots(self) -> impl Iterator<Item = SlotKind> {
        (0..self.len()).filter_map(move |i| self.slot(i))
    }
}

impl std::fmt::Display for Mask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}
