//! Slot buffer behind the masked card number.
//!
//! The buffer has one slot per mask position. The cursor is a mask position,
//! so it counts separators as well as digits; it always rests on a fillable
//! slot or at the end of the buffer.

use crate::core::digit::Digit;
use crate::core::mask::{Mask, SlotKind};

/// Contents of one buffer position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slot {
    /// Entered digit.
    Digit(Digit),
    /// Digit position not yet filled.
    Blank,
    /// Group separator, never fillable.
    Separator,
}

impl From<SlotKind> for Slot {
    fn from(kind: SlotKind) -> Self {
        match kind {
            SlotKind::Digit => Self::Blank,
            SlotKind::Separator => Self::Separator,
        }
    }
}

/// Digits entered so far, laid out on the current mask.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardBuffer {
    slots: Vec<Slot>,
    cursor: usize,
}

impl CardBuffer {
    /// Empty buffer shaped by `mask`.
    #[must_use]
    pub fn new(mask: Mask) -> Self {
        Self {
            slots: mask.slots().map(Slot::from).collect(),
            cursor: 0,
        }
    }

    /// Re-lay the buffer on a new mask.
    ///
    /// Slots before the cursor are kept as they are; everything from the
    /// cursor on comes from `mask`.
    pub fn relayout(&mut self, mask: Mask) {
        let keep = self.cursor.min(mask.len());
        self.slots.truncate(keep);
        self.slots.extend(mask.slots().skip(keep).map(Slot::from));
        self.cursor = keep;
    }

    /// Write `digit` at the cursor and advance past any following separator.
    ///
    /// Returns `false` without touching the buffer when it is full.
    pub fn push(&mut self, digit: Digit) -> bool {
        if self.is_full() {
            return false;
        }
        self.slots[self.cursor] = Slot::Digit(digit);
        self.cursor += 1;
        if self.slots.get(self.cursor) == Some(&Slot::Separator) {
            self.cursor += 1;
        }
        true
    }

    /// Clear the digit before the cursor, stepping back over a separator
    /// first if one sits there.
    ///
    /// Returns the removed digit, or `None` on an empty buffer.
    pub fn pop(&mut self) -> Option<Digit> {
        if self.cursor == 0 {
            return None;
        }
        if self.slots[self.cursor - 1] == Slot::Separator {
            self.cursor -= 1;
            if self.cursor == 0 {
                return None;
            }
        }
        self.cursor -= 1;
        // Every slot before the cursor holds a digit
        match std::mem::replace(&mut self.slots[self.cursor], Slot::Blank) {
            Slot::Digit(digit) => Some(digit),
            _ => None,
        }
    }

    /// Concrete digits before the cursor, separators stripped.
    #[must_use]
    pub fn leading_digits(&self) -> String {
        self.slots[..self.cursor]
            .iter()
            .filter_map(|slot| match slot {
                Slot::Digit(d) => Some(d.to_char()),
                _ => None,
            })
            .collect()
    }

    /// Number of entered digits.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.slots
            .iter()
            .filter(|slot| matches!(slot, Slot::Digit(_)))
            .count()
    }

    /// Cursor position in the mask, separators included.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Total positions, separators included.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// True once the cursor has reached the end.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cursor >= self.slots.len()
    }

    /// True if no digit has been entered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cursor == 0
    }

    /// Render digits, placeholders and separators.
    #[must_use]
    pub fn render(&self, placeholder: char) -> String {
        self.slots
            .iter()
            .map(|slot| match slot {
                Slot::Digit(d) => d.to_char(),
                Slot::Blank => placeholder,
                Slot::Separator => ' ',
            })
            .collect()
    }

    /// Slots in mask order.
    #[must_use]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }
}
