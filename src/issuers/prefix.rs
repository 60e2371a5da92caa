//! Issuer prefix sets.
//!
//! Numeric ranges (JCB's 3528-3589 and the like) are expanded into one string
//! per value when the set is built, so every lookup is an exact string match.

use std::ops::RangeInclusive;

use rustc_hash::FxHashSet;

use crate::core::config::PrefixMatch;

/// Set of leading-digit strings accepted by a network.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PrefixSet {
    members: FxHashSet<String>,
    // Longest member, bounds the substrings `any_matches` looks up
    max_len: usize,
}

impl PrefixSet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from literal prefixes.
    #[must_use]
    pub fn from_literals(literals: &[&str]) -> Self {
        Self {
            members: literals.iter().map(|&s| s.to_owned()).collect(),
            max_len: literals.iter().map(|s| s.len()).max().unwrap_or(0),
        }
    }

    /// Add every integer of `range` as a decimal string (builder pattern).
    ///
    /// No zero padding is applied.
    #[must_use]
    pub fn with_range(mut self, range: RangeInclusive<u32>) -> Self {
        let widest = range.end().to_string().len();
        self.members.extend(range.map(|value| value.to_string()));
        self.max_len = self.max_len.max(widest);
        self
    }

    /// Exact membership.
    #[must_use]
    pub fn contains(&self, prefix: &str) -> bool {
        self.members.contains(prefix)
    }

    /// True if any member matches `digits` under `mode`.
    ///
    /// Looks up the substrings of `digits` up to the longest member length
    /// instead of scanning the members, which run to tens of thousands.
    #[must_use]
    pub fn any_matches(&self, digits: &str, mode: PrefixMatch) -> bool {
        if self.members.contains("") {
            return true;
        }
        let match_from = |start: usize| {
            let last = (start + self.max_len).min(digits.len());
            (start + 1..=last).any(|end| {
                digits
                    .get(start..end)
                    .is_some_and(|candidate| self.members.contains(candidate))
            })
        };
        match mode {
            PrefixMatch::Contains => (0..digits.len()).any(match_from),
            PrefixMatch::StartsWith => match_from(0),
        }
    }

    /// Number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Check if the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Iterate over members in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.members.iter().map(String::as_str)
    }
}
