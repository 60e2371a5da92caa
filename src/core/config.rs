//! Engine configuration.

use serde::{Deserialize, Serialize};

use super::mask::DIGIT_SLOT;

/// How a deletion decides whether the identified network still applies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrefixMatch {
    /// Keep the network if any of its prefixes occurs anywhere in the
    /// remaining digits. Matches the behaviour of the shipped text field,
    /// including its false positives (a Visa number keeps "Visa" while any
    /// `4` remains).
    #[default]
    Contains,

    /// Keep the network only if the remaining digits start with one of its
    /// prefixes.
    StartsWith,
}

/// Card number engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Prefix test applied when re-checking the network after a deletion.
    pub prefix_match: PrefixMatch,

    /// Character rendered in unfilled digit slots by `display_text`.
    pub placeholder: char,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            prefix_match: PrefixMatch::Contains,
            placeholder: DIGIT_SLOT,
        }
    }
}

impl EngineConfig {
    /// Set the deletion prefix test.
    #[must_use]
    pub fn with_prefix_match(mut self, prefix_match: PrefixMatch) -> Self {
        self.prefix_match = prefix_match;
        self
    }

    /// Set the placeholder character for unfilled slots.
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: char) -> Self {
        self.placeholder = placeholder;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.prefix_match, PrefixMatch::Contains);
        assert_eq!(config.placeholder, 'X');
    }

    #[test]
    fn test_builder_pattern() {
        let config = EngineConfig::default()
            .with_prefix_match(PrefixMatch::StartsWith)
            .with_placeholder('•');

        assert_eq!(config.prefix_match, PrefixMatch::StartsWith);
        assert_eq!(config.placeholder, '•');
    }

    #[test]
    fn test_serialization() {
        let config = EngineConfig::default().with_prefix_match(PrefixMatch::StartsWith);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: EngineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
