//! Card network tags.

use serde::{Deserialize, Serialize};

use crate::core::mask::Mask;

/// Payment card network.
///
/// The set is fixed; numbers from any other network stay `Unidentified`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardNetwork {
    AmericanExpress,
    DinersClub,
    Discover,
    InstaPayment,
    Jcb,
    Maestro,
    MasterCard,
    Visa,
    /// No network recognised yet.
    #[default]
    Unidentified,
}

impl CardNetwork {
    /// Every network in declaration order, `Unidentified` last.
    pub const ALL: [Self; 9] = [
        Self::AmericanExpress,
        Self::DinersClub,
        Self::Discover,
        Self::InstaPayment,
        Self::Jcb,
        Self::Maestro,
        Self::MasterCard,
        Self::Visa,
        Self::Unidentified,
    ];

    /// Position in [`CardNetwork::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Display name, empty for `Unidentified`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::AmericanExpress => "American Express",
            Self::DinersClub => "Diners Club",
            Self::Discover => "Discover",
            Self::InstaPayment => "InstaPayment",
            Self::Jcb => "JCB",
            Self::Maestro => "Maestro",
            Self::MasterCard => "MasterCard",
            Self::Visa => "Visa",
            Self::Unidentified => "",
        }
    }

    /// Display mask for numbers of this network.
    #[must_use]
    pub const fn mask(self) -> Mask {
        match self {
            Self::AmericanExpress => Mask::AMEX,
            Self::DinersClub => Mask::DINERS,
            _ => Mask::FOUR_BY_FOUR,
        }
    }

    /// Whether this is a real network.
    #[must_use]
    pub const fn is_identified(self) -> bool {
        !matches!(self, Self::Unidentified)
    }
}

impl std::fmt::Display for CardNetwork {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unidentified => f.write_str("Unidentified"),
            other => f.write_str(other.name()),
        }
    }
}
