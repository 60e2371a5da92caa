//! Issuer catalog: the fixed network table and prefix lookup.
//!
//! The `IssuerCatalog` holds one `IssuerDefinition` per `CardNetwork`, built
//! once and queried read-only afterwards. Recognition goes through the
//! candidate table in [`IssuerCatalog::candidates_for_leading_digit_count`]:
//! a network is only considered when the number of typed digits equals the
//! length of its distinguishing prefixes.

use std::sync::OnceLock;

use smallvec::{smallvec, SmallVec};

use super::network::CardNetwork;
use super::prefix::PrefixSet;
use crate::core::mask::Mask;

/// Candidate list for one leading-digit count.
pub type Candidates = SmallVec<[CardNetwork; 4]>;

/// Longest leading-digit count that has candidates.
pub const MAX_PREFIX_LENGTH: usize = 6;

/// Static data for one card network.
#[derive(Clone, Debug)]
pub struct IssuerDefinition {
    /// Network tag.
    pub network: CardNetwork,

    /// Display mask.
    pub mask: Mask,

    /// Accepted leading-digit prefixes, ranges expanded.
    pub prefixes: PrefixSet,
}

impl IssuerDefinition {
    /// Create a definition using the network's standard mask.
    #[must_use]
    pub fn new(network: CardNetwork, prefixes: PrefixSet) -> Self {
        Self {
            network,
            mask: network.mask(),
            prefixes,
        }
    }

    /// Display name, empty for `Unidentified`.
    #[must_use]
    pub fn display_name(&self) -> &'static str {
        self.network.name()
    }

    /// Total digits in a complete number.
    #[must_use]
    pub fn digit_length(&self) -> usize {
        self.mask.digit_length()
    }
}

/// The fixed table of card networks.
///
/// ## Example
///
/// ```
/// use rust_cardnum::issuers::{CardNetwork, IssuerCatalog};
///
/// let catalog = IssuerCatalog::standard();
/// assert_eq!(catalog.identify("37"), CardNetwork::AmericanExpress);
/// assert_eq!(catalog.identify("3"), CardNetwork::Unidentified);
/// assert_eq!(catalog.get(CardNetwork::AmericanExpress).digit_length(), 15);
/// ```
#[derive(Clone, Debug)]
pub struct IssuerCatalog {
    // Both indexed by CardNetwork::index()
    definitions: Vec<IssuerDefinition>,
    reachable: Vec<Vec<String>>,
}

impl IssuerCatalog {
    /// Build the standard table.
    ///
    /// Expands roughly fifty thousand MasterCard range members; prefer
    /// [`IssuerCatalog::standard`] which builds it once per process.
    #[must_use]
    pub fn build() -> Self {
        let definitions = CardNetwork::ALL
            .iter()
            .map(|&network| IssuerDefinition::new(network, Self::prefixes_for(network)))
            .collect();
        let mut catalog = Self {
            definitions,
            reachable: Vec::new(),
        };
        catalog.reachable = CardNetwork::ALL
            .iter()
            .map(|&network| catalog.collect_reachable(network))
            .collect();
        catalog
    }

    /// Shared standard table, built on first use.
    #[must_use]
    pub fn standard() -> &'static Self {
        static CATALOG: OnceLock<IssuerCatalog> = OnceLock::new();
        CATALOG.get_or_init(Self::build)
    }

    fn prefixes_for(network: CardNetwork) -> PrefixSet {
        match network {
            CardNetwork::AmericanExpress => PrefixSet::from_literals(&["34", "37"]),
            CardNetwork::DinersClub => {
                PrefixSet::from_literals(&["300", "301", "302", "303", "304", "305", "36"])
            }
            CardNetwork::Discover => PrefixSet::from_literals(&[
                "6011", "644", "645", "646", "647", "648", "649", "65",
            ])
            .with_range(622_126..=622_925),
            CardNetwork::InstaPayment => PrefixSet::from_literals(&["637", "638", "639"]),
            CardNetwork::Jcb => PrefixSet::new().with_range(3528..=3589),
            CardNetwork::Maestro => PrefixSet::from_literals(&[
                "5018", "5020", "5038", "5893", "6304", "6759", "6761", "6762", "6763",
            ]),
            CardNetwork::MasterCard => PrefixSet::from_literals(&["51", "52", "53", "54", "55"])
                .with_range(222_100..=272_099),
            CardNetwork::Visa => PrefixSet::from_literals(&["4"]),
            CardNetwork::Unidentified => PrefixSet::new(),
        }
    }

    /// All definitions in declaration order.
    #[must_use]
    pub fn all_networks(&self) -> &[IssuerDefinition] {
        &self.definitions
    }

    /// Definition for a network.
    #[must_use]
    pub fn get(&self, network: CardNetwork) -> &IssuerDefinition {
        &self.definitions[network.index()]
    }

    /// Networks worth testing once exactly `count` leading digits are known.
    ///
    /// The order is significant: the first candidate whose prefix set
    /// contains the digits wins.
    #[must_use]
    pub fn candidates_for_leading_digit_count(count: usize) -> Candidates {
        use CardNetwork::{
            AmericanExpress, DinersClub, Discover, InstaPayment, Jcb, MasterCard, Visa,
        };

        match count {
            1 => smallvec![Visa],
            2 => smallvec![AmericanExpress, DinersClub, MasterCard, Discover],
            3 => smallvec![DinersClub, Discover, InstaPayment],
            4 => smallvec![Discover, Jcb],
            6 => smallvec![Discover, MasterCard],
            _ => SmallVec::new(),
        }
    }

    /// Identify the network for exactly these leading digits.
    ///
    /// Returns `Unidentified` when no candidate for this digit count holds
    /// the string as a prefix.
    #[must_use]
    pub fn identify(&self, leading_digits: &str) -> CardNetwork {
        Self::candidates_for_leading_digit_count(leading_digits.len())
            .into_iter()
            .find(|&network| self.get(network).prefixes.contains(leading_digits))
            .unwrap_or(CardNetwork::Unidentified)
    }

    /// Identify a whole number the way digit-by-digit entry would.
    ///
    /// Spaces are ignored. Each leading length up to [`MAX_PREFIX_LENGTH`] is
    /// tried in turn and the first match wins.
    #[must_use]
    pub fn classify(&self, number: &str) -> CardNetwork {
        let digits: String = number.chars().filter(|&c| c != ' ').collect();
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return CardNetwork::Unidentified;
        }

        self.first_identified(&digits)
    }

    // Assumes ASCII digits
    fn first_identified(&self, digits: &str) -> CardNetwork {
        (1..=MAX_PREFIX_LENGTH.min(digits.len()))
            .map(|len| self.identify(&digits[..len]))
            .find(|network| network.is_identified())
            .unwrap_or(CardNetwork::Unidentified)
    }

    /// Prefixes of `network` that digit-by-digit entry actually reaches,
    /// sorted. Computed once when the catalog is built.
    ///
    /// Empty for networks absent from the candidate table (Maestro) and for
    /// `Unidentified`.
    #[must_use]
    pub fn reachable_prefixes(&self, network: CardNetwork) -> &[String] {
        &self.reachable[network.index()]
    }

    fn collect_reachable(&self, network: CardNetwork) -> Vec<String> {
        let mut prefixes: Vec<String> = self
            .get(network)
            .prefixes
            .iter()
            .filter(|prefix| self.first_identified(prefix) == network)
            .map(str::to_owned)
            .collect();
        prefixes.sort_unstable();
        prefixes
    }
}

impl Default for IssuerCatalog {
    fn default() -> Self {
        Self::build()
    }
}
