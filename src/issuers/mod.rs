//! Issuer system: network tags, prefix sets, and the catalog.
//!
//! ## Key Types
//!
//! - `CardNetwork`: Fixed set of supported networks plus `Unidentified`
//! - `PrefixSet`: Leading-digit strings with ranges pre-expanded
//! - `IssuerDefinition`: Network, mask and prefixes
//! - `IssuerCatalog`: Read-only table and candidate lookup

pub mod catalog;
pub mod network;
pub mod prefix;

pub use catalog::{Candidates, IssuerCatalog, IssuerDefinition, MAX_PREFIX_LENGTH};
pub use network::CardNetwork;
pub use prefix::PrefixSet;
