//! Search candidate with memoized derived state.
//!
//! Module isolation ensures no code outside this module can mutate the
//! wrapped card after construction, so the `OnceLock` caches can never go
//! stale. Candidates are built once per cache rebuild and re-scored on every
//! query, so the lowercased field list and the parsed primary address are
//! computed on first access and kept.

use std::sync::OnceLock;

use crate::address::{self, SipAddress};
use crate::interface::ContactCard;

/// A contact candidate owned by the search cache.
#[derive(Debug)]
pub(crate) struct ContactCandidate {
    card: ContactCard,
    fields_lower: OnceLock<Vec<String>>,
    primary_address: OnceLock<Option<SipAddress>>,
}

impl ContactCandidate {
    pub fn new(card: ContactCard) -> Self {
        Self {
            card,
            fields_lower: OnceLock::new(),
            primary_address: OnceLock::new(),
        }
    }

    pub fn display_name(&self) -> &str {
        &self.card.display_name
    }

    /// Textual identifiers in match-preference order: SIP-style addresses,
    /// then phone numbers, then the bare username. Empty strings are skipped.
    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.card
            .sip_addresses
            .iter()
            .map(String::as_str)
            .chain(self.card.phone_numbers.iter().map(String::as_str))
            .chain(self.card.username.as_deref())
            .filter(|identifier| !identifier.is_empty())
    }

    /// Searchable fields, lowercased once: display name first, then the
    /// identifiers in the same order as [`identifiers`](Self::identifiers).
    pub fn fields_lower(&self) -> &[String] {
        self.fields_lower.get_or_init(|| {
            std::iter::once(self.card.display_name.as_str())
                .chain(self.identifiers())
                .map(str::to_lowercase)
                .collect()
        })
    }

    /// The first identifier that parses as a SIP-style address.
    pub fn primary_address(&self) -> Option<&SipAddress> {
        self.primary_address
            .get_or_init(|| self.card.sip_addresses.iter().find_map(|a| address::parse(a)))
            .as_ref()
    }

    pub fn has_address(&self) -> bool {
        self.primary_address().is_some()
    }

    /// Domain derived from the primary address, empty for candidates without
    /// a parseable address.
    pub fn domain(&self) -> &str {
        self.primary_address().map_or("", |a| a.domain.as_str())
    }

    /// Every identifier parsing to the given canonical address key.
    pub fn has_address_key(&self, key: &str) -> bool {
        self.card
            .sip_addresses
            .iter()
            .filter_map(|a| address::parse(a))
            .any(|a| a.canonical_key() == key)
    }
}
