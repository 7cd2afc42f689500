//! Candidate enumeration across directory sources.
//!
//! Sources are concatenated in a fixed priority order, address book first,
//! then proxy-known addresses. That order is what the ranker's stable sort
//! preserves for equal weights. A failing source contributes no candidates;
//! it never aborts the query.

use tracing::warn;

use crate::candidate::ContactCandidate;
use crate::interface::{ContactCard, ContactDirectory, SearchError};

/// Domain constraint selecting any candidate with a parseable address.
pub const WILDCARD_DOMAIN: &str = "*";

/// Enumerate candidates matching the domain constraint.
///
/// An empty domain keeps everything; [`WILDCARD_DOMAIN`] keeps candidates
/// with at least one parseable SIP-style address; any other value keeps
/// candidates whose derived domain equals it, ignoring ASCII case.
pub(crate) fn enumerate(directory: &dyn ContactDirectory, domain: &str) -> Vec<ContactCandidate> {
    let mut candidates = Vec::new();
    collect(directory.address_book_entries(), "address_book", &mut candidates);
    collect(directory.proxy_known_addresses(), "proxy", &mut candidates);

    match domain {
        "" => candidates,
        WILDCARD_DOMAIN => candidates.into_iter().filter(ContactCandidate::has_address).collect(),
        _ => candidates
            .into_iter()
            .filter(|candidate| candidate.domain().eq_ignore_ascii_case(domain))
            .collect(),
    }
}

fn collect(
    entries: Result<Vec<ContactCard>, SearchError>,
    source: &str,
    out: &mut Vec<ContactCandidate>,
) {
    match entries {
        Ok(cards) => out.extend(cards.into_iter().map(ContactCandidate::new)),
        Err(error) => warn!(source, %error, "contact source unavailable, skipping"),
    }
}
