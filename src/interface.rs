//! Public FFI interface definition
//!
//! This file defines the types shared with host applications via UniFFI.
//! It acts as the source of truth for the collaborator contract: the host
//! supplies contact sources through [`ContactDirectory`], the engine returns
//! ranked [`SearchResult`] sequences.

use thiserror::Error;

// ─────────────────────────────────────────────────────────────────────────────
// RECORDS
// ─────────────────────────────────────────────────────────────────────────────

/// One contact as exposed by a directory source.
///
/// Identifiers are plain strings; SIP-style addresses may carry an explicit
/// `sip:`/`sips:` scheme or be bare `user@host` forms. The engine clones cards
/// into its cache, so a directory may hand out snapshots freely.
#[derive(Debug, Clone, PartialEq, Eq, Default, uniffi::Record)]
pub struct ContactCard {
    pub display_name: String,
    pub username: Option<String>,
    pub phone_numbers: Vec<String>,
    pub sip_addresses: Vec<String>,
}

/// One ranked match returned by a search.
///
/// `matched_identifier` is the identifier that earned the candidate its
/// weight (dialable by the UI); `is_address` tells whether it parses as a
/// SIP-style address or is raw text such as a phone number. The synthetic
/// entry built from the typed filter carries an empty `display_name` and
/// weight 0.
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct SearchResult {
    pub display_name: String,
    pub matched_identifier: String,
    pub is_address: bool,
    pub weight: u32,
}

// ─────────────────────────────────────────────────────────────────────────────
// ERRORS
// ─────────────────────────────────────────────────────────────────────────────

/// Error type crossing the collaborator boundary.
///
/// A failing source is downgraded to "no candidates from that source" by the
/// engine; `search` itself never returns an error.
#[derive(Debug, Error, uniffi::Error)]
pub enum SearchError {
    #[error("Directory source unavailable: {0}")]
    SourceUnavailable(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// A foreign directory implementation that fails in an undeclared way is
/// folded into a source error, which the engine already degrades gracefully.
impl From<uniffi::UnexpectedUniFFICallbackError> for SearchError {
    fn from(error: uniffi::UnexpectedUniFFICallbackError) -> Self {
        SearchError::SourceUnavailable(error.reason)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// COLLABORATOR INTERFACE
// ─────────────────────────────────────────────────────────────────────────────

/// Contact sources supplied by the host application.
///
/// Enumeration order inside each method is preserved by the engine and acts
/// as the ranking tie-break: address-book entries are enumerated before
/// proxy-known addresses.
#[uniffi::export(with_foreign)]
pub trait ContactDirectory: Send + Sync {
    /// All local address-book entries.
    fn address_book_entries(&self) -> Result<Vec<ContactCard>, SearchError>;

    /// Addresses learned from proxy configuration (registered identities,
    /// recently contacted peers).
    fn proxy_known_addresses(&self) -> Result<Vec<ContactCard>, SearchError>;

    /// Domain used to complete a bare typed username into an address for the
    /// synthetic result, if the proxy configuration provides one.
    fn default_domain(&self) -> Option<String>;
}
