//! Magic Search - weighted, incrementally-cached contact search
//!
//! Given a free-text filter and an optional domain constraint, produces a
//! ranked, size-bounded list of matches drawn from host-provided contact
//! sources, plus a synthetic entry built from the typed text itself. The
//! candidate superset is cached between keystrokes; only scoring and ranking
//! are redone per query.
//!
//! Types are exported via UniFFI proc-macros; the host application supplies
//! contact sources by implementing [`ContactDirectory`].

pub mod address;
pub(crate) mod cache;
pub(crate) mod candidate;
pub mod config;
pub mod engine;
pub mod interface;
pub mod ranking;
pub mod search;
pub(crate) mod sources;

pub use engine::MagicSearch;
pub use interface::*;
pub use sources::WILDCARD_DOMAIN;

uniffi::setup_scaffolding!("magic_search");
