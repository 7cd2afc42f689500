//! The search engine object exposed to host applications.
//!
//! Concurrency model: configuration lives behind a `RwLock` (queries read,
//! setters write), the cache behind a `Mutex` held only for the get-or-build
//! step. The superset `Arc` is cloned out of the lock, so scoring and
//! ranking run without blocking other callers. `search` mutates nothing but
//! the cache's lazy fill.

use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use tracing::debug;

use crate::cache::SearchCache;
use crate::config::SearchConfig;
use crate::interface::{ContactDirectory, SearchResult};
use crate::ranking::{self, ScoredCandidate};
use crate::search::tokenize_filter;
use crate::sources;

/// Weighted contact search over host-provided directory sources.
///
/// Create one instance per collaborator set; instances are `Arc`-managed and
/// safe to share across threads.
#[derive(uniffi::Object)]
pub struct MagicSearch {
    directory: Arc<dyn ContactDirectory>,
    config: RwLock<SearchConfig>,
    cache: Mutex<SearchCache>,
}

#[uniffi::export]
impl MagicSearch {
    #[uniffi::constructor]
    pub fn new(directory: Arc<dyn ContactDirectory>) -> Arc<Self> {
        Arc::new(Self {
            directory,
            config: RwLock::new(SearchConfig::default()),
            cache: Mutex::new(SearchCache::new()),
        })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Configuration
    // ─────────────────────────────────────────────────────────────────────────

    pub fn min_weight(&self) -> u32 {
        self.config.read().min_weight
    }

    pub fn set_min_weight(&self, weight: u32) {
        self.config.write().min_weight = weight;
    }

    pub fn max_weight(&self) -> u32 {
        self.config.read().max_weight
    }

    pub fn set_max_weight(&self, weight: u32) {
        self.config.write().max_weight = weight;
    }

    pub fn delimiter(&self) -> Option<String> {
        self.config.read().delimiter.clone()
    }

    pub fn set_delimiter(&self, delimiter: Option<String>) {
        self.config.write().delimiter = delimiter;
    }

    pub fn use_delimiter(&self) -> bool {
        self.config.read().use_delimiter
    }

    pub fn set_use_delimiter(&self, enable: bool) {
        self.config.write().use_delimiter = enable;
    }

    pub fn search_limit(&self) -> u32 {
        self.config.read().search_limit
    }

    pub fn set_search_limit(&self, limit: u32) {
        self.config.write().search_limit = limit;
    }

    pub fn limited_search(&self) -> bool {
        self.config.read().limited_search
    }

    pub fn set_limited_search(&self, limited: bool) {
        self.config.write().limited_search = limited;
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Search
    // ─────────────────────────────────────────────────────────────────────────

    /// Drop the cached candidate superset; the next query re-enumerates the
    /// directory sources.
    pub fn reset_search_cache(&self) {
        self.cache.lock().reset();
    }

    /// Ranked search over all directory sources.
    ///
    /// `filter` is free text, tokenized per the delimiter configuration.
    /// `domain` restricts candidates: empty or `None` matches everything,
    /// `"*"` matches candidates with a SIP-style address, anything else
    /// matches that domain exactly. Total: always returns a sequence,
    /// possibly empty.
    pub fn search(&self, filter: Option<String>, domain: Option<String>) -> Vec<SearchResult> {
        let filter = filter.unwrap_or_default();
        let domain = domain.unwrap_or_default();
        let config = self.config.read().clone();

        let tokens_lower: Vec<String> =
            tokenize_filter(&filter, config.delimiter.as_deref(), config.use_delimiter)
                .into_iter()
                .map(|token| token.to_lowercase())
                .collect();

        let superset = self
            .cache
            .lock()
            .get_or_build(&domain, || sources::enumerate(self.directory.as_ref(), &domain));

        let scored: Vec<ScoredCandidate<'_>> = superset
            .iter()
            .map(|candidate| ScoredCandidate {
                candidate,
                weight: ranking::score_candidate(candidate, &tokens_lower, config.max_weight),
            })
            .collect();

        let default_domain = self.directory.default_domain();
        let results = ranking::rank(
            scored,
            &config,
            filter.trim(),
            default_domain.as_deref(),
            &tokens_lower,
        );

        debug!(
            filter = %filter,
            domain = %domain,
            candidates = superset.len(),
            results = results.len(),
            "search completed"
        );
        results
    }
}
