//! Per-domain candidate superset cache.
//!
//! Successive queries during interactive typing almost always share a domain
//! and differ only in filter text; enumerating the directory sources is the
//! expensive step this cache removes. The superset is rebuilt on a domain
//! change or after an explicit [`reset`](SearchCache::reset), never pruned:
//! substring matching is not monotone under filter narrowing, so every query
//! re-scores the full superset anyway.

use std::sync::Arc;

use tracing::debug;

use crate::candidate::ContactCandidate;

#[derive(Default)]
pub(crate) struct SearchCache {
    superset: Arc<Vec<ContactCandidate>>,
    built_for_domain: String,
    valid: bool,
}

impl SearchCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached superset if it is valid and was built for the same
    /// domain; otherwise run `build`, store and tag the result.
    ///
    /// The superset is handed out as an `Arc` clone so scoring can proceed
    /// after the cache lock is released.
    pub fn get_or_build(
        &mut self,
        domain: &str,
        build: impl FnOnce() -> Vec<ContactCandidate>,
    ) -> Arc<Vec<ContactCandidate>> {
        if self.valid && self.built_for_domain == domain {
            return Arc::clone(&self.superset);
        }

        let superset = Arc::new(build());
        debug!(domain, candidates = superset.len(), "candidate cache rebuilt");
        self.superset = superset;
        self.built_for_domain = domain.to_string();
        self.valid = true;
        Arc::clone(&self.superset)
    }

    /// Invalidate unconditionally; the next query rebuilds from the sources.
    pub fn reset(&mut self) {
        self.valid = false;
    }
}
