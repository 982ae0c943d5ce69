//! Insert-once cache for planner answers.
//!
//! The network is frozen once the planner exists, so entries never expire
//! and are never evicted. Concurrent misses on the same key compute the
//! answer once; the other callers wait for that result.

use std::sync::Arc;

use moka::sync::Cache as MokaCache;

use crate::router::{RouteAnswer, VertexId};

/// Cache key: (origin vertex, destination vertex).
pub type AnswerKey = (VertexId, VertexId);

/// Cached answer. `None` records that no path exists.
pub type AnswerEntry = Option<Arc<RouteAnswer>>;

/// Cache of route answers keyed by vertex pair.
pub struct AnswerCache {
    answers: MokaCache<AnswerKey, AnswerEntry>,
}

impl AnswerCache {
    /// Create an unbounded cache without expiry.
    pub fn new() -> Self {
        Self {
            answers: MokaCache::builder().build(),
        }
    }

    /// Get a cached entry.
    pub fn get(&self, key: &AnswerKey) -> Option<AnswerEntry> {
        self.answers.get(key)
    }

    /// Get the entry for `key`, computing and inserting it on a miss.
    ///
    /// `compute` runs at most once per key, even when several threads miss
    /// at the same time.
    pub fn get_or_compute(&self, key: AnswerKey, compute: impl FnOnce() -> AnswerEntry) -> AnswerEntry {
        self.answers.get_with(key, compute)
    }

    /// Number of cached entries (for monitoring).
    pub fn entry_count(&self) -> u64 {
        self.answers.run_pending_tasks();
        self.answers.entry_count()
    }
}

impl Default for AnswerCache {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for AnswerCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnswerCache")
            .field("entries", &self.answers.entry_count())
            .finish()
    }
}
