use serde::{Deserialize, Serialize};

use super::defaults;

/// Semantic cache configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Hard bound on in-memory entries; cleanup evicts past this.
    pub capacity: usize,
    /// How far below capacity eviction trims, so cleanup does not run on
    /// every insert once the cache is full.
    pub evict_margin: usize,
    /// Entry lifetime in seconds.
    pub ttl_secs: u64,
    /// Whether approximate (similarity-based) lookup is attempted after
    /// an exact-key miss.
    pub semantic_match: bool,
    /// Minimum combined similarity for a semantic hit.
    pub semantic_threshold: f64,
    /// Minimum hit similarity for returning a cached result without
    /// running retrieval at all.
    pub accept_threshold: f64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: defaults::DEFAULT_CACHE_CAPACITY,
            evict_margin: defaults::DEFAULT_EVICT_MARGIN,
            ttl_secs: defaults::DEFAULT_TTL_SECS,
            semantic_match: true,
            semantic_threshold: defaults::DEFAULT_SEMANTIC_THRESHOLD,
            accept_threshold: defaults::DEFAULT_CACHE_ACCEPT_THRESHOLD,
        }
    }
}
