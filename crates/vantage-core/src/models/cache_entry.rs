use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Confidence, RagContext};
use crate::query_type::QueryType;

/// Bookkeeping attached to a cache entry. `hit_count` is the only field
/// mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryMetadata {
    pub timestamp: DateTime<Utc>,
    pub hit_count: u64,
    pub query_type: QueryType,
    pub confidence: Confidence,
}

/// A cached retrieval result keyed by normalized query text.
/// Destroyed on expiry or eviction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEntry {
    pub key: String,
    /// The trimmed query this entry was stored under, used for
    /// similarity comparison against incoming queries.
    pub query: String,
    pub results: RagContext,
    pub metadata: EntryMetadata,
    pub expires_at: DateTime<Utc>,
}

impl CacheEntry {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}

/// A successful cache lookup.
#[derive(Debug, Clone)]
pub struct CacheHit {
    pub entry: CacheEntry,
    /// 1.0 for exact-key hits, the combined similarity otherwise.
    pub similarity: f64,
    pub is_exact: bool,
}
