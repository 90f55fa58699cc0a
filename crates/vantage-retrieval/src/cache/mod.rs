//! Similarity-aware result cache.
//!
//! Exact lookups hit a blake3-keyed in-memory map; approximate lookups
//! scan live entries of the same query type and accept the best match at
//! or above the semantic threshold. Writes go to memory and, best-effort,
//! to an optional persistent key/value store.

pub mod bounded;
pub mod similarity;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info, warn};

use vantage_core::config::CacheConfig;
use vantage_core::constants::CACHE_KEY_PREFIX;
use vantage_core::errors::CacheError;
use vantage_core::models::{CacheEntry, CacheHit, Confidence, EntryMetadata, RagContext};
use vantage_core::traits::IKeyValueStore;
use vantage_core::QueryType;

use bounded::BoundedStore;

/// Aggregate cache statistics.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CacheStats {
    pub total_entries: usize,
    pub total_hits: u64,
    pub avg_confidence: f64,
    pub by_type: HashMap<QueryType, usize>,
}

/// A frequently-hit cached query.
#[derive(Debug, Clone, Serialize)]
pub struct PopularQuery {
    pub query: String,
    pub hit_count: u64,
    pub query_type: QueryType,
}

/// One item of a bulk preload batch.
#[derive(Debug, Clone)]
pub struct PreloadEntry {
    pub query: String,
    pub results: RagContext,
    pub query_type: QueryType,
    pub confidence: Confidence,
}

/// The semantic cache service. Process-local mutable state behind one
/// mutex; the persistent store is written best-effort only.
pub struct SemanticCache {
    store: Mutex<BoundedStore>,
    kv: Option<Arc<dyn IKeyValueStore>>,
    config: CacheConfig,
}

impl SemanticCache {
    pub fn new(config: CacheConfig) -> Self {
        Self {
            store: Mutex::new(BoundedStore::new(config.capacity, config.evict_margin)),
            kv: None,
            config,
        }
    }

    /// Attach a persistent key/value store for best-effort durability.
    pub fn with_kv_store(mut self, kv: Arc<dyn IKeyValueStore>) -> Self {
        self.kv = Some(kv);
        self
    }

    /// Derive the cache key from normalized query text plus query type.
    pub fn generate_key(query: &str, query_type: QueryType) -> String {
        let normalized = query.trim().to_lowercase();
        let hash = blake3::hash(format!("{normalized}|{}", query_type.as_str()).as_bytes());
        format!("{CACHE_KEY_PREFIX}{}", &hash.to_hex().as_str()[..16])
    }

    /// Look up a query: exact key first, then (when enabled) the best
    /// semantic match among live entries of the same type.
    pub fn check(&self, query: &str, query_type: QueryType) -> Option<CacheHit> {
        let now = Utc::now();
        let mut store = match self.locked() {
            Ok(store) => store,
            Err(error) => {
                warn!(%error, "cache unavailable; treating as miss");
                return None;
            }
        };

        let key = Self::generate_key(query, query_type);
        match store.get(&key).map(|entry| entry.is_expired(now)) {
            Some(false) => {
                if let Some(entry) = store.get_mut(&key) {
                    entry.metadata.hit_count += 1;
                    debug!(%key, "exact cache hit");
                    return Some(CacheHit {
                        entry: entry.clone(),
                        similarity: 1.0,
                        is_exact: true,
                    });
                }
            }
            Some(true) => {
                store.remove(&key);
            }
            None => {}
        }

        if !self.config.semantic_match {
            debug!(%key, "cache miss");
            return None;
        }

        // Semantic scan: best live, type-matching candidate at or above
        // the threshold.
        let mut best: Option<(String, f64)> = None;
        for entry in store.values() {
            if entry.is_expired(now) || entry.metadata.query_type != query_type {
                continue;
            }
            let sim = similarity::combined(query, &entry.query);
            if sim >= self.config.semantic_threshold
                && best.as_ref().map_or(true, |(_, s)| sim > *s)
            {
                best = Some((entry.key.clone(), sim));
            }
        }

        if let Some((best_key, sim)) = best {
            if let Some(entry) = store.get_mut(&best_key) {
                entry.metadata.hit_count += 1;
                debug!(key = %best_key, similarity = sim, "semantic cache hit");
                return Some(CacheHit {
                    entry: entry.clone(),
                    similarity: sim,
                    is_exact: false,
                });
            }
        }

        debug!(%key, "cache miss");
        None
    }

    /// Store a retrieval result under the (query, type) key, with expiry
    /// now + ttl (the configured default when `ttl` is `None`).
    pub async fn store(
        &self,
        query: &str,
        results: &RagContext,
        query_type: QueryType,
        confidence: Confidence,
        ttl: Option<Duration>,
    ) {
        let now = Utc::now();
        let ttl = ttl.unwrap_or(Duration::from_secs(self.config.ttl_secs));
        let lifetime = chrono::Duration::from_std(ttl)
            .unwrap_or_else(|_| chrono::Duration::seconds(self.config.ttl_secs as i64));

        let key = Self::generate_key(query, query_type);
        let entry = CacheEntry {
            key: key.clone(),
            query: query.trim().to_string(),
            results: results.clone(),
            metadata: EntryMetadata {
                timestamp: now,
                hit_count: 0,
                query_type,
                confidence,
            },
            expires_at: now + lifetime,
        };

        match self.locked() {
            Ok(mut store) => store.insert(entry.clone()),
            Err(error) => {
                warn!(%error, "cache write skipped");
                return;
            }
        }
        debug!(%key, %query_type, "query cached");

        // Best-effort persistence; failures degrade to in-memory only.
        if let Some(kv) = &self.kv {
            match serde_json::to_string(&entry) {
                Ok(json) => {
                    if let Err(error) = kv.put(&key, &json, Some(ttl)).await {
                        warn!(%key, %error, "cache persistence failed");
                    }
                }
                Err(error) => {
                    warn!(%key, error = %CacheError::from(error), "cache entry not serializable");
                }
            }
        }

        self.cleanup();
    }

    /// Drop expired entries and evict past capacity. Returns the number
    /// of entries removed.
    pub fn cleanup(&self) -> usize {
        let mut store = match self.locked() {
            Ok(store) => store,
            Err(_) => return 0,
        };
        let removed = store.cleanup(Utc::now(), eviction_rank);
        if removed > 0 {
            debug!(removed, size = store.len(), "cache cleanup complete");
        }
        removed
    }

    /// Aggregate statistics over live entries.
    pub fn stats(&self) -> CacheStats {
        let store = match self.locked() {
            Ok(store) => store,
            Err(_) => return CacheStats::default(),
        };

        let mut stats = CacheStats {
            total_entries: store.len(),
            ..CacheStats::default()
        };
        let mut confidence_sum = 0.0;
        for entry in store.values() {
            stats.total_hits += entry.metadata.hit_count;
            confidence_sum += entry.metadata.confidence.value();
            *stats.by_type.entry(entry.metadata.query_type).or_insert(0) += 1;
        }
        if stats.total_entries > 0 {
            stats.avg_confidence = confidence_sum / stats.total_entries as f64;
        }
        stats
    }

    /// Most-hit cached queries, descending.
    pub fn popular_queries(&self, limit: usize) -> Vec<PopularQuery> {
        let store = match self.locked() {
            Ok(store) => store,
            Err(_) => return Vec::new(),
        };

        let mut popular: Vec<PopularQuery> = store
            .values()
            .filter(|entry| entry.metadata.hit_count > 0)
            .map(|entry| PopularQuery {
                query: entry.query.clone(),
                hit_count: entry.metadata.hit_count,
                query_type: entry.metadata.query_type,
            })
            .collect();
        popular.sort_by(|a, b| b.hit_count.cmp(&a.hit_count));
        popular.truncate(limit);
        popular
    }

    /// Bulk-load prepared results, e.g. for warmup with common queries.
    pub async fn preload(&self, batch: Vec<PreloadEntry>) {
        let count = batch.len();
        for item in batch {
            self.store(&item.query, &item.results, item.query_type, item.confidence, None)
                .await;
        }
        info!(count, "cache preload complete");
    }

    /// Drop everything.
    pub fn clear(&self) {
        if let Ok(mut store) = self.locked() {
            store.clear();
            info!("cache cleared");
        }
    }

    fn locked(&self) -> Result<MutexGuard<'_, BoundedStore>, CacheError> {
        self.store.lock().map_err(|_| CacheError::Poisoned)
    }
}

/// Eviction rank: 0.7 × hit count + 0.3 × recency, where recency is the
/// remaining fraction of the entry's lifetime. Lowest ranked is evicted
/// first.
pub fn eviction_rank(entry: &CacheEntry, now: DateTime<Utc>) -> f64 {
    let lifetime = (entry.expires_at - entry.metadata.timestamp)
        .num_seconds()
        .max(1) as f64;
    let remaining = (entry.expires_at - now).num_seconds().max(0) as f64;
    0.7 * entry.metadata.hit_count as f64 + 0.3 * (remaining / lifetime).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cache() -> SemanticCache {
        SemanticCache::new(CacheConfig::default())
    }

    fn ctx() -> RagContext {
        RagContext {
            confidence: Confidence::new(0.9),
            ..RagContext::default()
        }
    }

    #[tokio::test]
    async fn exact_hit_increments_hit_count() {
        let cache = cache();
        cache
            .store("AI funding", &ctx(), QueryType::FundingInfo, Confidence::new(0.9), None)
            .await;

        let hit = cache.check("ai funding", QueryType::FundingInfo).expect("hit");
        assert!(hit.is_exact);
        assert!((hit.similarity - 1.0).abs() < f64::EPSILON);
        assert_eq!(hit.entry.metadata.hit_count, 1);

        let hit = cache.check("AI FUNDING  ", QueryType::FundingInfo).expect("hit");
        assert_eq!(hit.entry.metadata.hit_count, 2);
    }

    #[tokio::test]
    async fn type_mismatch_is_a_miss() {
        let cache = cache();
        cache
            .store("AI funding", &ctx(), QueryType::FundingInfo, Confidence::new(0.9), None)
            .await;
        assert!(cache.check("AI funding", QueryType::General).is_none());
    }

    #[tokio::test]
    async fn semantic_hit_on_reordered_query() {
        let cache = cache();
        cache
            .store("latest AI funding rounds", &ctx(), QueryType::FundingInfo, Confidence::new(0.8), None)
            .await;

        let hit = cache
            .check("AI latest funding rounds", QueryType::FundingInfo)
            .expect("semantic hit");
        assert!(!hit.is_exact);
        assert!(hit.similarity >= 0.85);
    }

    #[tokio::test]
    async fn dissimilar_queries_never_hit_semantically() {
        let cache = cache();
        cache
            .store("latest AI funding rounds", &ctx(), QueryType::FundingInfo, Confidence::new(0.8), None)
            .await;
        assert!(cache
            .check("funding history of quantum chip factories in asia", QueryType::FundingInfo)
            .is_none());
    }

    #[tokio::test]
    async fn expired_entries_do_not_hit() {
        let cache = cache();
        cache
            .store("AI funding", &ctx(), QueryType::FundingInfo, Confidence::new(0.9), Some(Duration::ZERO))
            .await;
        assert!(cache.check("AI funding", QueryType::FundingInfo).is_none());
    }

    #[tokio::test]
    async fn capacity_bound_holds_after_inserts() {
        let config = CacheConfig {
            capacity: 20,
            evict_margin: 5,
            ..CacheConfig::default()
        };
        let cache = SemanticCache::new(config);
        for i in 0..40 {
            cache
                .store(&format!("query {i}"), &ctx(), QueryType::General, Confidence::new(0.5), None)
                .await;
        }
        assert!(cache.stats().total_entries <= 20);
    }

    #[tokio::test]
    async fn stats_and_popular_reflect_hits() {
        let cache = cache();
        cache
            .store("AI funding", &ctx(), QueryType::FundingInfo, Confidence::new(0.9), None)
            .await;
        cache
            .store("market size", &ctx(), QueryType::General, Confidence::new(0.7), None)
            .await;
        let _ = cache.check("AI funding", QueryType::FundingInfo);

        let stats = cache.stats();
        assert_eq!(stats.total_entries, 2);
        assert_eq!(stats.total_hits, 1);
        assert!(stats.avg_confidence > 0.0);
        assert_eq!(stats.by_type[&QueryType::FundingInfo], 1);

        let popular = cache.popular_queries(5);
        assert_eq!(popular.len(), 1);
        assert_eq!(popular[0].query, "AI funding");
    }

    #[tokio::test]
    async fn preload_fills_the_cache() {
        let cache = cache();
        cache
            .preload(vec![PreloadEntry {
                query: "common question".to_string(),
                results: ctx(),
                query_type: QueryType::General,
                confidence: Confidence::new(0.7),
            }])
            .await;
        assert!(cache.check("common question", QueryType::General).is_some());
    }

    #[tokio::test]
    async fn clear_empties_the_cache() {
        let cache = cache();
        cache
            .store("AI funding", &ctx(), QueryType::FundingInfo, Confidence::new(0.9), None)
            .await;
        cache.clear();
        assert_eq!(cache.stats().total_entries, 0);
    }

    #[test]
    fn newer_entries_outrank_older_ones_at_equal_hits() {
        let now = Utc::now();
        let mk = |age_hours: i64| CacheEntry {
            key: format!("k{age_hours}"),
            query: "q".to_string(),
            results: RagContext::default(),
            metadata: EntryMetadata {
                timestamp: now - chrono::Duration::hours(age_hours),
                hit_count: 0,
                query_type: QueryType::General,
                confidence: Confidence::new(0.5),
            },
            expires_at: now - chrono::Duration::hours(age_hours) + chrono::Duration::hours(6),
        };
        let fresh = mk(0);
        let stale = mk(5);
        assert!(eviction_rank(&fresh, now) > eviction_rank(&stale, now));
    }

    #[test]
    fn hits_dominate_recency_in_eviction_rank() {
        let now = Utc::now();
        let mk = |key: &str, hit_count: u64, expires_in_hours: i64| CacheEntry {
            key: key.to_string(),
            query: "q".to_string(),
            results: RagContext::default(),
            metadata: EntryMetadata {
                timestamp: now - chrono::Duration::hours(5),
                hit_count,
                query_type: QueryType::General,
                confidence: Confidence::new(0.5),
            },
            expires_at: now + chrono::Duration::hours(expires_in_hours),
        };
        // An old-but-hot entry outranks a fresher entry with no hits.
        let hot = mk("hot", 3, 1);
        let cold = mk("cold", 0, 6);
        assert!(eviction_rank(&hot, now) > eviction_rank(&cold, now));
    }
}
