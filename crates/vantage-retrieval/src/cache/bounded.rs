//! Capacity-bounded entry store with pluggable score-based eviction.
//!
//! The eviction heuristic is a hook, not baked in: cleanup takes a rank
//! function and evicts the lowest-ranked entries once capacity is
//! exceeded, down to a safety margin below the bound.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use vantage_core::models::CacheEntry;

/// Bounded in-memory map of cache entries keyed by cache key.
#[derive(Debug)]
pub struct BoundedStore {
    entries: HashMap<String, CacheEntry>,
    capacity: usize,
    evict_margin: usize,
}

impl BoundedStore {
    pub fn new(capacity: usize, evict_margin: usize) -> Self {
        Self {
            entries: HashMap::new(),
            capacity,
            evict_margin,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn insert(&mut self, entry: CacheEntry) {
        self.entries.insert(entry.key.clone(), entry);
    }

    pub fn get(&self, key: &str) -> Option<&CacheEntry> {
        self.entries.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut CacheEntry> {
        self.entries.get_mut(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<CacheEntry> {
        self.entries.remove(key)
    }

    pub fn values(&self) -> impl Iterator<Item = &CacheEntry> {
        self.entries.values()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Remove expired entries, then, if still over capacity, evict the
    /// lowest-ranked entries until the store holds `capacity - margin`.
    /// Returns how many entries were removed.
    pub fn cleanup<F>(&mut self, now: DateTime<Utc>, rank: F) -> usize
    where
        F: Fn(&CacheEntry, DateTime<Utc>) -> f64,
    {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired(now));

        if self.entries.len() > self.capacity {
            let target = self.capacity.saturating_sub(self.evict_margin);
            let excess = self.entries.len() - target;

            let mut ranked: Vec<(String, f64)> = self
                .entries
                .iter()
                .map(|(key, entry)| (key.clone(), rank(entry, now)))
                .collect();
            ranked.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

            for (key, _) in ranked.into_iter().take(excess) {
                self.entries.remove(&key);
            }
        }

        before - self.entries.len()
    }
}
