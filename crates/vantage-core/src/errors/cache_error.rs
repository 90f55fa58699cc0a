/// Semantic cache errors. All of these are swallowed at the engine
/// boundary; the cache degrades to in-memory-only or to a miss.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("persistent store operation failed: {reason}")]
    Persistence { reason: String },

    #[error("cache entry serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("cache lock poisoned")]
    Poisoned,
}
