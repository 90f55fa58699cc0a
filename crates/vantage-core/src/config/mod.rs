//! Engine configuration.
//!
//! Every tunable the pipeline reads lives here as a named field with a
//! serde default, so the observed magic numbers (0.85 semantic threshold,
//! 0.6 write-back, 0.8 cache-accept …) stay visible and overridable.

mod cache_config;
mod expansion_config;
mod retrieval_config;

pub use cache_config::CacheConfig;
pub use expansion_config::ExpansionConfig;
pub use retrieval_config::{FusionWeights, RetrievalConfig};

use serde::{Deserialize, Serialize};

/// Default values shared by the config structs.
pub mod defaults {
    /// Cap on appended expansion tokens.
    pub const DEFAULT_MAX_EXPANSIONS: usize = 10;

    /// In-memory cache capacity bound.
    pub const DEFAULT_CACHE_CAPACITY: usize = 1000;
    /// Entries evicted below capacity on cleanup, as a safety margin.
    pub const DEFAULT_EVICT_MARGIN: usize = 100;
    /// Cache entry lifetime: 6 hours.
    pub const DEFAULT_TTL_SECS: u64 = 6 * 60 * 60;
    /// Minimum combined similarity for a semantic (non-exact) cache hit.
    pub const DEFAULT_SEMANTIC_THRESHOLD: f64 = 0.85;
    /// Minimum hit similarity for skipping retrieval entirely.
    pub const DEFAULT_CACHE_ACCEPT_THRESHOLD: f64 = 0.8;

    /// Nearest-neighbor count requested from the vector index.
    pub const DEFAULT_TOP_K: usize = 5;
    /// Minimum merged-result confidence for a cache write-back.
    pub const DEFAULT_WRITE_BACK_CONFIDENCE: f64 = 0.6;
    /// Minimum bag-overlap score for the pattern strategy.
    pub const DEFAULT_PATTERN_RELEVANCE: f64 = 0.3;
    /// Documents returned by the pattern strategy.
    pub const DEFAULT_PATTERN_LIMIT: usize = 5;
}

/// Top-level configuration for the retrieval engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RagConfig {
    pub expansion: ExpansionConfig,
    pub cache: CacheConfig,
    pub retrieval: RetrievalConfig,
}

impl RagConfig {
    /// Parse a config from TOML, filling omitted fields with defaults.
    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }
}
