use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants::MAX_CONTEXT_MATCHES;

/// Per-strategy rescoring multipliers applied during fusion.
/// A boost of 1.0 is neutral; >1.0 promotes, <1.0 demotes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FusionWeights {
    pub vector_boost: f64,
    pub keyword_boost: f64,
    pub pattern_boost: f64,
    /// Multiplier for documents longer than `long_content_chars`.
    pub long_content_bonus: f64,
    pub long_content_chars: usize,
    /// Confidence multiplier when ≥2 distinct strategies contributed.
    pub multi_strategy_bonus: f64,
}

impl Default for FusionWeights {
    fn default() -> Self {
        Self {
            vector_boost: 1.2,
            keyword_boost: 1.0,
            pattern_boost: 0.8,
            long_content_bonus: 1.1,
            long_content_chars: 200,
            multi_strategy_bonus: 1.2,
        }
    }
}

/// Orchestrator and strategy configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Nearest-neighbor count requested from the vector index.
    pub top_k: usize,
    /// Cap on matches in a returned context.
    pub max_matches: usize,
    /// Minimum merged confidence for writing the result back to the cache.
    pub write_back_confidence: f64,
    /// Minimum bag-overlap score for the pattern strategy.
    pub pattern_relevance_threshold: f64,
    /// Documents returned by the pattern strategy.
    pub pattern_limit: usize,
    pub fusion: FusionWeights,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            top_k: defaults::DEFAULT_TOP_K,
            max_matches: MAX_CONTEXT_MATCHES,
            write_back_confidence: defaults::DEFAULT_WRITE_BACK_CONFIDENCE,
            pattern_relevance_threshold: defaults::DEFAULT_PATTERN_RELEVANCE,
            pattern_limit: defaults::DEFAULT_PATTERN_LIMIT,
            fusion: FusionWeights::default(),
        }
    }
}
