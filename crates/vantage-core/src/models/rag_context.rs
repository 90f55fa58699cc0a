use serde::{Deserialize, Serialize};

use crate::models::{Confidence, QueryExpansion, RankedMatch};

/// How a result relates to the semantic cache.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CacheInfo {
    pub from_cache: bool,
    /// Similarity of the cache hit, when served from cache.
    #[serde(default)]
    pub similarity: Option<f64>,
    /// Whether the hit was an exact-key match rather than a semantic one.
    #[serde(default)]
    pub exact: bool,
}

/// The ranked, deduplicated result of one retrieval.
///
/// Invariants: `matches.len() <= max_matches` (8 by default), no two
/// matches share a fingerprint, confidence is clamped to [0, 1].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RagContext {
    /// Matches ordered by final score, descending.
    pub matches: Vec<RankedMatch>,
    /// Deduplicated display labels, insertion order.
    pub sources: Vec<String>,
    pub confidence: Confidence,
    /// How many strategies were launched for this query.
    pub strategies_attempted: usize,
    #[serde(default)]
    pub expansion: Option<QueryExpansion>,
    #[serde(default)]
    pub cache: CacheInfo,
    pub response_time_ms: u64,
    /// Explanatory message on the no-results path.
    #[serde(default)]
    pub notice: Option<String>,
    /// Suggested follow-up queries, populated on request.
    #[serde(default)]
    pub alternatives: Vec<String>,
}

impl RagContext {
    /// The typed low-confidence result returned when every strategy came
    /// back empty or failed.
    pub fn no_results(query: &str, strategies_attempted: usize) -> Self {
        Self {
            confidence: Confidence::ZERO,
            strategies_attempted,
            notice: Some(format!("no supporting passages found for \"{query}\"")),
            ..Self::default()
        }
    }

    /// Distinct strategies among the final matches.
    pub fn contributing_strategies(&self) -> usize {
        let mut seen = Vec::new();
        for m in &self.matches {
            if !seen.contains(&m.strategy) {
                seen.push(m.strategy);
            }
        }
        seen.len()
    }
}
