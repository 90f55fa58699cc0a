use serde::{Deserialize, Serialize};

use crate::models::Confidence;
use crate::query_type::QueryType;

/// The outcome of query expansion. Created once per incoming query and
/// read-only afterward.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryExpansion {
    pub original_query: String,
    /// Original query plus a capped, deduplicated tail of expansion tokens.
    pub expanded_query: String,
    pub query_type: QueryType,
    /// Deduplicated synonyms, first-seen order.
    pub synonyms: Vec<String>,
    /// Domain vocabulary related to the detected type and keywords.
    pub related_terms: Vec<String>,
    /// Up to 5 human-readable context phrases.
    pub domain_context: Vec<String>,
    pub confidence: Confidence,
}

impl QueryExpansion {
    /// Whether expansion actually added anything to the query.
    pub fn is_expanded(&self) -> bool {
        self.expanded_query.len() > self.original_query.len()
    }
}
