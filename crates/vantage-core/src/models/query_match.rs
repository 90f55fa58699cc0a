use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::FINGERPRINT_PREFIX_CHARS;
use crate::models::Document;

/// One independent retrieval method contributing candidate matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    Vector,
    Keyword,
    Pattern,
}

impl Strategy {
    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::Vector => "vector",
            Strategy::Keyword => "keyword",
            Strategy::Pattern => "pattern",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Optional breakdown of why a strategy scored a document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchDetail {
    /// Pre-fusion score assigned by the originating strategy.
    pub base_score: f64,
    /// Terms that hit, for keyword-style strategies.
    #[serde(default)]
    pub matched_terms: Vec<String>,
    /// Winning topical bag, for the pattern strategy.
    #[serde(default)]
    pub category: Option<String>,
}

/// A document annotated with its final score and originating strategy.
/// Produced fresh per query; never persisted standalone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedMatch {
    pub document: Document,
    /// Final fused score in [0, 1].
    pub score: f64,
    pub strategy: Strategy,
    #[serde(default)]
    pub detail: Option<MatchDetail>,
}

impl RankedMatch {
    /// Deduplication fingerprint: the document id, or the first
    /// `FINGERPRINT_PREFIX_CHARS` characters of content when absent.
    pub fn fingerprint(&self) -> String {
        if !self.document.id.is_empty() {
            self.document.id.clone()
        } else {
            self.document
                .content
                .chars()
                .take(FINGERPRINT_PREFIX_CHARS)
                .collect()
        }
    }
}
