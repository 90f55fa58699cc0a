use serde::{Deserialize, Serialize};

/// Per-call options for `IRetriever::retrieve`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalOptions {
    /// Overrides the configured nearest-neighbor count.
    pub top_k: Option<usize>,
    /// Minimum final score; matches below it are dropped before the cap.
    pub threshold: Option<f64>,
    /// Attach suggested follow-up queries to the returned context.
    pub include_alternatives: bool,
}
