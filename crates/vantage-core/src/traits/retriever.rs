use async_trait::async_trait;

use crate::errors::RagResult;
use crate::models::{RagContext, RetrievalOptions};

/// The single operation the engine exposes to callers.
#[async_trait]
pub trait IRetriever: Send + Sync {
    /// Answer a natural-language query with a ranked, deduplicated set of
    /// supporting passages and a reliability estimate.
    async fn retrieve(&self, query: &str, options: &RetrievalOptions) -> RagResult<RagContext>;
}
