//! Vector strategy: embed the expanded query through the first available
//! provider, then ask the index for the nearest neighbors.

use std::sync::Arc;

use tracing::debug;

use vantage_core::errors::{RagResult, RetrievalError};
use vantage_core::traits::{IEmbeddingProvider, IVectorIndex};

use crate::search::Candidate;

/// Run the vector strategy. Callers only invoke this when an index is
/// configured; provider availability is re-checked here since it can
/// change between construction and query time.
pub async fn run(
    providers: &[Arc<dyn IEmbeddingProvider>],
    index: &Arc<dyn IVectorIndex>,
    expanded_query: &str,
    top_k: usize,
) -> RagResult<Vec<Candidate>> {
    let provider = providers
        .iter()
        .find(|p| p.is_available())
        .ok_or(RetrievalError::NoEmbeddingProvider)?;

    debug!(provider = provider.name(), top_k, "vector strategy embedding query");
    let vector = provider.embed(expanded_query).await?;
    let hits = index.query(&vector, top_k).await?;

    let mut candidates = Vec::with_capacity(hits.len());
    for hit in hits {
        match hit.document {
            Some(document) => candidates.push(Candidate {
                document,
                score: hit.score,
                detail: None,
            }),
            // A hit the index cannot resolve to a document is useless
            // downstream; drop it rather than fabricate content.
            None => debug!(id = %hit.id, "vector hit without stored document; dropped"),
        }
    }

    Ok(candidates)
}
