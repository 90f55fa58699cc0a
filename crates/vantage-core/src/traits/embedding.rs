use async_trait::async_trait;

use crate::errors::RagResult;

/// Embedding generation provider. Zero, one, or two interchangeable
/// providers may be configured; absence of all disables vector search.
#[async_trait]
pub trait IEmbeddingProvider: Send + Sync {
    /// Embed a single text, returning a vector of floats.
    async fn embed(&self, text: &str) -> RagResult<Vec<f32>>;

    /// Human-readable provider name.
    fn name(&self) -> &str;

    /// Whether this provider is currently usable (e.g. has credentials).
    fn is_available(&self) -> bool;
}
