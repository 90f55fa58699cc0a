use async_trait::async_trait;

use crate::errors::RagResult;
use crate::models::Document;

/// Read-only document corpus. The snapshot may be stale; loading,
/// fallback, and defaulting are entirely the collaborator's concern.
#[async_trait]
pub trait IDocumentCorpus: Send + Sync {
    /// Fetch the current document snapshot.
    async fn documents(&self) -> RagResult<Vec<Document>>;
}
