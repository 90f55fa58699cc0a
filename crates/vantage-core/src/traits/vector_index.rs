use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::RagResult;
use crate::models::Document;

/// One nearest-neighbor hit from the vector index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorHit {
    pub id: String,
    /// Index-reported similarity score.
    pub score: f64,
    /// The stored document snapshot, when the index returns metadata.
    #[serde(default)]
    pub document: Option<Document>,
}

/// Approximate nearest-neighbor index over corpus embeddings.
#[async_trait]
pub trait IVectorIndex: Send + Sync {
    /// Query the index for the `top_k` nearest neighbors of `vector`.
    async fn query(&self, vector: &[f32], top_k: usize) -> RagResult<Vec<VectorHit>>;
}
