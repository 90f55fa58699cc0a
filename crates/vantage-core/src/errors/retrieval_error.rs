/// Retrieval subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    #[error("query is empty or whitespace")]
    EmptyQuery,

    #[error("no embedding provider available")]
    NoEmbeddingProvider,

    #[error("embedding provider '{provider}' failed: {reason}")]
    Provider { provider: String, reason: String },

    #[error("vector index query failed: {reason}")]
    Index { reason: String },

    #[error("corpus fetch failed: {reason}")]
    Corpus { reason: String },
}
