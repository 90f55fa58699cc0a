//! Error taxonomy for the retrieval engine.
//!
//! Subsystem enums live in their own files; `RagError` aggregates them.
//! Policy: validation errors reach the caller, provider faults are caught
//! per-strategy, cache faults are logged and swallowed.

mod cache_error;
mod retrieval_error;

pub use cache_error::CacheError;
pub use retrieval_error::RetrievalError;

/// Top-level error for the Vantage engine.
#[derive(Debug, thiserror::Error)]
pub enum RagError {
    #[error(transparent)]
    Retrieval(#[from] RetrievalError),

    #[error(transparent)]
    Cache(#[from] CacheError),
}

/// Result alias used across the workspace.
pub type RagResult<T> = Result<T, RagError>;
