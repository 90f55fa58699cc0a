//! Data model for queries, matches, cache entries, and results.

mod cache_entry;
mod confidence;
mod document;
mod expansion;
mod options;
mod query_match;
mod rag_context;

pub use cache_entry::{CacheEntry, CacheHit, EntryMetadata};
pub use confidence::Confidence;
pub use document::Document;
pub use expansion::QueryExpansion;
pub use options::RetrievalOptions;
pub use query_match::{MatchDetail, RankedMatch, Strategy};
pub use rag_context::{CacheInfo, RagContext};
