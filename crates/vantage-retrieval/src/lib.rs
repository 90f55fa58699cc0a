//! # vantage-retrieval
//!
//! Retrieval orchestration and ranking for the Vantage knowledge corpus:
//! query expansion, a similarity-aware result cache, concurrent search
//! strategies (vector + weighted keyword + topical pattern), and fusion.
//!
//! The entry point is [`RetrievalEngine`], which implements
//! [`vantage_core::traits::IRetriever`].

pub mod cache;
pub mod engine;
pub mod expansion;
pub mod providers;
pub mod search;

pub use cache::SemanticCache;
pub use engine::RetrievalEngine;
pub use expansion::QueryExpander;
