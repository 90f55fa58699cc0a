//! # vantage-core
//!
//! Foundation crate for the Vantage retrieval engine.
//! Defines all models, traits, errors, config, and constants.
//! The retrieval crate depends on this; collaborators implement its traits.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod query_type;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::RagConfig;
pub use errors::{RagError, RagResult};
pub use models::{
    Confidence, Document, QueryExpansion, RagContext, RankedMatch, RetrievalOptions, Strategy,
};
pub use query_type::QueryType;
