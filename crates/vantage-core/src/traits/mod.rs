//! Collaborator contracts consumed (and, for `IRetriever`, exposed) by
//! the engine. All traits are object-safe and async via `async_trait`.

mod corpus;
mod embedding;
mod kv_store;
mod retriever;
mod vector_index;

pub use corpus::IDocumentCorpus;
pub use embedding::IEmbeddingProvider;
pub use kv_store::IKeyValueStore;
pub use retriever::IRetriever;
pub use vector_index::{IVectorIndex, VectorHit};
