//! RetrievalEngine: implements IRetriever, orchestrates the pipeline.
//!
//! query → expand → semantic cache → concurrent strategies (vector +
//! keyword + pattern, all-settled) → fuse/dedup/rescore → cache write-back.

use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use tracing::{debug, info};

use vantage_core::config::RagConfig;
use vantage_core::errors::{RagResult, RetrievalError};
use vantage_core::models::{CacheInfo, QueryExpansion, RagContext, RetrievalOptions, Strategy};
use vantage_core::traits::{
    IDocumentCorpus, IEmbeddingProvider, IKeyValueStore, IRetriever, IVectorIndex,
};

use crate::cache::SemanticCache;
use crate::expansion::{keywords, suggestions, QueryExpander};
use crate::search::boost_matrix::TypeBoostMatrix;
use crate::search::{fusion, keyword, pattern, vector, StrategyOutcome};

/// The main retrieval engine. Holds the corpus, optional vector backends,
/// the semantic cache, and the expansion service.
pub struct RetrievalEngine {
    corpus: Arc<dyn IDocumentCorpus>,
    vector_index: Option<Arc<dyn IVectorIndex>>,
    providers: Vec<Arc<dyn IEmbeddingProvider>>,
    cache: SemanticCache,
    expander: QueryExpander,
    boosts: TypeBoostMatrix,
    config: RagConfig,
}

impl RetrievalEngine {
    pub fn new(corpus: Arc<dyn IDocumentCorpus>, config: RagConfig) -> Self {
        let cache = SemanticCache::new(config.cache.clone());
        Self {
            corpus,
            vector_index: None,
            providers: Vec::new(),
            cache,
            expander: QueryExpander::new(),
            boosts: TypeBoostMatrix::default_boosts(),
            config,
        }
    }

    /// Attach a vector index. Without one the vector strategy never runs.
    pub fn with_vector_index(mut self, index: Arc<dyn IVectorIndex>) -> Self {
        self.vector_index = Some(index);
        self
    }

    /// Add an embedding provider. The first available one is used.
    pub fn with_embedding_provider(mut self, provider: Arc<dyn IEmbeddingProvider>) -> Self {
        self.providers.push(provider);
        self
    }

    /// Attach a persistent key/value store for best-effort cache durability.
    pub fn with_kv_store(mut self, kv: Arc<dyn IKeyValueStore>) -> Self {
        self.cache = self.cache.with_kv_store(kv);
        self
    }

    /// Access the semantic cache, e.g. for stats, warmup, or clearing.
    pub fn cache(&self) -> &SemanticCache {
        &self.cache
    }

    /// Run the full retrieval pipeline for one query.
    pub async fn retrieve(
        &self,
        query: &str,
        options: &RetrievalOptions,
    ) -> RagResult<RagContext> {
        let started = Instant::now();
        let query = query.trim();
        if query.is_empty() {
            return Err(RetrievalError::EmptyQuery.into());
        }

        // Step 1: Expand the raw query.
        let expansion = self.expander.expand(query, &self.config.expansion);

        // Step 2: Semantic cache; a strong-enough hit skips retrieval.
        if let Some(hit) = self.cache.check(query, expansion.query_type) {
            if hit.similarity >= self.config.cache.accept_threshold {
                info!(
                    similarity = hit.similarity,
                    exact = hit.is_exact,
                    "serving cache-accelerated result"
                );
                let mut context = hit.entry.results.clone();
                context.cache = CacheInfo {
                    from_cache: true,
                    similarity: Some(hit.similarity),
                    exact: hit.is_exact,
                };
                context.response_time_ms = started.elapsed().as_millis() as u64;
                return Ok(context);
            }
        }

        // Step 3: Launch strategies concurrently; the join is all-settled,
        // so a failing branch never blocks or voids the others.
        let top_k = options.top_k.unwrap_or(self.config.retrieval.top_k);
        let (vector_outcome, keyword_outcome, pattern_outcome) = tokio::join!(
            self.run_vector(&expansion, top_k),
            self.run_keyword(&expansion),
            self.run_pattern(&expansion),
        );

        let mut outcomes: Vec<StrategyOutcome> = Vec::with_capacity(3);
        if let Some(outcome) = vector_outcome {
            outcomes.push(outcome);
        }
        outcomes.push(keyword_outcome);
        outcomes.push(pattern_outcome);

        // Steps 4–6: Merge, deduplicate, rescore, rank, cap.
        let merged = fusion::merge(outcomes, options.threshold, &self.config.retrieval);
        info!(
            matches = merged.matches.len(),
            confidence = %merged.confidence,
            strategies = merged.strategies_attempted,
            "fusion complete"
        );

        let mut context = if merged.matches.is_empty() {
            RagContext::no_results(query, merged.strategies_attempted)
        } else {
            RagContext {
                matches: merged.matches,
                sources: merged.sources,
                confidence: merged.confidence,
                strategies_attempted: merged.strategies_attempted,
                ..RagContext::default()
            }
        };

        if options.include_alternatives {
            let query_keywords = keywords::extract(query);
            context.alternatives = suggestions::generate(expansion.query_type, &query_keywords);
        }

        let query_type = expansion.query_type;
        context.expansion = Some(expansion);

        // Step 7: Write back, keyed by the original query and its type.
        if !context.matches.is_empty()
            && context.confidence.meets(self.config.retrieval.write_back_confidence)
        {
            self.cache
                .store(query, &context, query_type, context.confidence, None)
                .await;
        }

        context.response_time_ms = started.elapsed().as_millis() as u64;
        Ok(context)
    }

    /// Vector strategy, or `None` when it is not configured at all.
    /// An omitted strategy is not an attempted one.
    async fn run_vector(
        &self,
        expansion: &QueryExpansion,
        top_k: usize,
    ) -> Option<StrategyOutcome> {
        let index = self.vector_index.as_ref()?;
        if !self.providers.iter().any(|p| p.is_available()) {
            debug!("no embedding backend configured; vector strategy skipped");
            return None;
        }
        let result = vector::run(&self.providers, index, &expansion.expanded_query, top_k).await;
        Some(StrategyOutcome::from_result(Strategy::Vector, result))
    }

    async fn run_keyword(&self, expansion: &QueryExpansion) -> StrategyOutcome {
        let result = keyword::run(&self.corpus, expansion, &self.boosts).await;
        StrategyOutcome::from_result(Strategy::Keyword, result)
    }

    async fn run_pattern(&self, expansion: &QueryExpansion) -> StrategyOutcome {
        let result = pattern::run(
            &self.corpus,
            &expansion.original_query,
            self.config.retrieval.pattern_relevance_threshold,
            self.config.retrieval.pattern_limit,
        )
        .await;
        StrategyOutcome::from_result(Strategy::Pattern, result)
    }
}

#[async_trait]
impl IRetriever for RetrievalEngine {
    async fn retrieve(&self, query: &str, options: &RetrievalOptions) -> RagResult<RagContext> {
        RetrievalEngine::retrieve(self, query, options).await
    }
}
