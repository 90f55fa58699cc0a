//! Weighted keyword strategy.
//!
//! Builds a weighted term set from the expansion (original-query terms
//! 1.0, expansion-only terms 0.8, synonyms 0.6) and scores each corpus
//! document by weighted term frequency in content (×0.7) and title
//! (×1.2), with a coverage bonus, then a query-type vocabulary boost.

use std::sync::Arc;

use tracing::debug;

use vantage_core::errors::RagResult;
use vantage_core::models::{Document, MatchDetail, QueryExpansion};
use vantage_core::traits::IDocumentCorpus;

use crate::expansion::keywords;
use crate::search::boost_matrix::TypeBoostMatrix;
use crate::search::Candidate;

/// Weight of original-query terms.
const ORIGINAL_WEIGHT: f64 = 1.0;
/// Weight of expansion-only (related/context) terms.
const EXPANSION_WEIGHT: f64 = 0.8;
/// Weight of synonyms.
const SYNONYM_WEIGHT: f64 = 0.6;

/// Channel multiplier for content-frequency hits.
const CONTENT_CHANNEL: f64 = 0.7;
/// Channel multiplier for title hits.
const TITLE_CHANNEL: f64 = 1.2;

/// A search term with its provenance weight.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedTerm {
    pub term: String,
    pub weight: f64,
}

/// Build the weighted, deduplicated term set for an expansion. Earlier
/// (heavier) provenance wins when a term appears in several places.
pub fn weighted_terms(expansion: &QueryExpansion) -> Vec<WeightedTerm> {
    let mut terms: Vec<WeightedTerm> = Vec::new();
    let mut push = |term: String, weight: f64, terms: &mut Vec<WeightedTerm>| {
        if !term.is_empty() && !terms.iter().any(|t| t.term == term) {
            terms.push(WeightedTerm { term, weight });
        }
    };

    for term in keywords::extract(&expansion.original_query) {
        push(term, ORIGINAL_WEIGHT, &mut terms);
    }
    for term in expansion.related_terms.iter().chain(&expansion.domain_context) {
        push(term.to_lowercase(), EXPANSION_WEIGHT, &mut terms);
    }
    for term in &expansion.synonyms {
        push(term.to_lowercase(), SYNONYM_WEIGHT, &mut terms);
    }

    terms
}

/// Score one document against the weighted term set.
/// Returns the clamped score and the terms that matched.
pub fn score_document(document: &Document, terms: &[WeightedTerm]) -> (f64, Vec<String>) {
    let content = document.content.to_lowercase();
    let title = document.title.to_lowercase();
    let content_words = content.split_whitespace().count().max(1) as f64;
    let title_words = title.split_whitespace().count().max(1) as f64;
    let total_weight: f64 = terms.iter().map(|t| t.weight).sum::<f64>().max(f64::EPSILON);

    let mut score = 0.0;
    let mut matched_weight = 0.0;
    let mut matched_terms = Vec::new();

    for weighted in terms {
        let in_content = content.matches(weighted.term.as_str()).count() as f64;
        let in_title = title.matches(weighted.term.as_str()).count() as f64;
        if in_content == 0.0 && in_title == 0.0 {
            continue;
        }

        matched_weight += weighted.weight;
        matched_terms.push(weighted.term.clone());
        score += weighted.weight
            * (CONTENT_CHANNEL * (in_content / content_words)
                + TITLE_CHANNEL * (in_title / title_words));
    }

    let coverage = matched_weight / total_weight;
    let clamped = ((score + coverage * 0.3) * 2.0).min(1.0);
    (clamped, matched_terms)
}

/// Run the weighted keyword strategy over the corpus snapshot.
pub async fn run(
    corpus: &Arc<dyn IDocumentCorpus>,
    expansion: &QueryExpansion,
    boosts: &TypeBoostMatrix,
) -> RagResult<Vec<Candidate>> {
    let documents = corpus.documents().await?;
    let terms = weighted_terms(expansion);
    if terms.is_empty() {
        return Ok(Vec::new());
    }
    debug!(terms = terms.len(), documents = documents.len(), "keyword strategy scoring");

    let mut candidates: Vec<Candidate> = Vec::new();
    for document in documents {
        let (base, matched_terms) = score_document(&document, &terms);
        if base <= 0.0 {
            continue;
        }
        let boost = boosts.boost(expansion.query_type, &document);
        let score = (base * boost).min(1.0);
        candidates.push(Candidate {
            document,
            score,
            detail: Some(MatchDetail {
                base_score: base,
                matched_terms,
                category: None,
            }),
        });
    }

    candidates.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    Ok(candidates)
}
