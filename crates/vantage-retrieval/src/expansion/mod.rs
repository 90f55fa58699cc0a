//! Query expansion: classify, extract keywords, enrich with synonyms and
//! domain vocabulary, estimate expansion confidence.
//!
//! Pure transformation over curated static tables; no I/O, cannot fail
//! on well-formed input.

pub mod domain;
pub mod keywords;
pub mod patterns;
pub mod suggestions;
pub mod synonyms;

use tracing::debug;
use vantage_core::config::ExpansionConfig;
use vantage_core::models::{Confidence, QueryExpansion};

/// Share of the expansion cap given to synonyms.
const SYNONYM_SHARE: f64 = 0.4;
/// Share given to related terms.
const RELATED_SHARE: f64 = 0.4;
/// Share given to domain-context phrases.
const CONTEXT_SHARE: f64 = 0.2;

/// Stateless query expansion service. The lookup tables live in the
/// submodules as immutable statics built once per process.
#[derive(Debug, Default)]
pub struct QueryExpander;

impl QueryExpander {
    pub fn new() -> Self {
        Self
    }

    /// Expand a raw query into its enriched retrieval form.
    pub fn expand(&self, query: &str, config: &ExpansionConfig) -> QueryExpansion {
        let query_type = patterns::detect(query);
        let query_keywords = keywords::extract(query);
        let synonyms = synonyms::generate(&query_keywords);
        let related_terms = domain::related_terms(&query_keywords, query_type);
        let domain_context = if config.include_context {
            domain::build_context(query_type, &query_keywords)
        } else {
            Vec::new()
        };

        let expanded_query = build_expanded_query(
            query,
            &synonyms,
            &related_terms,
            &domain_context,
            config.max_expansions,
        );
        let confidence =
            expansion_confidence(query, &expanded_query, synonyms.len(), related_terms.len());

        debug!(
            %query_type,
            synonyms = synonyms.len(),
            related = related_terms.len(),
            %confidence,
            "query expanded"
        );

        QueryExpansion {
            original_query: query.to_string(),
            expanded_query,
            query_type,
            synonyms,
            related_terms,
            domain_context,
            confidence,
        }
    }
}

/// Append a capped, deduplicated token list to the original query:
/// roughly 40% synonyms, 40% related terms, 20% context phrases.
fn build_expanded_query(
    original: &str,
    synonyms: &[String],
    related_terms: &[String],
    domain_context: &[String],
    max_expansions: usize,
) -> String {
    let mut expansions: Vec<&str> = Vec::new();
    let synonym_cap = (max_expansions as f64 * SYNONYM_SHARE) as usize;
    let related_cap = (max_expansions as f64 * RELATED_SHARE) as usize;
    let context_cap = (max_expansions as f64 * CONTEXT_SHARE) as usize;

    expansions.extend(synonyms.iter().take(synonym_cap).map(String::as_str));
    expansions.extend(related_terms.iter().take(related_cap).map(String::as_str));
    expansions.extend(domain_context.iter().take(context_cap).map(String::as_str));

    if expansions.is_empty() {
        return original.to_string();
    }

    // Keep the original query as the head, then deduplicate token-wise.
    let combined = format!("{} {}", original, expansions.join(" "));
    let mut seen: Vec<&str> = Vec::new();
    for token in combined.split_whitespace() {
        if !seen.contains(&token) {
            seen.push(token);
        }
    }
    seen.join(" ")
}

/// Heuristic expansion confidence: length ratio, synonym and related-term
/// counts, and a bonus for short originals. Clipped to [0, 1].
fn expansion_confidence(
    original: &str,
    expanded: &str,
    synonym_count: usize,
    related_count: usize,
) -> Confidence {
    let mut confidence = 0.5;

    let original_len = original.chars().count().max(1) as f64;
    let ratio = expanded.chars().count() as f64 / original_len;
    if ratio > 1.2 && ratio < 3.0 {
        confidence += 0.2;
    }

    if synonym_count > 2 {
        confidence += 0.2;
    }
    if related_count > 3 {
        confidence += 0.2;
    }

    if original.chars().count() < 20 {
        confidence += 0.1;
    }

    Confidence::new(confidence)
}

#[cfg(test)]
mod tests {
    use vantage_core::QueryType;

    use super::*;

    #[test]
    fn expansion_keeps_original_head_and_dedupes() {
        let expander = QueryExpander::new();
        let result = expander.expand("AI funding round", &ExpansionConfig::default());

        assert!(result.is_expanded());
        assert!(result.expanded_query.starts_with("AI funding round"));
        assert_eq!(result.query_type, QueryType::FundingInfo);
        // "funding"/"investment"-class synonyms came in.
        assert!(result.synonyms.iter().any(|s| s == "investment"));

        let tokens: Vec<&str> = result.expanded_query.split_whitespace().collect();
        let unique: std::collections::HashSet<&str> = tokens.iter().copied().collect();
        assert_eq!(tokens.len(), unique.len(), "expanded query has duplicate tokens");
    }

    #[test]
    fn no_expansions_returns_original() {
        let expanded = build_expanded_query("plain", &[], &[], &[], 10);
        assert_eq!(expanded, "plain");
    }

    #[test]
    fn confidence_is_clamped() {
        let c = expansion_confidence("ai", "ai plus many expansion tokens here", 5, 5);
        assert!(c.value() <= 1.0);
        let c = expansion_confidence("a long query that is not expanded at all beyond", "same", 0, 0);
        assert!(c.value() >= 0.0);
    }

    #[test]
    fn context_can_be_disabled() {
        let expander = QueryExpander::new();
        let config = ExpansionConfig { include_context: false, ..ExpansionConfig::default() };
        let result = expander.expand("market trend analysis", &config);
        assert!(result.domain_context.is_empty());
    }
}
