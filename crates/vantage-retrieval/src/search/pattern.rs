//! Pattern/category strategy: score the query against fixed topical
//! keyword bags, pick the winning bag, and return the documents whose
//! overlap with that bag clears the relevance threshold.

use std::sync::Arc;

use tracing::debug;

use vantage_core::errors::RagResult;
use vantage_core::models::{Document, MatchDetail};
use vantage_core::traits::IDocumentCorpus;

use crate::search::Candidate;

/// A topical category: terms matched against the query, and the larger
/// vocabulary used to score documents.
struct CategoryBag {
    name: &'static str,
    query_terms: &'static [&'static str],
    doc_terms: &'static [&'static str],
}

const BAGS: &[CategoryBag] = &[
    CategoryBag {
        name: "investment",
        query_terms: &["投资", "融资", "轮次", "vc", "funding"],
        doc_terms: &["投资", "融资", "资金", "轮次", "估值", "vc", "基金", "funding", "investment"],
    },
    CategoryBag {
        name: "startup",
        query_terms: &["公司", "创业", "企业", "startup", "company"],
        doc_terms: &["公司", "初创", "创业", "企业", "团队", "独角兽", "startup", "company"],
    },
    CategoryBag {
        name: "trend",
        query_terms: &["趋势", "市场", "前景", "trend", "market"],
        doc_terms: &["趋势", "市场", "发展", "前景", "预测", "未来", "trend", "market"],
    },
    CategoryBag {
        name: "technology",
        query_terms: &["技术", "ai", "人工智能", "tech"],
        doc_terms: &["技术", "ai", "人工智能", "算法", "模型", "technology"],
    },
];

/// Pick the bag whose query terms overlap the query the most.
/// Ties go to declaration order.
fn best_category(query: &str) -> &'static CategoryBag {
    let lowered = query.to_lowercase();
    let hits = |bag: &CategoryBag| {
        bag.query_terms
            .iter()
            .filter(|term| lowered.contains(*term))
            .count()
    };

    let mut best = &BAGS[0];
    let mut best_hits = hits(best);
    for bag in &BAGS[1..] {
        let bag_hits = hits(bag);
        if bag_hits > best_hits {
            best = bag;
            best_hits = bag_hits;
        }
    }
    best
}

/// Overlap score between a document and a category vocabulary:
/// content hits 0.3, title hits 0.5, curated-keyword hits 0.4 each, plus
/// a normalized match-count bonus, clamped to 1.0.
fn category_score(document: &Document, bag: &CategoryBag) -> f64 {
    let content = document.content.to_lowercase();
    let title = document.title.to_lowercase();

    let mut score = 0.0;
    let mut matches = 0usize;

    for term in bag.doc_terms {
        if content.contains(term) {
            score += 0.3;
            matches += 1;
        }
        if title.contains(term) {
            score += 0.5;
            matches += 1;
        }
    }

    for keyword in &document.keywords {
        let keyword = keyword.to_lowercase();
        if bag
            .doc_terms
            .iter()
            .any(|term| term.contains(keyword.as_str()) || keyword.contains(term))
        {
            score += 0.4;
            matches += 1;
        }
    }

    (score + (matches as f64 / bag.doc_terms.len() as f64) * 0.2).min(1.0)
}

/// Run the pattern strategy against the raw query.
pub async fn run(
    corpus: &Arc<dyn IDocumentCorpus>,
    query: &str,
    relevance_threshold: f64,
    limit: usize,
) -> RagResult<Vec<Candidate>> {
    let documents = corpus.documents().await?;
    let bag = best_category(query);
    debug!(category = bag.name, documents = documents.len(), "pattern strategy category");

    let mut candidates: Vec<Candidate> = documents
        .into_iter()
        .filter_map(|document| {
            let score = category_score(&document, bag);
            (score > relevance_threshold).then(|| Candidate {
                document,
                score,
                detail: Some(MatchDetail {
                    base_score: score,
                    matched_terms: Vec::new(),
                    category: Some(bag.name.to_string()),
                }),
            })
        })
        .collect();

    candidates.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    candidates.truncate(limit);
    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn funding_query_selects_the_investment_bag() {
        assert_eq!(best_category("latest funding for AI startups").name, "investment");
    }

    #[test]
    fn tie_goes_to_declaration_order() {
        // No bag term matches at all: every bag scores zero.
        assert_eq!(best_category("completely unrelated words").name, "investment");
    }

    #[test]
    fn technology_bag_wins_on_stronger_overlap() {
        assert_eq!(best_category("AI 技术 人工智能 tech deep dive").name, "technology");
    }

    #[test]
    fn category_score_rewards_title_over_content() {
        let bag = &BAGS[0];
        let titled = Document {
            id: "a".to_string(),
            title: "funding overview".to_string(),
            content: "General remarks.".to_string(),
            ..Document::default()
        };
        let bodied = Document {
            id: "b".to_string(),
            title: "Overview".to_string(),
            content: "Notes on funding.".to_string(),
            ..Document::default()
        };
        assert!(category_score(&titled, bag) > category_score(&bodied, bag));
    }

    #[test]
    fn curated_keywords_contribute() {
        let bag = &BAGS[0];
        let doc = Document {
            id: "k".to_string(),
            title: "Untitled".to_string(),
            content: "No obvious overlap.".to_string(),
            keywords: vec!["investment".to_string()],
            ..Document::default()
        };
        assert!(category_score(&doc, bag) > 0.0);
    }
}
