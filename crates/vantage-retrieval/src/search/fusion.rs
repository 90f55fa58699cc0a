//! Result fusion: flatten tagged strategy outcomes, deduplicate by
//! fingerprint, rescore with strategy and content multipliers, rank,
//! cap, and estimate confidence.

use std::collections::HashSet;

use tracing::warn;

use vantage_core::config::RetrievalConfig;
use vantage_core::models::{Confidence, RankedMatch, Strategy};

use crate::search::StrategyOutcome;

/// The merged output of all settled strategies.
#[derive(Debug)]
pub struct MergedOutput {
    /// Deduplicated matches, final-score descending, capped.
    pub matches: Vec<RankedMatch>,
    /// Deduplicated display labels, insertion order.
    pub sources: Vec<String>,
    pub confidence: Confidence,
    pub strategies_attempted: usize,
}

/// Merge settled strategy outcomes into a ranked result.
///
/// Failed branches are logged and contribute nothing; the first
/// occurrence of a fingerprint wins during deduplication.
pub fn merge(
    outcomes: Vec<StrategyOutcome>,
    score_floor: Option<f64>,
    config: &RetrievalConfig,
) -> MergedOutput {
    let strategies_attempted = outcomes.len();

    let mut tagged: Vec<RankedMatch> = Vec::new();
    for outcome in outcomes {
        match outcome.result {
            Ok(candidates) => {
                for candidate in candidates {
                    tagged.push(RankedMatch {
                        document: candidate.document,
                        score: candidate.score,
                        strategy: outcome.strategy,
                        detail: candidate.detail,
                    });
                }
            }
            Err(error) => {
                warn!(strategy = %outcome.strategy, %error, "strategy failed; contributes no matches");
            }
        }
    }

    // Deduplicate: first occurrence wins.
    let mut seen: HashSet<String> = HashSet::new();
    tagged.retain(|m| seen.insert(m.fingerprint()));

    // Rescore with strategy and content-length multipliers, capped at 1.
    let fusion = &config.fusion;
    for m in &mut tagged {
        let strategy_boost = match m.strategy {
            Strategy::Vector => fusion.vector_boost,
            Strategy::Keyword => fusion.keyword_boost,
            Strategy::Pattern => fusion.pattern_boost,
        };
        let content_bonus = if m.document.content.chars().count() > fusion.long_content_chars {
            fusion.long_content_bonus
        } else {
            1.0
        };
        m.score = (m.score * strategy_boost * content_bonus).min(1.0);
    }

    if let Some(floor) = score_floor {
        tagged.retain(|m| m.score >= floor);
    }

    tagged.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    tagged.truncate(config.max_matches);

    // Confidence: mean final score, with a bonus when several strategies
    // contributed to the surviving set.
    let confidence = if tagged.is_empty() {
        Confidence::ZERO
    } else {
        let mean = tagged.iter().map(|m| m.score).sum::<f64>() / tagged.len() as f64;
        let distinct: HashSet<Strategy> = tagged.iter().map(|m| m.strategy).collect();
        let bonus = if distinct.len() >= 2 { fusion.multi_strategy_bonus } else { 1.0 };
        Confidence::new(mean * bonus)
    };

    let mut sources: Vec<String> = Vec::new();
    for m in &tagged {
        let label = m.document.source_label().to_string();
        if !sources.contains(&label) {
            sources.push(label);
        }
    }

    MergedOutput {
        matches: tagged,
        sources,
        confidence,
        strategies_attempted,
    }
}

#[cfg(test)]
mod tests {
    use vantage_core::errors::{RagError, RetrievalError};
    use vantage_core::models::Document;

    use crate::search::Candidate;

    use super::*;

    fn doc(id: &str) -> Document {
        Document {
            id: id.to_string(),
            title: format!("doc {id}"),
            content: "short".to_string(),
            ..Document::default()
        }
    }

    fn candidate(id: &str, score: f64) -> Candidate {
        Candidate { document: doc(id), score, detail: None }
    }

    fn ok(strategy: Strategy, candidates: Vec<Candidate>) -> StrategyOutcome {
        StrategyOutcome::from_result(strategy, Ok(candidates))
    }

    #[test]
    fn duplicate_ids_keep_first_occurrence() {
        let outcomes = vec![
            ok(Strategy::Vector, vec![candidate("shared", 0.9)]),
            ok(Strategy::Keyword, vec![candidate("shared", 0.4), candidate("solo", 0.5)]),
        ];
        let merged = merge(outcomes, None, &RetrievalConfig::default());

        let shared: Vec<_> = merged.matches.iter().filter(|m| m.document.id == "shared").collect();
        assert_eq!(shared.len(), 1);
        assert_eq!(shared[0].strategy, Strategy::Vector);
    }

    #[test]
    fn results_are_capped_at_max_matches() {
        let many: Vec<Candidate> = (0..20).map(|i| candidate(&format!("d{i}"), 0.5)).collect();
        let merged = merge(vec![ok(Strategy::Keyword, many)], None, &RetrievalConfig::default());
        assert_eq!(merged.matches.len(), 8);
    }

    #[test]
    fn strategy_multipliers_reorder_equal_bases() {
        let outcomes = vec![
            ok(Strategy::Pattern, vec![candidate("p", 0.5)]),
            ok(Strategy::Vector, vec![candidate("v", 0.5)]),
        ];
        let merged = merge(outcomes, None, &RetrievalConfig::default());
        assert_eq!(merged.matches[0].document.id, "v");
        assert!((merged.matches[0].score - 0.6).abs() < 1e-9); // 0.5 × 1.2
        assert!((merged.matches[1].score - 0.4).abs() < 1e-9); // 0.5 × 0.8
    }

    #[test]
    fn long_content_earns_a_bonus() {
        let mut long = candidate("long", 0.5);
        long.document.content = "x".repeat(250);
        let outcomes = vec![ok(Strategy::Keyword, vec![long, candidate("short", 0.5)])];
        let merged = merge(outcomes, None, &RetrievalConfig::default());
        assert_eq!(merged.matches[0].document.id, "long");
        assert!((merged.matches[0].score - 0.55).abs() < 1e-9);
    }

    #[test]
    fn scores_never_exceed_one() {
        let outcomes = vec![ok(Strategy::Vector, vec![candidate("v", 0.95)])];
        let merged = merge(outcomes, None, &RetrievalConfig::default());
        assert!(merged.matches[0].score <= 1.0);
    }

    #[test]
    fn failed_branch_does_not_void_the_others() {
        let outcomes = vec![
            StrategyOutcome::from_result(
                Strategy::Vector,
                Err(RagError::from(RetrievalError::Index { reason: "down".to_string() })),
            ),
            ok(Strategy::Keyword, vec![candidate("k", 0.7)]),
        ];
        let merged = merge(outcomes, None, &RetrievalConfig::default());
        assert_eq!(merged.matches.len(), 1);
        assert_eq!(merged.strategies_attempted, 2);
    }

    #[test]
    fn multi_strategy_bonus_applies_to_confidence() {
        let single = merge(
            vec![ok(Strategy::Keyword, vec![candidate("a", 0.5)])],
            None,
            &RetrievalConfig::default(),
        );
        let multi = merge(
            vec![
                ok(Strategy::Keyword, vec![candidate("a", 0.5)]),
                ok(Strategy::Pattern, vec![candidate("b", 0.625)]), // ×0.8 → 0.5
            ],
            None,
            &RetrievalConfig::default(),
        );
        assert!((single.confidence.value() - 0.5).abs() < 1e-9);
        assert!((multi.confidence.value() - 0.6).abs() < 1e-9); // 0.5 × 1.2
    }

    #[test]
    fn empty_outcome_set_has_zero_confidence() {
        let merged = merge(Vec::new(), None, &RetrievalConfig::default());
        assert!(merged.matches.is_empty());
        assert_eq!(merged.confidence.value(), 0.0);
        assert_eq!(merged.strategies_attempted, 0);
    }

    #[test]
    fn score_floor_filters_before_capping() {
        let outcomes = vec![ok(
            Strategy::Keyword,
            vec![candidate("hi", 0.9), candidate("lo", 0.2)],
        )];
        let merged = merge(outcomes, Some(0.5), &RetrievalConfig::default());
        assert_eq!(merged.matches.len(), 1);
        assert_eq!(merged.matches[0].document.id, "hi");
    }

    #[test]
    fn sources_are_deduplicated_labels() {
        let mut a = candidate("a", 0.9);
        let mut b = candidate("b", 0.8);
        a.document.title = "Same Report".to_string();
        b.document.title = "Same Report".to_string();
        let merged = merge(
            vec![ok(Strategy::Keyword, vec![a, b])],
            None,
            &RetrievalConfig::default(),
        );
        assert_eq!(merged.sources, vec!["Same Report".to_string()]);
    }
}
