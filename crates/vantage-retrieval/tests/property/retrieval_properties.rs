//! Property tests for the retrieval invariants: similarity bounds,
//! fusion caps, confidence clamping.

use proptest::prelude::*;

use vantage_core::config::{ExpansionConfig, RetrievalConfig};
use vantage_core::models::{Document, Strategy};
use vantage_retrieval::cache::similarity;
use vantage_retrieval::search::{fusion, Candidate, StrategyOutcome};
use vantage_retrieval::QueryExpander;

fn doc(id: String) -> Document {
    Document {
        id,
        title: "t".to_string(),
        content: "some document content".to_string(),
        ..Document::default()
    }
}

proptest! {
    #[test]
    fn similarity_is_bounded_and_symmetric(a in "\\PC{0,40}", b in "\\PC{0,40}") {
        let forward = similarity::combined(&a, &b);
        let backward = similarity::combined(&b, &a);
        prop_assert!((0.0..=1.0).contains(&forward), "similarity {forward} out of bounds");
        prop_assert!((forward - backward).abs() < 1e-9);
    }

    #[test]
    fn identical_strings_have_similarity_one(a in "\\PC{0,40}") {
        let s = similarity::combined(&a, &a);
        prop_assert!((s - 1.0).abs() < 1e-9);
    }

    #[test]
    fn merged_results_respect_cap_and_bounds(
        scores in proptest::collection::vec(0.0f64..=1.0, 0..40),
    ) {
        let candidates: Vec<Candidate> = scores
            .iter()
            .enumerate()
            .map(|(i, score)| Candidate { document: doc(format!("d{i}")), score: *score, detail: None })
            .collect();
        let outcomes = vec![StrategyOutcome::from_result(Strategy::Keyword, Ok(candidates))];
        let merged = fusion::merge(outcomes, None, &RetrievalConfig::default());

        prop_assert!(merged.matches.len() <= 8);
        prop_assert!((0.0..=1.0).contains(&merged.confidence.value()));
        for m in &merged.matches {
            prop_assert!(m.score <= 1.0);
        }
        for pair in merged.matches.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn duplicate_fingerprints_never_survive(
        copies in 1usize..20,
        score in 0.0f64..=1.0,
    ) {
        let candidates: Vec<Candidate> = (0..copies)
            .map(|_| Candidate { document: doc("same-id".to_string()), score, detail: None })
            .collect();
        let outcomes = vec![
            StrategyOutcome::from_result(Strategy::Vector, Ok(candidates.clone())),
            StrategyOutcome::from_result(Strategy::Keyword, Ok(candidates)),
        ];
        let merged = fusion::merge(outcomes, None, &RetrievalConfig::default());
        prop_assert_eq!(merged.matches.len(), 1);
    }

    #[test]
    fn expansion_confidence_is_clamped(query in "\\PC{1,80}") {
        let expander = QueryExpander::new();
        let result = expander.expand(&query, &ExpansionConfig::default());
        let confidence = result.confidence.value();
        prop_assert!((0.0..=1.0).contains(&confidence));
        prop_assert!(result.domain_context.len() <= 5);
    }
}
