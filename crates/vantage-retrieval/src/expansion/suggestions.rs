//! Query suggestions and complexity classification.

use std::sync::LazyLock;

use regex::Regex;
use vantage_core::QueryType;

/// Cap on generated suggestions.
const MAX_SUGGESTIONS: usize = 6;
/// Keywords substituted into templates.
const TOP_KEYWORDS: usize = 2;

/// Suggestion templates per query type. `{keyword}` is substituted.
fn templates(query_type: QueryType) -> &'static [&'static str] {
    match query_type {
        QueryType::CompanySearch => &[
            "which {keyword} companies are unicorns?",
            "recently funded {keyword} startups",
            "leading companies in the {keyword} sector",
        ],
        QueryType::InvestmentAnalysis => &[
            "latest {keyword} investment trends",
            "{keyword} investment opportunities and risks",
            "where is {keyword} capital flowing?",
        ],
        QueryType::MarketTrends => &[
            "future outlook for the {keyword} industry",
            "{keyword} competitive landscape",
            "{keyword} technology prospects",
        ],
        _ => &[],
    }
}

/// Generate follow-up query suggestions from the detected type and the
/// query's top keywords.
pub fn generate(query_type: QueryType, keywords: &[String]) -> Vec<String> {
    let mut suggestions = Vec::new();
    for template in templates(query_type) {
        for keyword in keywords.iter().take(TOP_KEYWORDS) {
            suggestions.push(template.replace("{keyword}", keyword));
        }
    }
    suggestions.truncate(MAX_SUGGESTIONS);
    suggestions
}

/// Coarse complexity bucket for an incoming query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryComplexity {
    Simple,
    Medium,
    Complex,
}

/// Complexity classification with the factors that drove it.
#[derive(Debug, Clone)]
pub struct ComplexityReport {
    pub complexity: QueryComplexity,
    pub factors: Vec<String>,
    pub score: u32,
}

/// Professional vocabulary that signals a sophisticated query.
const PROFESSIONAL_TERMS: &[&str] = &["估值", "轮次", "valuation", "series", "due diligence"];

/// Comparison markers, Chinese and English.
const COMPARISON_MARKERS: &[&str] = &["比较", "对比", "vs", "compare"];

static TIME_REFERENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\d{4}年|\d+月|最近|未来|趋势|recent|future|trend").unwrap()
});

/// Classify query complexity from length, question count, professional
/// term density, comparison language, and time references.
pub fn analyze(query: &str) -> ComplexityReport {
    let lowered = query.to_lowercase();
    let mut factors = Vec::new();
    let mut score: u32 = 0;

    if query.chars().count() > 50 {
        factors.push("long query".to_string());
        score += 2;
    }

    let question_marks = query.chars().filter(|c| *c == '?' || *c == '？').count() as u32;
    if question_marks > 1 {
        factors.push("multiple questions".to_string());
        score += question_marks;
    }

    let term_count = PROFESSIONAL_TERMS
        .iter()
        .filter(|t| lowered.contains(&t.to_lowercase()))
        .count() as u32;
    if term_count > 1 {
        factors.push("professional terms".to_string());
        score += term_count;
    }

    if COMPARISON_MARKERS.iter().any(|m| lowered.contains(m)) {
        factors.push("comparative analysis".to_string());
        score += 2;
    }

    if TIME_REFERENCE.is_match(&lowered) {
        factors.push("time dimension".to_string());
        score += 1;
    }

    let complexity = if score >= 5 {
        QueryComplexity::Complex
    } else if score >= 2 {
        QueryComplexity::Medium
    } else {
        QueryComplexity::Simple
    };

    ComplexityReport { complexity, factors, score }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggestions_substitute_keywords_and_cap() {
        let keywords = vec!["ai".to_string(), "robotics".to_string(), "nlp".to_string()];
        let suggestions = generate(QueryType::CompanySearch, &keywords);
        assert_eq!(suggestions.len(), 6);
        assert!(suggestions[0].contains("ai"));
        // The third keyword never appears.
        assert!(!suggestions.iter().any(|s| s.contains("nlp")));
    }

    #[test]
    fn types_without_templates_suggest_nothing() {
        assert!(generate(QueryType::General, &["ai".to_string()]).is_empty());
    }

    #[test]
    fn short_plain_query_is_simple() {
        let report = analyze("who are you");
        assert_eq!(report.complexity, QueryComplexity::Simple);
        assert!(report.factors.is_empty());
    }

    #[test]
    fn compound_professional_query_is_complex() {
        let report = analyze(
            "Compare the valuation of Series A vs Series B rounds? What changed recently? 估值趋势如何?",
        );
        assert_eq!(report.complexity, QueryComplexity::Complex);
        assert!(report.score >= 5);
    }
}
