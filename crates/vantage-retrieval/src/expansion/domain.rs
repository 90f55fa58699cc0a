//! Domain vocabulary: per-area term lists, related-term generation, and
//! human-readable context phrases, all keyed by `QueryType`.

use vantage_core::constants::PLATFORM_NAME;
use vantage_core::QueryType;

/// How many terms a single area contributes to related terms.
const TERMS_PER_AREA: usize = 5;
/// How many terms a keyword signal contributes.
const TERMS_PER_SIGNAL: usize = 3;
/// Cap on context phrases.
const MAX_CONTEXT: usize = 5;

/// A cluster of domain vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainArea {
    Investment,
    AiTechnology,
    MarketAnalysis,
    StartupEvaluation,
}

impl DomainArea {
    /// Curated term list for this area.
    pub fn terms(self) -> &'static [&'static str] {
        match self {
            DomainArea::Investment => &[
                "pre-seed", "seed", "series-a", "series-b", "series-c", "ipo", "exit",
                "portfolio", "due-diligence",
            ],
            DomainArea::AiTechnology => &[
                "llm", "gpt", "transformer", "neural-network", "computer-vision", "nlp",
                "robotics", "autonomous",
            ],
            DomainArea::MarketAnalysis => &[
                "market-size", "competition", "moat", "growth-rate", "tam", "sam", "som",
                "market-share",
            ],
            DomainArea::StartupEvaluation => &[
                "product-market-fit", "mvp", "traction", "revenue", "burn-rate", "runway",
                "kpi", "metrics",
            ],
        }
    }
}

/// The one or two areas each query type draws related terms from.
fn areas_for(query_type: QueryType) -> &'static [DomainArea] {
    match query_type {
        QueryType::CompanySearch => &[DomainArea::Investment, DomainArea::StartupEvaluation],
        QueryType::InvestmentAnalysis => &[DomainArea::Investment, DomainArea::MarketAnalysis],
        QueryType::MarketTrends => &[DomainArea::MarketAnalysis, DomainArea::AiTechnology],
        QueryType::TechnologyInfo => &[DomainArea::AiTechnology, DomainArea::StartupEvaluation],
        QueryType::FundingInfo => &[DomainArea::Investment, DomainArea::StartupEvaluation],
        QueryType::TeamEvaluation => &[DomainArea::StartupEvaluation, DomainArea::Investment],
        QueryType::General => &[DomainArea::Investment, DomainArea::AiTechnology],
    }
}

/// Generate related terms for the detected type plus keyword signals.
pub fn related_terms(keywords: &[String], query_type: QueryType) -> Vec<String> {
    let mut related: Vec<String> = Vec::new();
    let mut push = |term: &str, out: &mut Vec<String>| {
        if !out.iter().any(|t| t == term) {
            out.push(term.to_string());
        }
    };

    for area in areas_for(query_type) {
        for term in area.terms().iter().take(TERMS_PER_AREA) {
            push(term, &mut related);
        }
    }

    // Keyword signals pull in extra vocabulary regardless of type.
    for keyword in keywords {
        if keyword.contains("ai") || keyword.contains("人工智能") {
            for term in DomainArea::AiTechnology.terms().iter().take(TERMS_PER_SIGNAL) {
                push(term, &mut related);
            }
        }
        if keyword.contains("投资") || keyword.contains("investment") || keyword.contains("funding")
        {
            for term in DomainArea::Investment.terms().iter().take(TERMS_PER_SIGNAL) {
                push(term, &mut related);
            }
        }
    }

    related
}

/// Context phrases per query type.
fn context_phrases(query_type: QueryType) -> &'static [&'static str] {
    match query_type {
        QueryType::CompanySearch => &["AI venture ecosystem", "startup database", "portfolio analysis"],
        QueryType::InvestmentAnalysis => &["investment trend analysis", "market data", "risk assessment"],
        QueryType::MarketTrends => &["industry insight", "technology development", "competitive analysis"],
        QueryType::TechnologyInfo => &["technology assessment", "AI capability analysis", "product stack"],
        QueryType::FundingInfo => &["funding data", "investment rounds", "valuation analysis"],
        QueryType::TeamEvaluation => &["team background", "founder track record", "management capability"],
        QueryType::General => &["AI venture knowledge base", "platform data"],
    }
}

/// Build up to five context phrases for the detected type, with a
/// platform augmentation when the query names the host platform.
pub fn build_context(query_type: QueryType, keywords: &[String]) -> Vec<String> {
    let mut context: Vec<String> = context_phrases(query_type)
        .iter()
        .map(|s| s.to_string())
        .collect();

    if keywords.iter().any(|k| k.contains(PLATFORM_NAME)) {
        context.push(format!("{PLATFORM_NAME} platform features"));
        context.push("AI venture data tracking".to_string());
    }

    context.truncate(MAX_CONTEXT);
    context
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn funding_type_pulls_investment_vocabulary() {
        let related = related_terms(&[], QueryType::FundingInfo);
        assert!(related.contains(&"seed".to_string()));
        assert!(related.contains(&"traction".to_string()));
    }

    #[test]
    fn keyword_signal_adds_extra_terms() {
        let related = related_terms(&["ai".to_string()], QueryType::TeamEvaluation);
        assert!(related.contains(&"llm".to_string()));
    }

    #[test]
    fn context_is_capped_at_five() {
        let keywords = vec![PLATFORM_NAME.to_string()];
        let context = build_context(QueryType::General, &keywords);
        assert!(context.len() <= 5);
        assert!(context.iter().any(|c| c.contains(PLATFORM_NAME)));
    }

    #[test]
    fn related_terms_are_deduplicated() {
        // Investment appears both as an area and as a keyword signal.
        let related = related_terms(&["investment".to_string()], QueryType::FundingInfo);
        let seeds = related.iter().filter(|t| *t == "seed").count();
        assert_eq!(seeds, 1);
    }
}
