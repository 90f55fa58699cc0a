//! QueryType → vocabulary boost matrix for the keyword strategy.
//!
//! Each query type carries a vocabulary bag and a multiplier; documents
//! touching that vocabulary get their keyword score boosted. A boost of
//! 1.0 is neutral.

use std::collections::HashMap;

use vantage_core::models::Document;
use vantage_core::QueryType;

/// Boost table: QueryType → (vocabulary bag, multiplier).
pub struct TypeBoostMatrix {
    boosts: HashMap<QueryType, (&'static [&'static str], f64)>,
}

impl TypeBoostMatrix {
    /// Create with the curated default vocabulary and multipliers.
    pub fn default_boosts() -> Self {
        let mut boosts: HashMap<QueryType, (&'static [&'static str], f64)> = HashMap::new();

        // FundingInfo: funding vocabulary gets the strongest boost.
        boosts.insert(
            QueryType::FundingInfo,
            (
                &["funding", "investment", "融资", "投资", "round", "轮次", "series", "capital", "估值", "valuation"],
                1.4,
            ),
        );

        boosts.insert(
            QueryType::InvestmentAnalysis,
            (
                &["investment", "投资", "portfolio", "基金", "capital", "风投", "vc"],
                1.3,
            ),
        );

        boosts.insert(
            QueryType::CompanySearch,
            (
                &["company", "startup", "公司", "企业", "创业", "团队", "unicorn", "独角兽"],
                1.3,
            ),
        );

        boosts.insert(
            QueryType::MarketTrends,
            (&["market", "trend", "市场", "趋势", "前景", "outlook", "growth"], 1.3),
        );

        boosts.insert(
            QueryType::TechnologyInfo,
            (&["technology", "ai", "人工智能", "技术", "model", "算法", "llm"], 1.3),
        );

        boosts.insert(
            QueryType::TeamEvaluation,
            (&["founder", "team", "创始人", "团队", "管理层", "background"], 1.3),
        );

        Self { boosts }
    }

    /// The boost multiplier a document earns under the given query type.
    /// Returns 1.0 (neutral) when the type has no bag or the document
    /// never touches its vocabulary.
    pub fn boost(&self, query_type: QueryType, document: &Document) -> f64 {
        let Some((vocabulary, multiplier)) = self.boosts.get(&query_type) else {
            return 1.0;
        };

        let haystack = format!(
            "{} {} {}",
            document.title.to_lowercase(),
            document.content.to_lowercase(),
            document.keywords.join(" ").to_lowercase(),
        );
        if vocabulary.iter().any(|term| haystack.contains(term)) {
            *multiplier
        } else {
            1.0
        }
    }
}

impl Default for TypeBoostMatrix {
    fn default() -> Self {
        Self::default_boosts()
    }
}
