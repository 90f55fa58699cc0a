//! QueryType: the single sum type behind all type-keyed lookup tables.
//!
//! Detection lives in the retrieval crate; every per-type table (domain
//! terms, context phrases, suggestion templates, score boosts) is keyed
//! by this enum instead of duplicated string literals.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Category of an incoming query, detected from curated pattern sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryType {
    CompanySearch,
    InvestmentAnalysis,
    MarketTrends,
    TechnologyInfo,
    FundingInfo,
    TeamEvaluation,
    General,
}

impl QueryType {
    /// All variants, in detection priority order (General is the fallback).
    pub const ALL: [QueryType; 7] = [
        QueryType::CompanySearch,
        QueryType::InvestmentAnalysis,
        QueryType::MarketTrends,
        QueryType::TechnologyInfo,
        QueryType::FundingInfo,
        QueryType::TeamEvaluation,
        QueryType::General,
    ];

    /// Stable snake_case name, used in cache keys and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            QueryType::CompanySearch => "company_search",
            QueryType::InvestmentAnalysis => "investment_analysis",
            QueryType::MarketTrends => "market_trends",
            QueryType::TechnologyInfo => "technology_info",
            QueryType::FundingInfo => "funding_info",
            QueryType::TeamEvaluation => "team_evaluation",
            QueryType::General => "general",
        }
    }
}

impl Default for QueryType {
    fn default() -> Self {
        QueryType::General
    }
}

impl fmt::Display for QueryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
