//! Query-type detection: per-type regex sets tested in a fixed priority
//! order against the lowercased query. First match wins; no fuzziness.

use std::sync::LazyLock;

use regex::Regex;
use vantage_core::QueryType;

/// Pattern sets in detection priority order. Patterns are matched against
/// the lowercased query, so no case-insensitivity flags are needed.
static PATTERNS: LazyLock<Vec<(QueryType, Vec<Regex>)>> = LazyLock::new(|| {
    let set = |query_type: QueryType, patterns: &[&str]| {
        let compiled = patterns
            .iter()
            .map(|p| Regex::new(p).unwrap())
            .collect::<Vec<_>>();
        (query_type, compiled)
    };

    vec![
        set(
            QueryType::CompanySearch,
            &[
                r".+公司|.+企业|.+团队",
                r"search.+company|find.+startup",
                r"哪些公司|什么企业|哪家公司",
            ],
        ),
        set(
            QueryType::InvestmentAnalysis,
            &[
                r"投资.+分析|投资.+趋势|投资.+机会",
                r"investment.+analysis|investment.+trend",
                r"融资.+情况|融资.+数据",
            ],
        ),
        set(
            QueryType::MarketTrends,
            &[
                r"市场趋势|行业趋势|发展趋势",
                r"market.+trend|industry.+trend",
                r"未来.+发展|前景.+如何",
            ],
        ),
        set(
            QueryType::TechnologyInfo,
            &[
                r"技术.+介绍|技术.+分析|ai.+技术",
                r"technology|technical|ai.+capability",
                r"算法|模型|架构",
            ],
        ),
        set(
            QueryType::FundingInfo,
            &[
                r"融资.+轮次|融资.+金额|投资.+轮次",
                r"funding.+round|series.+[abc]",
                r"获得.+投资|完成.+融资",
            ],
        ),
        set(
            QueryType::TeamEvaluation,
            &[
                r"团队.+评估|如何.+识别|怎么.+判断",
                r"evaluate.+team|assess.+founder",
                r"创始人|团队背景|管理层",
            ],
        ),
    ]
});

/// Detect the query type, falling back to `General`.
pub fn detect(query: &str) -> QueryType {
    let lowered = query.to_lowercase();
    for (query_type, patterns) in PATTERNS.iter() {
        if patterns.iter().any(|p| p.is_match(&lowered)) {
            return *query_type;
        }
    }
    QueryType::General
}
