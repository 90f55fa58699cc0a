//! Curated bilingual synonym table for the AI-venture domain.
//!
//! Lookup is exact plus bidirectional substring: a keyword matches an
//! entry when either contains the other.

/// Synonym map. Keys mix Chinese and English, as do the expansions;
/// the corpus itself is bilingual.
const SYNONYMS: &[(&str, &[&str])] = &[
    (
        "ai",
        &["人工智能", "artificial intelligence", "机器学习", "ml", "deep learning", "深度学习"],
    ),
    ("投资", &["funding", "investment", "融资", "资金", "capital", "venture", "风投"]),
    ("funding", &["investment", "融资", "资金", "capital", "raise"]),
    ("公司", &["company", "startup", "初创企业", "企业", "firm", "团队", "team"]),
    ("company", &["startup", "公司", "企业", "firm", "team"]),
    ("趋势", &["trend", "direction", "方向", "发展", "走势", "outlook", "前景"]),
    ("估值", &["valuation", "价值", "value", "市值", "worth", "评估"]),
    ("轮次", &["round", "阶段", "stage", "series", "融资轮"]),
    ("独角兽", &["unicorn", "十亿美元", "billion-dollar", "高估值"]),
    ("赛道", &["sector", "领域", "domain", "field", "industry", "行业"]),
    ("平台", &["platform", "系统", "system", "服务", "service"]),
];

/// Collect synonyms for the given keywords, deduplicated in first-seen
/// order. Keywords are expected lowercased (see `keywords::extract`).
pub fn generate(keywords: &[String]) -> Vec<String> {
    let mut synonyms: Vec<String> = Vec::new();
    let mut push = |syn: &str, out: &mut Vec<String>| {
        if !out.iter().any(|s| s == syn) {
            out.push(syn.to_string());
        }
    };

    for keyword in keywords {
        for (term, expansions) in SYNONYMS {
            let exact = keyword == term;
            let partial = keyword.contains(term) || term.contains(keyword.as_str());
            if exact || partial {
                for syn in *expansions {
                    push(syn, &mut synonyms);
                }
            }
        }
    }

    synonyms
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kw(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn exact_lookup() {
        let synonyms = generate(&kw(&["funding"]));
        assert!(synonyms.contains(&"investment".to_string()));
        assert!(synonyms.contains(&"融资".to_string()));
    }

    #[test]
    fn bidirectional_substring_lookup() {
        // "投资趋势" contains the entries "投资" and "趋势".
        let synonyms = generate(&kw(&["投资趋势"]));
        assert!(synonyms.contains(&"funding".to_string()));
        assert!(synonyms.contains(&"trend".to_string()));
    }

    #[test]
    fn deduplicates_across_keywords() {
        // "投资" and "funding" share the "investment" expansion.
        let synonyms = generate(&kw(&["投资", "funding"]));
        let count = synonyms.iter().filter(|s| *s == "investment").count();
        assert_eq!(count, 1);
    }

    #[test]
    fn unknown_keyword_adds_nothing() {
        assert!(generate(&kw(&["zebra"])).is_empty());
    }
}
