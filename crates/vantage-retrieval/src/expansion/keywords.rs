//! Keyword extraction: lowercase, strip punctuation while preserving the
//! CJK range, drop single-character tokens and bilingual stop words.

/// Stop words dropped during extraction, Chinese and English.
const STOP_WORDS: &[&str] = &[
    "的", "了", "在", "是", "有", "和", "与", "或", "如何", "什么", "哪些", "怎么", "为什么",
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "how", "what", "which", "where", "when", "who", "why",
];

/// Characters that survive cleaning: ASCII word chars plus CJK ideographs.
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || ('\u{4e00}'..='\u{9fa5}').contains(&c)
}

/// Extract searchable keywords from a raw query.
pub fn extract(query: &str) -> Vec<String> {
    let cleaned: String = query
        .to_lowercase()
        .chars()
        .map(|c| if is_word_char(c) { c } else { ' ' })
        .collect();

    cleaned
        .split_whitespace()
        .filter(|word| word.chars().count() > 1 && !STOP_WORDS.contains(word))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_strips_punctuation() {
        let keywords = extract("What's the LATEST funding-round?!");
        assert_eq!(keywords, vec!["latest", "funding", "round"]);
    }

    #[test]
    fn preserves_cjk_ranges() {
        let keywords = extract("AI 投资趋势 2024");
        assert!(keywords.contains(&"ai".to_string()));
        assert!(keywords.contains(&"投资趋势".to_string()));
        assert!(keywords.contains(&"2024".to_string()));
    }

    #[test]
    fn drops_single_char_tokens_and_stop_words() {
        let keywords = extract("a x the of company");
        assert_eq!(keywords, vec!["company"]);
    }

    #[test]
    fn empty_query_yields_no_keywords() {
        assert!(extract("  ?!  ").is_empty());
    }
}
