//! Whole-word phrase matching for the career matcher.
//!
//! A keyword only counts when it is bounded by word boundaries on both sides,
//! so "art" never fires inside "pharmaceutical". Multi-word phrases accept any
//! run of whitespace between their words.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::catalog::taxonomy::{TaxonomyCategory, CAREER_MATCH_KEYWORDS};

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// Compiled matchers for one taxonomy category.
pub struct CategoryMatcher {
    pub name: &'static str,
    patterns: Vec<Regex>,
}

impl CategoryMatcher {
    fn compile(category: &TaxonomyCategory) -> Self {
        Self {
            name: category.name,
            patterns: category
                .keywords
                .iter()
                .filter_map(|keyword| phrase_regex(keyword))
                .collect(),
        }
    }

    /// True when any keyword of this category appears as a whole word in `text`.
    pub fn is_match(&self, text: &str) -> bool {
        self.patterns.iter().any(|re| re.is_match(text))
    }
}

/// Category matchers in taxonomy order, compiled on first use.
pub static CATEGORY_MATCHERS: Lazy<Vec<CategoryMatcher>> =
    Lazy::new(|| CAREER_MATCH_KEYWORDS.iter().map(CategoryMatcher::compile).collect());

/// Builds a case-insensitive, word-bounded pattern for `phrase`.
/// Returns `None` for blank phrases.
fn phrase_regex(phrase: &str) -> Option<Regex> {
    let trimmed = phrase.trim();
    if trimmed.is_empty() {
        return None;
    }
    let escaped = regex::escape(trimmed);
    let body = WHITESPACE_RE.replace_all(&escaped, r"\s+");
    Regex::new(&format!(r"(?i)\b{body}\b")).ok()
}

/// One-off whole-word check. Prefer [`CATEGORY_MATCHERS`] on hot paths.
#[cfg(test)]
pub fn contains_word(text: &str, phrase: &str) -> bool {
    phrase_regex(phrase).is_some_and(|re| re.is_match(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_boundary_rejects_inner_substring() {
        assert!(!contains_word("pharmaceutical scientist", "art"));
        assert!(contains_word("I love art and film", "art"));
    }

    #[test]
    fn test_case_insensitive() {
        assert!(contains_word("Software Developer", "software"));
    }

    #[test]
    fn test_multi_word_phrase_allows_any_whitespace() {
        assert!(contains_word("work in supply \n  chain ops", "supply chain"));
        assert!(!contains_word("supplychain", "supply chain"));
    }

    #[test]
    fn test_blank_phrase_never_matches() {
        assert!(!contains_word("anything", "   "));
        assert!(!contains_word("", ""));
    }

    #[test]
    fn test_punctuation_in_phrase_is_literal() {
        assert!(contains_word("a cross-domain role", "cross-domain"));
        assert!(!contains_word("a crossXdomain role", "cross-domain"));
    }

    #[test]
    fn test_category_matchers_cover_taxonomy() {
        assert_eq!(CATEGORY_MATCHERS.len(), CAREER_MATCH_KEYWORDS.len());
        let tech = CATEGORY_MATCHERS.iter().find(|m| m.name == "tech").unwrap();
        assert!(tech.is_match("machine   learning"));
        assert!(!tech.is_match("softwares"));
    }
}
