//! Aggregate insights across all stored submissions.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::matching::{match_archetypes, ArchetypeMatch};

const MAX_TOP_ARCHETYPES: usize = 5;
const MAX_TOP_KEYWORDS: usize = 12;

static KEYWORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[a-z]{4,}\b").expect("valid keyword regex"));

const STOPWORDS: &[&str] = &[
    "that", "this", "with", "from", "have", "been", "were", "they", "them", "their", "when",
    "what", "which", "would", "could", "should", "about", "into", "more", "some", "than", "then",
    "there", "these", "those", "want", "like", "love", "cannot",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArchetypeCount {
    pub id: &'static str,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeywordCount {
    pub word: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Insights {
    pub total_submissions: usize,
    pub top_archetypes: Vec<ArchetypeCount>,
    pub top_keywords: Vec<KeywordCount>,
    pub summary_archetypes: Vec<ArchetypeMatch>,
}

/// Counts in first-seen order; sorting stays stable so ties keep that order.
#[derive(Default)]
struct Tally<K> {
    order: Vec<K>,
    counts: HashMap<K, usize>,
}

impl<K: std::hash::Hash + Eq + Clone> Tally<K> {
    fn bump(&mut self, key: K) {
        let count = self.counts.entry(key.clone()).or_insert_with(|| {
            self.order.push(key);
            0
        });
        *count += 1;
    }

    fn top(self, limit: usize) -> Vec<(K, usize)> {
        let counts = self.counts;
        let mut ranked: Vec<(K, usize)> = self
            .order
            .into_iter()
            .map(|k| {
                let c = counts[&k];
                (k, c)
            })
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(limit);
        ranked
    }
}

/// Summarises `texts` (newest first, as the store lists them).
pub fn compute_insights(texts: &[String]) -> Insights {
    let combined = texts.join(" ");

    let mut archetypes = Tally::default();
    for text in texts {
        for matched in match_archetypes(text) {
            archetypes.bump(matched.id);
        }
    }

    let lower = combined.to_lowercase();
    let mut keywords = Tally::default();
    for word in KEYWORD_RE.find_iter(&lower).map(|m| m.as_str()) {
        if !STOPWORDS.contains(&word) {
            keywords.bump(word.to_string());
        }
    }

    Insights {
        total_submissions: texts.len(),
        top_archetypes: archetypes
            .top(MAX_TOP_ARCHETYPES)
            .into_iter()
            .map(|(id, count)| ArchetypeCount { id, count })
            .collect(),
        top_keywords: keywords
            .top(MAX_TOP_KEYWORDS)
            .into_iter()
            .map(|(word, count)| KeywordCount { word, count })
            .collect(),
        summary_archetypes: match_archetypes(&combined),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_store() {
        let insights = compute_insights(&[]);
        assert_eq!(insights.total_submissions, 0);
        assert!(insights.top_archetypes.is_empty());
        assert!(insights.top_keywords.is_empty());
        assert!(insights.summary_archetypes.is_empty());
    }

    #[test]
    fn test_archetype_counts_per_submission() {
        let insights = compute_insights(&texts(&[
            "policy work",
            "coding and policy",
            "nonprofit community",
        ]));
        assert_eq!(
            insights.top_archetypes,
            vec![
                ArchetypeCount { id: "impact", count: 3 },
                ArchetypeCount { id: "tech", count: 1 },
            ]
        );
    }

    #[test]
    fn test_keywords_skip_stopwords_and_short_words() {
        let insights = compute_insights(&texts(&["I would love design, design and art", "Design that sings"]));
        assert_eq!(insights.top_keywords[0], KeywordCount { word: "design".into(), count: 3 });
        let words: Vec<&str> = insights.top_keywords.iter().map(|k| k.word.as_str()).collect();
        assert!(!words.contains(&"would"));
        assert!(!words.contains(&"love"));
        assert!(!words.contains(&"art"));
        assert_eq!(words, vec!["design", "sings"]);
    }

    #[test]
    fn test_keyword_ties_keep_first_seen_order() {
        let insights = compute_insights(&texts(&["zebra apple mango"]));
        let words: Vec<&str> = insights.top_keywords.iter().map(|k| k.word.as_str()).collect();
        assert_eq!(words, vec!["zebra", "apple", "mango"]);
    }

    #[test]
    fn test_keywords_capped() {
        let many = (0..20)
            .map(|i| format!("word{}", "x".repeat(i)))
            .collect::<Vec<_>>()
            .join(" ");
        let insights = compute_insights(&[many]);
        assert_eq!(insights.top_keywords.len(), MAX_TOP_KEYWORDS);
    }
}
