//! Keyword-density archetype matcher.
//!
//! Score = matched keywords / total keywords for the archetype. Matching is a
//! plain case-insensitive substring test, so "app" also fires inside "happy".
//! That looseness is kept on purpose; the career matcher is the one that
//! needs word boundaries.

use serde::Serialize;

use crate::catalog::archetypes::{Archetype, ARCHETYPES};

pub const MAX_ARCHETYPE_MATCHES: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArchetypeMatch {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub score: f64,
}

impl ArchetypeMatch {
    fn new(archetype: &Archetype, score: f64) -> Self {
        Self {
            id: archetype.id,
            title: archetype.title,
            description: archetype.description,
            score,
        }
    }
}

/// Ranks archetypes against `text`, best first, at most three.
pub fn match_archetypes(text: &str) -> Vec<ArchetypeMatch> {
    let lower = text.to_lowercase();

    let mut matches: Vec<ArchetypeMatch> = ARCHETYPES
        .iter()
        .filter_map(|archetype| {
            let hits = archetype
                .keywords
                .iter()
                .filter(|keyword| lower.contains(*keyword))
                .count();
            (hits > 0).then(|| {
                ArchetypeMatch::new(archetype, hits as f64 / archetype.keywords.len() as f64)
            })
        })
        .collect();

    // Stable: equal scores keep catalog order.
    matches.sort_by(|a, b| b.score.total_cmp(&a.score));
    matches.truncate(MAX_ARCHETYPE_MATCHES);
    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(matches: &[ArchetypeMatch]) -> Vec<&'static str> {
        matches.iter().map(|m| m.id).collect()
    }

    #[test]
    fn test_empty_text_matches_nothing() {
        assert!(match_archetypes("").is_empty());
        assert!(match_archetypes("   \n\t").is_empty());
    }

    #[test]
    fn test_software_startup_hits_tech() {
        let matches = match_archetypes("software developer startup");
        assert_eq!(matches[0].id, "tech");
        // 3 of 8 tech keywords
        assert!((matches[0].score - 3.0 / 8.0).abs() < 1e-12);
    }

    #[test]
    fn test_case_insensitive_substring() {
        // "app" inside "happy" still counts
        let matches = match_archetypes("I am HAPPY");
        assert_eq!(ids(&matches), vec!["tech"]);
    }

    #[test]
    fn test_result_capped_and_sorted() {
        let text = "software research nonprofit design business policy community";
        let matches = match_archetypes(text);
        assert!(matches.len() <= MAX_ARCHETYPE_MATCHES);
        for pair in matches.windows(2) {
            assert!(pair[0].score >= pair[1].score, "{matches:?}");
        }
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        // One keyword each for tech (1/8), research (1/8), creative (1/8)
        let matches = match_archetypes("coding lab film");
        assert_eq!(ids(&matches), vec!["tech", "research", "creative"]);
    }

    #[test]
    fn test_higher_density_ranks_first() {
        // impact: policy + community = 2/7 beats tech: coding = 1/8
        let matches = match_archetypes("coding policy community");
        assert_eq!(ids(&matches), vec!["impact", "tech"]);
    }

    #[test]
    fn test_idempotent() {
        let text = "finance and film";
        assert_eq!(match_archetypes(text), match_archetypes(text));
    }
}
