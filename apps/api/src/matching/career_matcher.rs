//! Career matcher: ranks catalog careers against a free-text submission.
//!
//! Algorithm:
//! 1. Direct phrases (substring) add a flat bonus of 100 to their career.
//! 2. Taxonomy categories mentioned by the text are detected with whole-word matching.
//! 3. With 2+ mentioned categories a career title must hit 2+ of them to rank
//!    directly; with exactly one, a single hit suffices. Base score = hits².
//!    Careers that hit just one category under the 2+ rule are held back for padding.
//! 4. Nothing scored → the first 15 catalog careers, in catalog order.
//! 5. Fewer than 6 ranked → pad from held-back careers, then same-domain careers,
//!    then the catalog itself.
//! 6. Truncate to 15.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use tracing::debug;

use crate::catalog::careers::CAREER_PATHS;
use crate::catalog::taxonomy::{domain_of, DIRECT_PHRASES};
use crate::matching::words::CATEGORY_MATCHERS;

pub const MIN_MATCHED_CAREERS: usize = 6;
pub const MAX_MATCHED_CAREERS: usize = 15;
pub const DIRECT_PHRASE_BONUS: u32 = 100;

/// Taxonomy categories hit by each catalog title, aligned with `CAREER_PATHS`.
static TITLE_CATEGORIES: Lazy<Vec<Vec<&'static str>>> = Lazy::new(|| {
    CAREER_PATHS
        .iter()
        .map(|career| {
            let title = career.title.to_lowercase();
            CATEGORY_MATCHERS
                .iter()
                .filter(|matcher| matcher.is_match(&title))
                .map(|matcher| matcher.name)
                .collect()
        })
        .collect()
});

/// Full ranking outcome, split so callers can tell scored careers from filler.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CareerRanking {
    /// Careers that qualified on their own, best first.
    pub ranked: Vec<&'static str>,
    /// Lower-confidence careers appended to reach the minimum.
    pub padding: Vec<&'static str>,
    /// The text matched nothing; `ranked` is the catalog head.
    pub fallback: bool,
}

impl CareerRanking {
    /// Ranked ids followed by padding, capped at [`MAX_MATCHED_CAREERS`].
    pub fn into_ids(self) -> Vec<&'static str> {
        let mut ids = self.ranked;
        ids.extend(self.padding);
        ids.truncate(MAX_MATCHED_CAREERS);
        ids
    }
}

/// Score table that remembers first-insertion order, which breaks ranking ties.
#[derive(Debug, Default)]
struct ScoreBoard {
    entries: Vec<(&'static str, u32)>,
}

impl ScoreBoard {
    fn get(&self, id: &str) -> Option<u32> {
        self.entries.iter().find(|(k, _)| *k == id).map(|(_, s)| *s)
    }

    fn set(&mut self, id: &'static str, score: u32) {
        match self.entries.iter_mut().find(|(k, _)| *k == id) {
            Some(entry) => entry.1 = score,
            None => self.entries.push((id, score)),
        }
    }

    fn add(&mut self, id: &'static str, delta: u32) {
        let current = self.get(id).unwrap_or(0);
        self.set(id, current + delta);
    }

    fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Positive scores, best first; ties keep insertion order.
    fn into_ranked(self) -> Vec<&'static str> {
        let mut entries: Vec<_> = self.entries.into_iter().filter(|(_, s)| *s > 0).collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries.into_iter().map(|(id, _)| id).collect()
    }
}

/// Taxonomy categories the text mentions, in taxonomy order.
pub fn detect_categories(text: &str) -> Vec<&'static str> {
    let lower = text.to_lowercase();
    CATEGORY_MATCHERS
        .iter()
        .filter(|matcher| matcher.is_match(&lower))
        .map(|matcher| matcher.name)
        .collect()
}

/// Taxonomy categories hit by a catalog career's title.
#[cfg(test)]
pub fn title_categories(career_id: &str) -> &'static [&'static str] {
    CAREER_PATHS
        .iter()
        .position(|career| career.id == career_id)
        .map(|idx| TITLE_CATEGORIES[idx].as_slice())
        .unwrap_or(&[])
}

/// Matches `text` against the catalog and returns career ids, best first.
///
/// The result is empty or holds between 6 and 15 ids.
pub fn match_careers(text: &str) -> Vec<&'static str> {
    rank_careers(text).into_ids()
}

/// Same as [`match_careers`] but keeps ranked and padding portions apart.
pub fn rank_careers(text: &str) -> CareerRanking {
    let lower = text.to_lowercase();
    let mut scores = ScoreBoard::default();

    for direct in DIRECT_PHRASES {
        if lower.contains(direct.phrase) {
            scores.add(direct.career_id, DIRECT_PHRASE_BONUS);
        }
    }

    let user_domains: HashSet<&'static str> = detect_categories(&lower).into_iter().collect();
    let needs_cross_domain = user_domains.len() >= 2;

    let mut one_domain = ScoreBoard::default();
    for (career, title_hits) in CAREER_PATHS.iter().zip(TITLE_CATEGORIES.iter()) {
        let matched = title_hits
            .iter()
            .filter(|category| user_domains.contains(*category))
            .count() as u32;
        let direct_bonus = scores.get(career.id);
        let base_score = matched * matched + direct_bonus.unwrap_or(0);

        if needs_cross_domain && matched < 2 && direct_bonus.is_none() {
            if matched >= 1 {
                one_domain.set(career.id, base_score);
            }
            continue;
        }
        if matched == 0 && direct_bonus.is_none() {
            continue;
        }
        scores.set(career.id, base_score);
    }

    if scores.is_empty() {
        debug!(
            categories = user_domains.len(),
            "no career matched; falling back to catalog head"
        );
        return CareerRanking {
            ranked: CAREER_PATHS
                .iter()
                .take(MAX_MATCHED_CAREERS)
                .map(|career| career.id)
                .collect(),
            padding: Vec::new(),
            fallback: true,
        };
    }

    let ranked = scores.into_ranked();
    let padding = if !ranked.is_empty() && ranked.len() < MIN_MATCHED_CAREERS {
        pad_to_minimum(&ranked, one_domain.into_ranked())
    } else {
        Vec::new()
    };

    debug!(
        categories = user_domains.len(),
        ranked = ranked.len(),
        padded = padding.len(),
        "career match complete"
    );

    CareerRanking {
        ranked,
        padding,
        fallback: false,
    }
}

/// Picks filler ids so `ranked` reaches [`MIN_MATCHED_CAREERS`].
///
/// Priority: one-domain matches, then careers sharing a domain tag with a
/// ranked career, then the catalog in order. Never repeats an id.
fn pad_to_minimum(ranked: &[&'static str], one_domain: Vec<&'static str>) -> Vec<&'static str> {
    let needed = MIN_MATCHED_CAREERS - ranked.len();
    let mut seen: HashSet<&'static str> = ranked.iter().copied().collect();
    let mut padding = Vec::new();
    let mut push = |id: &'static str, padding: &mut Vec<&'static str>| {
        if seen.insert(id) {
            padding.push(id);
        }
    };

    for id in one_domain {
        push(id, &mut padding);
    }

    if padding.len() < needed {
        let ranked_domains: HashSet<&str> = ranked.iter().filter_map(|id| domain_of(id)).collect();
        for career in CAREER_PATHS {
            if domain_of(career.id).is_some_and(|d| ranked_domains.contains(d)) {
                push(career.id, &mut padding);
            }
        }
    }

    for career in CAREER_PATHS {
        if padding.len() >= needed {
            break;
        }
        push(career.id, &mut padding);
    }

    padding.truncate(needed);
    padding
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog_head() -> Vec<&'static str> {
        CAREER_PATHS.iter().take(MAX_MATCHED_CAREERS).map(|c| c.id).collect()
    }

    #[test]
    fn test_no_keywords_falls_back_to_catalog_head() {
        let ranking = rank_careers("xyzxyz qqqq");
        assert!(ranking.fallback);
        assert_eq!(ranking.into_ids(), catalog_head());
    }

    #[test]
    fn test_empty_text_falls_back() {
        assert_eq!(match_careers(""), catalog_head());
    }

    #[test]
    fn test_growth_hacker_ranks_first() {
        for text in [
            "growth hacker",
            "I want to be a Growth Hacker at a bank",
            "data science, healthcare, then growth hacker someday",
        ] {
            let ids = match_careers(text);
            assert_eq!(ids[0], "growth-hacker", "text: {text} → {ids:?}");
        }
    }

    #[test]
    fn test_result_length_in_bounds() {
        for text in [
            "software",
            "healthcare",
            "I enjoy design and marketing",
            "finance and software and data and research",
            "legal paralegal compliance",
            "urban planning for the city",
            "game development with unity",
            "xyz",
        ] {
            let len = match_careers(text).len();
            assert!(
                (MIN_MATCHED_CAREERS..=MAX_MATCHED_CAREERS).contains(&len),
                "{text}: {len}"
            );
        }
    }

    #[test]
    fn test_no_duplicate_ids() {
        for text in ["legal", "software and finance", "game", "venture capital startup"] {
            let ids = match_careers(text);
            let unique: HashSet<_> = ids.iter().collect();
            assert_eq!(unique.len(), ids.len(), "{text}: {ids:?}");
        }
    }

    #[test]
    fn test_word_boundary_avoids_false_hits() {
        // "art" must not be detected inside "pharmaceutical"
        let categories = detect_categories("pharmaceutical");
        assert!(!categories.contains(&"creative"), "{categories:?}");
    }

    #[test]
    fn test_detect_categories_in_taxonomy_order() {
        let categories = detect_categories("Finance people who love SOFTWARE");
        assert_eq!(categories, vec!["tech", "business", "hr"]);
    }

    #[test]
    fn test_cross_domain_ranked_portion_hits_two_categories() {
        for text in [
            "software and sales",
            "I like data, finance and software",
            "marketing content and design",
            "security engineer with cloud and data",
        ] {
            let user: HashSet<&str> = detect_categories(text).into_iter().collect();
            assert!(user.len() >= 2, "{text} should mention 2+ categories");
            let ranking = rank_careers(text);
            assert!(!ranking.fallback);
            for id in &ranking.ranked {
                let lower = text.to_lowercase();
                let is_direct = DIRECT_PHRASES
                    .iter()
                    .any(|d| d.career_id == *id && lower.contains(d.phrase));
                let hits = title_categories(id)
                    .iter()
                    .filter(|c| user.contains(*c))
                    .count();
                assert!(is_direct || hits >= 2, "{text}: {id} hit {hits}");
            }
        }
    }

    #[test]
    fn test_single_category_one_hit_suffices() {
        let ranking = rank_careers("healthcare");
        assert!(ranking.ranked.contains(&"healthcare-analyst"));
        for id in &ranking.ranked {
            assert!(title_categories(id).contains(&"healthcare"), "{id}");
        }
    }

    #[test]
    fn test_squared_overlap_orders_ranking() {
        // "sales engineer" hits tech + business + sales = 9, beats 2-hit titles
        let ranking = rank_careers("software sales and business");
        assert_eq!(ranking.ranked[0], "sales-engineer");
    }

    #[test]
    fn test_padding_prefers_one_domain_pool() {
        // Only "Sales Engineer" hits both tech and sales; single-hit titles fill the rest.
        let ranking = rank_careers("coding and quota");
        assert_eq!(ranking.ranked, vec!["sales-engineer"]);
        assert_eq!(ranking.padding.len(), MIN_MATCHED_CAREERS - 1);
        for id in &ranking.padding {
            let hits = title_categories(id);
            assert!(
                hits.contains(&"tech") || hits.contains(&"sales"),
                "{id} is not a one-domain match"
            );
        }
    }

    #[test]
    fn test_padding_uses_same_domain_when_pool_is_short() {
        let ranking = rank_careers("paralegal");
        assert_eq!(ranking.ranked, vec!["paralegal"]);
        // paralegal's domain is business; padding walks business careers in catalog order
        let expected: Vec<&str> = CAREER_PATHS
            .iter()
            .filter(|c| c.id != "paralegal" && domain_of(c.id) == Some("business"))
            .take(MIN_MATCHED_CAREERS - 1)
            .map(|c| c.id)
            .collect();
        assert_eq!(ranking.padding, expected);
    }

    #[test]
    fn test_idempotent() {
        let text = "I love design, data and healthcare";
        assert_eq!(rank_careers(text), rank_careers(text));
    }
}
