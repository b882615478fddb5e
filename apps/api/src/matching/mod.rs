// Text matchers: archetype labelling (substring) and career ranking (whole word).
// Both are pure functions over the static catalogs.

pub mod archetype_matcher;
pub mod career_matcher;
pub mod words;

pub use archetype_matcher::{match_archetypes, ArchetypeMatch};
pub use career_matcher::{match_careers, rank_careers};
