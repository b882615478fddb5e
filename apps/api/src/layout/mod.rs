// Spatial layout for the explore view.
// Two deterministic layouts (ring fallback, domain wedges) plus optional
// externally computed coordinates behind a pluggable source.

pub mod domain;
pub mod geometry;
pub mod handlers;
pub mod normalize;
pub mod rings;
pub mod seeded;
pub mod source;

// Re-export the public API consumed by other modules (state, main).
pub use source::{FallbackPositionSource, PositionSource, PrecomputedPositionSource};
