//! Position sources: pluggable providers of enhanced career coordinates.
//!
//! Default: `FallbackPositionSource` (never has data; callers use the ring layout).
//! `PrecomputedPositionSource` serves coordinates produced offline by an
//! embedding/UMAP pipeline and normalised onto the canvas.
//!
//! `AppState` holds an `Arc<dyn PositionSource>`, chosen at startup from config.

use std::path::Path;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Serialize;
use tracing::{info, warn};

use crate::catalog::careers::CAREER_PATHS;
use crate::layout::geometry::Position;
use crate::layout::normalize::normalize_positions;
use crate::layout::rings::fallback_positions;

/// Supplies one position per catalog career, or `None` when nothing better
/// than the static layout is available.
#[async_trait]
pub trait PositionSource: Send + Sync {
    async fn career_positions(&self) -> Option<Vec<Position>>;

    fn backend(&self) -> &'static str;
}

/// Never has enhanced data.
pub struct FallbackPositionSource;

#[async_trait]
impl PositionSource for FallbackPositionSource {
    async fn career_positions(&self) -> Option<Vec<Position>> {
        None
    }

    fn backend(&self) -> &'static str {
        "fallback"
    }
}

/// Coordinates loaded once at startup from a JSON array of `[x, y]` pairs.
pub struct PrecomputedPositionSource {
    positions: Option<Vec<Position>>,
}

impl PrecomputedPositionSource {
    /// Keeps the coordinates only when there is exactly one per catalog career.
    pub fn from_raw(raw: &[[f64; 2]]) -> Self {
        if raw.len() != CAREER_PATHS.len() {
            warn!(
                got = raw.len(),
                expected = CAREER_PATHS.len(),
                "precomputed career positions do not cover the catalog; ignoring them"
            );
            return Self { positions: None };
        }
        Self {
            positions: Some(normalize_positions(raw)),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading career positions from {}", path.display()))?;
        let raw: Vec<[f64; 2]> = serde_json::from_str(&text)
            .with_context(|| format!("parsing career positions in {}", path.display()))?;
        info!(count = raw.len(), path = %path.display(), "loaded precomputed career positions");
        Ok(Self::from_raw(&raw))
    }
}

#[async_trait]
impl PositionSource for PrecomputedPositionSource {
    async fn career_positions(&self) -> Option<Vec<Position>> {
        self.positions.clone()
    }

    fn backend(&self) -> &'static str {
        "precomputed"
    }
}

/// Catalog positions as served to the explore view.
#[derive(Debug, Clone, Serialize)]
pub struct CareerPositions {
    pub positions: Vec<Position>,
    /// True when the positions came from the ring layout.
    pub fallback: bool,
}

/// Enhanced positions when the source has them, the ring layout otherwise.
pub async fn resolve_career_positions(source: &dyn PositionSource) -> CareerPositions {
    match source.career_positions().await {
        Some(positions) if positions.len() == CAREER_PATHS.len() => CareerPositions {
            positions,
            fallback: false,
        },
        _ => CareerPositions {
            positions: fallback_positions(CAREER_PATHS.len()),
            fallback: true,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn catalog_sized_raw() -> Vec<[f64; 2]> {
        (0..CAREER_PATHS.len()).map(|i| [i as f64, (i * 2) as f64]).collect()
    }

    #[tokio::test]
    async fn test_fallback_source_uses_rings() {
        let resolved = resolve_career_positions(&FallbackPositionSource).await;
        assert!(resolved.fallback);
        assert_eq!(resolved.positions, fallback_positions(CAREER_PATHS.len()));
    }

    #[tokio::test]
    async fn test_precomputed_source_normalises() {
        let source = PrecomputedPositionSource::from_raw(&catalog_sized_raw());
        let resolved = resolve_career_positions(&source).await;
        assert!(!resolved.fallback);
        assert_eq!(resolved.positions[0], Position { x: 8.0, y: 8.0 });
        assert_eq!(resolved.positions.last().copied(), Some(Position { x: 92.0, y: 92.0 }));
    }

    #[tokio::test]
    async fn test_mismatched_count_degrades_to_fallback() {
        let source = PrecomputedPositionSource::from_raw(&[[0.0, 0.0], [1.0, 1.0]]);
        assert!(source.career_positions().await.is_none());
        assert!(resolve_career_positions(&source).await.fallback);
    }

    #[tokio::test]
    async fn test_from_file_round_trip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let json = serde_json::to_string(&catalog_sized_raw()).unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let source = PrecomputedPositionSource::from_file(file.path()).unwrap();
        assert_eq!(source.backend(), "precomputed");
        assert!(source.career_positions().await.is_some());
    }

    #[test]
    fn test_from_file_rejects_garbage() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();
        let err = PrecomputedPositionSource::from_file(file.path()).err().unwrap();
        assert!(err.to_string().contains("parsing career positions"), "{err}");
    }
}
