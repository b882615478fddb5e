//! Axum route handlers for career coordinates.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::catalog::careers::{explore_careers, CareerNode, Dimension};
use crate::layout::domain::positions_by_domain;
use crate::layout::geometry::Position;
use crate::layout::source::{resolve_career_positions, CareerPositions};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ExploreQuery {
    /// Comma-separated career ids from a previous intake.
    pub ids: Option<String>,
    /// Dimension to report per career for emphasis styling.
    pub emphasis: Option<Dimension>,
}

#[derive(Debug, Serialize)]
pub struct ExploreNode {
    pub career: &'static CareerNode,
    pub position: Position,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emphasis: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct ExploreResponse {
    pub careers: Vec<ExploreNode>,
}

/// Builds the explore view: selected careers paired with their wedge positions.
pub fn explore_view(query: &ExploreQuery) -> ExploreResponse {
    let matched: Vec<&str> = query
        .ids
        .as_deref()
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .collect();

    let careers = explore_careers(&matched);
    let positions = positions_by_domain(&careers);

    ExploreResponse {
        careers: careers
            .into_iter()
            .zip(positions)
            .map(|(career, position)| ExploreNode {
                career,
                position,
                emphasis: query.emphasis.map(|d| career.dimensions.get(d)),
            })
            .collect(),
    }
}

/// GET /api/explore?ids=a,b,c&emphasis=growth
pub async fn handle_explore(Query(query): Query<ExploreQuery>) -> Json<ExploreResponse> {
    Json(explore_view(&query))
}

/// GET /api/career-positions
///
/// Enhanced coordinates for the whole catalog when the position source has
/// them; otherwise the ring layout with `fallback: true`.
pub async fn handle_career_positions(State(state): State<AppState>) -> Json<CareerPositions> {
    let resolved = resolve_career_positions(state.position_source.as_ref()).await;
    if resolved.fallback {
        tracing::debug!(
            backend = state.position_source.backend(),
            "serving fallback career positions"
        );
    }
    Json(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::taxonomy::DEFAULT_EXPLORE_IDS;

    #[test]
    fn test_explore_without_ids_uses_defaults() {
        let view = explore_view(&ExploreQuery::default());
        assert_eq!(view.careers.len(), DEFAULT_EXPLORE_IDS.len());
        assert!(view.careers.iter().all(|n| n.emphasis.is_none()));
    }

    #[test]
    fn test_explore_filters_and_emphasises() {
        let view = explore_view(&ExploreQuery {
            ids: Some(" data-scientist, ,growth-hacker ".to_string()),
            emphasis: Some(Dimension::Growth),
        });
        let ids: Vec<&str> = view.careers.iter().map(|n| n.career.id).collect();
        assert_eq!(ids, vec!["data-scientist", "growth-hacker"]);
        assert_eq!(view.careers[0].emphasis, Some(0.95));
    }

    #[test]
    fn test_explore_positions_match_domain_layout() {
        let view = explore_view(&ExploreQuery {
            ids: Some("paralegal".to_string()),
            emphasis: None,
        });
        let expected = positions_by_domain(&explore_careers(&["paralegal"]));
        assert_eq!(view.careers[0].position, expected[0]);
    }
}
