pub mod health;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::catalog::handlers as catalog;
use crate::intake::handlers as intake;
use crate::layout::handlers as layout;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Intake + recommendations
        .route("/api/intake", post(intake::handle_intake))
        .route(
            "/api/recommendations/:submission_id",
            get(intake::handle_recommendations),
        )
        // Admin
        .route("/api/admin/submissions", get(intake::handle_list_submissions))
        .route(
            "/api/admin/submissions/:id",
            delete(intake::handle_delete_submission),
        )
        .route("/api/admin/insights", get(intake::handle_insights))
        // Catalog
        .route("/api/questionnaire", get(catalog::handle_questionnaire))
        .route("/api/careers", get(catalog::handle_list_careers))
        .route("/api/careers/:id", get(catalog::handle_get_career))
        // Layout
        .route("/api/explore", get(layout::handle_explore))
        .route("/api/career-positions", get(layout::handle_career_positions))
        .with_state(state)
}
