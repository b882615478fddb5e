//! Axum route handlers for the static catalogs.

use axum::{extract::Path, Json};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::catalog::careers::{all_careers, career_by_id, CareerNode};
use crate::catalog::questionnaire::{Question, QUESTIONNAIRE, SECTION_LABELS};
use crate::errors::AppError;

#[derive(Debug, Serialize)]
pub struct QuestionnaireResponse {
    pub questions: &'static [Question],
    pub section_labels: BTreeMap<&'static str, &'static str>,
}

/// GET /api/questionnaire
pub async fn handle_questionnaire() -> Json<QuestionnaireResponse> {
    Json(QuestionnaireResponse {
        questions: QUESTIONNAIRE,
        section_labels: SECTION_LABELS.iter().copied().collect(),
    })
}

/// GET /api/careers
pub async fn handle_list_careers() -> Json<&'static [CareerNode]> {
    Json(all_careers())
}

/// GET /api/careers/:id
///
/// Accepts a catalog id or the slug of a career title.
pub async fn handle_get_career(Path(id): Path<String>) -> Result<Json<&'static CareerNode>, AppError> {
    career_by_id(&id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Career {id} not found")))
}
