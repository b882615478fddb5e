//! Axum route handlers for intake, recommendations, and the admin views.

use std::collections::BTreeMap;

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::catalog::questionnaire::combine_answers;
use crate::errors::AppError;
use crate::intake::insights::{compute_insights, Insights};
use crate::intake::store::Submission;
use crate::matching::{match_archetypes, match_careers, rank_careers, ArchetypeMatch};
use crate::state::AppState;

const MIN_FREE_TEXT_CHARS: usize = 2;
const MIN_QUESTIONNAIRE_CHARS: usize = 20;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct IntakeRequest {
    pub dream_text: Option<String>,
    pub questionnaire: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Serialize)]
pub struct IntakeResponse {
    pub submission_id: Uuid,
    pub archetypes: Vec<ArchetypeMatch>,
    pub matched_career_ids: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct RecommendationsResponse {
    pub archetypes: Vec<ArchetypeMatch>,
    pub matched_career_ids: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct SubmissionsResponse {
    pub submissions: Vec<Submission>,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub deleted: bool,
}

/// Resolves the text to match: combined questionnaire answers when present,
/// free text otherwise. Trimmed, and rejected when too short.
pub fn intake_text(request: &IntakeRequest) -> Result<String, AppError> {
    let (raw, min_chars, message) = match &request.questionnaire {
        Some(answers) => (
            combine_answers(answers),
            MIN_QUESTIONNAIRE_CHARS,
            "Please complete the questionnaire",
        ),
        None => (
            request.dream_text.clone().unwrap_or_default(),
            MIN_FREE_TEXT_CHARS,
            "Enter at least 2 characters",
        ),
    };

    // Counted in UTF-16 code units, as browsers count `maxlength`/`length`.
    let trimmed = raw.trim();
    if trimmed.encode_utf16().count() < min_chars {
        return Err(AppError::Validation(message.to_string()));
    }
    Ok(trimmed.to_string())
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/intake
///
/// Stores the submission and returns archetype labels plus matched career ids.
pub async fn handle_intake(
    State(state): State<AppState>,
    Json(request): Json<IntakeRequest>,
) -> Result<Json<IntakeResponse>, AppError> {
    let text = intake_text(&request)?;

    let archetypes = match_archetypes(&text);
    let ranking = rank_careers(&text);
    let fallback = ranking.fallback;
    let matched_career_ids = ranking.into_ids();
    let submission = state.store.add(text).await;

    info!(
        submission_id = %submission.id,
        archetypes = archetypes.len(),
        careers = matched_career_ids.len(),
        fallback,
        "intake processed"
    );

    Ok(Json(IntakeResponse {
        submission_id: submission.id,
        archetypes,
        matched_career_ids,
    }))
}

/// GET /api/recommendations/:submission_id
///
/// Recomputes labels and career ids from the stored text, so a reloaded
/// results page gets the same answer the intake call returned.
pub async fn handle_recommendations(
    State(state): State<AppState>,
    Path(submission_id): Path<String>,
) -> Result<Json<RecommendationsResponse>, AppError> {
    let not_found = || AppError::NotFound("Submission not found".to_string());
    let id = Uuid::parse_str(&submission_id).map_err(|_| not_found())?;
    let submission = state.store.get(id).await.ok_or_else(not_found)?;

    Ok(Json(RecommendationsResponse {
        archetypes: match_archetypes(&submission.dream_text),
        matched_career_ids: match_careers(&submission.dream_text),
    }))
}

/// GET /api/admin/submissions
pub async fn handle_list_submissions(State(state): State<AppState>) -> Json<SubmissionsResponse> {
    Json(SubmissionsResponse {
        submissions: state.store.list().await,
    })
}

/// DELETE /api/admin/submissions/:id
pub async fn handle_delete_submission(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<DeleteResponse> {
    let deleted = match Uuid::parse_str(&id) {
        Ok(id) => state.store.remove(id).await,
        Err(_) => false,
    };
    Json(DeleteResponse { deleted })
}

/// GET /api/admin/insights
pub async fn handle_insights(State(state): State<AppState>) -> Json<Insights> {
    let texts: Vec<String> = state
        .store
        .list()
        .await
        .into_iter()
        .map(|s| s.dream_text)
        .collect();
    Json(compute_insights(&texts))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn free_text(text: &str) -> IntakeRequest {
        IntakeRequest {
            dream_text: Some(text.to_string()),
            questionnaire: None,
        }
    }

    #[test]
    fn test_free_text_is_trimmed() {
        assert_eq!(intake_text(&free_text("  hi  ")).unwrap(), "hi");
    }

    #[test]
    fn test_free_text_too_short() {
        let err = intake_text(&free_text(" a ")).unwrap_err();
        assert!(matches!(err, AppError::Validation(ref m) if m == "Enter at least 2 characters"));
        assert!(intake_text(&IntakeRequest::default()).is_err());
    }

    #[test]
    fn test_length_counts_utf16_units() {
        // one astral emoji is two UTF-16 units
        assert_eq!(intake_text(&free_text("🚀")).unwrap(), "🚀");
        assert!(intake_text(&free_text("é")).is_err());
    }

    #[test]
    fn test_questionnaire_takes_precedence() {
        let mut answers = BTreeMap::new();
        answers.insert("past_work".to_string(), "Two summers at a design studio".to_string());
        let request = IntakeRequest {
            dream_text: Some("ignored".to_string()),
            questionnaire: Some(answers),
        };
        assert_eq!(intake_text(&request).unwrap(), "Two summers at a design studio");
    }

    #[test]
    fn test_questionnaire_needs_twenty_chars() {
        let mut answers = BTreeMap::new();
        answers.insert("past_work".to_string(), "barista".to_string());
        let request = IntakeRequest {
            dream_text: None,
            questionnaire: Some(answers),
        };
        let err = intake_text(&request).unwrap_err();
        assert!(matches!(err, AppError::Validation(ref m) if m == "Please complete the questionnaire"));
    }
}
