//! Axum route handlers for the assist operations.
//!
//! Each handler marks the session's assist as pending for the duration of the
//! model call (rejecting a concurrent second call), applies the result to the
//! record, and always clears the flag — fallbacks included.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

use crate::assist::ops::{
    self, Improvement, RecordAnalysis,
};
use crate::errors::AppError;
use crate::state::AppState;
use crate::wizard::sections;
use crate::wizard::session::SessionSnapshot;

#[derive(Debug, Deserialize)]
pub struct ImproveRequest {
    pub entry_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct ImproveResponse {
    pub improvement: Improvement,
    pub session: SessionSnapshot,
}

#[derive(Debug, Serialize)]
pub struct SuggestSkillsResponse {
    pub suggestions: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct ProjectDescriptionRequest {
    pub entry_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct ProjectDescriptionResponse {
    pub description: String,
    pub session: SessionSnapshot,
}

/// POST /api/v1/sessions/:id/assist/improve
///
/// Improves one experience description. On model failure the fallback echoes
/// the original text, so the write-back leaves the field unchanged.
pub async fn handle_improve(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<ImproveRequest>,
) -> Result<Json<ImproveResponse>, AppError> {
    let record = state.sessions.begin_assist(id).await?;

    let result = async {
        let entry = record
            .experience
            .iter()
            .find(|e| e.id == request.entry_id)
            .ok_or_else(|| {
                AppError::NotFound(format!("Experience entry {} not found", request.entry_id))
            })?;
        if entry.description.trim().is_empty() {
            return Err(AppError::Validation(
                "Cannot improve an empty description".to_string(),
            ));
        }

        let improvement = ops::improve_with_fallback(
            state.assist.as_ref(),
            "experience",
            &entry.description,
            record.resume_type,
        )
        .await;

        let session = state
            .sessions
            .mutate(id, |s| {
                sections::patch_entry(
                    &mut s.wizard.record.experience,
                    request.entry_id,
                    &json!({ "description": improvement.improved }),
                )?;
                Ok(())
            })
            .await?;

        Ok(ImproveResponse {
            improvement,
            session,
        })
    }
    .await;

    state.sessions.finish_assist(id).await;
    result.map(Json)
}

/// POST /api/v1/sessions/:id/assist/skills
///
/// Suggests additional technical skills. Read-only: suggestions are returned,
/// not applied; the client adds them through the skills endpoint.
pub async fn handle_suggest_skills(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SuggestSkillsResponse>, AppError> {
    let record = state.sessions.begin_assist(id).await?;

    let suggestions = ops::suggest_skills_with_fallback(
        state.assist.as_ref(),
        record.resume_type,
        &record.skills.technical,
    )
    .await;

    state.sessions.finish_assist(id).await;
    Ok(Json(SuggestSkillsResponse { suggestions }))
}

/// POST /api/v1/sessions/:id/assist/project-description
///
/// Drafts a description from the project's name and technology list and
/// writes it back. The empty-string fallback is written as-is: it is a
/// normal field value, not an error.
pub async fn handle_project_description(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<ProjectDescriptionRequest>,
) -> Result<Json<ProjectDescriptionResponse>, AppError> {
    let record = state.sessions.begin_assist(id).await?;

    let result = async {
        let entry = record
            .projects
            .iter()
            .find(|p| p.id == request.entry_id)
            .ok_or_else(|| {
                AppError::NotFound(format!("Project entry {} not found", request.entry_id))
            })?;
        if entry.name.trim().is_empty() {
            return Err(AppError::Validation(
                "Project needs a name before a description can be drafted".to_string(),
            ));
        }

        let description = ops::draft_project_description_with_fallback(
            state.assist.as_ref(),
            &entry.name,
            &entry.technologies,
            record.resume_type,
        )
        .await;

        let session = state
            .sessions
            .mutate(id, |s| {
                sections::patch_entry(
                    &mut s.wizard.record.projects,
                    request.entry_id,
                    &json!({ "description": description }),
                )?;
                Ok(())
            })
            .await?;

        Ok(ProjectDescriptionResponse {
            description,
            session,
        })
    }
    .await;

    state.sessions.finish_assist(id).await;
    result.map(Json)
}

/// POST /api/v1/sessions/:id/assist/analyze
///
/// Whole-record analysis via the model, with the canned fallback on failure.
/// Does not mutate the record.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<RecordAnalysis>, AppError> {
    let record = state.sessions.begin_assist(id).await?;

    let analysis = ops::analyze_record_with_fallback(state.assist.as_ref(), &record).await;

    state.sessions.finish_assist(id).await;
    Ok(Json(analysis))
}
