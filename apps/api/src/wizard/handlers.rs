//! Axum route handlers for the wizard itself: session lifecycle, step
//! navigation, section replacement, and the list-editing sub-forms.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::{EducationEntry, ExperienceEntry, ProjectEntry};
use crate::state::AppState;
use crate::wizard::controller::SectionKey;
use crate::wizard::sections;
use crate::wizard::session::SessionSnapshot;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct EntryResponse {
    pub entry_id: Uuid,
    pub session: SessionSnapshot,
}

#[derive(Debug, Deserialize)]
pub struct SkillRequest {
    pub skill: String,
}

/// Skill category path segment: technical | soft | languages.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    Technical,
    Soft,
    Languages,
}

// ────────────────────────────────────────────────────────────────────────────
// Session lifecycle and navigation
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/sessions
pub async fn handle_create_session(State(state): State<AppState>) -> Json<SessionSnapshot> {
    let snapshot = state.sessions.create().await;
    tracing::info!("Created wizard session {}", snapshot.id);
    Json(snapshot)
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionSnapshot>, AppError> {
    Ok(Json(state.sessions.snapshot(id).await?))
}

/// DELETE /api/v1/sessions/:id
pub async fn handle_delete_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.sessions.remove(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/sessions/:id/advance
pub async fn handle_advance(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let snapshot = state
        .sessions
        .mutate(id, |s| {
            s.wizard.advance();
            Ok(())
        })
        .await?;
    Ok(Json(snapshot))
}

/// POST /api/v1/sessions/:id/retreat
pub async fn handle_retreat(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let snapshot = state
        .sessions
        .mutate(id, |s| {
            s.wizard.retreat();
            Ok(())
        })
        .await?;
    Ok(Json(snapshot))
}

/// PUT /api/v1/sessions/:id/sections/:key
///
/// Wholesale replacement of one top-level record field.
pub async fn handle_update_section(
    State(state): State<AppState>,
    Path((id, key)): Path<(Uuid, SectionKey)>,
    Json(value): Json<Value>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let snapshot = state
        .sessions
        .mutate(id, |s| s.wizard.update_section(key, value))
        .await?;
    Ok(Json(snapshot))
}

// ────────────────────────────────────────────────────────────────────────────
// List-editing sub-forms
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/sessions/:id/education
pub async fn handle_add_education(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<EntryResponse>, AppError> {
    let entry = EducationEntry::new();
    let entry_id = entry.id;
    let session = state
        .sessions
        .mutate(id, |s| {
            s.wizard.record.education.push(entry);
            Ok(())
        })
        .await?;
    Ok(Json(EntryResponse { entry_id, session }))
}

/// PATCH /api/v1/sessions/:id/education/:entry_id
pub async fn handle_patch_education(
    State(state): State<AppState>,
    Path((id, entry_id)): Path<(Uuid, Uuid)>,
    Json(patch): Json<Value>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let snapshot = state
        .sessions
        .mutate(id, |s| {
            sections::patch_entry(&mut s.wizard.record.education, entry_id, &patch)?;
            Ok(())
        })
        .await?;
    Ok(Json(snapshot))
}

/// DELETE /api/v1/sessions/:id/education/:entry_id
pub async fn handle_remove_education(
    State(state): State<AppState>,
    Path((id, entry_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let snapshot = state
        .sessions
        .mutate(id, |s| {
            sections::remove_entry(&mut s.wizard.record.education, entry_id);
            Ok(())
        })
        .await?;
    Ok(Json(snapshot))
}

/// POST /api/v1/sessions/:id/experience
pub async fn handle_add_experience(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<EntryResponse>, AppError> {
    let entry = ExperienceEntry::new();
    let entry_id = entry.id;
    let session = state
        .sessions
        .mutate(id, |s| {
            s.wizard.record.experience.push(entry);
            Ok(())
        })
        .await?;
    Ok(Json(EntryResponse { entry_id, session }))
}

/// PATCH /api/v1/sessions/:id/experience/:entry_id
pub async fn handle_patch_experience(
    State(state): State<AppState>,
    Path((id, entry_id)): Path<(Uuid, Uuid)>,
    Json(patch): Json<Value>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let snapshot = state
        .sessions
        .mutate(id, |s| {
            sections::patch_entry(&mut s.wizard.record.experience, entry_id, &patch)?;
            Ok(())
        })
        .await?;
    Ok(Json(snapshot))
}

/// DELETE /api/v1/sessions/:id/experience/:entry_id
pub async fn handle_remove_experience(
    State(state): State<AppState>,
    Path((id, entry_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let snapshot = state
        .sessions
        .mutate(id, |s| {
            sections::remove_entry(&mut s.wizard.record.experience, entry_id);
            Ok(())
        })
        .await?;
    Ok(Json(snapshot))
}

/// POST /api/v1/sessions/:id/projects
pub async fn handle_add_project(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<EntryResponse>, AppError> {
    let entry = ProjectEntry::new();
    let entry_id = entry.id;
    let session = state
        .sessions
        .mutate(id, |s| {
            s.wizard.record.projects.push(entry);
            Ok(())
        })
        .await?;
    Ok(Json(EntryResponse { entry_id, session }))
}

/// PATCH /api/v1/sessions/:id/projects/:entry_id
pub async fn handle_patch_project(
    State(state): State<AppState>,
    Path((id, entry_id)): Path<(Uuid, Uuid)>,
    Json(patch): Json<Value>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let snapshot = state
        .sessions
        .mutate(id, |s| {
            sections::patch_entry(&mut s.wizard.record.projects, entry_id, &patch)?;
            Ok(())
        })
        .await?;
    Ok(Json(snapshot))
}

/// DELETE /api/v1/sessions/:id/projects/:entry_id
pub async fn handle_remove_project(
    State(state): State<AppState>,
    Path((id, entry_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let snapshot = state
        .sessions
        .mutate(id, |s| {
            sections::remove_entry(&mut s.wizard.record.projects, entry_id);
            Ok(())
        })
        .await?;
    Ok(Json(snapshot))
}

// ────────────────────────────────────────────────────────────────────────────
// Skills
// ────────────────────────────────────────────────────────────────────────────

fn skill_list<'a>(
    record: &'a mut crate::models::resume::ResumeRecord,
    category: SkillCategory,
) -> &'a mut Vec<String> {
    match category {
        SkillCategory::Technical => &mut record.skills.technical,
        SkillCategory::Soft => &mut record.skills.soft,
        SkillCategory::Languages => &mut record.skills.languages,
    }
}

/// POST /api/v1/sessions/:id/skills/:category
pub async fn handle_add_skill(
    State(state): State<AppState>,
    Path((id, category)): Path<(Uuid, SkillCategory)>,
    Json(request): Json<SkillRequest>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let snapshot = state
        .sessions
        .mutate(id, |s| {
            sections::add_skill(skill_list(&mut s.wizard.record, category), &request.skill)
        })
        .await?;
    Ok(Json(snapshot))
}

/// DELETE /api/v1/sessions/:id/skills/:category
pub async fn handle_remove_skill(
    State(state): State<AppState>,
    Path((id, category)): Path<(Uuid, SkillCategory)>,
    Json(request): Json<SkillRequest>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let snapshot = state
        .sessions
        .mutate(id, |s| {
            sections::remove_skill(skill_list(&mut s.wizard.record, category), &request.skill);
            Ok(())
        })
        .await?;
    Ok(Json(snapshot))
}
