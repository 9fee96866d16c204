use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::export::{export_placeholder, share_url, ExportFormat, ExportedDocument};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ExportRequest {
    pub format: ExportFormat,
}

#[derive(Debug, Serialize)]
pub struct ShareResponse {
    pub url: String,
}

/// POST /api/v1/sessions/:id/export
pub async fn handle_export(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<ExportRequest>,
) -> Result<Json<ExportedDocument>, AppError> {
    let snapshot = state.sessions.snapshot(id).await?;
    Ok(Json(export_placeholder(&snapshot.record, request.format)))
}

/// POST /api/v1/sessions/:id/share
pub async fn handle_share(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ShareResponse>, AppError> {
    // Session must exist, but the link itself carries no state.
    state.sessions.snapshot(id).await?;
    Ok(Json(ShareResponse { url: share_url() }))
}
