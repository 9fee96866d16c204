use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::analytics::scoring::{analyze, AnalyticsReport};
use crate::errors::AppError;
use crate::state::AppState;

/// GET /api/v1/sessions/:id/analytics
///
/// Recomputes the heuristic report from the current record. Deterministic,
/// no model call, safe to poll.
pub async fn handle_get_analytics(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AnalyticsReport>, AppError> {
    let snapshot = state.sessions.snapshot(id).await?;
    Ok(Json(analyze(&snapshot.record)))
}
