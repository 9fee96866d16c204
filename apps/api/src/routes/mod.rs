pub mod health;

use axum::{
    routing::{get, patch, post, put},
    Router,
};

use crate::analytics::handlers as analytics_handlers;
use crate::assist::handlers as assist_handlers;
use crate::export::handlers as export_handlers;
use crate::models::templates::TEMPLATES;
use crate::state::AppState;
use crate::wizard::handlers as wizard_handlers;

async fn list_templates() -> axum::Json<&'static [crate::models::templates::Template]> {
    axum::Json(TEMPLATES)
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/templates", get(list_templates))
        // Session lifecycle and navigation
        .route("/api/v1/sessions", post(wizard_handlers::handle_create_session))
        .route(
            "/api/v1/sessions/:id",
            get(wizard_handlers::handle_get_session)
                .delete(wizard_handlers::handle_delete_session),
        )
        .route(
            "/api/v1/sessions/:id/advance",
            post(wizard_handlers::handle_advance),
        )
        .route(
            "/api/v1/sessions/:id/retreat",
            post(wizard_handlers::handle_retreat),
        )
        .route(
            "/api/v1/sessions/:id/sections/:key",
            put(wizard_handlers::handle_update_section),
        )
        // List-editing sub-forms
        .route(
            "/api/v1/sessions/:id/education",
            post(wizard_handlers::handle_add_education),
        )
        .route(
            "/api/v1/sessions/:id/education/:entry_id",
            patch(wizard_handlers::handle_patch_education)
                .delete(wizard_handlers::handle_remove_education),
        )
        .route(
            "/api/v1/sessions/:id/experience",
            post(wizard_handlers::handle_add_experience),
        )
        .route(
            "/api/v1/sessions/:id/experience/:entry_id",
            patch(wizard_handlers::handle_patch_experience)
                .delete(wizard_handlers::handle_remove_experience),
        )
        .route(
            "/api/v1/sessions/:id/projects",
            post(wizard_handlers::handle_add_project),
        )
        .route(
            "/api/v1/sessions/:id/projects/:entry_id",
            patch(wizard_handlers::handle_patch_project)
                .delete(wizard_handlers::handle_remove_project),
        )
        .route(
            "/api/v1/sessions/:id/skills/:category",
            post(wizard_handlers::handle_add_skill)
                .delete(wizard_handlers::handle_remove_skill),
        )
        // Assist
        .route(
            "/api/v1/sessions/:id/assist/improve",
            post(assist_handlers::handle_improve),
        )
        .route(
            "/api/v1/sessions/:id/assist/skills",
            post(assist_handlers::handle_suggest_skills),
        )
        .route(
            "/api/v1/sessions/:id/assist/project-description",
            post(assist_handlers::handle_project_description),
        )
        .route(
            "/api/v1/sessions/:id/assist/analyze",
            post(assist_handlers::handle_analyze),
        )
        // Analytics and export
        .route(
            "/api/v1/sessions/:id/analytics",
            get(analytics_handlers::handle_get_analytics),
        )
        .route(
            "/api/v1/sessions/:id/export",
            post(export_handlers::handle_export),
        )
        .route(
            "/api/v1/sessions/:id/share",
            post(export_handlers::handle_share),
        )
        .with_state(state)
}
