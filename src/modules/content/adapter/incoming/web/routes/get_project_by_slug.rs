use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::content::application::domain::view_models::ProjectView;
use crate::content::application::ports::incoming::use_cases::GetProjectBySlugError;
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

/// Project case study by slug
///
/// No fallback substitution on this path: a missing document is a 404.
#[utoipa::path(
    get,
    path = "/api/content/projects/{slug}",
    tag = "content",
    params(
        ("slug" = String, Path, description = "URL-safe project identifier")
    ),
    responses(
        (status = 200, description = "Resolved project view", body = inline(SuccessResponse<ProjectView>)),
        (status = 404, description = "No project with this slug", body = ErrorResponse),
        (status = 500, description = "Repository query failed", body = ErrorResponse),
    )
)]
#[get("/api/content/projects/{slug}")]
pub async fn get_project_by_slug_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let slug = path.into_inner();

    match data.get_project_by_slug.execute(&slug).await {
        Ok(Some(project)) => ApiResponse::success(project),

        Ok(None) => ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found"),

        Err(GetProjectBySlugError::QueryFailed(msg)) => {
            error!("Failed to load project '{}': {}", slug, msg);
            ApiResponse::internal_error()
        }
    }
}
