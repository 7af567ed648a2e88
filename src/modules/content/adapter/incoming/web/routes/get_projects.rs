use actix_web::{get, web, Responder};

use crate::api::schemas::SuccessResponse;
use crate::content::application::domain::view_models::ProjectView;
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

/// Project listing
///
/// Repository order is preserved (priority ascending, then recency). Empty
/// or failed fetches serve the bundled fallback list.
#[utoipa::path(
    get,
    path = "/api/content/projects",
    tag = "content",
    responses(
        (status = 200, description = "Resolved project views", body = inline(SuccessResponse<Vec<ProjectView>>)),
    )
)]
#[get("/api/content/projects")]
pub async fn get_projects_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.get_projects.execute().await)
}
