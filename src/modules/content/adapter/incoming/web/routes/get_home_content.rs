use actix_web::{get, web, Responder};

use crate::api::schemas::SuccessResponse;
use crate::content::application::domain::view_models::HomeContentView;
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

/// Home page content
///
/// Projects and services resolved together. Repository failures degrade to
/// bundled fallback content, so this endpoint always answers 200.
#[utoipa::path(
    get,
    path = "/api/content/home",
    tag = "content",
    responses(
        (status = 200, description = "Resolved home content", body = inline(SuccessResponse<HomeContentView>)),
    )
)]
#[get("/api/content/home")]
pub async fn get_home_content_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.get_home_content.execute().await)
}
