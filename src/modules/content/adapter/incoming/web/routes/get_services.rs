use actix_web::{get, web, Responder};

use crate::api::schemas::SuccessResponse;
use crate::content::application::domain::view_models::ServiceView;
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

/// Service listing
#[utoipa::path(
    get,
    path = "/api/content/services",
    tag = "content",
    responses(
        (status = 200, description = "Resolved service views", body = inline(SuccessResponse<Vec<ServiceView>>)),
    )
)]
#[get("/api/content/services")]
pub async fn get_services_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.get_services.execute().await)
}
