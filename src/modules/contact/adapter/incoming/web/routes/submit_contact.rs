use actix_web::{http::StatusCode, post, web, Responder};
use tracing::{error, warn};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::contact::application::ports::incoming::use_cases::{
    ContactAck, ContactSubmission, SubmitContactError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

/// Contact form submission
///
/// Relays the message as a single transactional email. No retry, no queuing,
/// no delivery tracking.
#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "contact",
    request_body = ContactSubmission,
    responses(
        (status = 200, description = "Message relayed", body = inline(SuccessResponse<ContactAck>)),
        (status = 400, description = "Missing field or malformed email", body = ErrorResponse),
        (status = 503, description = "Email service not configured", body = ErrorResponse),
        (status = 500, description = "Email provider failure", body = ErrorResponse),
    )
)]
#[post("/api/contact")]
pub async fn submit_contact_handler(
    body: web::Json<ContactSubmission>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.submit_contact.execute(body.into_inner()).await {
        Ok(ack) => ApiResponse::success(ack),

        Err(err @ SubmitContactError::Validation(_)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &err.to_string())
        }

        Err(err @ SubmitContactError::NotConfigured) => {
            warn!("Contact submission rejected: email sender not configured");
            ApiResponse::error(
                StatusCode::SERVICE_UNAVAILABLE,
                "EMAIL_NOT_CONFIGURED",
                &err.to_string(),
            )
        }

        Err(err @ SubmitContactError::SendFailed(_)) => {
            if let SubmitContactError::SendFailed(cause) = &err {
                error!("Contact email send failed: {}", cause);
            }
            ApiResponse::error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "EMAIL_SEND_FAILED",
                &err.to_string(),
            )
        }
    }
}
