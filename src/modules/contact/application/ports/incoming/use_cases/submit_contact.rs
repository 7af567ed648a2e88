use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ContactSubmission {
    #[schema(example = "Jane Doe")]
    pub name: String,
    #[schema(example = "jane@example.com")]
    pub email: String,
    #[schema(example = "Project inquiry")]
    pub subject: String,
    #[schema(example = "I'd like to talk about a project.")]
    pub message: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ContactAck {
    #[schema(example = "Your message has been sent successfully! I'll get back to you soon.")]
    pub message: String,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum SubmitContactError {
    /// No email credential configured; the send is never attempted.
    #[error("Email service is not configured. Please contact me directly.")]
    NotConfigured,

    /// Missing field or malformed email; the send is never attempted.
    #[error("{0}")]
    Validation(String),

    /// The provider rejected or failed the send. The underlying cause is
    /// logged server-side, never surfaced to the caller.
    #[error("Failed to send message. Please try again later or contact me directly.")]
    SendFailed(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait SubmitContactUseCase: Send + Sync {
    async fn execute(&self, submission: ContactSubmission) -> Result<ContactAck, SubmitContactError>;
}
