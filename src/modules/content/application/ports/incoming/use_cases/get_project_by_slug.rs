use async_trait::async_trait;

use crate::content::application::domain::view_models::ProjectView;
use crate::content::application::ports::outgoing::content_query::ContentQueryError;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetProjectBySlugError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<ContentQueryError> for GetProjectBySlugError {
    fn from(err: ContentQueryError) -> Self {
        match err {
            ContentQueryError::Unreachable(msg)
            | ContentQueryError::QueryFailed(msg)
            | ContentQueryError::DecodeError(msg) => GetProjectBySlugError::QueryFailed(msg),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

/// Single-project lookup for the case-study page. Unlike the collection
/// listings there is no fallback substitution here: an absent document is
/// `None` (404 at the route) and a repository failure is a typed error.
#[async_trait]
pub trait GetProjectBySlugUseCase: Send + Sync {
    async fn execute(&self, slug: &str) -> Result<Option<ProjectView>, GetProjectBySlugError>;
}
