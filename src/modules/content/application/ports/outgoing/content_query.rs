// src/modules/content/application/ports/outgoing/content_query.rs

use async_trait::async_trait;

use crate::content::application::domain::documents::{ProjectDocument, ServiceDocument};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ContentQueryError {
    #[error("Content repository unreachable: {0}")]
    Unreachable(String),

    #[error("Content query failed: {0}")]
    QueryFailed(String),

    #[error("Failed to decode content response: {0}")]
    DecodeError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (read-only content repository)
// ──────────────────────────────────────────────────────────
//

/// Read-only query interface over the headless content repository. Each call
/// is stateless and independent: a failure in one query must not prevent the
/// others from succeeding or from having their results used.
#[async_trait]
pub trait ContentQuery: Send + Sync {
    /// All project documents, priority ascending (missing priority sorts
    /// after every explicit value) then creation time descending.
    async fn list_projects(&self) -> Result<Vec<ProjectDocument>, ContentQueryError>;

    /// Single project by slug equality; `None` when no document matches.
    async fn get_project_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<ProjectDocument>, ContentQueryError>;

    /// All service documents, creation time ascending.
    async fn list_services(&self) -> Result<Vec<ServiceDocument>, ContentQueryError>;
}
