use async_trait::async_trait;

use crate::content::application::domain::view_models::ProjectView;

/// Lists resolved project views. Repository failure and empty results both
/// resolve to the bundled fallback list, so this use case cannot fail.
#[async_trait]
pub trait GetProjectsUseCase: Send + Sync {
    async fn execute(&self) -> Vec<ProjectView>;
}
