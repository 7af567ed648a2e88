// src/modules/content/application/service/get_projects_service.rs

use std::sync::Arc;

use async_trait::async_trait;

use crate::content::application::domain::fallback::FallbackCatalog;
use crate::content::application::domain::view_models::ProjectView;
use crate::content::application::ports::incoming::use_cases::GetProjectsUseCase;
use crate::content::application::ports::outgoing::content_query::ContentQuery;
use crate::content::application::service::content_resolver::resolve_projects;

// ============================================================================
// Service Implementation
// ============================================================================

pub struct GetProjectsService {
    query: Arc<dyn ContentQuery>,
    fallback: Arc<FallbackCatalog>,
}

impl GetProjectsService {
    pub fn new(query: Arc<dyn ContentQuery>, fallback: Arc<FallbackCatalog>) -> Self {
        Self { query, fallback }
    }
}

#[async_trait]
impl GetProjectsUseCase for GetProjectsService {
    async fn execute(&self) -> Vec<ProjectView> {
        resolve_projects(self.query.list_projects().await, &self.fallback.projects)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::content::application::domain::documents::{ProjectDocument, ServiceDocument};
    use crate::content::application::ports::outgoing::content_query::ContentQueryError;

    struct MockContentQuery {
        projects: Result<Vec<ProjectDocument>, ContentQueryError>,
    }

    #[async_trait]
    impl ContentQuery for MockContentQuery {
        async fn list_projects(&self) -> Result<Vec<ProjectDocument>, ContentQueryError> {
            self.projects.clone()
        }

        async fn get_project_by_slug(
            &self,
            _slug: &str,
        ) -> Result<Option<ProjectDocument>, ContentQueryError> {
            unimplemented!("not used in GetProjectsService tests")
        }

        async fn list_services(&self) -> Result<Vec<ServiceDocument>, ContentQueryError> {
            unimplemented!("not used in GetProjectsService tests")
        }
    }

    #[tokio::test]
    async fn live_documents_are_mapped() {
        let doc: ProjectDocument =
            serde_json::from_value(serde_json::json!({ "_id": "p-7", "name": "Live" })).unwrap();

        let service = GetProjectsService::new(
            Arc::new(MockContentQuery {
                projects: Ok(vec![doc]),
            }),
            Arc::new(FallbackCatalog::default()),
        );

        let projects = service.execute().await;
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].name, "Live");
        assert_eq!(projects[0].numeric_id, 7);
    }

    #[tokio::test]
    async fn repository_failure_serves_fallback() {
        let fallback = FallbackCatalog::default();
        let service = GetProjectsService::new(
            Arc::new(MockContentQuery {
                projects: Err(ContentQueryError::Unreachable("offline".to_string())),
            }),
            Arc::new(fallback.clone()),
        );

        assert_eq!(service.execute().await, fallback.projects);
    }
}
