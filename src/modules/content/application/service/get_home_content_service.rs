// src/modules/content/application/service/get_home_content_service.rs

use std::sync::Arc;

use async_trait::async_trait;

use crate::content::application::domain::fallback::FallbackCatalog;
use crate::content::application::domain::view_models::HomeContentView;
use crate::content::application::ports::incoming::use_cases::GetHomeContentUseCase;
use crate::content::application::ports::outgoing::content_query::ContentQuery;
use crate::content::application::service::content_resolver::{
    resolve_projects, resolve_services,
};

// ============================================================================
// Service Implementation
// ============================================================================

pub struct GetHomeContentService {
    query: Arc<dyn ContentQuery>,
    fallback: Arc<FallbackCatalog>,
}

impl GetHomeContentService {
    pub fn new(query: Arc<dyn ContentQuery>, fallback: Arc<FallbackCatalog>) -> Self {
        Self { query, fallback }
    }
}

#[async_trait]
impl GetHomeContentUseCase for GetHomeContentService {
    async fn execute(&self) -> HomeContentView {
        // Both fetches run concurrently and settle independently; the
        // resolver converts each failure into fallback content without
        // touching the other collection.
        let (projects, services) =
            tokio::join!(self.query.list_projects(), self.query.list_services());

        HomeContentView {
            projects: resolve_projects(projects, &self.fallback.projects),
            services: resolve_services(services, &self.fallback.services),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::content::application::domain::documents::{ProjectDocument, ServiceDocument};
    use crate::content::application::ports::outgoing::content_query::ContentQueryError;

    /* --------------------------------------------------
     * Mock ContentQuery
     * -------------------------------------------------- */

    struct MockContentQuery {
        projects: Result<Vec<ProjectDocument>, ContentQueryError>,
        services: Result<Vec<ServiceDocument>, ContentQueryError>,
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
            unimplemented!("not used in GetHomeContentService tests")
        }

        async fn list_services(&self) -> Result<Vec<ServiceDocument>, ContentQueryError> {
            self.services.clone()
        }
    }

    fn project_doc(id: &str, name: &str) -> ProjectDocument {
        serde_json::from_value(serde_json::json!({ "_id": id, "name": name })).unwrap()
    }

    fn service_doc(id: &str, name: &str) -> ServiceDocument {
        serde_json::from_value(serde_json::json!({ "_id": id, "name": name })).unwrap()
    }

    fn service(query: MockContentQuery) -> GetHomeContentService {
        GetHomeContentService::new(Arc::new(query), Arc::new(FallbackCatalog::default()))
    }

    /* --------------------------------------------------
     * Tests
     * -------------------------------------------------- */

    #[tokio::test]
    async fn both_collections_resolve_live_data() {
        let home = service(MockContentQuery {
            projects: Ok(vec![project_doc("p-1", "Live Project")]),
            services: Ok(vec![service_doc("s-1", "Live Service")]),
        })
        .execute()
        .await;

        assert_eq!(home.projects.len(), 1);
        assert_eq!(home.projects[0].name, "Live Project");
        assert_eq!(home.services.len(), 1);
        assert_eq!(home.services[0].title, "Live Service");
    }

    #[tokio::test]
    async fn service_rejection_does_not_contaminate_projects() {
        let fallback = FallbackCatalog::default();

        let both_ok = service(MockContentQuery {
            projects: Ok(vec![project_doc("p-1", "Live Project")]),
            services: Ok(vec![service_doc("s-1", "Live Service")]),
        })
        .execute()
        .await;

        let services_down = service(MockContentQuery {
            projects: Ok(vec![project_doc("p-1", "Live Project")]),
            services: Err(ContentQueryError::Unreachable("timeout".to_string())),
        })
        .execute()
        .await;

        // Successful collection identical to the both-succeed case.
        assert_eq!(services_down.projects, both_ok.projects);
        assert_eq!(services_down.services, fallback.services);
    }

    #[tokio::test]
    async fn project_rejection_does_not_contaminate_services() {
        let fallback = FallbackCatalog::default();

        let home = service(MockContentQuery {
            projects: Err(ContentQueryError::QueryFailed("boom".to_string())),
            services: Ok(vec![service_doc("s-1", "Live Service")]),
        })
        .execute()
        .await;

        assert_eq!(home.projects, fallback.projects);
        assert_eq!(home.services.len(), 1);
        assert_eq!(home.services[0].title, "Live Service");
    }

    #[tokio::test]
    async fn double_failure_degrades_both_collections() {
        let fallback = FallbackCatalog::default();

        let home = service(MockContentQuery {
            projects: Err(ContentQueryError::Unreachable("down".to_string())),
            services: Ok(vec![]),
        })
        .execute()
        .await;

        assert_eq!(home.projects, fallback.projects);
        assert_eq!(home.services, fallback.services);
    }
}
