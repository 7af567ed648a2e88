// src/modules/content/application/service/get_services_service.rs

use std::sync::Arc;

use async_trait::async_trait;

use crate::content::application::domain::fallback::FallbackCatalog;
use crate::content::application::domain::view_models::ServiceView;
use crate::content::application::ports::incoming::use_cases::GetServicesUseCase;
use crate::content::application::ports::outgoing::content_query::ContentQuery;
use crate::content::application::service::content_resolver::resolve_services;

// ============================================================================
// Service Implementation
// ============================================================================

pub struct GetServicesService {
    query: Arc<dyn ContentQuery>,
    fallback: Arc<FallbackCatalog>,
}

impl GetServicesService {
    pub fn new(query: Arc<dyn ContentQuery>, fallback: Arc<FallbackCatalog>) -> Self {
        Self { query, fallback }
    }
}

#[async_trait]
impl GetServicesUseCase for GetServicesService {
    async fn execute(&self) -> Vec<ServiceView> {
        resolve_services(self.query.list_services().await, &self.fallback.services)
    }
}
