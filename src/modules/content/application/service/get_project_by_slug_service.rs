// src/modules/content/application/service/get_project_by_slug_service.rs

use std::sync::Arc;

use async_trait::async_trait;

use crate::content::application::domain::view_models::ProjectView;
use crate::content::application::mapper::project::map_project;
use crate::content::application::ports::incoming::use_cases::{
    GetProjectBySlugError, GetProjectBySlugUseCase,
};
use crate::content::application::ports::outgoing::content_query::ContentQuery;

// ============================================================================
// Service Implementation
// ============================================================================

pub struct GetProjectBySlugService {
    query: Arc<dyn ContentQuery>,
}

impl GetProjectBySlugService {
    pub fn new(query: Arc<dyn ContentQuery>) -> Self {
        Self { query }
    }
}

#[async_trait]
impl GetProjectBySlugUseCase for GetProjectBySlugService {
    async fn execute(&self, slug: &str) -> Result<Option<ProjectView>, GetProjectBySlugError> {
        let doc = self.query.get_project_by_slug(slug).await?;
        Ok(doc.as_ref().map(map_project))
    }
}
