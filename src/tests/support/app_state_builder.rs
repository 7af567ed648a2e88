use std::sync::Arc;

use actix_web::web;

use crate::contact::application::ports::incoming::use_cases::SubmitContactUseCase;
use crate::content::application::ports::incoming::use_cases::{
    GetHomeContentUseCase, GetProjectBySlugUseCase, GetProjectsUseCase, GetServicesUseCase,
};
use crate::tests::support::stubs::*;
use crate::AppState;

pub struct TestAppStateBuilder {
    get_home_content: Option<Arc<dyn GetHomeContentUseCase + Send + Sync>>,
    get_projects: Option<Arc<dyn GetProjectsUseCase + Send + Sync>>,
    get_services: Option<Arc<dyn GetServicesUseCase + Send + Sync>>,
    get_project_by_slug: Option<Arc<dyn GetProjectBySlugUseCase + Send + Sync>>,
    submit_contact: Option<Arc<dyn SubmitContactUseCase + Send + Sync>>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            get_home_content: Some(Arc::new(StubGetHomeContentUseCase::fallback())),
            get_projects: Some(Arc::new(StubGetProjectsUseCase::returning(vec![]))),
            get_services: Some(Arc::new(StubGetServicesUseCase::returning(vec![]))),
            get_project_by_slug: Some(Arc::new(StubGetProjectBySlugUseCase::not_found())),
            submit_contact: Some(Arc::new(StubSubmitContactUseCase::success())),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_get_home_content(
        mut self,
        uc: impl GetHomeContentUseCase + Send + Sync + 'static,
    ) -> Self {
        self.get_home_content = Some(Arc::new(uc));
        self
    }

    pub fn with_get_projects(mut self, uc: impl GetProjectsUseCase + Send + Sync + 'static) -> Self {
        self.get_projects = Some(Arc::new(uc));
        self
    }

    pub fn with_get_services(mut self, uc: impl GetServicesUseCase + Send + Sync + 'static) -> Self {
        self.get_services = Some(Arc::new(uc));
        self
    }

    pub fn with_get_project_by_slug(
        mut self,
        uc: impl GetProjectBySlugUseCase + Send + Sync + 'static,
    ) -> Self {
        self.get_project_by_slug = Some(Arc::new(uc));
        self
    }

    pub fn with_submit_contact(
        mut self,
        uc: impl SubmitContactUseCase + Send + Sync + 'static,
    ) -> Self {
        self.submit_contact = Some(Arc::new(uc));
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            get_home_content: self.get_home_content.expect("get_home_content stub"),
            get_projects: self.get_projects.expect("get_projects stub"),
            get_services: self.get_services.expect("get_services stub"),
            get_project_by_slug: self.get_project_by_slug.expect("get_project_by_slug stub"),
            submit_contact: self.submit_contact.expect("submit_contact stub"),
        })
    }
}
