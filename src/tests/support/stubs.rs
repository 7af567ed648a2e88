// Default stub use cases for route tests. Each stub returns a canned value;
// tests override the one they exercise through TestAppStateBuilder.

use async_trait::async_trait;

use crate::contact::application::ports::incoming::use_cases::{
    ContactAck, ContactSubmission, SubmitContactError, SubmitContactUseCase,
};
use crate::content::application::domain::fallback::FallbackCatalog;
use crate::content::application::domain::view_models::{
    HomeContentView, ProjectView, ServiceView,
};
use crate::content::application::ports::incoming::use_cases::{
    GetHomeContentUseCase, GetProjectBySlugError, GetProjectBySlugUseCase, GetProjectsUseCase,
    GetServicesUseCase,
};

/* --------------------------------------------------
 * Content stubs
 * -------------------------------------------------- */

pub struct StubGetHomeContentUseCase {
    view: HomeContentView,
}

impl StubGetHomeContentUseCase {
    pub fn returning(view: HomeContentView) -> Self {
        Self { view }
    }

    pub fn fallback() -> Self {
        let catalog = FallbackCatalog::default();
        Self::returning(HomeContentView {
            projects: catalog.projects,
            services: catalog.services,
        })
    }
}

#[async_trait]
impl GetHomeContentUseCase for StubGetHomeContentUseCase {
    async fn execute(&self) -> HomeContentView {
        self.view.clone()
    }
}

pub struct StubGetProjectsUseCase {
    projects: Vec<ProjectView>,
}

impl StubGetProjectsUseCase {
    pub fn returning(projects: Vec<ProjectView>) -> Self {
        Self { projects }
    }
}

#[async_trait]
impl GetProjectsUseCase for StubGetProjectsUseCase {
    async fn execute(&self) -> Vec<ProjectView> {
        self.projects.clone()
    }
}

pub struct StubGetServicesUseCase {
    services: Vec<ServiceView>,
}

impl StubGetServicesUseCase {
    pub fn returning(services: Vec<ServiceView>) -> Self {
        Self { services }
    }
}

#[async_trait]
impl GetServicesUseCase for StubGetServicesUseCase {
    async fn execute(&self) -> Vec<ServiceView> {
        self.services.clone()
    }
}

pub struct StubGetProjectBySlugUseCase {
    result: Result<Option<ProjectView>, GetProjectBySlugError>,
}

impl StubGetProjectBySlugUseCase {
    pub fn found(project: ProjectView) -> Self {
        Self {
            result: Ok(Some(project)),
        }
    }

    pub fn not_found() -> Self {
        Self { result: Ok(None) }
    }

    pub fn error(err: GetProjectBySlugError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl GetProjectBySlugUseCase for StubGetProjectBySlugUseCase {
    async fn execute(&self, _slug: &str) -> Result<Option<ProjectView>, GetProjectBySlugError> {
        self.result.clone()
    }
}

/* --------------------------------------------------
 * Contact stubs
 * -------------------------------------------------- */

pub struct StubSubmitContactUseCase {
    result: Result<ContactAck, SubmitContactError>,
}

impl StubSubmitContactUseCase {
    pub fn success() -> Self {
        Self {
            result: Ok(ContactAck {
                message: "Your message has been sent successfully! I'll get back to you soon."
                    .to_string(),
            }),
        }
    }

    pub fn error(err: SubmitContactError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl SubmitContactUseCase for StubSubmitContactUseCase {
    async fn execute(
        &self,
        _submission: ContactSubmission,
    ) -> Result<ContactAck, SubmitContactError> {
        self.result.clone()
    }
}
