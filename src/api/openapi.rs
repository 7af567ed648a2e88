use crate::api::schemas::{ErrorDetail, ErrorResponse, SuccessResponse};
use utoipa::OpenApi;

use crate::contact::application::ports::incoming::use_cases::{ContactAck, ContactSubmission};
use crate::content::application::domain::view_models::{
    HomeContentView, ProjectView, SectionView, ServiceView,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio Content API",
        version = "1.0.0",
        description = "Read-only content API over the headless CMS, plus contact relay",
    ),
    paths(
        // Content endpoints
        crate::content::adapter::incoming::web::routes::get_home_content_handler,
        crate::content::adapter::incoming::web::routes::get_projects_handler,
        crate::content::adapter::incoming::web::routes::get_services_handler,
        crate::content::adapter::incoming::web::routes::get_project_by_slug_handler,

        // Contact endpoint
        crate::contact::adapter::incoming::web::routes::submit_contact_handler,
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<HomeContentView>,
            ErrorResponse,
            ErrorDetail,

            // Content views
            HomeContentView,
            ProjectView,
            SectionView,
            ServiceView,

            // Contact DTOs
            ContactSubmission,
            ContactAck,
        )
    ),
    tags(
        (name = "content", description = "Resolved CMS content with fallback substitution"),
        (name = "contact", description = "Contact form relay"),
    )
)]
pub struct ApiDoc;
