pub mod content_resolver;

mod get_home_content_service;
mod get_project_by_slug_service;
mod get_projects_service;
mod get_services_service;

pub use get_home_content_service::GetHomeContentService;
pub use get_project_by_slug_service::GetProjectBySlugService;
pub use get_projects_service::GetProjectsService;
pub use get_services_service::GetServicesService;
