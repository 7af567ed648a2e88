mod get_home_content;
mod get_project_by_slug;
mod get_projects;
mod get_services;

pub use get_home_content::GetHomeContentUseCase;
pub use get_project_by_slug::{GetProjectBySlugError, GetProjectBySlugUseCase};
pub use get_projects::GetProjectsUseCase;
pub use get_services::GetServicesUseCase;
