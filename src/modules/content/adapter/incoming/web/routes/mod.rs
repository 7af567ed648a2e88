mod get_home_content;
mod get_project_by_slug;
mod get_projects;
mod get_services;

pub use get_home_content::*;
pub use get_project_by_slug::*;
pub use get_projects::*;
pub use get_services::*;
