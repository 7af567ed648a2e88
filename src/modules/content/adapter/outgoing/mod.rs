mod sanity_content_query;

pub use sanity_content_query::{sort_projects_by_priority, SanityConfig, SanityContentQuery};
