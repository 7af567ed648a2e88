pub mod content_query;
