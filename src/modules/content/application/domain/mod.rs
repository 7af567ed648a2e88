pub mod documents;
pub mod fallback;
pub mod view_models;
