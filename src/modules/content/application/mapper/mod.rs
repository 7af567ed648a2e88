pub mod project;
pub mod service;
