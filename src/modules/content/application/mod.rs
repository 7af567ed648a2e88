pub mod domain;
pub mod mapper;
pub mod ports;
pub mod service;
