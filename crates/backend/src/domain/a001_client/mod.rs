pub mod meta;
pub mod repository;
pub mod service;
