pub mod app;
pub mod domain;
pub mod sections;
pub mod shared;
