pub mod config;
pub mod data;
pub mod logger;
pub mod meta;
pub mod service;
