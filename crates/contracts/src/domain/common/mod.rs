//! Common types and traits for all entities

pub mod base_catalog;
pub mod entity;
pub mod entity_id;
pub mod entity_metadata;

// Re-exports
pub use base_catalog::BaseCatalog;
pub use entity::{CatalogEntity, DataEntity, Entity};
pub use entity_id::{ConversionError, EntityId};
pub use entity_metadata::EntityMetadata;
