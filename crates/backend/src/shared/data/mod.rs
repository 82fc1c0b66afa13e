pub mod memory;
pub mod page;
pub mod repository;

pub use memory::{MemoryCatalogRepository, MemoryRepository};
pub use page::{Page, PageRequest};
pub use repository::{CatalogRepository, DataRepository, Repository};
