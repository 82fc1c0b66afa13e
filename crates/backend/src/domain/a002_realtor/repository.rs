use crate::shared::data::MemoryCatalogRepository;
use contracts::domain::a002_realtor::Realtor;
use std::sync::Arc;

/// Хранилище риелторов
pub type RealtorRepository = MemoryCatalogRepository<Realtor>;

pub fn new_repository() -> Arc<RealtorRepository> {
    Arc::new(RealtorRepository::new())
}
