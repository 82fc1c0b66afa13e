use crate::shared::data::MemoryCatalogRepository;
use contracts::domain::a001_client::Client;
use std::sync::Arc;

/// Хранилище клиентов
pub type ClientRepository = MemoryCatalogRepository<Client>;

pub fn new_repository() -> Arc<ClientRepository> {
    Arc::new(ClientRepository::new())
}
