//! Storage contracts of the generic CRUD layer

use super::page::{Page, PageRequest};
use async_trait::async_trait;
use contracts::domain::common::{CatalogEntity, DataEntity, Entity, EntityId};

/// Хранилище сущностей `E` с идентификатором `E::Id`
#[async_trait]
pub trait Repository<E: Entity>: Send + Sync {
    /// Сохранить: новой сущности присваивается ID, существующая заменяется
    async fn save(&self, entity: E) -> anyhow::Result<E>;

    async fn find_by_id(&self, id: &E::Id) -> anyhow::Result<Option<E>>;

    async fn exists_by_id(&self, id: &E::Id) -> anyhow::Result<bool> {
        Ok(self.find_by_id(id).await?.is_some())
    }

    /// Удалить по ID; отсутствующий ID не является ошибкой
    async fn delete_by_id(&self, id: &E::Id) -> anyhow::Result<()>;

    async fn find_all(&self, page: PageRequest) -> anyhow::Result<Page<E>>;

    async fn count(&self) -> anyhow::Result<usize>;
}

/// Хранилище с фильтрованной выборкой
#[async_trait]
pub trait DataRepository<E: DataEntity>: Repository<E> {
    /// Страница сущностей, подходящих под `filter`
    async fn find_all_by(&self, filter: &str, page: PageRequest) -> anyhow::Result<Page<E>>;
}

/// Хранилище справочников
#[async_trait]
pub trait CatalogRepository<E: CatalogEntity>: DataRepository<E> {
    async fn find_by_code(&self, code: &str) -> anyhow::Result<Option<E>>;
}

/// Фильтр данных: подстрока в строковом ID, без учёта регистра
pub fn matches_data_filter<E: DataEntity>(entity: &E, filter: &str) -> bool {
    let needle = filter.to_lowercase();
    entity
        .id()
        .map(|id| id.as_string().to_lowercase().contains(&needle))
        .unwrap_or(false)
}

/// Фильтр справочника: подстрока в ID, коде или наименовании, без учёта регистра
pub fn matches_catalog_filter<E: CatalogEntity>(entity: &E, filter: &str) -> bool {
    let needle = filter.to_lowercase();
    matches_data_filter(entity, filter)
        || entity.code().to_lowercase().contains(&needle)
        || entity.title().to_lowercase().contains(&needle)
}
