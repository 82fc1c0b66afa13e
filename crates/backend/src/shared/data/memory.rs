//! In-memory repositories keeping insertion order

use super::page::{Page, PageRequest};
use super::repository::{
    matches_catalog_filter, matches_data_filter, CatalogRepository, DataRepository, Repository,
};
use anyhow::anyhow;
use async_trait::async_trait;
use contracts::domain::common::{CatalogEntity, DataEntity, Entity, EntityId};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Хранилище в памяти; фильтр по строковому ID
pub struct MemoryRepository<E: Entity> {
    rows: RwLock<Vec<E>>,
    sequence: AtomicU64,
}

impl<E: Entity> MemoryRepository<E> {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(Vec::new()),
            sequence: AtomicU64::new(0),
        }
    }

    fn read(&self) -> anyhow::Result<RwLockReadGuard<'_, Vec<E>>> {
        self.rows
            .read()
            .map_err(|_| anyhow!("{} storage lock poisoned", E::full_name()))
    }

    fn write(&self) -> anyhow::Result<RwLockWriteGuard<'_, Vec<E>>> {
        self.rows
            .write()
            .map_err(|_| anyhow!("{} storage lock poisoned", E::full_name()))
    }

    /// Следующий свободный ID из последовательности хранилища
    fn next_id(&self, rows: &[E]) -> anyhow::Result<E::Id> {
        loop {
            let sequence = self.sequence.fetch_add(1, Ordering::Relaxed) + 1;
            let id = E::Id::generate(sequence).ok_or_else(|| {
                anyhow!(
                    "cannot generate {} identifier for {}",
                    std::any::type_name::<E::Id>(),
                    E::full_name()
                )
            })?;
            if !rows.iter().any(|row| row.id() == Some(&id)) {
                return Ok(id);
            }
        }
    }

    /// Все записи, подходящие под предикат, в порядке вставки
    pub fn select(&self, predicate: impl Fn(&E) -> bool) -> anyhow::Result<Vec<E>> {
        Ok(self.read()?.iter().filter(|e| predicate(e)).cloned().collect())
    }
}

impl<E: Entity> Default for MemoryRepository<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<E: Entity> Repository<E> for MemoryRepository<E> {
    async fn save(&self, mut entity: E) -> anyhow::Result<E> {
        let mut rows = self.write()?;
        match entity.id().cloned() {
            None => {
                let id = self.next_id(&rows)?;
                entity.set_id(Some(id));
                rows.push(entity.clone());
            }
            Some(id) => match rows.iter_mut().find(|row| row.id() == Some(&id)) {
                Some(existing) => *existing = entity.clone(),
                None => rows.push(entity.clone()),
            },
        }
        Ok(entity)
    }

    async fn find_by_id(&self, id: &E::Id) -> anyhow::Result<Option<E>> {
        Ok(self
            .read()?
            .iter()
            .find(|row| row.id() == Some(id))
            .cloned())
    }

    async fn delete_by_id(&self, id: &E::Id) -> anyhow::Result<()> {
        self.write()?.retain(|row| row.id() != Some(id));
        Ok(())
    }

    async fn find_all(&self, page: PageRequest) -> anyhow::Result<Page<E>> {
        Ok(Page::from_all(self.read()?.clone(), page))
    }

    async fn count(&self) -> anyhow::Result<usize> {
        Ok(self.read()?.len())
    }
}

#[async_trait]
impl<E: DataEntity> DataRepository<E> for MemoryRepository<E> {
    async fn find_all_by(&self, filter: &str, page: PageRequest) -> anyhow::Result<Page<E>> {
        let rows = self.select(|e| matches_data_filter(e, filter))?;
        Ok(Page::from_all(rows, page))
    }
}

/// Хранилище справочника в памяти; фильтр по ID, коду и наименованию
pub struct MemoryCatalogRepository<E: CatalogEntity> {
    inner: MemoryRepository<E>,
}

impl<E: CatalogEntity> MemoryCatalogRepository<E> {
    pub fn new() -> Self {
        Self {
            inner: MemoryRepository::new(),
        }
    }
}

impl<E: CatalogEntity> Default for MemoryCatalogRepository<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<E: CatalogEntity> Repository<E> for MemoryCatalogRepository<E> {
    async fn save(&self, entity: E) -> anyhow::Result<E> {
        self.inner.save(entity).await
    }

    async fn find_by_id(&self, id: &E::Id) -> anyhow::Result<Option<E>> {
        self.inner.find_by_id(id).await
    }

    async fn delete_by_id(&self, id: &E::Id) -> anyhow::Result<()> {
        self.inner.delete_by_id(id).await
    }

    async fn find_all(&self, page: PageRequest) -> anyhow::Result<Page<E>> {
        self.inner.find_all(page).await
    }

    async fn count(&self) -> anyhow::Result<usize> {
        self.inner.count().await
    }
}

#[async_trait]
impl<E: CatalogEntity> DataRepository<E> for MemoryCatalogRepository<E> {
    async fn find_all_by(&self, filter: &str, page: PageRequest) -> anyhow::Result<Page<E>> {
        let rows = self.inner.select(|e| matches_catalog_filter(e, filter))?;
        Ok(Page::from_all(rows, page))
    }
}

#[async_trait]
impl<E: CatalogEntity> CatalogRepository<E> for MemoryCatalogRepository<E> {
    async fn find_by_code(&self, code: &str) -> anyhow::Result<Option<E>> {
        Ok(self
            .inner
            .select(|e| e.code() == code)?
            .into_iter()
            .next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_client::Client;
    use contracts::domain::a002_realtor::Realtor;

    #[tokio::test]
    async fn save_assigns_sequential_ids_and_replaces_existing() {
        let repo = MemoryRepository::<Client>::new();
        let first = repo.save(Client::new("C-1", "Anna", "Petrova")).await.unwrap();
        let second = repo.save(Client::new("C-2", "Oleg", "Ivanov")).await.unwrap();
        assert_eq!(first.base.id, Some(1));
        assert_eq!(second.base.id, Some(2));

        let mut changed = first.clone();
        changed.name = "Anya".into();
        repo.save(changed).await.unwrap();
        assert_eq!(repo.count().await.unwrap(), 2);
        let stored = repo.find_by_id(&1).await.unwrap().unwrap();
        assert_eq!(stored.name, "Anya");
    }

    #[tokio::test]
    async fn generated_ids_skip_explicitly_taken_ones() {
        let repo = MemoryRepository::<Client>::new();
        let mut explicit = Client::new("C-1", "Anna", "Petrova");
        explicit.base.id = Some(1);
        repo.save(explicit).await.unwrap();
        let generated = repo.save(Client::new("C-2", "Oleg", "Ivanov")).await.unwrap();
        assert_eq!(generated.base.id, Some(2));
    }

    #[tokio::test]
    async fn uuid_ids_are_generated() {
        let repo = MemoryCatalogRepository::<Realtor>::new();
        let saved = repo
            .save(Realtor::new("R-1", "Ivan Sidorov", ""))
            .await
            .unwrap();
        assert!(saved.base.id.is_some());
    }

    #[tokio::test]
    async fn deleting_a_missing_id_is_not_an_error() {
        let repo = MemoryRepository::<Client>::new();
        assert!(repo.delete_by_id(&99).await.is_ok());
    }

    #[tokio::test]
    async fn data_filter_matches_ids_only() {
        let repo = MemoryRepository::<Client>::new();
        for n in 1..=12 {
            repo.save(Client::new(format!("C-{n}"), "Anna", "Petrova"))
                .await
                .unwrap();
        }
        let page = repo.find_all_by("1", PageRequest::first(50)).await.unwrap();
        // 1, 10, 11, 12
        assert_eq!(page.total, 4);
        let page = repo.find_all_by("anna", PageRequest::first(50)).await.unwrap();
        assert_eq!(page.total, 0);
    }

    #[tokio::test]
    async fn catalog_filter_matches_code_and_title_case_insensitively() {
        let repo = MemoryCatalogRepository::<Client>::new();
        repo.save(Client::new("ALPHA", "Anna", "Petrova")).await.unwrap();
        repo.save(Client::new("BETA", "Boris", "Ivanov")).await.unwrap();

        let page = repo.find_all_by("a", PageRequest::first(50)).await.unwrap();
        assert_eq!(page.total, 2);
        let page = repo.find_all_by("IVAN", PageRequest::first(50)).await.unwrap();
        assert_eq!(page.total, 1);
        let page = repo.find_all_by("zz", PageRequest::first(50)).await.unwrap();
        assert_eq!(page.total, 0);

        let found = repo.find_by_code("BETA").await.unwrap().unwrap();
        assert_eq!(found.name, "Boris");
    }
}
