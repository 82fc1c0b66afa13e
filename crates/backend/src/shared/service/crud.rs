use super::ServiceError;
use crate::shared::data::{CatalogRepository, DataRepository, Page, PageRequest, Repository};
use async_trait::async_trait;
use contracts::domain::common::{CatalogEntity, ConversionError, DataEntity, Entity, EntityId};
use contracts::shared::type_witness::TypeToken;
use std::marker::PhantomData;
use std::sync::Arc;

fn id_text<E: Entity>(entity: &E) -> String {
    entity
        .id()
        .map(EntityId::as_string)
        .unwrap_or_else(|| "<new>".into())
}

// ============================================================================
// Service tiers
// ============================================================================

/// CRUD над хранилищем сущностей `E`
#[async_trait]
pub trait Service<E: Entity>: Send + Sync {
    fn repository(&self) -> &dyn Repository<E>;

    fn entity_type(&self) -> TypeToken {
        TypeToken::of::<E>()
    }

    fn id_type(&self) -> TypeToken {
        TypeToken::of::<E::Id>()
    }

    /// Преобразовать строковый ID в `E::Id`
    fn convert_id(&self, raw: &str) -> Result<E::Id, ConversionError> {
        E::Id::from_string(raw)
    }

    async fn create(&self, mut entity: E) -> Result<E, ServiceError> {
        entity.validate().map_err(ServiceError::Validation)?;
        entity.before_write();
        let saved = self.repository().save(entity).await?;
        tracing::info!("Created {} {}", E::full_name(), id_text(&saved));
        Ok(saved)
    }

    /// Сущность по ID; при отсутствии `ServiceError::NotFound`
    async fn read(&self, id: &E::Id) -> Result<E, ServiceError> {
        self.find(id).await?.ok_or_else(|| ServiceError::NotFound {
            entity: E::full_name(),
            id: id.as_string(),
        })
    }

    async fn find(&self, id: &E::Id) -> Result<Option<E>, ServiceError> {
        Ok(self.repository().find_by_id(id).await?)
    }

    async fn find_page(&self, page: PageRequest) -> Result<Page<E>, ServiceError> {
        Ok(self.repository().find_all(page).await?)
    }

    async fn update(&self, mut entity: E) -> Result<E, ServiceError> {
        entity.validate().map_err(ServiceError::Validation)?;
        entity.before_write();
        let saved = self.repository().save(entity).await?;
        tracing::debug!("Updated {} {}", E::full_name(), id_text(&saved));
        Ok(saved)
    }

    async fn delete(&self, id: &E::Id) -> Result<(), ServiceError> {
        self.repository().delete_by_id(id).await?;
        tracing::info!("Deleted {} {}", E::full_name(), id.as_string());
        Ok(())
    }

    /// Удалить сущность; несохранённая сущность пропускается
    async fn delete_entity(&self, entity: &E) -> Result<(), ServiceError> {
        match entity.id() {
            Some(id) => self.delete(id).await,
            None => {
                tracing::debug!("Skip deleting unsaved {}", E::full_name());
                Ok(())
            }
        }
    }

    /// Новая сущность создаётся, сохранённая обновляется
    async fn create_or_update(&self, entity: E) -> Result<E, ServiceError> {
        if entity.is_new() {
            self.create(entity).await
        } else {
            self.update(entity).await
        }
    }
}

/// Сервис сущностей с пометками и фильтрованным списком
///
/// Переключение пометки выполняется в два шага: изменить сущность в памяти, затем
/// сохранить её одним `update`. Если сохранение не удалось, сущность у
/// вызывающего остаётся изменённой, а хранилище прежним.
#[async_trait]
pub trait DataService<E: DataEntity>: Service<E> {
    fn data_repository(&self) -> &dyn DataRepository<E>;

    /// Страница списка; непустой фильтр выбирает через `find_all_by`
    async fn list(&self, page: PageRequest, filter: Option<&str>) -> Result<Page<E>, ServiceError> {
        let page = match filter.map(str::trim).filter(|f| !f.is_empty()) {
            Some(filter) => self.data_repository().find_all_by(filter, page).await?,
            None => self.repository().find_all(page).await?,
        };
        Ok(page)
    }

    async fn toggle_deletion_mark(&self, entity: &mut E) -> Result<E, ServiceError> {
        entity.toggle_deletion_mark();
        let mark = entity.is_deletion_mark();
        match self.update(entity.clone()).await {
            Ok(saved) => {
                tracing::info!(
                    "{} {}: deletion_mark = {}",
                    E::full_name(),
                    id_text(&saved),
                    mark
                );
                *entity = saved.clone();
                Ok(saved)
            }
            Err(e) => {
                tracing::warn!(
                    "{} {}: deletion_mark = {} not persisted: {}",
                    E::full_name(),
                    id_text(entity),
                    mark,
                    e
                );
                Err(e)
            }
        }
    }

    async fn toggle_draft_mark(&self, entity: &mut E) -> Result<E, ServiceError> {
        entity.toggle_draft_mark();
        let mark = entity.is_draft_mark();
        match self.update(entity.clone()).await {
            Ok(saved) => {
                tracing::info!(
                    "{} {}: draft_mark = {}",
                    E::full_name(),
                    id_text(&saved),
                    mark
                );
                *entity = saved.clone();
                Ok(saved)
            }
            Err(e) => {
                tracing::warn!(
                    "{} {}: draft_mark = {} not persisted: {}",
                    E::full_name(),
                    id_text(entity),
                    mark,
                    e
                );
                Err(e)
            }
        }
    }
}

/// Сервис справочника
#[async_trait]
pub trait CatalogService<E: CatalogEntity>: DataService<E> {
    fn catalog_repository(&self) -> &dyn CatalogRepository<E>;

    async fn find_by_code(&self, code: &str) -> Result<Option<E>, ServiceError> {
        Ok(self.catalog_repository().find_by_code(code).await?)
    }
}

// ============================================================================
// Generic implementation
// ============================================================================

/// Сервис поверх любого хранилища `R`; уровни сервиса следуют уровням хранилища
pub struct CrudService<E, R> {
    repository: Arc<R>,
    _entity: PhantomData<fn() -> E>,
}

impl<E, R> CrudService<E, R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            _entity: PhantomData,
        }
    }

    pub fn repository_handle(&self) -> Arc<R> {
        Arc::clone(&self.repository)
    }
}

#[async_trait]
impl<E, R> Service<E> for CrudService<E, R>
where
    E: Entity,
    R: Repository<E> + 'static,
{
    fn repository(&self) -> &dyn Repository<E> {
        self.repository.as_ref()
    }
}

#[async_trait]
impl<E, R> DataService<E> for CrudService<E, R>
where
    E: DataEntity,
    R: DataRepository<E> + 'static,
{
    fn data_repository(&self) -> &dyn DataRepository<E> {
        self.repository.as_ref()
    }
}

#[async_trait]
impl<E, R> CatalogService<E> for CrudService<E, R>
where
    E: CatalogEntity,
    R: CatalogRepository<E> + 'static,
{
    fn catalog_repository(&self) -> &dyn CatalogRepository<E> {
        self.repository.as_ref()
    }
}
