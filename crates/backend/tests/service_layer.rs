use anyhow::anyhow;
use async_trait::async_trait;
use backend::shared::data::{
    DataRepository, MemoryCatalogRepository, MemoryRepository, Page, PageRequest, Repository,
};
use backend::shared::service::{CatalogService, CrudService, DataService, Service, ServiceError};
use contracts::domain::a001_client::Client;
use contracts::domain::a002_realtor::Realtor;
use contracts::domain::common::{ConversionError, DataEntity, Entity};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

/// Counts writes and fails them on demand
struct ProbeRepository<E: DataEntity> {
    inner: MemoryRepository<E>,
    saves: AtomicUsize,
    fail_saves: AtomicBool,
}

impl<E: DataEntity> ProbeRepository<E> {
    fn new() -> Self {
        Self {
            inner: MemoryRepository::new(),
            saves: AtomicUsize::new(0),
            fail_saves: AtomicBool::new(false),
        }
    }

    fn saves(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl<E: DataEntity> Repository<E> for ProbeRepository<E> {
    async fn save(&self, entity: E) -> anyhow::Result<E> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(anyhow!("storage unavailable"));
        }
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
impl<E: DataEntity> DataRepository<E> for ProbeRepository<E> {
    async fn find_all_by(&self, filter: &str, page: PageRequest) -> anyhow::Result<Page<E>> {
        self.inner.find_all_by(filter, page).await
    }
}

type ClientCatalog = CrudService<Client, MemoryCatalogRepository<Client>>;

fn client_catalog() -> ClientCatalog {
    CrudService::new(Arc::new(MemoryCatalogRepository::new()))
}

#[tokio::test]
async fn convert_id_round_trips_numeric_and_uuid_ids() {
    let clients = client_catalog();
    assert_eq!(clients.convert_id(&42i64.to_string()), Ok(42));
    assert!(matches!(
        clients.convert_id("forty-two"),
        Err(ConversionError::Invalid { .. })
    ));

    let realtors: CrudService<Realtor, MemoryCatalogRepository<Realtor>> =
        CrudService::new(Arc::new(MemoryCatalogRepository::new()));
    let id = uuid::Uuid::new_v4();
    assert_eq!(realtors.convert_id(&id.to_string()), Ok(id));
}

#[tokio::test]
async fn read_of_missing_id_is_not_found() {
    let clients = client_catalog();
    let err = clients.read(&404).await.unwrap_err();
    assert!(err.is_not_found());
    assert!(clients.find(&404).await.unwrap().is_none());
}

#[tokio::test]
async fn create_or_update_routes_by_id_presence() {
    let clients = client_catalog();

    let created = clients
        .create_or_update(Client::new("CLT-1", "Anna", "Petrova"))
        .await
        .unwrap();
    let id = *created.id().unwrap();
    assert_eq!(created.base.metadata.version, 1);

    let mut changed = created.clone();
    changed.surname = "Smirnova".into();
    let updated = clients.create_or_update(changed).await.unwrap();

    assert_eq!(updated.id(), Some(&id));
    assert_eq!(updated.base.metadata.version, 2);
    assert_eq!(clients.repository().count().await.unwrap(), 1);
    assert_eq!(clients.read(&id).await.unwrap().surname, "Smirnova");
}

#[tokio::test]
async fn invalid_entities_are_not_written() {
    let clients = client_catalog();
    let err = clients.create(Client::new("", "Anna", "Petrova")).await.unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));
    assert_eq!(clients.repository().count().await.unwrap(), 0);
}

#[tokio::test]
async fn delete_removes_and_unsaved_delete_is_a_no_op() {
    let clients = client_catalog();
    let saved = clients.create(Client::new("CLT-1", "Anna", "Petrova")).await.unwrap();

    clients.delete_entity(&Client::new("CLT-2", "Oleg", "Ivanov")).await.unwrap();
    assert_eq!(clients.repository().count().await.unwrap(), 1);

    clients.delete_entity(&saved).await.unwrap();
    assert_eq!(clients.repository().count().await.unwrap(), 0);
}

#[tokio::test]
async fn catalog_list_filters_only_when_filter_is_not_blank() {
    let clients = client_catalog();
    clients.create(Client::new("ALPHA", "Anna", "Petrova")).await.unwrap();
    clients.create(Client::new("BETA", "Boris", "Ivanov")).await.unwrap();
    clients.create(Client::new("GAMMA", "Gleb", "Orlov")).await.unwrap();

    let page = PageRequest::first(50);
    assert_eq!(clients.list(page, Some("a")).await.unwrap().total, 3);
    assert_eq!(clients.list(page, Some("zz")).await.unwrap().total, 0);
    assert_eq!(clients.list(page, Some("   ")).await.unwrap().total, 3);
    assert_eq!(clients.list(page, None).await.unwrap().total, 3);
    assert_eq!(clients.list(page, Some("orlov")).await.unwrap().total, 1);

    let beta = clients.find_by_code("BETA").await.unwrap().unwrap();
    assert_eq!(beta.name, "Boris");
}

#[tokio::test]
async fn toggling_twice_restores_marks_with_one_write_per_toggle() {
    let repository = Arc::new(ProbeRepository::<Client>::new());
    let clients: CrudService<Client, _> = CrudService::new(Arc::clone(&repository));
    let mut client = clients.create(Client::new("CLT-1", "Anna", "Petrova")).await.unwrap();
    let writes = repository.saves();

    clients.toggle_deletion_mark(&mut client).await.unwrap();
    assert!(client.is_deletion_mark());
    assert_eq!(repository.saves(), writes + 1);

    clients.toggle_deletion_mark(&mut client).await.unwrap();
    assert!(!client.is_deletion_mark());
    assert_eq!(repository.saves(), writes + 2);

    clients.toggle_draft_mark(&mut client).await.unwrap();
    clients.toggle_draft_mark(&mut client).await.unwrap();
    assert!(!client.is_draft_mark());
    assert_eq!(repository.saves(), writes + 4);

    let stored = clients.read(client.id().unwrap()).await.unwrap();
    assert!(!stored.is_deletion_mark());
    assert_eq!(stored, client);
}

#[tokio::test]
async fn failed_persist_leaves_the_caller_copy_toggled() {
    let repository = Arc::new(ProbeRepository::<Client>::new());
    let clients: CrudService<Client, _> = CrudService::new(Arc::clone(&repository));
    let mut client = clients.create(Client::new("CLT-1", "Anna", "Petrova")).await.unwrap();
    let id = *client.id().unwrap();

    repository.fail_saves.store(true, Ordering::SeqCst);
    let err = clients.toggle_deletion_mark(&mut client).await.unwrap_err();
    assert!(matches!(err, ServiceError::Repository(_)));

    // in memory the mark is set, the store still has the old state
    assert!(client.is_deletion_mark());
    let stored = clients.read(&id).await.unwrap();
    assert!(!stored.is_deletion_mark());
}

#[tokio::test]
async fn data_services_filter_by_id_only() {
    let repository = Arc::new(ProbeRepository::<Client>::new());
    let clients: CrudService<Client, _> = CrudService::new(Arc::clone(&repository));
    for n in 1..=3 {
        clients
            .create(Client::new(format!("CLT-{n}"), "Anna", "Petrova"))
            .await
            .unwrap();
    }
    let page = PageRequest::first(50);
    assert_eq!(clients.list(page, Some("2")).await.unwrap().total, 1);
    assert_eq!(clients.list(page, Some("anna")).await.unwrap().total, 0);
}
