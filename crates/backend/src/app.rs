//! Сборка приложения: резолвер типов, сервисы, реестр разделов

use crate::domain::a001_client::{self, service::ClientService};
use crate::domain::a002_realtor::{self, service::RealtorService};
use crate::sections::{AdminSection, CatalogsSection, DocumentsSection};
use crate::shared::config::Config;
use crate::shared::data::PageRequest;
use crate::shared::meta::{self, SectionsHolder};
use crate::shared::service::{self, verify_declared_types};
use contracts::domain::a001_client::Client;
use contracts::domain::a002_realtor::Realtor;
use contracts::shared::messages::MessageCatalog;
use contracts::shared::navigation::NavigationTree;
use contracts::shared::type_witness::TypeResolver;
use once_cell::sync::OnceCell;
use std::sync::Arc;

static APP: OnceCell<AppContext> = OnceCell::new();

pub struct AppContext {
    pub config: Config,
    pub messages: MessageCatalog,
    pub resolver: TypeResolver,
    pub registry: SectionsHolder,
    pub clients: Arc<ClientService>,
    pub realtors: Arc<RealtorService>,
}

impl AppContext {
    pub fn build(config: Config) -> anyhow::Result<Self> {
        let mut resolver = TypeResolver::new();
        service::declare_base_types(&mut resolver)?;
        meta::declare_base_types(&mut resolver)?;
        a001_client::service::declare_types(&mut resolver)?;
        a001_client::meta::declare_types(&mut resolver)?;
        a002_realtor::service::declare_types(&mut resolver)?;
        a002_realtor::meta::declare_types(&mut resolver)?;
        tracing::debug!("Type resolver: {} declarations", resolver.len());

        let clients = Arc::new(ClientService::new(a001_client::repository::new_repository()));
        verify_declared_types::<ClientService, Client>(&resolver, clients.as_ref())?;
        let realtors = Arc::new(RealtorService::new(a002_realtor::repository::new_repository()));
        verify_declared_types::<RealtorService, Realtor>(&resolver, realtors.as_ref())?;

        let registry = SectionsHolder::builder()
            .section(CatalogsSection)
            .section(DocumentsSection)
            .section(AdminSection)
            .element(a001_client::meta::meta_element(Arc::clone(&clients), &resolver)?)
            .element(a002_realtor::meta::meta_element(Arc::clone(&realtors), &resolver)?)
            .build();

        let messages = MessageCatalog::new(config.messages.clone());

        Ok(Self {
            config,
            messages,
            resolver,
            registry,
            clients,
            realtors,
        })
    }

    /// Собрать контекст один раз на процесс
    pub fn init(config: Config) -> anyhow::Result<&'static AppContext> {
        APP.get_or_try_init(|| Self::build(config))
    }

    pub fn get() -> Option<&'static AppContext> {
        APP.get()
    }

    /// Текст для литерала `${key}`
    pub fn text(&self, raw: &str) -> String {
        self.messages.resolve(raw)
    }

    pub fn navigation_tree(&self) -> NavigationTree {
        self.registry.navigation_tree(&|raw| self.text(raw))
    }

    pub fn page_request(&self, page: usize, size: usize) -> PageRequest {
        PageRequest::new(page, size).normalized(&self.config.paging)
    }

    pub async fn seed_demo_data(&self) -> anyhow::Result<()> {
        a001_client::service::insert_test_data(&self.clients).await?;
        a002_realtor::service::insert_test_data(&self.realtors).await?;
        Ok(())
    }
}
