use backend::app::AppContext;
use backend::domain::a001_client::meta::ClientsMetaElement;
use backend::domain::a001_client::service::ClientService;
use backend::domain::a002_realtor::meta::RealtorsMetaElement;
use backend::sections::{AdminSection, CatalogsSection, DocumentsSection};
use backend::shared::config::default_config;
use backend::shared::data::{MemoryCatalogRepository, MemoryRepository, Repository};
use backend::shared::meta::{
    self, CatalogMetaElement, CatalogMetaElementBase, MetaComponent, MetaElement, Section,
    SectionsHolder,
};
use backend::shared::service::{self as services, CatalogService, CrudService, Service};
use contracts::domain::a001_client::Client;
use contracts::shared::type_witness::{
    TypeArg, TypeDeclaration, TypeResolutionError, TypeResolver, TypeToken,
};
use contracts::shared::views::{ItemView, ListView};
use std::any::Any;
use std::sync::Arc;

fn app() -> AppContext {
    AppContext::build(default_config().unwrap()).unwrap()
}

fn section_keys(holder: &SectionsHolder) -> Vec<TypeToken> {
    holder.sections().iter().map(|s| s.key()).collect()
}

#[test]
fn sections_come_in_order_and_repeat_identically() {
    let app = app();
    let expected = vec![
        TypeToken::of::<CatalogsSection>(),
        TypeToken::of::<DocumentsSection>(),
        TypeToken::of::<AdminSection>(),
    ];
    assert_eq!(section_keys(&app.registry), expected);
    assert_eq!(section_keys(&app.registry), expected);
}

#[test]
fn navigation_tree_skips_hidden_sections_and_resolves_texts() {
    let app = app();
    let tree = app.navigation_tree();

    let titles: Vec<&str> = tree.sections.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["Catalogs", "Documents"]);

    let catalogs = &tree.sections[0];
    assert_eq!(catalogs.key, "CatalogsSection");
    assert_eq!(catalogs.tooltip.as_deref(), Some("Reference books of the agency"));

    let items: Vec<&str> = catalogs.items.iter().map(|i| i.key.as_str()).collect();
    assert_eq!(items, vec!["a001_client", "a002_realtor"]);

    let clients = tree.find_item("a001_client").unwrap();
    assert_eq!(clients.title, "Clients");
    assert_eq!(clients.view, "ListView<Client>");
    assert_eq!(clients.entity.as_deref(), Some("Client"));
    assert_eq!(clients.id_type.as_deref(), Some("i64"));
    assert_eq!(
        tree.find_item("a002_realtor").unwrap().id_type.as_deref(),
        Some("Uuid")
    );
    assert!(tree.sections[1].items.is_empty());
}

#[test]
fn meta_elements_bind_views_entity_and_id() {
    let app = app();
    let element = app.registry.element::<ClientsMetaElement>().unwrap();
    let types = element.types();
    assert_eq!(types.item_view, TypeToken::of::<ItemView<Client>>());
    assert_eq!(types.list_view, TypeToken::of::<ListView<Client>>());
    assert_eq!(types.entity, TypeToken::of::<Client>());
    assert_eq!(types.id, TypeToken::of::<i64>());
    assert_eq!(element.view_type(), types.list_view);
    assert_eq!(element.section(), TypeToken::of::<CatalogsSection>());
    assert!(app.registry.element::<RealtorsMetaElement>().is_some());
}

#[tokio::test]
async fn meta_element_exposes_its_service() {
    let app = app();
    app.seed_demo_data().await.unwrap();
    let element = app.registry.element::<ClientsMetaElement>().unwrap();
    let found = element.service().find_by_code("CLT-002").await.unwrap();
    assert_eq!(found.map(|c| c.name), Some("Oleg".to_string()));
    assert_eq!(app.clients.repository().count().await.unwrap(), 4);

    // seeding twice does not duplicate rows
    app.seed_demo_data().await.unwrap();
    assert_eq!(app.clients.repository().count().await.unwrap(), 4);
}

#[test]
fn mismatched_id_declaration_is_rejected() {
    let mut resolver = TypeResolver::new();
    meta::declare_base_types(&mut resolver).unwrap();
    resolver
        .declare(TypeDeclaration::new::<ClientsMetaElement, CatalogMetaElementBase>(vec![
            TypeArg::of::<ItemView<Client>>(),
            TypeArg::of::<ListView<Client>>(),
            TypeArg::of::<Client>(),
            TypeArg::of::<uuid::Uuid>(),
        ]))
        .unwrap();

    let service: Arc<dyn CatalogService<Client>> =
        Arc::new(ClientService::new(Arc::new(MemoryCatalogRepository::new())));
    let component = MetaComponent::new::<CatalogsSection>("Clients");
    let err = CatalogMetaElement::<Client>::new(component, service, &resolver)
        .err()
        .unwrap();
    assert!(matches!(err, TypeResolutionError::Mismatch { .. }));
}

#[test]
fn undeclared_meta_element_fails_to_bind() {
    let resolver = TypeResolver::new();
    let service: Arc<dyn CatalogService<Client>> =
        Arc::new(ClientService::new(Arc::new(MemoryCatalogRepository::new())));
    let result = CatalogMetaElement::<Client>::new(
        MetaComponent::new::<CatalogsSection>("Clients"),
        service,
        &resolver,
    );
    assert!(matches!(
        result.err(),
        Some(TypeResolutionError::AncestorNotReached { .. })
    ));
}

#[test]
fn services_resolve_entity_and_id_through_the_tier_chain() {
    let mut resolver = TypeResolver::new();
    services::declare_base_types(&mut resolver).unwrap();
    backend::domain::a001_client::service::declare_types(&mut resolver).unwrap();
    let service = ClientService::new(Arc::new(MemoryCatalogRepository::new()));

    assert_eq!(
        resolver
            .resolve_of::<ClientService, services::ServiceBase>(services::ID_ARG)
            .unwrap(),
        service.id_type()
    );
    assert!(services::verify_declared_types::<ClientService, Client>(&resolver, &service).is_ok());

    type OtherService = CrudService<Client, MemoryRepository<Client>>;
    assert!(resolver
        .resolve_of::<OtherService, services::ServiceBase>(services::ENTITY_ARG)
        .is_err());
}

// ----------------------------------------------------------------------------
// Ordering of ad-hoc sections and elements
// ----------------------------------------------------------------------------

struct PlainElement(MetaComponent);

impl MetaElement for PlainElement {
    fn component(&self) -> &MetaComponent {
        &self.0
    }

    fn key(&self) -> String {
        self.0.title.clone()
    }

    fn view_type(&self) -> TypeToken {
        TypeToken::of::<PlainElement>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

fn element(title: &str, order: Option<i32>) -> PlainElement {
    let mut component = MetaComponent::new::<DocumentsSection>(title);
    component.order = order;
    PlainElement(component)
}

#[test]
fn section_content_sorts_by_order_with_unset_last_and_stable_ties() {
    let holder = SectionsHolder::builder()
        .section(DocumentsSection)
        .element(element("unset", None))
        .element(element("twenty", Some(20)))
        .element(element("ten-a", Some(10)))
        .element(element("ten-b", Some(10)))
        .build();

    let keys: Vec<String> = holder
        .content(&DocumentsSection)
        .iter()
        .map(|e| e.key())
        .collect();
    assert_eq!(keys, vec!["ten-a", "ten-b", "twenty", "unset"]);
    assert!(holder.content(&CatalogsSection).is_empty());
}

#[test]
fn duplicate_sections_keep_the_first_registration() {
    let holder = SectionsHolder::builder()
        .section(AdminSection)
        .section(CatalogsSection)
        .section(AdminSection)
        .build();
    assert_eq!(holder.sections().len(), 2);
    assert_eq!(holder.visible_sections().count(), 1);
    assert!(!holder
        .section(TypeToken::of::<AdminSection>())
        .unwrap()
        .is_visible());
}
