use super::service::ClientService;
use crate::sections::CatalogsSection;
use crate::shared::meta::{CatalogMetaElement, CatalogMetaElementBase, MetaComponent};
use crate::shared::service::CatalogService;
use contracts::domain::a001_client::Client;
use contracts::shared::type_witness::{TypeArg, TypeDeclaration, TypeResolutionError, TypeResolver};
use contracts::shared::views::{ItemView, ListView};
use std::sync::Arc;

/// Мета-элемент "Клиенты" в разделе справочников
pub type ClientsMetaElement = CatalogMetaElement<Client>;

/// `ClientsMetaElement`: справочник `<ItemView<Client>, ListView<Client>, Client, i64>`
pub fn declare_types(resolver: &mut TypeResolver) -> Result<(), TypeResolutionError> {
    resolver.declare(TypeDeclaration::new::<ClientsMetaElement, CatalogMetaElementBase>(vec![
        TypeArg::of::<ItemView<Client>>(),
        TypeArg::of::<ListView<Client>>(),
        TypeArg::of::<Client>(),
        TypeArg::of::<i64>(),
    ]))
}

pub fn component() -> MetaComponent {
    MetaComponent::new::<CatalogsSection>("${meta.title.clients}")
        .description("${meta.description.clients}")
        .order(10)
}

pub fn meta_element(
    service: Arc<ClientService>,
    resolver: &TypeResolver,
) -> Result<ClientsMetaElement, TypeResolutionError> {
    let service: Arc<dyn CatalogService<Client>> = service;
    ClientsMetaElement::new(component(), service, resolver)
}
