use super::service::RealtorService;
use crate::sections::CatalogsSection;
use crate::shared::meta::{CatalogMetaElement, CatalogMetaElementBase, MetaComponent};
use crate::shared::service::CatalogService;
use contracts::domain::a002_realtor::Realtor;
use contracts::shared::type_witness::{TypeArg, TypeDeclaration, TypeResolutionError, TypeResolver};
use contracts::shared::views::{ItemView, ListView};
use std::sync::Arc;
use uuid::Uuid;

/// Мета-элемент "Риелторы" в разделе справочников
pub type RealtorsMetaElement = CatalogMetaElement<Realtor>;

pub fn declare_types(resolver: &mut TypeResolver) -> Result<(), TypeResolutionError> {
    resolver.declare(TypeDeclaration::new::<RealtorsMetaElement, CatalogMetaElementBase>(vec![
        TypeArg::of::<ItemView<Realtor>>(),
        TypeArg::of::<ListView<Realtor>>(),
        TypeArg::of::<Realtor>(),
        TypeArg::of::<Uuid>(),
    ]))
}

pub fn component() -> MetaComponent {
    MetaComponent::new::<CatalogsSection>("${meta.title.realtors}").order(20)
}

pub fn meta_element(
    service: Arc<RealtorService>,
    resolver: &TypeResolver,
) -> Result<RealtorsMetaElement, TypeResolutionError> {
    let service: Arc<dyn CatalogService<Realtor>> = service;
    RealtorsMetaElement::new(component(), service, resolver)
}
