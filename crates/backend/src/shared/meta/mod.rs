//! Meta-registry: sections and the meta elements assigned to them
//!
//! Sections group meta elements in navigation. Both carry an optional order;
//! lower order comes first, unset order sorts last, ties keep registration
//! order. Data meta elements bind their item view, list view, entity and id
//! types through the type resolver at construction.

mod holder;
mod meta_element;
mod section;

pub use holder::{SectionsHolder, SectionsHolderBuilder};
pub use meta_element::{
    CatalogMetaElement, DataMetaElement, DataTypes, MetaComponent, MetaElement,
};
pub use section::{Section, SectionComponent};

use contracts::shared::type_witness::{TypeArg, TypeDeclaration, TypeResolutionError, TypeResolver};

/// Опорный тип мета-элемента: `<VIEW>`
pub enum MetaElementBase {}
/// Опорный тип мета-элемента данных: `<ITEM_VIEW, LIST_VIEW, ENTITY, ID>`
pub enum DataMetaElementBase {}
/// Опорный тип мета-элемента справочника: `<ITEM_VIEW, LIST_VIEW, ENTITY, ID>`
pub enum CatalogMetaElementBase {}

pub const ITEM_VIEW_ARG: usize = 0;
pub const LIST_VIEW_ARG: usize = 1;
pub const ENTITY_ARG: usize = 2;
pub const ID_ARG: usize = 3;

/// Объявить цепочку `CatalogMetaElementBase -> DataMetaElementBase -> MetaElementBase`;
/// представлением мета-элемента данных служит его список
pub fn declare_base_types(resolver: &mut TypeResolver) -> Result<(), TypeResolutionError> {
    resolver.declare(TypeDeclaration::new::<DataMetaElementBase, MetaElementBase>(vec![
        TypeArg::param(LIST_VIEW_ARG),
    ]))?;
    resolver.declare(TypeDeclaration::new::<CatalogMetaElementBase, DataMetaElementBase>(vec![
        TypeArg::param(ITEM_VIEW_ARG),
        TypeArg::param(LIST_VIEW_ARG),
        TypeArg::param(ENTITY_ARG),
        TypeArg::param(ID_ARG),
    ]))?;
    Ok(())
}

/// Sort key shared by sections and meta elements
pub(crate) fn priority(order: Option<i32>) -> i32 {
    order.unwrap_or(i32::MAX)
}
