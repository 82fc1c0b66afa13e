//! Generic CRUD services over `<ENTITY, ID>`
//!
//! Three tiers mirror the repository tiers: [`Service`] (plain CRUD),
//! [`DataService`] (filtered listing and mark toggles) and [`CatalogService`]
//! (lookup by code). [`CrudService`] implements all of them for any repository.

mod crud;
mod error;

pub use crud::{CatalogService, CrudService, DataService, Service};
pub use error::ServiceError;

use contracts::shared::type_witness::{
    TypeArg, TypeDeclaration, TypeResolutionError, TypeResolver, TypeToken,
};

/// Опорные типы сервисов: аргументы `<ENTITY, ID>`
pub enum ServiceBase {}
pub enum DataServiceBase {}
pub enum CatalogServiceBase {}

/// Index of the entity argument of the service tiers
pub const ENTITY_ARG: usize = 0;
/// Index of the id argument of the service tiers
pub const ID_ARG: usize = 1;

/// Объявить цепочку `CatalogServiceBase -> DataServiceBase -> ServiceBase`
pub fn declare_base_types(resolver: &mut TypeResolver) -> Result<(), TypeResolutionError> {
    resolver.declare(TypeDeclaration::new::<DataServiceBase, ServiceBase>(vec![
        TypeArg::param(ENTITY_ARG),
        TypeArg::param(ID_ARG),
    ]))?;
    resolver.declare(TypeDeclaration::new::<CatalogServiceBase, DataServiceBase>(vec![
        TypeArg::param(ENTITY_ARG),
        TypeArg::param(ID_ARG),
    ]))?;
    Ok(())
}

/// Проверить, что объявленные для сервиса `S` типы совпадают с его собственными
pub fn verify_declared_types<S, E>(resolver: &TypeResolver, service: &S) -> Result<(), TypeResolutionError>
where
    S: Service<E> + 'static,
    E: contracts::domain::common::Entity,
{
    let concrete = TypeToken::of::<S>();
    let base = TypeToken::of::<ServiceBase>();
    let entity = resolver.resolve(concrete, base, ENTITY_ARG)?;
    TypeResolutionError::ensure(
        format!("entity type of {}", concrete.short_name()),
        service.entity_type(),
        entity,
    )?;
    let id = resolver.resolve(concrete, base, ID_ARG)?;
    TypeResolutionError::ensure(
        format!("id type of {}", concrete.short_name()),
        service.id_type(),
        id,
    )
}
