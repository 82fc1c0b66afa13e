//! View markers bound by meta elements
//!
//! Views are identified by type: the list view and item view of an entity are
//! distinct zero-sized markers, so the type resolver can bind and compare them.

use crate::domain::common::Entity;
use std::marker::PhantomData;

/// List view of entity `E`
pub struct ListView<E>(PhantomData<fn() -> E>);

/// Item (edit form) view of entity `E`
pub struct ItemView<E>(PhantomData<fn() -> E>);

impl<E: Entity> ListView<E> {
    /// Route key, e.g. "a001_client"
    pub fn route() -> String {
        E::full_name()
    }
}

impl<E: Entity> ItemView<E> {
    /// Route of one element, e.g. "a001_client/42"
    pub fn route(id: &E::Id) -> String {
        use crate::domain::common::EntityId;
        format!("{}/{}", E::full_name(), id.as_string())
    }

    /// Route of a new element form
    pub fn new_route() -> String {
        format!("{}/new", E::full_name())
    }
}
