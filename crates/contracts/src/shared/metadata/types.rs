//! Field table entries published by entities

use super::descriptor::{DescriptorKind, FieldDescriptor};
use super::field_type::FieldValueType;
use super::grid::GridColumnConfig;

/// One field of an entity together with its UI description
#[derive(Debug, Clone, PartialEq)]
pub struct EntityField {
    pub name: &'static str,
    pub value_type: FieldValueType,
    /// Display order in forms; unset sorts last
    pub order: Option<i32>,
    /// Placement on the list grid; `None` keeps the field off the grid
    pub list_order: Option<i32>,
    pub column: Option<GridColumnConfig>,
    pub descriptors: Vec<FieldDescriptor>,
}

impl EntityField {
    pub fn new(name: &'static str, value_type: FieldValueType) -> Self {
        Self {
            name,
            value_type,
            order: None,
            list_order: None,
            column: None,
            descriptors: Vec::new(),
        }
    }

    pub fn with_order(mut self, order: i32) -> Self {
        self.order = Some(order);
        self
    }

    pub fn on_list(mut self, order: i32) -> Self {
        self.list_order = Some(order);
        self
    }

    pub fn with_column(mut self, column: GridColumnConfig) -> Self {
        self.column = Some(column);
        self
    }

    pub fn with_descriptor(mut self, descriptor: FieldDescriptor) -> Self {
        self.descriptors.push(descriptor);
        self
    }

    /// Sort key: declared order, unset last
    pub fn display_order(&self) -> i32 {
        self.order.unwrap_or(i32::MAX)
    }

    pub fn descriptor(&self, kind: DescriptorKind) -> Option<&FieldDescriptor> {
        self.descriptors.iter().find(|d| d.kind() == kind)
    }

    pub fn has_descriptor(&self, kind: DescriptorKind) -> bool {
        self.descriptor(kind).is_some()
    }

    pub fn is_on_list(&self) -> bool {
        self.list_order.is_some()
    }
}
