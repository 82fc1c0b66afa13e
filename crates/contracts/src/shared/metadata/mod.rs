//! Field metadata: value types, widget descriptors and data providers
//!
//! Every entity publishes a static table of [`EntityField`]s. Each field carries
//! zero or more [`FieldDescriptor`]s; the UI layer turns the first descriptor it
//! has a strategy for into a widget.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use contracts::shared::metadata::{DescriptorKind, EntityField};
//!
//! for field in Client::fields() {
//!     if field.has_descriptor(DescriptorKind::DatePicker) {
//!         println!("{} is edited with a date picker", field.name);
//!     }
//! }
//! ```

pub mod convert;
mod descriptor;
mod field_type;
mod field_value;
mod grid;
mod providers;
mod types;

pub use descriptor::{
    CheckboxConfig, ChoiceConfig, DescriptorKind, FieldDescriptor, NumberConfig, SizeHints,
    SupplierRef, TemporalConfig, TextConfig, WidgetOptions,
};
pub use field_type::{FieldValueType, NumericWidth};
pub use field_value::FieldValue;
pub use grid::GridColumnConfig;
pub use providers::{
    DataSource, DefaultFilterConverter, DefaultItemsProvider, DefaultValueProvider,
    FilterConverter, ProviderError, ProviderKind, ProviderRegistry, DEFAULT_FILTER_CONVERTER,
};
pub use types::EntityField;
