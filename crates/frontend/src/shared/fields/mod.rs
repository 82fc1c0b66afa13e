//! Field-to-widget engine
//!
//! [`WidgetRegistry`] keeps one [`WidgetCreationStrategy`] per descriptor kind.
//! For a field it picks the first strategy (in registration order) whose kind is
//! among the field's descriptors and lets it build a fully configured
//! [`Widget`]. A field without a supported descriptor produces no widget.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let registry = WidgetRegistry::new(providers);
//! let widgets = registry.create_fields(Client::fields(), Some(&|raw: &str| messages.resolve(raw)))?;
//! ```

pub mod numeric;
pub mod strategies;
mod support;
pub mod widget;

pub use support::generate_label;
pub use widget::{ChoiceBinding, Constraints, Widget, WidgetSize};

use contracts::shared::metadata::{DescriptorKind, EntityField, ProviderError, ProviderRegistry};
use std::sync::OnceLock;
use thiserror::Error;

/// Преобразование ключа сообщения в текст
pub type TextResolver<'a> = &'a dyn Fn(&str) -> String;

fn identity(raw: &str) -> String {
    raw.to_string()
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WidgetConfigurationError {
    #[error("field '{field}': {source}")]
    Provider { field: String, source: ProviderError },

    #[error("field '{field}': choice widget has no data source")]
    MissingDataSource { field: String },

    #[error("field '{field}': cannot parse '{literal}' as {expected}")]
    InvalidLiteral {
        field: String,
        literal: String,
        expected: &'static str,
    },

    #[error("field '{field}' has no {} descriptor", .expected.as_str())]
    DescriptorMismatch {
        field: String,
        expected: DescriptorKind,
    },
}

// ============================================================================
// Strategy contract
// ============================================================================

/// What a strategy gets besides the field
pub struct CreationContext<'a> {
    text: TextResolver<'a>,
    providers: &'a ProviderRegistry,
}

impl<'a> CreationContext<'a> {
    pub fn new(text: TextResolver<'a>, providers: &'a ProviderRegistry) -> Self {
        Self { text, providers }
    }

    pub fn text(&self, raw: &str) -> String {
        (self.text)(raw)
    }

    /// Resolved text, `None` for a blank raw value or a blank result
    pub fn resolve(&self, raw: &str) -> Option<String> {
        if raw.trim().is_empty() {
            return None;
        }
        let text = self.text(raw);
        (!text.trim().is_empty()).then_some(text)
    }

    pub fn providers(&self) -> &ProviderRegistry {
        self.providers
    }
}

pub trait WidgetCreationStrategy: Send + Sync {
    /// Вид дескриптора, который обслуживает стратегия
    fn supported_descriptor(&self) -> DescriptorKind;

    fn is_supported(&self, field: &EntityField) -> bool {
        field.has_descriptor(self.supported_descriptor())
    }

    fn create_widget(
        &self,
        field: &EntityField,
        ctx: &CreationContext<'_>,
    ) -> Result<Widget, WidgetConfigurationError>;
}

// ============================================================================
// Registry
// ============================================================================

pub struct WidgetRegistry {
    strategies: OnceLock<Vec<Box<dyn WidgetCreationStrategy>>>,
    providers: ProviderRegistry,
}

impl WidgetRegistry {
    pub fn new(providers: ProviderRegistry) -> Self {
        Self {
            strategies: OnceLock::new(),
            providers,
        }
    }

    /// Стратегии в порядке регистрации; набор строится при первом обращении
    pub fn strategies(&self) -> &[Box<dyn WidgetCreationStrategy>] {
        self.strategies.get_or_init(|| {
            let strategies = strategies::all();
            log::debug!("Widget strategies registered: {}", strategies.len());
            strategies
        })
    }

    pub fn providers(&self) -> &ProviderRegistry {
        &self.providers
    }

    pub fn strategy_for(&self, field: &EntityField) -> Option<&dyn WidgetCreationStrategy> {
        self.strategies()
            .iter()
            .find(|s| s.is_supported(field))
            .map(|s| s.as_ref())
    }

    /// Widget for one field; `Ok(None)` when no strategy supports it
    pub fn create_field(
        &self,
        field: &EntityField,
        text: Option<TextResolver<'_>>,
    ) -> Result<Option<Widget>, WidgetConfigurationError> {
        let Some(strategy) = self.strategy_for(field) else {
            log::debug!("No widget strategy for field '{}'", field.name);
            return Ok(None);
        };
        let ctx = CreationContext::new(text.unwrap_or(&identity), &self.providers);
        strategy.create_widget(field, &ctx).map(Some)
    }

    /// Widgets for all supported fields, ordered by display order
    pub fn create_fields(
        &self,
        fields: &[EntityField],
        text: Option<TextResolver<'_>>,
    ) -> Result<Vec<Widget>, WidgetConfigurationError> {
        let mut ordered: Vec<&EntityField> = fields.iter().collect();
        ordered.sort_by_key(|f| f.display_order());

        let mut widgets = Vec::with_capacity(ordered.len());
        for field in ordered {
            if let Some(widget) = self.create_field(field, text)? {
                widgets.push(widget);
            }
        }
        Ok(widgets)
    }
}

impl Default for WidgetRegistry {
    fn default() -> Self {
        Self::new(ProviderRegistry::new())
    }
}
