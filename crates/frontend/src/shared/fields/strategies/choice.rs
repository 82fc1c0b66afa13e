use super::super::support::{base_widget, require_descriptor};
use super::super::widget::{ChoiceBinding, Constraints, Widget};
use super::super::{CreationContext, WidgetConfigurationError, WidgetCreationStrategy};
use contracts::shared::metadata::{
    ChoiceConfig, DescriptorKind, EntityField, FieldDescriptor, FieldValue, FilterConverter,
    ProviderError, DEFAULT_FILTER_CONVERTER,
};
use std::sync::Arc;

/// Single and multi-select choice widgets
///
/// Items come from the named data source. A default supplier, when named,
/// provides the initial value (single select) or selection (multi select).
pub struct ChoiceStrategy {
    kind: DescriptorKind,
}

impl ChoiceStrategy {
    pub fn new(kind: DescriptorKind) -> Self {
        Self { kind }
    }

    fn config<'f>(&self, field: &'f EntityField) -> Result<&'f ChoiceConfig, WidgetConfigurationError> {
        match require_descriptor(field, self.kind)? {
            FieldDescriptor::Select(c)
            | FieldDescriptor::ComboBox(c)
            | FieldDescriptor::ListBox(c)
            | FieldDescriptor::RadioButtonGroup(c)
            | FieldDescriptor::MultiSelectComboBox(c)
            | FieldDescriptor::CheckboxGroup(c)
            | FieldDescriptor::MultiSelectListBox(c) => Ok(c),
            _ => Err(WidgetConfigurationError::DescriptorMismatch {
                field: field.name.to_string(),
                expected: self.kind,
            }),
        }
    }

    fn default_selection(
        &self,
        config: &ChoiceConfig,
        ctx: &CreationContext<'_>,
    ) -> Result<Option<FieldValue>, ProviderError> {
        let Some(name) = config.default_value.name() else {
            return Ok(None);
        };

        if self.kind.is_multi_select() {
            let items = ctx.providers().default_items(name)?.default_items();
            Ok((!items.is_empty()).then_some(FieldValue::List(items)))
        } else {
            Ok(ctx.providers().default_value(name)?.default_value())
        }
    }

    fn filter(
        &self,
        config: &ChoiceConfig,
        ctx: &CreationContext<'_>,
    ) -> Result<Arc<dyn FilterConverter>, ProviderError> {
        let name = config
            .filter_converter
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(DEFAULT_FILTER_CONVERTER);
        Ok(Arc::from(ctx.providers().filter_converter(name)?))
    }
}

impl WidgetCreationStrategy for ChoiceStrategy {
    fn supported_descriptor(&self) -> DescriptorKind {
        self.kind
    }

    fn create_widget(
        &self,
        field: &EntityField,
        ctx: &CreationContext<'_>,
    ) -> Result<Widget, WidgetConfigurationError> {
        let config = self.config(field)?;
        if config.data_source.trim().is_empty() {
            return Err(WidgetConfigurationError::MissingDataSource {
                field: field.name.to_string(),
            });
        }

        let provider_error = |source: ProviderError| {
            log::warn!("Field '{}': {}", field.name, source);
            WidgetConfigurationError::Provider {
                field: field.name.to_string(),
                source,
            }
        };

        let items = ctx
            .providers()
            .data_source(&config.data_source)
            .map_err(provider_error)?
            .items();
        let value = self.default_selection(config, ctx).map_err(provider_error)?;
        let filter = self.filter(config, ctx).map_err(provider_error)?;

        let binding = ChoiceBinding::new(
            config.data_source.clone(),
            items,
            self.kind.is_multi_select(),
            filter,
        );
        Ok(base_widget(
            self.kind,
            field,
            &config.options,
            ctx,
            Constraints::Choice(binding),
            value,
        ))
    }
}
