use super::super::support::{base_widget, require_descriptor};
use super::super::widget::{Constraints, Widget};
use super::super::{CreationContext, WidgetConfigurationError, WidgetCreationStrategy};
use contracts::shared::metadata::{DescriptorKind, EntityField, FieldDescriptor, FieldValue};

pub struct CheckboxStrategy;

impl WidgetCreationStrategy for CheckboxStrategy {
    fn supported_descriptor(&self) -> DescriptorKind {
        DescriptorKind::Checkbox
    }

    fn create_widget(
        &self,
        field: &EntityField,
        ctx: &CreationContext<'_>,
    ) -> Result<Widget, WidgetConfigurationError> {
        let FieldDescriptor::Checkbox(config) = require_descriptor(field, DescriptorKind::Checkbox)?
        else {
            return Err(WidgetConfigurationError::DescriptorMismatch {
                field: field.name.to_string(),
                expected: DescriptorKind::Checkbox,
            });
        };

        Ok(base_widget(
            DescriptorKind::Checkbox,
            field,
            &config.options,
            ctx,
            Constraints::Flag,
            Some(FieldValue::Flag(config.default_value)),
        ))
    }
}
