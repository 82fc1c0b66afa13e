use super::super::support::{base_widget, require_descriptor};
use super::super::widget::{Constraints, Widget};
use super::super::{CreationContext, WidgetConfigurationError, WidgetCreationStrategy};
use contracts::shared::metadata::{DescriptorKind, EntityField, FieldDescriptor, FieldValue};

/// Text field, text area and password field
pub struct TextStrategy {
    kind: DescriptorKind,
}

impl TextStrategy {
    pub fn new(kind: DescriptorKind) -> Self {
        Self { kind }
    }
}

impl WidgetCreationStrategy for TextStrategy {
    fn supported_descriptor(&self) -> DescriptorKind {
        self.kind
    }

    fn create_widget(
        &self,
        field: &EntityField,
        ctx: &CreationContext<'_>,
    ) -> Result<Widget, WidgetConfigurationError> {
        let config = match require_descriptor(field, self.kind)? {
            FieldDescriptor::TextField(c)
            | FieldDescriptor::TextArea(c)
            | FieldDescriptor::PasswordField(c) => c,
            _ => {
                return Err(WidgetConfigurationError::DescriptorMismatch {
                    field: field.name.to_string(),
                    expected: self.kind,
                })
            }
        };

        let value = (!config.default_value.is_empty())
            .then(|| FieldValue::Text(config.default_value.clone()));
        let constraints = Constraints::Text {
            min_length: config.min_length,
            max_length: config.max_length,
        };
        Ok(base_widget(self.kind, field, &config.options, ctx, constraints, value))
    }
}
