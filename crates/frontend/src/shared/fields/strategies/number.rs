use super::super::numeric::{derive_range, fit, value_of};
use super::super::support::{base_widget, require_descriptor};
use super::super::widget::{Constraints, Widget};
use super::super::{CreationContext, WidgetConfigurationError, WidgetCreationStrategy};
use contracts::shared::metadata::{DescriptorKind, EntityField, FieldDescriptor, NumericWidth};

/// Number field; bounds and step are fitted to the field's numeric width
pub struct NumberStrategy;

impl WidgetCreationStrategy for NumberStrategy {
    fn supported_descriptor(&self) -> DescriptorKind {
        DescriptorKind::NumberField
    }

    fn create_widget(
        &self,
        field: &EntityField,
        ctx: &CreationContext<'_>,
    ) -> Result<Widget, WidgetConfigurationError> {
        let FieldDescriptor::NumberField(config) =
            require_descriptor(field, DescriptorKind::NumberField)?
        else {
            return Err(WidgetConfigurationError::DescriptorMismatch {
                field: field.name.to_string(),
                expected: DescriptorKind::NumberField,
            });
        };

        let width = field.value_type.numeric_width().unwrap_or(NumericWidth::F64);
        let range = derive_range(width, config.min, config.max, config.step);

        // Значение по умолчанию обязано помещаться в итоговый диапазон
        let value = match config.default_value {
            None => None,
            Some(literal) => match fit(width, literal, range.min, range.max) {
                Some(value) => Some(value_of(width, value)),
                None => {
                    return Err(WidgetConfigurationError::InvalidLiteral {
                        field: field.name.to_string(),
                        literal: literal.to_string(),
                        expected: width.as_str(),
                    })
                }
            },
        };

        let constraints = Constraints::Number {
            width,
            min: range.min,
            max: range.max,
            step: range.step,
            step_buttons_visible: config.step_buttons_visible,
        };
        Ok(base_widget(
            DescriptorKind::NumberField,
            field,
            &config.options,
            ctx,
            constraints,
            value,
        ))
    }
}
