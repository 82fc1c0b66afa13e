//! Общие шаги настройки виджета: идентификатор, тексты, флаги, размеры

use super::widget::{Constraints, Widget, WidgetSize};
use super::{CreationContext, WidgetConfigurationError};
use contracts::shared::metadata::{
    DescriptorKind, EntityField, FieldDescriptor, FieldValue, WidgetOptions,
};

const FULL: &str = "100%";

/// Widget with everything common to all kinds applied
pub(crate) fn base_widget(
    kind: DescriptorKind,
    field: &EntityField,
    options: &WidgetOptions,
    ctx: &CreationContext<'_>,
    constraints: Constraints,
    value: Option<FieldValue>,
) -> Widget {
    Widget {
        kind,
        field: field.name,
        id: widget_id(field.name, options),
        label: ctx
            .resolve(&options.label)
            .unwrap_or_else(|| generate_label(field.name)),
        helper_text: ctx.resolve(&options.helper_text),
        placeholder: ctx.resolve(&options.placeholder),
        tooltip: ctx.resolve(&options.tooltip),
        prefix_text: ctx.resolve(&options.prefix_text),
        suffix_text: ctx.resolve(&options.suffix_text),
        visible: options.visible,
        enabled: options.enabled,
        read_only: options.read_only,
        required: options.required,
        required_indicator_visible: options.required_indicator_visible || options.required,
        clear_button_visible: options.clear_button_visible,
        auto_open: options.auto_open,
        size: widget_size(options),
        constraints,
        value,
    }
}

/// Явный идентификатор или `field-<имя в нижнем регистре>`
pub(crate) fn widget_id(name: &str, options: &WidgetOptions) -> String {
    let explicit = options.id.trim();
    if explicit.is_empty() {
        format!("field-{}", name.to_lowercase())
    } else {
        explicit.to_string()
    }
}

/// Label from a field name: `birth_date` and `birthDate` both give "Birth date"
pub fn generate_label(name: &str) -> String {
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut previous_lower = false;

    for ch in name.chars() {
        if ch == '_' || ch == '-' || ch.is_whitespace() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            previous_lower = false;
            continue;
        }
        if ch.is_uppercase() && previous_lower && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        previous_lower = ch.is_lowercase() || ch.is_ascii_digit();
        current.extend(ch.to_lowercase());
    }
    if !current.is_empty() {
        words.push(current);
    }

    let joined = words.join(" ");
    let mut chars = joined.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn widget_size(options: &WidgetOptions) -> WidgetSize {
    let size = &options.size;
    let full_width = size.width_full || size.size_full;
    let full_height = size.height_full || size.size_full;

    WidgetSize {
        width: explicit(&size.width).or_else(|| full_width.then(|| FULL.to_string())),
        min_width: explicit(&size.min_width),
        max_width: explicit(&size.max_width),
        height: explicit(&size.height).or_else(|| full_height.then(|| FULL.to_string())),
        min_height: explicit(&size.min_height),
        max_height: explicit(&size.max_height),
    }
}

fn explicit(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Descriptor of `kind` attached to the field, or a mismatch error
pub(crate) fn require_descriptor<'f>(
    field: &'f EntityField,
    kind: DescriptorKind,
) -> Result<&'f FieldDescriptor, WidgetConfigurationError> {
    field
        .descriptor(kind)
        .ok_or_else(|| WidgetConfigurationError::DescriptorMismatch {
            field: field.name.to_string(),
            expected: kind,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_generated_from_snake_and_camel_case() {
        assert_eq!(generate_label("birth_date"), "Birth date");
        assert_eq!(generate_label("callTime"), "Call time");
        assert_eq!(generate_label("vip"), "Vip");
        assert_eq!(generate_label("portal_password2"), "Portal password2");
        assert_eq!(generate_label(""), "");
    }

    #[test]
    fn id_defaults_to_lowercased_field_name() {
        assert_eq!(widget_id("birthDate", &WidgetOptions::default()), "field-birthdate");
        assert_eq!(
            widget_id("birthDate", &WidgetOptions::default().id(" born ")),
            "born"
        );
    }

    #[test]
    fn explicit_sizes_override_full_flags() {
        let size = widget_size(&WidgetOptions::default().size_full().width("20em"));
        assert_eq!(size.width.as_deref(), Some("20em"));
        assert_eq!(size.height.as_deref(), Some("100%"));
        assert_eq!(size.min_width, None);

        let size = widget_size(&WidgetOptions::default().width_full());
        assert_eq!(size.width.as_deref(), Some("100%"));
        assert_eq!(size.height, None);
    }
}
