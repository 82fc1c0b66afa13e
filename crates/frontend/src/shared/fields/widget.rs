//! Configured widget produced by a creation strategy

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use contracts::shared::metadata::{DescriptorKind, FieldValue, FilterConverter, NumericWidth};
use std::fmt;
use std::sync::Arc;

/// Resolved sizes; `None` means the widget keeps its natural size
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WidgetSize {
    pub width: Option<String>,
    pub min_width: Option<String>,
    pub max_width: Option<String>,
    pub height: Option<String>,
    pub min_height: Option<String>,
    pub max_height: Option<String>,
}

/// Items and filtering of a choice widget
#[derive(Clone)]
pub struct ChoiceBinding {
    pub data_source: String,
    pub items: Vec<FieldValue>,
    pub multiple: bool,
    filter: Arc<dyn FilterConverter>,
}

impl ChoiceBinding {
    pub fn new(
        data_source: impl Into<String>,
        items: Vec<FieldValue>,
        multiple: bool,
        filter: Arc<dyn FilterConverter>,
    ) -> Self {
        Self {
            data_source: data_source.into(),
            items,
            multiple,
            filter,
        }
    }

    /// Элементы, подходящие под введённый текст; пустой фильтр пропускает всё
    pub fn filter_items(&self, filter: &str) -> Vec<&FieldValue> {
        let filter = filter.trim();
        self.items
            .iter()
            .filter(|item| filter.is_empty() || self.filter.matches(item, filter))
            .collect()
    }

    pub fn contains(&self, value: &FieldValue) -> bool {
        self.items.contains(value)
    }
}

impl fmt::Debug for ChoiceBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChoiceBinding")
            .field("data_source", &self.data_source)
            .field("items", &self.items)
            .field("multiple", &self.multiple)
            .finish_non_exhaustive()
    }
}

/// Kind-specific limits of a widget
#[derive(Debug, Clone)]
pub enum Constraints {
    Text {
        min_length: Option<u32>,
        max_length: Option<u32>,
    },
    Number {
        width: NumericWidth,
        min: f64,
        max: f64,
        step: f64,
        step_buttons_visible: bool,
    },
    Flag,
    Date {
        min: Option<NaiveDate>,
        max: Option<NaiveDate>,
    },
    Time {
        min: Option<NaiveTime>,
        max: Option<NaiveTime>,
    },
    DateTime {
        min: Option<NaiveDateTime>,
        max: Option<NaiveDateTime>,
        time_placeholder: Option<String>,
    },
    Choice(ChoiceBinding),
}

#[derive(Debug, Clone)]
pub struct Widget {
    pub kind: DescriptorKind,
    pub field: &'static str,
    pub id: String,
    pub label: String,
    pub helper_text: Option<String>,
    pub placeholder: Option<String>,
    pub tooltip: Option<String>,
    pub prefix_text: Option<String>,
    pub suffix_text: Option<String>,
    pub visible: bool,
    pub enabled: bool,
    pub read_only: bool,
    pub required: bool,
    pub required_indicator_visible: bool,
    pub clear_button_visible: bool,
    pub auto_open: bool,
    pub size: WidgetSize,
    pub constraints: Constraints,
    pub value: Option<FieldValue>,
}

impl Widget {
    pub fn value(&self) -> Option<&FieldValue> {
        self.value.as_ref()
    }

    pub fn set_value(&mut self, value: Option<FieldValue>) {
        self.value = value;
    }

    pub fn choice(&self) -> Option<&ChoiceBinding> {
        match &self.constraints {
            Constraints::Choice(binding) => Some(binding),
            _ => None,
        }
    }

    pub fn numeric_width(&self) -> Option<NumericWidth> {
        match self.constraints {
            Constraints::Number { width, .. } => Some(width),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::metadata::DefaultFilterConverter;

    #[test]
    fn choice_filter_is_case_insensitive_substring() {
        let binding = ChoiceBinding::new(
            "regions",
            vec![FieldValue::text("Central"), FieldValue::text("North-West")],
            false,
            Arc::new(DefaultFilterConverter),
        );
        assert_eq!(binding.filter_items("TRAL"), vec![&FieldValue::text("Central")]);
        assert_eq!(binding.filter_items("  ").len(), 2);
        assert!(binding.filter_items("zz").is_empty());
    }
}
