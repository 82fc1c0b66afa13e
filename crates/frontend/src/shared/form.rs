//! Форма элемента: виджеты полей сущности и перенос значений туда и обратно

use super::fields::{numeric, Constraints, TextResolver, Widget, WidgetConfigurationError, WidgetRegistry};
use contracts::domain::common::Entity;
use contracts::shared::metadata::FieldValue;
use std::marker::PhantomData;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("field '{field}': {message}")]
pub struct BindingError {
    pub field: String,
    pub message: String,
}

pub struct EntityForm<E: Entity> {
    widgets: Vec<Widget>,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Entity> EntityForm<E> {
    pub fn build(
        registry: &WidgetRegistry,
        text: Option<TextResolver<'_>>,
    ) -> Result<Self, WidgetConfigurationError> {
        let widgets = registry.create_fields(E::fields(), text)?;
        log::debug!("Form {}: {} widgets", E::full_name(), widgets.len());
        Ok(Self {
            widgets,
            _entity: PhantomData,
        })
    }

    pub fn widgets(&self) -> &[Widget] {
        &self.widgets
    }

    pub fn widget(&self, field: &str) -> Option<&Widget> {
        self.widgets.iter().find(|w| w.field == field)
    }

    pub fn widget_mut(&mut self, field: &str) -> Option<&mut Widget> {
        self.widgets.iter_mut().find(|w| w.field == field)
    }

    /// Заполнить виджеты значениями сущности
    pub fn read_bean(&mut self, entity: &E) {
        for widget in &mut self.widgets {
            widget.value = entity.field_value(widget.field);
        }
    }

    /// Записать значения редактируемых виджетов в сущность
    pub fn write_bean(&self, entity: &mut E) -> Result<(), BindingError> {
        for widget in self.widgets.iter().filter(|w| !w.read_only) {
            let value = widget.value.clone().map(|v| to_field(widget, v));
            entity
                .set_field_value(widget.field, value)
                .map_err(|message| BindingError {
                    field: widget.field.to_string(),
                    message,
                })?;
        }
        Ok(())
    }
}

/// Number widgets may hold a float; integer fields get it back in their width
fn to_field(widget: &Widget, value: FieldValue) -> FieldValue {
    match (&widget.constraints, &value) {
        (Constraints::Number { width, .. }, FieldValue::Number(n)) if width.is_integer() => {
            numeric::value_of(*width, *n)
        }
        _ => value,
    }
}
