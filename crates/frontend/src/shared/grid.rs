//! Колонки списка и строки для набора сущностей

use super::date_utils::format_cell;
use super::fields::{generate_label, TextResolver};
use contracts::domain::common::{Entity, EntityId};
use contracts::shared::metadata::{EntityField, GridColumnConfig};
use std::marker::PhantomData;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridColumn {
    pub field: &'static str,
    pub id: String,
    pub key: String,
    pub header: String,
    pub footer: Option<String>,
    pub sortable: bool,
    pub resizable: bool,
    pub auto_width: bool,
    pub flex_grow: Option<i32>,
    pub frozen: bool,
    pub frozen_to_end: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridRow {
    /// Идентификатор сущности; `None` для несохранённой
    pub id: Option<String>,
    pub cells: Vec<String>,
}

pub struct EntityGrid<E: Entity> {
    columns: Vec<GridColumn>,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Entity> EntityGrid<E> {
    /// Колонки для полей, размещённых в списке, по порядку размещения
    pub fn build(text: Option<TextResolver<'_>>) -> Self {
        let mut fields: Vec<&EntityField> = E::fields().iter().filter(|f| f.is_on_list()).collect();
        fields.sort_by_key(|f| f.list_order.unwrap_or(i32::MAX));

        let resolve = |raw: &str| -> Option<String> {
            if raw.trim().is_empty() {
                return None;
            }
            Some(text.map_or_else(|| raw.to_string(), |t| t(raw)))
        };

        let default_config = GridColumnConfig::default();
        let columns = fields
            .into_iter()
            .map(|field| {
                let config = field.column.as_ref().unwrap_or(&default_config);
                let header_key = if config.header.trim().is_empty() {
                    field
                        .descriptors
                        .first()
                        .map(|d| d.options().label.as_str())
                        .unwrap_or_default()
                } else {
                    config.header.as_str()
                };
                GridColumn {
                    field: field.name,
                    id: non_blank(&config.id)
                        .unwrap_or_else(|| format!("column-{}", field.name.to_lowercase())),
                    key: non_blank(&config.key).unwrap_or_else(|| field.name.to_lowercase()),
                    header: resolve(header_key).unwrap_or_else(|| generate_label(field.name)),
                    footer: resolve(&config.footer),
                    sortable: config.sortable,
                    resizable: config.resizable,
                    auto_width: config.auto_width,
                    flex_grow: (config.flex_grow > 0).then_some(config.flex_grow),
                    frozen: config.frozen,
                    frozen_to_end: config.frozen_to_end,
                }
            })
            .collect();

        Self {
            columns,
            _entity: PhantomData,
        }
    }

    pub fn columns(&self) -> &[GridColumn] {
        &self.columns
    }

    pub fn column(&self, field: &str) -> Option<&GridColumn> {
        self.columns.iter().find(|c| c.field == field)
    }

    pub fn rows(&self, entities: &[E]) -> Vec<GridRow> {
        entities
            .iter()
            .map(|entity| GridRow {
                id: entity.id().map(EntityId::as_string),
                cells: self
                    .columns
                    .iter()
                    .map(|c| entity.field_value(c.field).map(|v| format_cell(&v)).unwrap_or_default())
                    .collect(),
            })
            .collect()
    }
}

fn non_blank(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}
