use super::{EntityId, EntityMetadata};
use crate::shared::metadata::{
    convert, CheckboxConfig, EntityField, FieldDescriptor, FieldValue, FieldValueType, GridColumnConfig,
    TextConfig, WidgetOptions,
};
use serde::{Deserialize, Serialize};

/// Базовые поля справочника: id, код, наименование, комментарий
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseCatalog<Id> {
    /// Идентификатор; `None` до первого сохранения
    pub id: Option<Id>,
    /// Бизнес-код записи (например, "CLT-001")
    pub code: String,
    /// Наименование
    pub title: String,
    /// Комментарий
    pub comment: Option<String>,
    /// Метаданные жизненного цикла
    pub metadata: EntityMetadata,
}

impl<Id> BaseCatalog<Id> {
    /// Создать новый (ещё не сохранённый) элемент
    pub fn new(code: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: None,
            code: code.into(),
            title: title.into(),
            comment: None,
            metadata: EntityMetadata::new(),
        }
    }

    /// Создать элемент с существующими метаданными (для загрузки из хранилища)
    pub fn with_metadata(
        id: Option<Id>,
        code: String,
        title: String,
        comment: Option<String>,
        metadata: EntityMetadata,
    ) -> Self {
        Self {
            id,
            code,
            title,
            comment,
            metadata,
        }
    }

    pub fn set_comment(&mut self, comment: Option<String>) {
        self.comment = comment.filter(|c| !c.trim().is_empty());
    }

    /// Обновить timestamp и версию перед записью
    pub fn before_write(&mut self) {
        self.metadata.touch();
        self.metadata.increment_version();
    }

    /// Код и наименование обязательны
    pub fn validate(&self) -> Result<(), String> {
        if self.code.trim().is_empty() {
            return Err("Код не может быть пустым".into());
        }
        if self.title.trim().is_empty() {
            return Err("Наименование не может быть пустым".into());
        }
        Ok(())
    }
}

impl<Id: EntityId> BaseCatalog<Id> {
    /// Значение базового поля; `None` если имя не относится к базовым полям
    pub fn field_value(&self, name: &str) -> Option<FieldValue> {
        let value = match name {
            "id" => FieldValue::Text(self.id.as_ref().map(EntityId::as_string).unwrap_or_default()),
            "code" => FieldValue::Text(self.code.clone()),
            "title" => FieldValue::Text(self.title.clone()),
            "comment" => FieldValue::Text(self.comment.clone().unwrap_or_default()),
            "deletion_mark" => FieldValue::Flag(self.metadata.deletion_mark),
            "draft_mark" => FieldValue::Flag(self.metadata.draft_mark),
            _ => return None,
        };
        Some(value)
    }

    /// Записать базовое поле; `None` если имя не относится к базовым полям
    pub fn set_field_value(
        &mut self,
        name: &str,
        value: Option<FieldValue>,
    ) -> Option<Result<(), String>> {
        let result = match name {
            "id" => convert::text(name, value).and_then(|raw| {
                self.id = match raw.filter(|r| !r.trim().is_empty()) {
                    Some(raw) => Some(Id::from_string(&raw).map_err(|e| e.to_string())?),
                    None => None,
                };
                Ok(())
            }),
            "code" => convert::text(name, value).map(|v| self.code = v.unwrap_or_default()),
            "title" => convert::text(name, value).map(|v| self.title = v.unwrap_or_default()),
            "comment" => convert::text(name, value).map(|v| self.set_comment(v)),
            "deletion_mark" => convert::flag(name, value).map(|v| self.metadata.deletion_mark = v),
            "draft_mark" => convert::flag(name, value).map(|v| self.metadata.draft_mark = v),
            _ => return None,
        };
        Some(result)
    }
}

/// Описание базовых полей справочника, общее для всех справочников
pub fn catalog_base_fields() -> Vec<EntityField> {
    vec![
        EntityField::new("id", FieldValueType::Text)
            .with_order(100)
            .on_list(100)
            .with_column(GridColumnConfig::headed("${field.title.id}").frozen())
            .with_descriptor(FieldDescriptor::TextField(TextConfig::new(
                WidgetOptions::labelled("${field.title.id}").read_only(),
            ))),
        EntityField::new("deletion_mark", FieldValueType::Flag)
            .with_order(101)
            .with_descriptor(FieldDescriptor::Checkbox(CheckboxConfig::new(
                WidgetOptions::labelled("${field.title.deletion_mark}").read_only(),
            ))),
        EntityField::new("draft_mark", FieldValueType::Flag)
            .with_order(102)
            .with_descriptor(FieldDescriptor::Checkbox(CheckboxConfig::new(
                WidgetOptions::labelled("${field.title.draft_mark}").read_only(),
            ))),
        EntityField::new("code", FieldValueType::Text)
            .with_order(110)
            .on_list(110)
            .with_column(GridColumnConfig::headed("${field.title.code}"))
            .with_descriptor(FieldDescriptor::TextField(
                TextConfig::new(
                    WidgetOptions::labelled("${field.title.code}")
                        .required()
                        .required_indicator()
                        .clear_button(),
                )
                .max_length(50),
            )),
        EntityField::new("title", FieldValueType::Text)
            .with_order(120)
            .on_list(120)
            .with_column(GridColumnConfig::headed("${field.title.title}").flex_grow(1))
            .with_descriptor(FieldDescriptor::TextField(
                TextConfig::new(
                    WidgetOptions::labelled("${field.title.title}")
                        .required()
                        .required_indicator()
                        .width_full(),
                )
                .max_length(255),
            )),
        EntityField::new("comment", FieldValueType::Text)
            .with_order(130)
            .with_descriptor(FieldDescriptor::TextArea(TextConfig::new(
                WidgetOptions::labelled("${field.title.comment}").width_full(),
            ))),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_fields_write_and_read_back() {
        let mut base: BaseCatalog<i64> = BaseCatalog::new("C-1", "First");
        assert_eq!(base.set_field_value("id", Some("17".into())), Some(Ok(())));
        assert_eq!(base.id, Some(17));
        assert_eq!(base.field_value("id"), Some(FieldValue::text("17")));

        assert_eq!(base.set_field_value("comment", Some("   ".into())), Some(Ok(())));
        assert_eq!(base.comment, None);

        assert!(base.set_field_value("surname", Some("x".into())).is_none());
        assert!(matches!(
            base.set_field_value("id", Some("seventeen".into())),
            Some(Err(_))
        ));

        assert_eq!(base.set_field_value("id", None), Some(Ok(())));
        assert!(base.id.is_none());
    }

    #[test]
    fn blank_code_or_title_fails_validation() {
        let base: BaseCatalog<i64> = BaseCatalog::new(" ", "Title");
        assert!(base.validate().is_err());
        let base: BaseCatalog<i64> = BaseCatalog::new("C", "");
        assert!(base.validate().is_err());
        let base: BaseCatalog<i64> = BaseCatalog::new("C", "T");
        assert!(base.validate().is_ok());
    }

    #[test]
    fn base_field_orders_put_marks_after_id() {
        let names: Vec<(&str, Option<i32>)> = catalog_base_fields()
            .iter()
            .map(|f| (f.name, f.order))
            .collect();
        assert_eq!(
            names,
            vec![
                ("id", Some(100)),
                ("deletion_mark", Some(101)),
                ("draft_mark", Some(102)),
                ("code", Some(110)),
                ("title", Some(120)),
                ("comment", Some(130)),
            ]
        );
    }
}
