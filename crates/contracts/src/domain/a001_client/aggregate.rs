use super::providers;
use crate::domain::common::base_catalog::catalog_base_fields;
use crate::domain::common::{BaseCatalog, CatalogEntity, DataEntity, Entity, EntityMetadata};
use crate::shared::metadata::{
    convert, CheckboxConfig, ChoiceConfig, EntityField, FieldDescriptor, FieldValue,
    FieldValueType, GridColumnConfig, NumberConfig, NumericWidth, TemporalConfig, TextConfig,
    WidgetOptions, DEFAULT_FILTER_CONVERTER,
};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

// ============================================================================
// Aggregate
// ============================================================================

/// Клиент агентства недвижимости
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    #[serde(flatten)]
    pub base: BaseCatalog<i64>,

    pub name: String,
    pub surname: String,
    #[serde(default)]
    pub portal_password: String,
    pub salary: Option<i64>,
    /// Внутренний рейтинг
    pub rating: Option<i8>,
    /// Скидка, %
    pub discount: Option<f32>,
    #[serde(default)]
    pub vip: bool,
    pub birth_date: Option<NaiveDate>,
    pub call_time: Option<NaiveTime>,
    pub last_contact: Option<NaiveDateTime>,
    pub satisfaction: Option<String>,
    pub region: Option<String>,
    pub language: Option<String>,
    pub channel: Option<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub districts: Vec<String>,
    /// Код во внешней системе, на форме не показывается
    pub external_ref: Option<String>,
}

impl Client {
    pub fn new(code: impl Into<String>, name: impl Into<String>, surname: impl Into<String>) -> Self {
        let name = name.into();
        let surname = surname.into();
        let title = format!("{} {}", name, surname);
        Self {
            base: BaseCatalog::new(code, title),
            name,
            surname,
            portal_password: String::new(),
            salary: None,
            rating: None,
            discount: None,
            vip: false,
            birth_date: None,
            call_time: None,
            last_contact: None,
            satisfaction: None,
            region: None,
            language: None,
            channel: None,
            interests: Vec::new(),
            tags: Vec::new(),
            districts: Vec::new(),
            external_ref: None,
        }
    }
}

fn list_value(items: &[String]) -> Option<FieldValue> {
    if items.is_empty() {
        None
    } else {
        Some(FieldValue::texts(items.iter().cloned()))
    }
}

impl Entity for Client {
    type Id = i64;

    fn id(&self) -> Option<&i64> {
        self.base.id.as_ref()
    }

    fn set_id(&mut self, id: Option<i64>) {
        self.base.id = id;
    }

    fn entity_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "client"
    }

    fn element_name() -> &'static str {
        "Клиент"
    }

    fn list_name() -> &'static str {
        "Клиенты"
    }

    fn fields() -> &'static [EntityField] {
        CLIENT_FIELDS.as_slice()
    }

    fn field_value(&self, name: &str) -> Option<FieldValue> {
        match name {
            "name" => Some(FieldValue::text(&self.name)),
            "surname" => Some(FieldValue::text(&self.surname)),
            "portal_password" => Some(FieldValue::text(&self.portal_password)),
            "salary" => self.salary.map(FieldValue::Integer),
            "rating" => self.rating.map(|v| FieldValue::Integer(v.into())),
            "discount" => self.discount.map(|v| FieldValue::Number(v.into())),
            "vip" => Some(FieldValue::Flag(self.vip)),
            "birth_date" => self.birth_date.map(FieldValue::Date),
            "call_time" => self.call_time.map(FieldValue::Time),
            "last_contact" => self.last_contact.map(FieldValue::DateTime),
            "satisfaction" => convert::from_text(&self.satisfaction),
            "region" => convert::from_text(&self.region),
            "language" => convert::from_text(&self.language),
            "channel" => convert::from_text(&self.channel),
            "interests" => list_value(&self.interests),
            "tags" => list_value(&self.tags),
            "districts" => list_value(&self.districts),
            "external_ref" => convert::from_text(&self.external_ref),
            _ => self.base.field_value(name),
        }
    }

    fn set_field_value(&mut self, name: &str, value: Option<FieldValue>) -> Result<(), String> {
        match name {
            "name" => self.name = convert::text(name, value)?.unwrap_or_default(),
            "surname" => self.surname = convert::text(name, value)?.unwrap_or_default(),
            "portal_password" => {
                self.portal_password = convert::text(name, value)?.unwrap_or_default()
            }
            "salary" => self.salary = convert::integer(name, value)?,
            "rating" => self.rating = convert::narrow(name, value)?,
            "discount" => self.discount = convert::number(name, value)?.map(|v| v as f32),
            "vip" => self.vip = convert::flag(name, value)?,
            "birth_date" => self.birth_date = convert::date(name, value)?,
            "call_time" => self.call_time = convert::time(name, value)?,
            "last_contact" => self.last_contact = convert::date_time(name, value)?,
            "satisfaction" => self.satisfaction = convert::text(name, value)?,
            "region" => self.region = convert::text(name, value)?,
            "language" => self.language = convert::text(name, value)?,
            "channel" => self.channel = convert::text(name, value)?,
            "interests" => self.interests = convert::texts(name, value)?,
            "tags" => self.tags = convert::texts(name, value)?,
            "districts" => self.districts = convert::texts(name, value)?,
            "external_ref" => self.external_ref = convert::text(name, value)?,
            _ => {
                return self
                    .base
                    .set_field_value(name, value)
                    .unwrap_or_else(|| Err(format!("unknown field '{}'", name)))
            }
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), String> {
        self.base.validate()?;
        if self.name.trim().is_empty() {
            return Err("Имя не может быть пустым".into());
        }
        if let Some(salary) = self.salary {
            if salary < 0 {
                return Err("Зарплата не может быть отрицательной".into());
            }
        }
        Ok(())
    }

    fn before_write(&mut self) {
        if self.base.title.trim().is_empty() {
            self.base.title = format!("{} {}", self.name, self.surname).trim().to_string();
        }
        self.base.before_write();
    }
}

impl DataEntity for Client {
    fn metadata(&self) -> &EntityMetadata {
        &self.base.metadata
    }

    fn metadata_mut(&mut self) -> &mut EntityMetadata {
        &mut self.base.metadata
    }
}

impl CatalogEntity for Client {
    fn code(&self) -> &str {
        &self.base.code
    }

    fn title(&self) -> &str {
        &self.base.title
    }

    fn comment(&self) -> Option<&str> {
        self.base.comment.as_deref()
    }
}

// ============================================================================
// Field table
// ============================================================================

static CLIENT_FIELDS: Lazy<Vec<EntityField>> = Lazy::new(|| {
    let mut fields = catalog_base_fields();
    fields.extend(client_fields());
    fields
});

fn client_fields() -> Vec<EntityField> {
    vec![
        EntityField::new("name", FieldValueType::Text)
            .with_order(200)
            .on_list(200)
            .with_column(GridColumnConfig::headed("${field.title.name}"))
            .with_descriptor(FieldDescriptor::TextField(
                TextConfig::new(
                    WidgetOptions::labelled("${field.title.name}")
                        .required()
                        .required_indicator()
                        .clear_button(),
                )
                .length(1, 100),
            )),
        // Текстовое поле зарегистрировано раньше области текста, поэтому побеждает
        EntityField::new("surname", FieldValueType::Text)
            .with_order(210)
            .on_list(210)
            .with_column(GridColumnConfig::headed("${field.title.surname}"))
            .with_descriptor(FieldDescriptor::TextArea(TextConfig::default()))
            .with_descriptor(FieldDescriptor::TextField(
                TextConfig::new(WidgetOptions::labelled("${field.title.surname}")).max_length(100),
            )),
        EntityField::new("portal_password", FieldValueType::Text)
            .with_order(215)
            .with_descriptor(FieldDescriptor::PasswordField(
                TextConfig::new(WidgetOptions::default().helper_text("${field.helper.portal_password}"))
                    .length(8, 64),
            )),
        EntityField::new("salary", FieldValueType::Number(NumericWidth::I64))
            .with_order(220)
            .on_list(220)
            .with_column(GridColumnConfig::headed("${field.title.salary}").footer("RUB"))
            .with_descriptor(FieldDescriptor::NumberField(
                NumberConfig::new(WidgetOptions::labelled("${field.title.salary}").suffix("RUB"))
                    .range(0.0, f64::INFINITY)
                    .step(1000.0)
                    .step_buttons(),
            )),
        EntityField::new("rating", FieldValueType::Number(NumericWidth::I8))
            .with_order(230)
            .with_descriptor(FieldDescriptor::NumberField(
                NumberConfig::new(WidgetOptions::labelled("${field.title.rating}"))
                    .range(-1000.0, 1000.0)
                    .default_value(0.0),
            )),
        EntityField::new("discount", FieldValueType::Number(NumericWidth::F32))
            .with_order(240)
            .with_descriptor(FieldDescriptor::NumberField(
                NumberConfig::new(WidgetOptions::labelled("${field.title.discount}").suffix("%"))
                    .range(0.0, 100.0)
                    .step(0.5),
            )),
        EntityField::new("vip", FieldValueType::Flag)
            .with_order(250)
            .on_list(250)
            .with_descriptor(FieldDescriptor::Checkbox(CheckboxConfig::new(
                WidgetOptions::labelled("${field.title.vip}"),
            ))),
        EntityField::new("birth_date", FieldValueType::Date)
            .with_order(260)
            .on_list(260)
            .with_column(GridColumnConfig::headed("${field.title.birth_date}"))
            .with_descriptor(FieldDescriptor::DatePicker(
                TemporalConfig::new(
                    WidgetOptions::labelled("${field.title.birth_date}").placeholder("yyyy-mm-dd"),
                )
                .default_value("1991-01-23")
                .min("1900-01-01"),
            )),
        EntityField::new("call_time", FieldValueType::Time)
            .with_order(270)
            .with_descriptor(FieldDescriptor::TimePicker(
                TemporalConfig::new(WidgetOptions::default())
                    .default_value("12:23")
                    .min("08:00")
                    .max("20:00"),
            )),
        EntityField::new("last_contact", FieldValueType::DateTime)
            .with_order(280)
            .with_descriptor(FieldDescriptor::DateTimePicker(
                TemporalConfig::new(
                    WidgetOptions::labelled("${field.title.last_contact}").placeholder("date"),
                )
                .default_value("1991-01-23T12:23")
                .time_placeholder("time"),
            )),
        EntityField::new("satisfaction", FieldValueType::Text)
            .with_order(290)
            .with_descriptor(FieldDescriptor::Select(
                ChoiceConfig::new(
                    WidgetOptions::labelled("${field.title.satisfaction}"),
                    providers::SATISFACTION,
                )
                .default_value(providers::SATISFACTION_DEFAULT),
            )),
        EntityField::new("region", FieldValueType::Text)
            .with_order(300)
            .on_list(300)
            .with_descriptor(FieldDescriptor::ComboBox(
                ChoiceConfig::new(
                    WidgetOptions::labelled("${field.title.region}").clear_button(),
                    providers::REGIONS,
                )
                .filter_converter(providers::REGION_PREFIX_FILTER),
            )),
        EntityField::new("language", FieldValueType::Text)
            .with_order(310)
            .with_descriptor(FieldDescriptor::ListBox(ChoiceConfig::new(
                WidgetOptions::labelled("${field.title.language}"),
                providers::LANGUAGES,
            ))),
        EntityField::new("channel", FieldValueType::Text)
            .with_order(320)
            .with_descriptor(FieldDescriptor::RadioButtonGroup(ChoiceConfig::new(
                WidgetOptions::labelled("${field.title.channel}"),
                providers::CHANNELS,
            ))),
        EntityField::new("interests", FieldValueType::TextSet)
            .with_order(330)
            .with_descriptor(FieldDescriptor::MultiSelectComboBox(
                ChoiceConfig::new(
                    WidgetOptions::labelled("${field.title.interests}"),
                    providers::TAGS,
                )
                .filter_converter(DEFAULT_FILTER_CONVERTER),
            )),
        EntityField::new("tags", FieldValueType::TextSet)
            .with_order(340)
            .with_descriptor(FieldDescriptor::CheckboxGroup(
                ChoiceConfig::new(WidgetOptions::labelled("${field.title.tags}"), providers::TAGS)
                    .default_value(providers::TAGS_DEFAULT),
            )),
        EntityField::new("districts", FieldValueType::TextSet)
            .with_order(350)
            .with_descriptor(FieldDescriptor::MultiSelectListBox(ChoiceConfig::new(
                WidgetOptions::labelled("${field.title.districts}").height("12em"),
                providers::REGIONS,
            ))),
        EntityField::new("external_ref", FieldValueType::Text),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::metadata::DescriptorKind;
    use std::collections::HashSet;

    #[test]
    fn field_table_covers_every_descriptor_kind() {
        let kinds: HashSet<DescriptorKind> = Client::fields()
            .iter()
            .flat_map(|f| f.descriptors.iter().map(|d| d.kind()))
            .collect();
        for kind in DescriptorKind::ALL {
            assert!(kinds.contains(&kind), "missing {:?}", kind);
        }
    }

    #[test]
    fn every_field_is_readable_and_writable() {
        let mut client = Client::new("CLT-1", "Anna", "Petrova");
        for field in Client::fields() {
            let value = client.field_value(field.name);
            client
                .set_field_value(field.name, value)
                .unwrap_or_else(|e| panic!("{}: {}", field.name, e));
        }
        assert_eq!(client.base.code, "CLT-1");
        assert_eq!(client.name, "Anna");
    }

    #[test]
    fn before_write_bumps_version() {
        let mut client = Client::new("CLT-1", "Anna", "Petrova");
        assert_eq!(client.base.metadata.version, 0);
        client.before_write();
        assert_eq!(client.base.metadata.version, 1);
    }

    #[test]
    fn catalog_title_is_composed_from_name() {
        let client = Client::new("CLT-1", "Anna", "Petrova");
        assert_eq!(client.title(), "Anna Petrova");
        assert_eq!(Client::full_name(), "a001_client");
    }
}
