use crate::domain::common::base_catalog::catalog_base_fields;
use crate::domain::common::{BaseCatalog, CatalogEntity, DataEntity, Entity, EntityMetadata};
use crate::shared::metadata::{
    convert, CheckboxConfig, EntityField, FieldDescriptor, FieldValue, FieldValueType,
    GridColumnConfig, NumberConfig, NumericWidth, TemporalConfig, TextConfig, WidgetOptions,
};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Риелтор агентства
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Realtor {
    #[serde(flatten)]
    pub base: BaseCatalog<Uuid>,

    pub phone: String,
    /// Стаж, лет
    pub experience_years: Option<i16>,
    /// Комиссия, %
    pub commission: Option<f64>,
    #[serde(default)]
    pub licensed: bool,
    pub hired_on: Option<NaiveDate>,
}

impl Realtor {
    pub fn new(code: impl Into<String>, title: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            base: BaseCatalog::new(code, title),
            phone: phone.into(),
            experience_years: None,
            commission: None,
            licensed: false,
            hired_on: None,
        }
    }
}

impl Entity for Realtor {
    type Id = Uuid;

    fn id(&self) -> Option<&Uuid> {
        self.base.id.as_ref()
    }

    fn set_id(&mut self, id: Option<Uuid>) {
        self.base.id = id;
    }

    fn entity_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "realtor"
    }

    fn element_name() -> &'static str {
        "Риелтор"
    }

    fn list_name() -> &'static str {
        "Риелторы"
    }

    fn fields() -> &'static [EntityField] {
        REALTOR_FIELDS.as_slice()
    }

    fn field_value(&self, name: &str) -> Option<FieldValue> {
        match name {
            "phone" => Some(FieldValue::text(&self.phone)),
            "experience_years" => self.experience_years.map(|v| FieldValue::Integer(v.into())),
            "commission" => self.commission.map(FieldValue::Number),
            "licensed" => Some(FieldValue::Flag(self.licensed)),
            "hired_on" => self.hired_on.map(FieldValue::Date),
            _ => self.base.field_value(name),
        }
    }

    fn set_field_value(&mut self, name: &str, value: Option<FieldValue>) -> Result<(), String> {
        match name {
            "phone" => self.phone = convert::text(name, value)?.unwrap_or_default(),
            "experience_years" => self.experience_years = convert::narrow(name, value)?,
            "commission" => self.commission = convert::number(name, value)?,
            "licensed" => self.licensed = convert::flag(name, value)?,
            "hired_on" => self.hired_on = convert::date(name, value)?,
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
        let digits = self.phone.chars().filter(|c| c.is_ascii_digit()).count();
        if !self.phone.trim().is_empty() && digits < 10 {
            return Err("Телефон должен содержать не менее 10 цифр".into());
        }
        Ok(())
    }

    fn before_write(&mut self) {
        self.base.before_write();
    }
}

impl DataEntity for Realtor {
    fn metadata(&self) -> &EntityMetadata {
        &self.base.metadata
    }

    fn metadata_mut(&mut self) -> &mut EntityMetadata {
        &mut self.base.metadata
    }
}

impl CatalogEntity for Realtor {
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

static REALTOR_FIELDS: Lazy<Vec<EntityField>> = Lazy::new(|| {
    let mut fields = catalog_base_fields();
    fields.extend([
        EntityField::new("phone", FieldValueType::Text)
            .with_order(200)
            .on_list(200)
            .with_column(GridColumnConfig::headed("${field.title.phone}"))
            .with_descriptor(FieldDescriptor::TextField(
                TextConfig::new(
                    WidgetOptions::labelled("${field.title.phone}")
                        .placeholder("+7 900 000-00-00")
                        .prefix("tel"),
                )
                .max_length(20),
            )),
        EntityField::new("experience_years", FieldValueType::Number(NumericWidth::I16))
            .with_order(210)
            .on_list(210)
            .with_descriptor(FieldDescriptor::NumberField(
                NumberConfig::new(WidgetOptions::labelled("${field.title.experience_years}"))
                    .range(0.0, 70.0)
                    .step_buttons(),
            )),
        EntityField::new("commission", FieldValueType::Number(NumericWidth::F64))
            .with_order(220)
            .with_descriptor(FieldDescriptor::NumberField(
                NumberConfig::new(WidgetOptions::labelled("${field.title.commission}").suffix("%"))
                    .range(0.0, 30.0)
                    .step(0.25)
                    .default_value(3.0),
            )),
        EntityField::new("licensed", FieldValueType::Flag)
            .with_order(230)
            .with_descriptor(FieldDescriptor::Checkbox(
                CheckboxConfig::new(WidgetOptions::labelled("${field.title.licensed}")).checked(),
            )),
        EntityField::new("hired_on", FieldValueType::Date)
            .with_order(240)
            .on_list(240)
            .with_descriptor(FieldDescriptor::DatePicker(
                TemporalConfig::new(WidgetOptions::labelled("${field.title.hired_on}"))
                    .min("2000-01-01"),
            )),
    ]);
    fields
});
