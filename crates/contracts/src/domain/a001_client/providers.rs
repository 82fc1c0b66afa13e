//! Choice providers used by the client form

use crate::shared::metadata::{
    DataSource, DefaultItemsProvider, DefaultValueProvider, FieldValue, FilterConverter,
    ProviderRegistry,
};

pub const SATISFACTION: &str = "a001_client.satisfaction";
pub const SATISFACTION_DEFAULT: &str = "a001_client.satisfaction.default";
pub const REGIONS: &str = "a001_client.regions";
pub const REGION_PREFIX_FILTER: &str = "a001_client.regions.prefix_filter";
pub const LANGUAGES: &str = "a001_client.languages";
pub const CHANNELS: &str = "a001_client.channels";
pub const TAGS: &str = "a001_client.tags";
pub const TAGS_DEFAULT: &str = "a001_client.tags.default";

/// Оценка удовлетворённости клиента
#[derive(Debug, Default)]
pub struct SatisfactionGrades;

impl DataSource for SatisfactionGrades {
    fn items(&self) -> Vec<FieldValue> {
        ["Bad", "So-so", "Good", "Great", "Excellent"]
            .into_iter()
            .map(FieldValue::from)
            .collect()
    }
}

#[derive(Debug, Default)]
pub struct DefaultSatisfaction;

impl DefaultValueProvider for DefaultSatisfaction {
    fn default_value(&self) -> Option<FieldValue> {
        Some("Good".into())
    }
}

#[derive(Debug, Default)]
pub struct Regions;

impl DataSource for Regions {
    fn items(&self) -> Vec<FieldValue> {
        ["Central", "North-West", "South", "Volga", "Ural", "Siberia", "Far East"]
            .into_iter()
            .map(FieldValue::from)
            .collect()
    }
}

/// Регион подбирается по началу названия
#[derive(Debug, Default)]
pub struct RegionPrefixFilter;

impl FilterConverter for RegionPrefixFilter {
    fn matches(&self, item: &FieldValue, filter: &str) -> bool {
        item.to_string()
            .to_lowercase()
            .starts_with(&filter.trim().to_lowercase())
    }
}

#[derive(Debug, Default)]
pub struct Languages;

impl DataSource for Languages {
    fn items(&self) -> Vec<FieldValue> {
        ["Russian", "English", "German", "Chinese"]
            .into_iter()
            .map(FieldValue::from)
            .collect()
    }
}

#[derive(Debug, Default)]
pub struct Channels;

impl DataSource for Channels {
    fn items(&self) -> Vec<FieldValue> {
        ["Phone", "Email", "Messenger"]
            .into_iter()
            .map(FieldValue::from)
            .collect()
    }
}

#[derive(Debug, Default)]
pub struct Tags;

impl DataSource for Tags {
    fn items(&self) -> Vec<FieldValue> {
        ["Buyer", "Seller", "Tenant", "Landlord", "Investor"]
            .into_iter()
            .map(FieldValue::from)
            .collect()
    }
}

#[derive(Debug, Default)]
pub struct DefaultTags;

impl DefaultItemsProvider for DefaultTags {
    fn default_items(&self) -> Vec<FieldValue> {
        vec!["Buyer".into()]
    }
}

/// Зарегистрировать провайдеры формы клиента
pub fn register_providers(registry: &mut ProviderRegistry) {
    registry
        .register_data_source::<SatisfactionGrades>(SATISFACTION)
        .register_default_value::<DefaultSatisfaction>(SATISFACTION_DEFAULT)
        .register_data_source::<Regions>(REGIONS)
        .register_filter_converter::<RegionPrefixFilter>(REGION_PREFIX_FILTER)
        .register_data_source::<Languages>(LANGUAGES)
        .register_data_source::<Channels>(CHANNELS)
        .register_data_source::<Tags>(TAGS)
        .register_default_items::<DefaultTags>(TAGS_DEFAULT);
}
