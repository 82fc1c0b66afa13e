//! Named data providers referenced from choice descriptors
//!
//! Descriptors refer to providers by name. The registry maps each name to a
//! factory that builds a fresh instance (`Default::default()`), so a provider
//! is declared once and instantiated per widget.

use super::field_value::FieldValue;
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

/// Name under which [`DefaultFilterConverter`] is always registered
pub const DEFAULT_FILTER_CONVERTER: &str = "default";

/// Items offered by a choice widget
pub trait DataSource: Send + Sync {
    fn items(&self) -> Vec<FieldValue>;
}

/// Initial value of a single-choice widget
pub trait DefaultValueProvider: Send + Sync {
    fn default_value(&self) -> Option<FieldValue>;
}

/// Initial selection of a multi-choice widget
pub trait DefaultItemsProvider: Send + Sync {
    fn default_items(&self) -> Vec<FieldValue>;
}

/// Predicate deciding whether an item matches the typed filter text
pub trait FilterConverter: Send + Sync {
    fn matches(&self, item: &FieldValue, filter: &str) -> bool;
}

/// Case-insensitive substring match on the item's text
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultFilterConverter;

impl FilterConverter for DefaultFilterConverter {
    fn matches(&self, item: &FieldValue, filter: &str) -> bool {
        item.to_string()
            .to_lowercase()
            .contains(&filter.to_lowercase())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    DataSource,
    DefaultValue,
    DefaultItems,
    FilterConverter,
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::DataSource => "data source",
            Self::DefaultValue => "default value provider",
            Self::DefaultItems => "default items provider",
            Self::FilterConverter => "filter converter",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    #[error("no {kind} registered under '{name}'")]
    Unknown { kind: ProviderKind, name: String },

    #[error("'{name}' is registered as a {actual}, not a {expected}")]
    CapabilityMismatch {
        name: String,
        expected: ProviderKind,
        actual: ProviderKind,
    },
}

enum Factory {
    DataSource(fn() -> Box<dyn DataSource>),
    DefaultValue(fn() -> Box<dyn DefaultValueProvider>),
    DefaultItems(fn() -> Box<dyn DefaultItemsProvider>),
    FilterConverter(fn() -> Box<dyn FilterConverter>),
}

impl Factory {
    fn kind(&self) -> ProviderKind {
        match self {
            Self::DataSource(_) => ProviderKind::DataSource,
            Self::DefaultValue(_) => ProviderKind::DefaultValue,
            Self::DefaultItems(_) => ProviderKind::DefaultItems,
            Self::FilterConverter(_) => ProviderKind::FilterConverter,
        }
    }
}

fn make_data_source<T: DataSource + Default + 'static>() -> Box<dyn DataSource> {
    Box::new(T::default())
}

fn make_default_value<T: DefaultValueProvider + Default + 'static>() -> Box<dyn DefaultValueProvider> {
    Box::new(T::default())
}

fn make_default_items<T: DefaultItemsProvider + Default + 'static>() -> Box<dyn DefaultItemsProvider> {
    Box::new(T::default())
}

fn make_filter_converter<T: FilterConverter + Default + 'static>() -> Box<dyn FilterConverter> {
    Box::new(T::default())
}

/// Name → factory map; a later registration under the same name wins
pub struct ProviderRegistry {
    factories: HashMap<String, Factory>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        let mut registry = Self {
            factories: HashMap::new(),
        };
        registry.register_filter_converter::<DefaultFilterConverter>(DEFAULT_FILTER_CONVERTER);
        registry
    }

    pub fn register_data_source<T>(&mut self, name: &str) -> &mut Self
    where
        T: DataSource + Default + 'static,
    {
        self.insert(name, Factory::DataSource(make_data_source::<T>))
    }

    pub fn register_default_value<T>(&mut self, name: &str) -> &mut Self
    where
        T: DefaultValueProvider + Default + 'static,
    {
        self.insert(name, Factory::DefaultValue(make_default_value::<T>))
    }

    pub fn register_default_items<T>(&mut self, name: &str) -> &mut Self
    where
        T: DefaultItemsProvider + Default + 'static,
    {
        self.insert(name, Factory::DefaultItems(make_default_items::<T>))
    }

    pub fn register_filter_converter<T>(&mut self, name: &str) -> &mut Self
    where
        T: FilterConverter + Default + 'static,
    {
        self.insert(name, Factory::FilterConverter(make_filter_converter::<T>))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    pub fn data_source(&self, name: &str) -> Result<Box<dyn DataSource>, ProviderError> {
        match self.lookup(name, ProviderKind::DataSource)? {
            Factory::DataSource(make) => Ok(make()),
            other => Err(mismatch(name, ProviderKind::DataSource, other)),
        }
    }

    pub fn default_value(&self, name: &str) -> Result<Box<dyn DefaultValueProvider>, ProviderError> {
        match self.lookup(name, ProviderKind::DefaultValue)? {
            Factory::DefaultValue(make) => Ok(make()),
            other => Err(mismatch(name, ProviderKind::DefaultValue, other)),
        }
    }

    pub fn default_items(&self, name: &str) -> Result<Box<dyn DefaultItemsProvider>, ProviderError> {
        match self.lookup(name, ProviderKind::DefaultItems)? {
            Factory::DefaultItems(make) => Ok(make()),
            other => Err(mismatch(name, ProviderKind::DefaultItems, other)),
        }
    }

    pub fn filter_converter(&self, name: &str) -> Result<Box<dyn FilterConverter>, ProviderError> {
        match self.lookup(name, ProviderKind::FilterConverter)? {
            Factory::FilterConverter(make) => Ok(make()),
            other => Err(mismatch(name, ProviderKind::FilterConverter, other)),
        }
    }

    fn insert(&mut self, name: &str, factory: Factory) -> &mut Self {
        self.factories.insert(name.to_string(), factory);
        self
    }

    fn lookup(&self, name: &str, kind: ProviderKind) -> Result<&Factory, ProviderError> {
        self.factories.get(name).ok_or_else(|| ProviderError::Unknown {
            kind,
            name: name.to_string(),
        })
    }
}

fn mismatch(name: &str, expected: ProviderKind, found: &Factory) -> ProviderError {
    ProviderError::CapabilityMismatch {
        name: name.to_string(),
        expected,
        actual: found.kind(),
    }
}

impl Default for ProviderRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<(&str, ProviderKind)> = self
            .factories
            .iter()
            .map(|(name, factory)| (name.as_str(), factory.kind()))
            .collect();
        names.sort_by(|a, b| a.0.cmp(b.0));
        f.debug_struct("ProviderRegistry")
            .field("providers", &names)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Grades;

    impl DataSource for Grades {
        fn items(&self) -> Vec<FieldValue> {
            vec!["Bad".into(), "Good".into()]
        }
    }

    #[test]
    fn default_converter_is_preregistered_and_case_insensitive() {
        let registry = ProviderRegistry::new();
        let converter = registry.filter_converter(DEFAULT_FILTER_CONVERTER).unwrap();
        assert!(converter.matches(&"So-so".into(), "SO"));
        assert!(!converter.matches(&"Great".into(), "zz"));
    }

    #[test]
    fn factories_build_registered_providers() {
        let mut registry = ProviderRegistry::new();
        registry.register_data_source::<Grades>("grades");
        let items = registry.data_source("grades").unwrap().items();
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn lookup_reports_unknown_names_and_wrong_capabilities() {
        let mut registry = ProviderRegistry::new();
        registry.register_data_source::<Grades>("grades");

        assert!(matches!(
            registry.data_source("missing"),
            Err(ProviderError::Unknown { .. })
        ));
        assert!(matches!(
            registry.default_value("grades"),
            Err(ProviderError::CapabilityMismatch {
                expected: ProviderKind::DefaultValue,
                actual: ProviderKind::DataSource,
                ..
            })
        ));
    }
}
