use crate::shared::fields::WidgetRegistry;
use contracts::domain::a001_client;
use contracts::shared::metadata::ProviderRegistry;
use once_cell::sync::Lazy;

static WIDGETS: Lazy<WidgetRegistry> = Lazy::new(|| {
    let mut providers = ProviderRegistry::new();
    a001_client::providers::register_providers(&mut providers);
    log::debug!("Data providers registered: {}", providers.len());
    WidgetRegistry::new(providers)
});

/// Реестр виджетов приложения с провайдерами всех справочников
pub fn widget_registry() -> &'static WidgetRegistry {
    &WIDGETS
}
