use crate::shared::config::{resolve_path, LoggingConfig};
use std::sync::Arc;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Инициализация tracing: stdout и (опционально) файл без ANSI-цветов
///
/// RUST_LOG имеет приоритет над фильтром из конфигурации.
pub fn init(config: &LoggingConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| config.filter.clone()),
    );

    let file_layer = match &config.file {
        Some(path) => {
            let path = resolve_path(path);
            // Создаем директорию для логов
            if let Some(dir) = path.parent() {
                std::fs::create_dir_all(dir)?;
            }
            let log_file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)?;
            Some(
                fmt::layer()
                    .with_writer(Arc::new(log_file))
                    .with_ansi(false),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .with(file_layer)
        .try_init()?;

    Ok(())
}

/// Логирование события на сервере
///
/// # Примеры
/// ```ignore
/// logger::log("startup", "Реестр метаданных собран");
/// ```
pub fn log(category: &str, message: &str) {
    tracing::info!(category, "{}", message);
}
