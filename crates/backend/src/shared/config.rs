use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Environment variable pointing at an explicit config file
pub const CONFIG_ENV: &str = "ADMIN_CONFIG";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub app: AppConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub paging: PagingConfig,
    #[serde(default)]
    pub demo: DemoConfig,
    /// Texts for `${key}` message literals
    #[serde(default)]
    pub messages: HashMap<String, String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub name: String,
    #[serde(default)]
    pub welcome_title: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// Filter used when RUST_LOG is not set
    #[serde(default = "default_log_filter")]
    pub filter: String,
    /// Log file; relative paths resolve against the executable directory
    #[serde(default)]
    pub file: Option<String>,
}

fn default_log_filter() -> String {
    "info".into()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            file: None,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct PagingConfig {
    #[serde(default = "default_page_size")]
    pub default_page_size: usize,
    #[serde(default = "max_page_size")]
    pub max_page_size: usize,
}

fn default_page_size() -> usize {
    50
}

fn max_page_size() -> usize {
    500
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
            max_page_size: max_page_size(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct DemoConfig {
    /// Insert demo clients and realtors on startup
    #[serde(default)]
    pub seed: bool,
}

/// Default configuration embedded in the binary
pub(crate) const DEFAULT_CONFIG: &str = r#"
[app]
name = "realty-admin"
welcome_title = "${app.welcome}"

[logging]
filter = "info"
file = "target/logs/backend.log"

[paging]
default_page_size = 50
max_page_size = 500

[demo]
seed = true

[messages]
"app.welcome" = "Realty agency administration"
"section.title.catalogs" = "Catalogs"
"section.description.catalogs" = "Reference books of the agency"
"section.title.documents" = "Documents"
"section.title.admin" = "Administration"
"meta.title.clients" = "Clients"
"meta.description.clients" = "People the agency works with"
"meta.title.realtors" = "Realtors"
"field.title.id" = "ID"
"field.title.code" = "Code"
"field.title.title" = "Title"
"field.title.comment" = "Comment"
"field.title.deletion_mark" = "Marked for deletion"
"field.title.draft_mark" = "Draft"
"field.title.name" = "Name"
"field.title.surname" = "Surname"
"field.title.salary" = "Salary"
"field.title.birth_date" = "Birth date"
"field.title.phone" = "Phone"
"#;

/// Load configuration
///
/// Search order:
/// 1. File named by the ADMIN_CONFIG environment variable
/// 2. config.toml next to the executable
/// 3. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(explicit) = std::env::var(CONFIG_ENV) {
        let path = PathBuf::from(explicit);
        tracing::info!("Loading config from {}: {}", CONFIG_ENV, path.display());
        return load_from(&path);
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                return load_from(&config_path);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    default_config()
}

/// Embedded default configuration
pub fn default_config() -> anyhow::Result<Config> {
    parse_config(DEFAULT_CONFIG)
}

pub fn load_from(path: &Path) -> anyhow::Result<Config> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("cannot read {}: {}", path.display(), e))?;
    parse_config(&contents)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    if config.paging.default_page_size == 0 || config.paging.max_page_size == 0 {
        anyhow::bail!("paging sizes must be positive");
    }
    Ok(config)
}

/// Resolves relative paths relative to the executable directory
pub fn resolve_path(path_str: &str) -> PathBuf {
    let path = Path::new(path_str);

    if path.is_absolute() {
        return path.to_path_buf();
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            return exe_dir.join(path);
        }
    }

    PathBuf::from(path_str)
}
