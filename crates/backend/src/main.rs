use backend::app::AppContext;
use backend::shared::data::PageRequest;
use backend::shared::service::DataService;
use backend::shared::{config, logger};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = config::load_config()?;
    logger::init(&config.logging)?;
    logger::log("startup", &format!("{} starting", config.app.name));

    let app = AppContext::init(config)?;
    tracing::info!("{}", app.text(&app.config.app.welcome_title));

    if app.config.demo.seed {
        app.seed_demo_data().await?;
    }

    let tree = app.navigation_tree();
    for section in &tree.sections {
        tracing::info!("[{}] {}", section.key, section.title);
        for item in &section.items {
            tracing::info!("    {} -> {} ({})", item.title, item.route, item.view);
        }
    }

    let clients = app
        .clients
        .list(app.page_request(0, 0), None)
        .await?;
    tracing::info!("Clients: {} of {}", clients.items.len(), clients.total);

    let realtors = app
        .realtors
        .list(PageRequest::default(), Some("rlt"))
        .await?;
    tracing::info!("Realtors matching 'rlt': {}", realtors.total);

    println!("{}", serde_json::to_string_pretty(&tree)?);
    Ok(())
}
