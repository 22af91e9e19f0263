//! Catalog Console

use anyhow::Result;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use catalog_console::{
    client::HttpCatalogClient,
    config::Config,
    services::CatalogService,
    theme::TemplateEngine,
    views::{self, AppState},
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "catalog_console=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting catalog console...");

    let config = Config::load_with_env(Path::new("config.yml"))?;
    tracing::info!("Configuration loaded, catalog API at {}", config.api.base_url);

    let api = HttpCatalogClient::boxed(config.api.base_url.clone())?;
    let catalog = Arc::new(CatalogService::new(api));

    let templates = TemplateEngine::load(&config.theme)?;
    tracing::info!(
        "Loaded {} templates from {:?}",
        templates.template_names().len(),
        templates.source()
    );

    let app = views::build_router(AppState::new(catalog, Arc::new(templates)));

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
