use std::sync::Arc;

use marquee_api::{
    catalog, config::Config, routes, services::providers::omdb::OmdbProvider, state::AppState,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    // Refuse to start on malformed or mismatched artifacts
    let (catalog, similarity) =
        catalog::load_artifacts(&config.catalog_path, &config.similarity_path)?;

    let provider = Arc::new(OmdbProvider::new(
        config.omdb_api_key.clone(),
        config.omdb_api_url.clone(),
    ));

    let state = AppState::new(catalog, similarity, provider);
    let app = routes::create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}
