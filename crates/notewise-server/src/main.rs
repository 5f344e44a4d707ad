mod configuration;
mod error;
mod response;
mod routes;
mod state;

use notewise::knowledge::KnowledgeService;
use notewise::providers::openai::OpenAiProvider;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine
    dotenv::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt::init();

    // Load configuration
    let settings = configuration::Settings::new()?;
    let addr = settings.server.socket_addr()?;

    let provider_config = settings.provider.into_config();
    info!(
        host = %provider_config.host,
        model = %provider_config.model,
        timeout_secs = provider_config.timeout.as_secs(),
        "configured completion provider"
    );
    let provider = OpenAiProvider::new(provider_config)?;
    let state = state::AppState::new(KnowledgeService::new(Arc::new(provider)));

    // Create router with CORS support
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = routes::configure(state).layer(cors);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
