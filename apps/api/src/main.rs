mod config;
mod errors;
mod llm_client;
mod routes;
mod state;
mod tailoring;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::{AnthropicClient, CompletionProvider};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("tailor_api={}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting AI Resume Tailor API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the completion provider. The service still boots without a
    // credential so /health can report the misconfiguration to operators.
    let llm: Option<Arc<dyn CompletionProvider>> = match &config.anthropic_api_key {
        Some(api_key) => {
            info!("LLM client initialized (model: {})", llm_client::MODEL);
            Some(Arc::new(AnthropicClient::new(api_key.clone())))
        }
        None => {
            warn!("ANTHROPIC_API_KEY not set; /api/analyze will refuse requests");
            None
        }
    };

    // Build app state
    let state = AppState {
        llm,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // wide-open CORS for the static frontend

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
