mod career;
mod config;
mod errors;
mod interview;
mod jobs;
mod llm_client;
mod models;
mod resume;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::jobs::client::JSearchClient;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.rust_log)))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Compass API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client. A missing key does not abort startup: every
    // LLM-backed endpoint then takes its documented error or fallback path.
    if config.groq_api_key.is_empty() {
        warn!("GROQ_API_KEY is not set; analysis endpoints will serve errors or fallbacks");
    }
    let llm = LlmClient::new(config.groq_api_key.clone());
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    // Initialize job search provider
    if config.rapidapi_key.is_empty() {
        warn!("RAPIDAPI_KEY is not set; job search will serve empty results");
    }
    let job_search = Arc::new(JSearchClient::new(config.rapidapi_key.clone()));
    info!("Job search client initialized");

    // Build app state
    let state = AppState { llm, job_search };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // browser front-end runs on another origin

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
