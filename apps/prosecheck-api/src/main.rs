//! Prosecheck API server
//!
//! Provides REST endpoints for:
//! - PDF upload and prose analysis
//! - Raw text analysis (skips extraction)
//! - Health checks
//!
//! One request runs one linear pipeline: decode upload -> extract text ->
//! segment -> scan -> score -> respond. Nothing is persisted between
//! requests.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use clap::Parser;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use style_engine::StyleEngine;

mod api;
mod error;

use api::{handle_analyze, handle_analyze_text, handle_health};

/// Command-line arguments for the prosecheck server
#[derive(Parser, Debug)]
#[command(name = "prosecheck-api")]
#[command(about = "Prose analysis server for uploaded PDFs")]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "3000")]
    port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Analysis engine, built once at startup
    pub engine: Arc<StyleEngine>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting prosecheck-api on {}:{}", args.host, args.port);

    // Create shared state; the dictionary loads once here
    let state = AppState {
        engine: Arc::new(StyleEngine::new()),
    };

    // CORS configuration for web clients
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router
    let app = Router::new()
        // Health check
        .route("/health", get(handle_health))
        // Analysis endpoints
        .route("/api/analyze", post(handle_analyze))
        .route("/api/analyze/text", post(handle_analyze_text))
        // Apply middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state);

    // Start server
    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
