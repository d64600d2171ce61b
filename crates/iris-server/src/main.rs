//! Iris Inference Server
//!
//! HTTP API server exposing a trained iris species classifier.
//! Provides a liveness probe and a single prediction endpoint that maps
//! one measurement record to an integer class id.

mod error;
mod routes;
mod state;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use iris_core::CentroidModel;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use crate::state::AppState;

/// Iris Inference Server
#[derive(Parser, Debug)]
#[command(name = "iris-server")]
#[command(version = "0.1.0")]
#[command(about = "HTTP API server for iris species prediction")]
struct Cli {
    /// Port to listen on
    #[arg(short, long, default_value = "8000")]
    port: u16,

    /// Host to bind to
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Path to the trained model artifact
    #[arg(long, env = "IRIS_MODEL_PATH", default_value = "model/iris_model.json")]
    model: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .init();

    info!("Iris Inference Server v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration:");
    info!("  Host:  {}", cli.host);
    info!("  Port:  {}", cli.port);
    info!("  Model: {}", cli.model.display());

    // Load the model artifact; a server without a model cannot serve
    let model = CentroidModel::load(&cli.model)
        .with_context(|| format!("failed to load model artifact {}", cli.model.display()))?;
    info!("Loaded classifier with {} classes", model.num_classes());

    // Create shared state
    let state = Arc::new(AppState::new(Arc::new(model)));

    // Build router
    let app = routes::router(state);

    // Start server
    let addr: SocketAddr = format!("{}:{}", cli.host, cli.port).parse()?;
    info!("Starting server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
