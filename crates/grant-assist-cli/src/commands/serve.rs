//! Serve command implementation.
//!
//! Serves the compliance API under `/api`.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use axum::Router;
use grant_assist_api::{create_api_router, create_api_state};
use tokio::net::TcpListener;
use tracing::info;

pub async fn execute(port: u16) -> Result<()> {
    let state = create_api_state();
    let rules = state.validator.registry().len();
    let app = Router::new().nest("/api", create_api_router(state));

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    // Print server info
    println!();
    println!("🚀 Grant Assist Compliance Server");
    println!("   API:    http://localhost:{}/api/health", port);
    println!("   Rules:  {} registered", rules);
    println!();
    println!("   Press Ctrl+C to stop");
    println!();

    info!(%addr, "Server listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
}
