// Copyright (c) 2025 WikiQA
// SPDX-License-Identifier: BUSL-1.1
//! HTTP server setup and routing

use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::ask::ask_handler;
use super::handlers::{health_handler, index_handler};
use crate::assistant::Assistant;

/// Shared state handed to every request handler
#[derive(Clone)]
pub struct AppState {
    pub assistant: Arc<Assistant>,
}

/// Build the API router
pub fn router(state: AppState) -> Router {
    Router::new()
        // Form page
        .route("/", get(index_handler))
        // Health check
        .route("/health", get(health_handler))
        // Ask endpoint
        .route("/v1/ask", post(ask_handler))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind the listener and serve requests until shutdown
pub async fn start_server(assistant: Arc<Assistant>, port: u16) -> Result<()> {
    let state = AppState { assistant };
    let app = router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("API server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
