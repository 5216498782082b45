//! HTTP Server Module
//!
//! Serves the search page, its script and the `/api/search` endpoint.
//!
//! ## Routes
//! - `GET /`, `/index.html`, `/index`: the search page.
//! - `GET /index.js`: the browser-side search form controller.
//! - `POST /api/search`: plain-text query in, newline-separated document paths out.
//! - anything else: 404 page.

pub mod assets;

use crate::search::handlers::handle_search;
use crate::storage::IndexStore;

use anyhow::Result;
use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::{get, post};
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;

pub const SEARCH_PATH: &str = "/api/search";

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<IndexStore>,
    pub result_limit: usize,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(assets::index_page))
        .route("/index.html", get(assets::index_page))
        .route("/index", get(assets::index_page))
        .route("/index.js", get(assets::index_script))
        .route(SEARCH_PATH, post(handle_search))
        .fallback(assets::not_found)
        .layer(middleware::from_fn(log_request))
        .with_state(state)
}

async fn log_request(request: Request, next: Next) -> Response {
    tracing::info!("Received {} {}", request.method(), request.uri());
    next.run(request).await
}

/// Binds `bind_addr` and serves until the process is stopped.
pub async fn serve(bind_addr: SocketAddr, state: AppState) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;

    tracing::info!("Listening at http://{}", listener.local_addr()?);
    axum::serve(listener, router(state)).await?;

    Ok(())
}
