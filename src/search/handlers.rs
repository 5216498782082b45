use super::engine::{render_hits, search};
use crate::server::AppState;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;

/// `POST /api/search`: the raw body is the query, the answer is one matching
/// document path per line.
pub async fn handle_search(State(state): State<AppState>, body: String) -> impl IntoResponse {
    tracing::info!("Searching {:?}", body);

    let hits = search(&body, &state.store, state.result_limit);
    tracing::debug!("Query {:?} matched {} documents", body, hits.len());

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        render_hits(&hits),
    )
}
