use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse};

const INDEX_HTML: &str = include_str!("../../public/index.html");
const INDEX_JS: &str = include_str!("../../public/index.js");
const NOT_FOUND_HTML: &str = include_str!("../../public/404.html");

pub async fn index_page() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn index_script() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/javascript; charset=utf-8")],
        INDEX_JS,
    )
}

pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Html(NOT_FOUND_HTML))
}
