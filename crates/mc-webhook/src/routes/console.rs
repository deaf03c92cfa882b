use axum::http::StatusCode;
use axum::response::Html;

use crate::error::ApiError;

const CONSOLE_HTML: &str = include_str!("../../console/index.html");

/// Operator page for sending synthetic orders to the webhook.
pub async fn index() -> Html<&'static str> {
    Html(CONSOLE_HTML)
}

pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

pub async fn not_found() -> ApiError {
    ApiError::NotFound
}
