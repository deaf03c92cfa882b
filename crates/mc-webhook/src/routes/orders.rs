use axum::Json;
use axum::body::Body;
use axum::extract::State;
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use tracing::{error, info, warn};

use mc_provision::OrderEvent;

use crate::dto::AckResponse;
use crate::state::AppState;

/// WooCommerce "order completed" webhook.
///
/// Acknowledges immediately; provisioning happens on the worker and its
/// outcome only ever reaches the logs. The method is checked before the body
/// is read, and the body has no size limit.
pub async fn woo_order_completed(
    State(state): State<AppState>,
    method: Method,
    body: Body,
) -> Response {
    if method != Method::POST {
        return (StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed").into_response();
    }

    let order = match axum::body::to_bytes(body, usize::MAX).await {
        Ok(bytes) => OrderEvent::from_slice(&bytes).unwrap_or_else(|e| {
            warn!(error = %e, bytes = bytes.len(), "unreadable order body, using defaults");
            OrderEvent::default()
        }),
        Err(e) => {
            warn!(error = %e, "order body read failed, using defaults");
            OrderEvent::default()
        }
    };

    let order_id = order.id;
    match state.queue.enqueue(order) {
        Some(job_id) => info!(%job_id, order_id, "order accepted"),
        None => error!(order_id, "provisioning worker unavailable, order dropped"),
    }

    Json(AckResponse::ok()).into_response()
}
