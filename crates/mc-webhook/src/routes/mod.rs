pub mod console;
pub mod dns;
pub mod orders;

use axum::Router;
use axum::routing::{any, get};

use crate::state::AppState;

pub fn api_router(state: AppState) -> Router {
    Router::new()
        // Test console
        .route("/", get(console::index))
        .route("/healthz", get(console::healthz))
        // Store webhook; method is checked in the handler
        .route("/api/woo-order-completed", any(orders::woo_order_completed))
        // Credential check
        .route("/api/test-dns", any(dns::test_dns))
        .fallback(console::not_found)
        .with_state(state)
}
