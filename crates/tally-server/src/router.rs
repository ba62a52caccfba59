use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handler;
use crate::state::AppState;

/// Build the axum router with both receipt endpoints.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/receipts/process", post(handler::process_receipt))
        .route("/receipts/:id/points", get(handler::get_points))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
