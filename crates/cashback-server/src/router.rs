//! Router assembly for the cashback HTTP API.
//!
//! [`build_router`] wires the two endpoints to their handlers. Each route
//! carries its own method fallback so a wrong method gets the endpoint's
//! historical status code instead of axum's default 405. HEAD on `/table`
//! is rejected explicitly since axum would otherwise answer it with the GET
//! handler.

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Builds the complete axum router with all API routes.
///
/// TraceLayer provides request-level logging via tracing.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/table",
            get(handlers::offers::list_offers)
                .head(handlers::offers::method_not_supported)
                .fallback(handlers::offers::method_not_supported),
        )
        .route(
            "/add-bank-card",
            post(handlers::cards::add_bank_card)
                .fallback(handlers::cards::method_not_allowed),
        )
        .fallback(handlers::route_not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
