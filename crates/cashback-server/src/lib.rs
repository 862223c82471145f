//! HTTP/JSON API server for cashback offers and bank card submissions.
//!
//! Exposes the read-only offer table and the card submission endpoint over
//! axum. This crate contains the server configuration, application state,
//! error handling, handlers, and route definitions.

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

use tokio::net::TcpListener;

use crate::router::build_router;
use crate::state::AppState;

/// Serves the API on an already-bound listener until the server stops.
pub async fn serve(listener: TcpListener, state: AppState) -> std::io::Result<()> {
    let app = build_router(state);
    axum::serve(listener, app).await
}
