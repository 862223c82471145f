//! HTTP handler modules for the cashback API.
//!
//! Handlers are thin: they decode the request, call into the catalog or the
//! card store held by [`AppState`](crate::state::AppState), and return JSON.

pub mod cards;
pub mod offers;

use axum::http::{Method, Uri};

use crate::error::ApiError;

/// Fallback for paths no route matches.
pub async fn route_not_found(method: Method, uri: Uri) -> ApiError {
    tracing::debug!(%method, %uri, "no route");
    ApiError::RouteNotFound
}
