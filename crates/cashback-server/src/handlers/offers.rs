//! Offer table handlers.

use axum::extract::State;
use axum::http::Method;
use axum::Json;

use cashback_core::Offer;

use crate::error::ApiError;
use crate::state::AppState;

/// Lists every offer in catalog order.
///
/// `GET /table`
pub async fn list_offers(State(state): State<AppState>) -> Json<Vec<Offer>> {
    Json(state.offers.offers().to_vec())
}

/// Any method other than GET on `/table`.
pub async fn method_not_supported(method: Method) -> ApiError {
    tracing::warn!(%method, "rejected method on /table");
    ApiError::MethodNotSupported
}
