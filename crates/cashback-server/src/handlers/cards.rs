//! Bank card submission handlers.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::Method;
use axum::Json;

use cashback_core::CardSubmission;

use crate::error::ApiError;
use crate::state::AppState;

/// Stores a submitted card and echoes it back.
///
/// `POST /add-bank-card`
///
/// Decoded from the raw body: `Content-Type` is not checked, and every
/// decode failure is a 400 carrying the decoder's message.
pub async fn add_bank_card(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<CardSubmission>, ApiError> {
    let card = CardSubmission::from_json(&body).map_err(|err| {
        tracing::warn!("rejected card submission: {}", err);
        ApiError::from(err)
    })?;

    let stored = state.cards.append(card)?;
    tracing::info!(
        card = %stored.masked_number(),
        card_type = %stored.card_type,
        "bank card added"
    );
    Ok(Json(stored))
}

/// Any method other than POST on `/add-bank-card`.
pub async fn method_not_allowed(method: Method) -> ApiError {
    tracing::warn!(%method, "rejected method on /add-bank-card");
    ApiError::MethodNotAllowed
}
