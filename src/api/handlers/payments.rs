//! Handlers for payment endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::dto::resources::PaymentResponse;
use crate::api::extract::AppJson;
use crate::domain::document::Record;
use crate::domain::entities::{NewPayment, Payment};
use crate::error::AppError;
use crate::state::AppState;

/// Records a payment against a booking.
///
/// # Endpoint
///
/// `POST /api/payments`
///
/// # Request Body
///
/// ```json
/// { "bookingId": "<booking id>", "amount": 500, "method": "credit_card" }
/// ```
///
/// `method` defaults to `"credit_card"`, `status` to `"pending"`.
///
/// # Errors
///
/// Returns 400 if `bookingId` or `amount` is missing, or `bookingId` is not a
/// well-formed identifier.
pub async fn create_payment_handler(
    State(state): State<AppState>,
    AppJson(payload): AppJson<NewPayment>,
) -> Result<(StatusCode, Json<PaymentResponse>), AppError> {
    let payment = state.payments.create(payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(PaymentResponse {
            message: "Payment created",
            payment,
        }),
    ))
}

/// Returns a payment.
///
/// # Endpoint
///
/// `GET /api/payments/{id}`
pub async fn get_payment_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Record<Payment>>, AppError> {
    let payment = state.payments.get_by_id(&id).await?;
    Ok(Json(payment))
}
