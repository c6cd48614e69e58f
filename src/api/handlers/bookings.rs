//! Handlers for booking endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::dto::resources::BookingResponse;
use crate::api::extract::AppJson;
use crate::domain::document::Record;
use crate::domain::entities::{Booking, BookingChanges, NewBooking};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a booking.
///
/// # Endpoint
///
/// `POST /api/bookings`
///
/// # Request Body
///
/// ```json
/// { "destinationId": "123", "userId": "u1", "status": "pending" }
/// ```
///
/// `status` is optional and defaults to `"pending"`.
///
/// # Errors
///
/// Returns 400 if `destinationId` or `userId` is missing or empty.
pub async fn create_booking_handler(
    State(state): State<AppState>,
    AppJson(payload): AppJson<NewBooking>,
) -> Result<(StatusCode, Json<BookingResponse>), AppError> {
    let booking = state.bookings.create(payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(BookingResponse {
            message: "Booking created",
            booking,
        }),
    ))
}

/// Returns a booking.
///
/// # Endpoint
///
/// `GET /api/bookings/{id}`
///
/// # Errors
///
/// Returns 404 if no booking has this identifier.
pub async fn get_booking_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Record<Booking>>, AppError> {
    let booking = state.bookings.get_by_id(&id).await?;
    Ok(Json(booking))
}

/// Updates a booking.
///
/// # Endpoint
///
/// `PUT /api/bookings/{id}`
///
/// Supplied fields overwrite the stored ones; omitted fields are kept.
/// `status` accepts any string.
///
/// # Errors
///
/// Returns 400 if a supplied required field is empty.
/// Returns 404 if no booking has this identifier.
pub async fn update_booking_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    AppJson(payload): AppJson<BookingChanges>,
) -> Result<Json<BookingResponse>, AppError> {
    let booking = state.bookings.update_by_id(&id, payload).await?;

    Ok(Json(BookingResponse {
        message: "Booking updated",
        booking,
    }))
}
