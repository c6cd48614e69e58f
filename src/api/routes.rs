//! API route configuration.
//!
//! This is the single route table for resource endpoints; every path has
//! exactly one handler.

use crate::api::handlers::{
    create_booking_handler, create_payment_handler, create_review_handler,
    create_support_ticket_handler, get_booking_handler, get_payment_handler, get_review_handler,
    get_support_ticket_handler, update_booking_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Resource routes, nested under `/api` by [`crate::routes::app_router`].
///
/// # Endpoints
///
/// - `POST /bookings`        - Create a booking
/// - `GET  /bookings/{id}`   - Fetch a booking
/// - `PUT  /bookings/{id}`   - Update a booking
/// - `POST /payments`        - Record a payment
/// - `GET  /payments/{id}`   - Fetch a payment
/// - `POST /reviews`         - Submit a review
/// - `GET  /reviews/{id}`    - Fetch a review
/// - `POST /support`         - Open a support ticket
/// - `GET  /support/{id}`    - Fetch a support ticket
pub fn resource_routes() -> Router<AppState> {
    Router::new()
        .route("/bookings", post(create_booking_handler))
        .route(
            "/bookings/{id}",
            get(get_booking_handler).put(update_booking_handler),
        )
        .route("/payments", post(create_payment_handler))
        .route("/payments/{id}", get(get_payment_handler))
        .route("/reviews", post(create_review_handler))
        .route("/reviews/{id}", get(get_review_handler))
        .route("/support", post(create_support_ticket_handler))
        .route("/support/{id}", get(get_support_ticket_handler))
}
