//! Booking entity.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::document::{Document, Patchable};
use crate::error::AppError;

/// Status assigned to bookings created without one.
pub const DEFAULT_BOOKING_STATUS: &str = "pending";

/// A trip booked by a user for a destination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub destination_id: String,
    pub user_id: String,
    pub status: String,
}

/// Input for creating a booking.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewBooking {
    #[validate(
        required(message = "destinationId is required"),
        length(min = 1, message = "destinationId must not be empty")
    )]
    pub destination_id: Option<String>,

    #[validate(
        required(message = "userId is required"),
        length(min = 1, message = "userId must not be empty")
    )]
    pub user_id: Option<String>,

    pub status: Option<String>,
}

/// Changes applied by `PUT /api/bookings/{id}`.
///
/// Only supplied fields are written; absent or `null` fields keep their stored
/// value. Any string is accepted for `status`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BookingChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "destinationId must not be empty"))]
    pub destination_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "userId must not be empty"))]
    pub user_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl Document for Booking {
    const COLLECTION: &'static str = "bookings";
    const NAME: &'static str = "Booking";

    type Input = NewBooking;

    fn from_input(input: NewBooking) -> Result<Self, AppError> {
        Ok(Self {
            destination_id: input.destination_id.unwrap_or_default(),
            user_id: input.user_id.unwrap_or_default(),
            status: input
                .status
                .unwrap_or_else(|| DEFAULT_BOOKING_STATUS.to_string()),
        })
    }
}

impl Patchable for Booking {
    type Changes = BookingChanges;
}
