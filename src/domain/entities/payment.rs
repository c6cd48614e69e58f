//! Payment entity.

use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::domain::document::Document;
use crate::error::AppError;

pub const DEFAULT_PAYMENT_METHOD: &str = "credit_card";
pub const DEFAULT_PAYMENT_STATUS: &str = "pending";

/// A payment made against a booking.
///
/// `booking_id` is a typed reference to a [`Booking`](super::Booking)
/// identifier. The referenced booking is not required to exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub booking_id: Uuid,
    pub amount: f64,
    pub method: String,
    pub status: String,
}

/// Input for creating a payment.
///
/// `amount` has no range check.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewPayment {
    #[validate(
        required(message = "bookingId is required"),
        custom(function = "validate_identifier")
    )]
    pub booking_id: Option<String>,

    #[validate(required(message = "amount is required"))]
    pub amount: Option<f64>,

    pub method: Option<String>,
    pub status: Option<String>,
}

fn validate_identifier(value: &str) -> Result<(), ValidationError> {
    Uuid::parse_str(value).map(|_| ()).map_err(|_| {
        ValidationError::new("identifier")
            .with_message("bookingId must be a valid booking identifier".into())
    })
}

impl Document for Payment {
    const COLLECTION: &'static str = "payments";
    const NAME: &'static str = "Payment";

    type Input = NewPayment;

    fn from_input(input: NewPayment) -> Result<Self, AppError> {
        let raw_booking_id = input.booking_id.unwrap_or_default();
        let booking_id = Uuid::parse_str(&raw_booking_id).map_err(|_| {
            AppError::bad_request(
                "Payment validation failed",
                json!({ "bookingId": ["bookingId must be a valid booking identifier"] }),
            )
        })?;

        Ok(Self {
            booking_id,
            amount: input.amount.unwrap_or_default(),
            method: input
                .method
                .unwrap_or_else(|| DEFAULT_PAYMENT_METHOD.to_string()),
            status: input
                .status
                .unwrap_or_else(|| DEFAULT_PAYMENT_STATUS.to_string()),
        })
    }
}
