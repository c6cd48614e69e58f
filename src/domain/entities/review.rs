//! Review entity.

use serde::{Deserialize, Serialize};
use serde_json::json;
use validator::Validate;

use crate::domain::document::Document;
use crate::error::AppError;

pub const MIN_RATING: i64 = 1;
pub const MAX_RATING: i64 = 5;

/// A user's rating of a destination, optionally tied to a booking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booking_id: Option<String>,
    pub user_id: String,
    pub destination_id: String,
    pub rating: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// Input for creating a review. `rating` must lie in `[1, 5]`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewReview {
    pub booking_id: Option<String>,

    #[validate(
        required(message = "userId is required"),
        length(min = 1, message = "userId must not be empty")
    )]
    pub user_id: Option<String>,

    #[validate(
        required(message = "destinationId is required"),
        length(min = 1, message = "destinationId must not be empty")
    )]
    pub destination_id: Option<String>,

    #[validate(
        required(message = "rating is required"),
        range(min = 1, max = 5, message = "rating must be between 1 and 5")
    )]
    pub rating: Option<i64>,

    pub comment: Option<String>,
}

impl Document for Review {
    const COLLECTION: &'static str = "reviews";
    const NAME: &'static str = "Review";

    type Input = NewReview;

    fn from_input(input: NewReview) -> Result<Self, AppError> {
        let rating = input
            .rating
            .filter(|r| (MIN_RATING..=MAX_RATING).contains(r))
            .ok_or_else(|| {
                AppError::bad_request(
                    "Review validation failed",
                    json!({ "rating": ["rating must be between 1 and 5"] }),
                )
            })?;

        Ok(Self {
            booking_id: input.booking_id,
            user_id: input.user_id.unwrap_or_default(),
            destination_id: input.destination_id.unwrap_or_default(),
            rating,
            comment: input.comment,
        })
    }
}
