//! Handlers for review endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::dto::resources::ReviewResponse;
use crate::api::extract::AppJson;
use crate::domain::document::Record;
use crate::domain::entities::{NewReview, Review};
use crate::error::AppError;
use crate::state::AppState;

/// Submits a review.
///
/// # Endpoint
///
/// `POST /api/reviews`
///
/// # Errors
///
/// Returns 400 if `userId`, `destinationId` or `rating` is missing, or `rating`
/// is outside 1-5.
pub async fn create_review_handler(
    State(state): State<AppState>,
    AppJson(payload): AppJson<NewReview>,
) -> Result<(StatusCode, Json<ReviewResponse>), AppError> {
    let review = state.reviews.create(payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(ReviewResponse {
            message: "Review submitted",
            review,
        }),
    ))
}

/// Returns a review.
///
/// # Endpoint
///
/// `GET /api/reviews/{id}`
pub async fn get_review_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Record<Review>>, AppError> {
    let review = state.reviews.get_by_id(&id).await?;
    Ok(Json(review))
}
