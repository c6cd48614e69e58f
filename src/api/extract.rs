//! Request body extraction.

use axum::{
    Json,
    extract::{FromRequest, Request},
};

use crate::error::AppError;

/// JSON body extractor whose rejections use the [`AppError`] envelope.
///
/// Malformed JSON, a missing content type or a value of the wrong type all
/// surface as a 400 `validation_error` instead of axum's plain-text rejection.
#[derive(Debug, Clone, Copy, Default)]
pub struct AppJson<T>(pub T);

impl<S, T> FromRequest<S> for AppJson<T>
where
    Json<T>: FromRequest<S, Rejection = axum::extract::rejection::JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}
