//! Handlers for support ticket endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::dto::resources::SupportTicketResponse;
use crate::api::extract::AppJson;
use crate::domain::document::Record;
use crate::domain::entities::{NewSupportTicket, SupportTicket};
use crate::error::AppError;
use crate::state::AppState;

/// Opens a support ticket.
///
/// # Endpoint
///
/// `POST /api/support`
///
/// # Request Body
///
/// ```json
/// { "userId": "u1", "message": "Help", "subject": "Refund" }
/// ```
///
/// New tickets are `"open"` unless a status is supplied.
pub async fn create_support_ticket_handler(
    State(state): State<AppState>,
    AppJson(payload): AppJson<NewSupportTicket>,
) -> Result<(StatusCode, Json<SupportTicketResponse>), AppError> {
    let ticket = state.support_tickets.create(payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(SupportTicketResponse {
            message: "Support ticket created",
            ticket,
        }),
    ))
}

/// Returns a support ticket.
///
/// # Endpoint
///
/// `GET /api/support/{id}`
pub async fn get_support_ticket_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Record<SupportTicket>>, AppError> {
    let ticket = state.support_tickets.get_by_id(&id).await?;
    Ok(Json(ticket))
}
