//! Response envelopes for resource endpoints.
//!
//! Creation and update responses pair a human-readable message with the stored
//! entity under a resource-specific key:
//!
//! ```json
//! { "message": "Support ticket created", "ticket": { "id": "...", "userId": "u1", ... } }
//! ```
//!
//! Fetch endpoints return the bare [`Record`].

use serde::Serialize;

use crate::domain::document::Record;
use crate::domain::entities::{Booking, Payment, Review, SupportTicket};

#[derive(Debug, Serialize)]
pub struct BookingResponse {
    pub message: &'static str,
    pub booking: Record<Booking>,
}

#[derive(Debug, Serialize)]
pub struct PaymentResponse {
    pub message: &'static str,
    pub payment: Record<Payment>,
}

#[derive(Debug, Serialize)]
pub struct ReviewResponse {
    pub message: &'static str,
    pub review: Record<Review>,
}

#[derive(Debug, Serialize)]
pub struct SupportTicketResponse {
    pub message: &'static str,
    pub ticket: Record<SupportTicket>,
}
