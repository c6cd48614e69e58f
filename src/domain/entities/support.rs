//! Support ticket entity.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::document::Document;
use crate::error::AppError;

/// Status assigned to tickets created without one.
pub const DEFAULT_TICKET_STATUS: &str = "open";

/// A support request raised by a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportTicket {
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub message: String,
    pub status: String,
}

/// Input for opening a support ticket.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewSupportTicket {
    #[validate(
        required(message = "userId is required"),
        length(min = 1, message = "userId must not be empty")
    )]
    pub user_id: Option<String>,

    pub subject: Option<String>,

    #[validate(
        required(message = "message is required"),
        length(min = 1, message = "message must not be empty")
    )]
    pub message: Option<String>,

    pub status: Option<String>,
}

impl Document for SupportTicket {
    const COLLECTION: &'static str = "support_tickets";
    const NAME: &'static str = "Support ticket";

    type Input = NewSupportTicket;

    fn from_input(input: NewSupportTicket) -> Result<Self, AppError> {
        Ok(Self {
            user_id: input.user_id.unwrap_or_default(),
            subject: input.subject,
            message: input.message.unwrap_or_default(),
            status: input
                .status
                .unwrap_or_else(|| DEFAULT_TICKET_STATUS.to_string()),
        })
    }
}
