//! HTTP request handlers for API endpoints.
//!
//! One module per resource, plus service-level endpoints in [`health`].

pub mod bookings;
pub mod health;
pub mod payments;
pub mod reviews;
pub mod support;

pub use bookings::{create_booking_handler, get_booking_handler, update_booking_handler};
pub use health::{health_handler, root_handler};
pub use payments::{create_payment_handler, get_payment_handler};
pub use reviews::{create_review_handler, get_review_handler};
pub use support::{create_support_ticket_handler, get_support_ticket_handler};
