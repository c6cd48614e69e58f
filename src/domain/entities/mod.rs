//! Entity schemas for the travel booking domain.
//!
//! Each entity comes with an input type (`New*`) that carries the field rules:
//! required fields are `Option`s checked by `validator`, defaulted fields are
//! filled in by [`Document::from_input`](crate::domain::document::Document::from_input).
//!
//! # Entity Types
//!
//! - [`Booking`] - A trip booked by a user for a destination (updatable)
//! - [`Payment`] - A payment against a booking
//! - [`Review`] - A user's rating of a destination
//! - [`SupportTicket`] - A support request
//!
//! `status` fields are free-form strings; no transition rules are enforced.

pub mod booking;
pub mod payment;
pub mod review;
pub mod support;

pub use booking::{Booking, BookingChanges, NewBooking};
pub use payment::{NewPayment, Payment};
pub use review::{NewReview, Review};
pub use support::{NewSupportTicket, SupportTicket};
