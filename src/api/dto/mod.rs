//! Data Transfer Objects for API responses.
//!
//! Request bodies are the entity input types from
//! [`crate::domain::entities`], which carry their own `validator` rules.

pub mod health;
pub mod resources;
