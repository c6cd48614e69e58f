//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::ResourceService;
use crate::domain::entities::{Booking, Payment, Review, SupportTicket};
use crate::domain::repositories::DocumentStore;

/// Services for every resource, all backed by the same document store.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn DocumentStore>,
    pub bookings: Arc<ResourceService<Booking>>,
    pub payments: Arc<ResourceService<Payment>>,
    pub reviews: Arc<ResourceService<Review>>,
    pub support_tickets: Arc<ResourceService<SupportTicket>>,
}

impl AppState {
    /// Builds the per-resource services over `store`.
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            bookings: Arc::new(ResourceService::new(store.clone())),
            payments: Arc::new(ResourceService::new(store.clone())),
            reviews: Arc::new(ResourceService::new(store.clone())),
            support_tickets: Arc::new(ResourceService::new(store.clone())),
            store,
        }
    }
}
