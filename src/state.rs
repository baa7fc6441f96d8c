//! Shared application state for all routes.

use crate::session::EventStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    /// Opens one session per request; the only state requests share.
    pub store: Arc<dyn EventStore>,
}

impl AppState {
    pub fn new<S: EventStore + 'static>(store: S) -> Self {
        AppState { store: Arc::new(store) }
    }
}
