//! Event catalog routes.

use crate::handlers::{events_redirect, get_event, get_events, hello};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn event_routes(state: AppState) -> Router {
    Router::new()
        .route("/hello", get(hello))
        .route("/event", get(events_redirect))
        .route("/event/", get(get_events))
        .route("/event/:id", get(get_event))
        .with_state(state)
}
