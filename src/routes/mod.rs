//! Router assembly. API routes are matched first; anything else goes to the static bundle.

mod common;
mod event;

pub use common::common_routes;
pub use event::event_routes;

use crate::state::AppState;
use axum::Router;
use std::path::Path;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// File server for the front-end bundle; directories resolve to their `index.html`.
pub fn static_files(dir: &Path) -> ServeDir {
    ServeDir::new(dir).append_index_html_on_directories(true)
}

/// Full application: common routes, event routes, static fallback, request tracing.
pub fn app_router(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(event_routes(state))
        .fallback_service(static_files(static_dir))
        .layer(TraceLayer::new_for_http())
}
