//! Globoticket events API: read-only event catalog over PostgreSQL plus the front-end bundle.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod openapi;
pub mod routes;
pub mod session;
pub mod state;
pub mod store;

pub use config::Settings;
pub use error::{AppError, ConfigError, ErrorBody};
pub use model::{EventRecord, EventView};
pub use routes::{app_router, common_routes, event_routes, static_files};
pub use session::{EventSession, EventStore, Session, SessionState};
pub use state::AppState;
pub use store::{connect, MemoryEventStore, PgEventStore};
