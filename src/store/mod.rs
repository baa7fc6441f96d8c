//! Event store backends: PostgreSQL for serving, in-memory for tests and local runs.

mod memory;
mod postgres;

pub use memory::MemoryEventStore;
pub use postgres::{connect, PgEventSession, PgEventStore};
