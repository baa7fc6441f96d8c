//! HTTP handlers for the event catalog.

pub mod event;
pub use event::*;
