//! Request extractors that validate input before any store work starts.

mod event_id;

pub use event_id::EventId;
