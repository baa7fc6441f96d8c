//! Request-scoped access to the event store.
//!
//! An [`EventStore`] hands out one [`EventSession`] per request. Handlers never
//! hold the unit directly: they receive a [`Session`] guard, which releases the
//! unit exactly once, either through [`Session::close`] or when the guard is
//! dropped (early return, error, or the request future being cancelled).

use crate::error::AppError;
use crate::model::EventRecord;
use crate::state::AppState;
use async_trait::async_trait;
use axum::{extract::FromRequestParts, http::request::Parts};

/// Factory for request-scoped units. Shared by all requests.
#[async_trait]
pub trait EventStore: Send + Sync {
    /// Acquire a fresh unit. Errors are infrastructure failures.
    async fn open(&self) -> Result<Box<dyn EventSession>, AppError>;

    /// Cheap round-trip to check the store is reachable.
    async fn ping(&self) -> Result<(), AppError>;

    /// Close the underlying connections. Called once at process shutdown.
    async fn shutdown(&self);
}

/// One unit of work against the store.
#[async_trait]
pub trait EventSession: Send {
    /// Record with `id`, or `None` when no row has it.
    async fn get_event(&mut self, id: i32) -> Result<Option<EventRecord>, AppError>;

    /// Every record. Empty store gives an empty vec.
    async fn get_events(&mut self) -> Result<Vec<EventRecord>, AppError>;

    /// Give the underlying resource back. Consumes the unit.
    fn release(self: Box<Self>);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Acquired,
    Released,
}

/// Guard owning one [`EventSession`] for the lifetime of a request.
pub struct Session {
    unit: Option<Box<dyn EventSession>>,
}

impl Session {
    pub async fn open(store: &dyn EventStore) -> Result<Self, AppError> {
        let unit = store.open().await?;
        tracing::debug!("session acquired");
        Ok(Session { unit: Some(unit) })
    }

    pub fn state(&self) -> SessionState {
        if self.unit.is_some() {
            SessionState::Acquired
        } else {
            SessionState::Released
        }
    }

    pub async fn get_event(&mut self, id: i32) -> Result<Option<EventRecord>, AppError> {
        self.unit()?.get_event(id).await
    }

    pub async fn get_events(&mut self) -> Result<Vec<EventRecord>, AppError> {
        self.unit()?.get_events().await
    }

    /// Release now instead of at drop.
    pub fn close(mut self) {
        self.release();
    }

    fn unit(&mut self) -> Result<&mut (dyn EventSession + 'static), AppError> {
        self.unit.as_deref_mut().ok_or(AppError::SessionReleased)
    }

    fn release(&mut self) {
        if let Some(unit) = self.unit.take() {
            unit.release();
            tracing::debug!("session released");
        }
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.release();
    }
}

#[async_trait]
impl FromRequestParts<AppState> for Session {
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        Session::open(state.store.as_ref()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryEventStore;
    use chrono::NaiveDate;

    fn store() -> MemoryEventStore {
        let date = NaiveDate::from_ymd_opt(2026, 6, 1)
            .and_then(|d| d.and_hms_opt(19, 30, 0))
            .unwrap();
        MemoryEventStore::new(vec![EventRecord::new(1, "GT-1", "Concert A", date, 30.0)])
    }

    #[tokio::test]
    async fn close_releases_once() {
        let store = store();
        let mut session = Session::open(&store).await.unwrap();
        assert_eq!(session.state(), SessionState::Acquired);
        assert!(session.get_event(1).await.unwrap().is_some());
        session.close();
        assert_eq!(store.opened(), 1);
        assert_eq!(store.released(), 1);
    }

    async fn list_through(store: &MemoryEventStore) -> Result<Vec<EventRecord>, AppError> {
        let mut session = Session::open(store).await?;
        session.get_events().await
    }

    #[tokio::test]
    async fn drop_releases_on_error_path() {
        let store = store();
        store.fail_queries(true);
        let result = list_through(&store).await;
        assert!(matches!(result, Err(AppError::Db(_))));
        assert_eq!(store.opened(), 1);
        assert_eq!(store.released(), 1);
    }

    #[tokio::test]
    async fn failed_open_holds_nothing() {
        let store = store();
        store.fail_open(true);
        assert!(Session::open(&store).await.is_err());
        assert_eq!(store.opened(), 0);
        assert_eq!(store.released(), 0);
    }
}
