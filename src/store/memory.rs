//! In-memory store with open/release accounting and injectable failures.

use crate::error::AppError;
use crate::model::EventRecord;
use crate::session::{EventSession, EventStore};
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

#[derive(Default)]
struct Inner {
    records: Vec<EventRecord>,
    opened: AtomicUsize,
    released: AtomicUsize,
    fail_open: AtomicBool,
    fail_queries: AtomicBool,
    stall_queries: AtomicBool,
}

/// Fixed set of records. Clones share counters and switches.
#[derive(Clone, Default)]
pub struct MemoryEventStore {
    inner: Arc<Inner>,
}

impl MemoryEventStore {
    pub fn new(records: Vec<EventRecord>) -> Self {
        MemoryEventStore {
            inner: Arc::new(Inner {
                records,
                ..Inner::default()
            }),
        }
    }

    /// Sessions handed out so far.
    pub fn opened(&self) -> usize {
        self.inner.opened.load(Ordering::SeqCst)
    }

    /// Sessions released so far.
    pub fn released(&self) -> usize {
        self.inner.released.load(Ordering::SeqCst)
    }

    /// Make `open` fail as if no connection could be acquired.
    pub fn fail_open(&self, on: bool) {
        self.inner.fail_open.store(on, Ordering::SeqCst);
    }

    /// Make every lookup fail as if the query errored.
    pub fn fail_queries(&self, on: bool) {
        self.inner.fail_queries.store(on, Ordering::SeqCst);
    }

    /// Make every lookup wait forever; used to exercise cancellation.
    pub fn stall_queries(&self, on: bool) {
        self.inner.stall_queries.store(on, Ordering::SeqCst);
    }
}

#[async_trait]
impl EventStore for MemoryEventStore {
    async fn open(&self) -> Result<Box<dyn EventSession>, AppError> {
        if self.inner.fail_open.load(Ordering::SeqCst) {
            return Err(AppError::Db(sqlx::Error::PoolTimedOut));
        }
        self.inner.opened.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(MemoryEventSession {
            inner: Arc::clone(&self.inner),
        }))
    }

    async fn ping(&self) -> Result<(), AppError> {
        if self.inner.fail_open.load(Ordering::SeqCst) {
            return Err(AppError::Db(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }

    async fn shutdown(&self) {}
}

struct MemoryEventSession {
    inner: Arc<Inner>,
}

impl MemoryEventSession {
    async fn check(&self) -> Result<(), AppError> {
        if self.inner.stall_queries.load(Ordering::SeqCst) {
            std::future::pending::<()>().await;
        }
        if self.inner.fail_queries.load(Ordering::SeqCst) {
            return Err(AppError::Db(sqlx::Error::Protocol("injected query failure".into())));
        }
        Ok(())
    }
}

#[async_trait]
impl EventSession for MemoryEventSession {
    async fn get_event(&mut self, id: i32) -> Result<Option<EventRecord>, AppError> {
        self.check().await?;
        Ok(self.inner.records.iter().find(|r| r.id == id).cloned())
    }

    async fn get_events(&mut self) -> Result<Vec<EventRecord>, AppError> {
        self.check().await?;
        Ok(self.inner.records.clone())
    }

    fn release(self: Box<Self>) {
        self.inner.released.fetch_add(1, Ordering::SeqCst);
    }
}
