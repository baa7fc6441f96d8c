//! PostgreSQL store. One pooled connection and one transaction per session.

use crate::config::Settings;
use crate::error::AppError;
use crate::model::EventRecord;
use crate::session::{EventSession, EventStore};
use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Postgres, Transaction};
use std::sync::Arc;
use std::time::Duration;

const EVENT_COLUMNS: &str = "id, product_code, name, artist, date, price, description";

/// Build the connection pool from settings. Close it with [`EventStore::shutdown`].
pub async fn connect(settings: &Settings) -> Result<PgPool, AppError> {
    let pool = PgPoolOptions::new()
        .max_connections(settings.database_max_connections)
        .acquire_timeout(Duration::from_secs(settings.database_connect_timeout_secs))
        .connect(&settings.database_url)
        .await?;
    Ok(pool)
}

#[derive(Clone)]
pub struct PgEventStore {
    pool: PgPool,
    table: Arc<str>,
}

impl PgEventStore {
    /// `table` must already be a validated identifier (see [`Settings`]).
    pub fn new(pool: PgPool, table: &str) -> Self {
        PgEventStore {
            pool,
            table: Arc::from(table),
        }
    }
}

#[async_trait]
impl EventStore for PgEventStore {
    async fn open(&self) -> Result<Box<dyn EventSession>, AppError> {
        let tx = self.pool.begin().await?;
        Ok(Box::new(PgEventSession {
            tx,
            table: Arc::clone(&self.table),
        }))
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }

    async fn shutdown(&self) {
        self.pool.close().await;
        tracing::info!("database pool closed");
    }
}

/// Read-only transaction on a pooled connection. Never committed.
pub struct PgEventSession {
    tx: Transaction<'static, Postgres>,
    table: Arc<str>,
}

#[async_trait]
impl EventSession for PgEventSession {
    async fn get_event(&mut self, id: i32) -> Result<Option<EventRecord>, AppError> {
        let sql = format!("SELECT {} FROM {} WHERE id = $1", EVENT_COLUMNS, self.table);
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, EventRecord>(&sql)
            .bind(id)
            .fetch_optional(&mut *self.tx)
            .await?;
        Ok(row)
    }

    async fn get_events(&mut self) -> Result<Vec<EventRecord>, AppError> {
        let sql = format!("SELECT {} FROM {} ORDER BY id", EVENT_COLUMNS, self.table);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, EventRecord>(&sql)
            .fetch_all(&mut *self.tx)
            .await?;
        Ok(rows)
    }

    fn release(self: Box<Self>) {
        // Dropping an uncommitted transaction rolls it back and returns the connection to the pool.
        drop(self.tx);
    }
}
