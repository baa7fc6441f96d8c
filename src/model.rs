//! Event row as stored, and the projection sent over the wire.

use crate::error::AppError;
use chrono::NaiveDateTime;
use serde::Serialize;
use utoipa::ToSchema;

/// One row of the events table. Descriptive columns are nullable in the schema.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct EventRecord {
    pub id: i32,
    pub product_code: Option<String>,
    pub name: Option<String>,
    pub artist: Option<String>,
    pub date: Option<NaiveDateTime>,
    pub price: Option<f64>,
    pub description: Option<String>,
}

impl EventRecord {
    /// Record with every required column set; optional columns left empty.
    pub fn new(id: i32, product_code: &str, name: &str, date: NaiveDateTime, price: f64) -> Self {
        EventRecord {
            id,
            product_code: Some(product_code.to_string()),
            name: Some(name.to_string()),
            artist: None,
            date: Some(date),
            price: Some(price),
            description: None,
        }
    }

    pub fn with_artist(mut self, artist: &str) -> Self {
        self.artist = Some(artist.to_string());
        self
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }
}

/// Event as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct EventView {
    pub id: i32,
    pub product_code: String,
    pub name: String,
    pub artist: Option<String>,
    pub date: NaiveDateTime,
    pub price: f64,
    pub description: Option<String>,
}

fn required<T>(id: i32, field: &'static str, value: Option<T>) -> Result<T, AppError> {
    value.ok_or(AppError::IncompleteRecord { id, field })
}

impl TryFrom<EventRecord> for EventView {
    type Error = AppError;

    /// Fails when a column the view requires is NULL in the row.
    fn try_from(rec: EventRecord) -> Result<Self, Self::Error> {
        let id = rec.id;
        Ok(EventView {
            id,
            product_code: required(id, "product_code", rec.product_code)?,
            name: required(id, "name", rec.name)?,
            artist: rec.artist,
            date: required(id, "date", rec.date)?,
            price: required(id, "price", rec.price)?,
            description: rec.description,
        })
    }
}
