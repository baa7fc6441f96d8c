//! Integer event id from the `{id}` path segment.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

/// Parsed `{id}` segment. Rejects with 400 before later extractors (such as the session) run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EventId(pub i32);

#[async_trait]
impl<S> FromRequestParts<S> for EventId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;
        raw.trim()
            .parse()
            .map(EventId)
            .map_err(|_| AppError::BadRequest(format!("invalid event id '{}'", raw)))
    }
}
