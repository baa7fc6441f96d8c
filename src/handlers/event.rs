//! Event read handlers.

use crate::error::{AppError, ErrorBody};
use crate::extractors::EventId;
use crate::model::EventView;
use crate::session::Session;
use axum::{response::Redirect, Json};

/// `GET /hello`
#[utoipa::path(
    get,
    path = "/hello",
    responses((status = 200, description = "Greeting", body = String))
)]
pub async fn hello() -> Json<&'static str> {
    Json("Hello, world!")
}

/// Retrieve a single event by id. 404 if there is no such event.
#[utoipa::path(
    get,
    path = "/event/{id}",
    params(("id" = i32, Path, description = "Event id")),
    responses(
        (status = 200, description = "The event", body = EventView),
        (status = 400, description = "Id is not an integer", body = ErrorBody),
        (status = 404, description = "No event has this id", body = ErrorBody),
    )
)]
pub async fn get_event(EventId(id): EventId, mut session: Session) -> Result<Json<EventView>, AppError> {
    let record = session.get_event(id).await?;
    session.close();
    let record = record.ok_or(AppError::NotFound(id))?;
    Ok(Json(EventView::try_from(record)?))
}

/// Retrieve all events.
#[utoipa::path(
    get,
    path = "/event/",
    responses((status = 200, description = "Every event, possibly none", body = Vec<EventView>))
)]
pub async fn get_events(mut session: Session) -> Result<Json<Vec<EventView>>, AppError> {
    let records = session.get_events().await?;
    session.close();
    let views = records
        .into_iter()
        .map(EventView::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Json(views))
}

/// `GET /event` redirects to the collection path.
pub async fn events_redirect() -> Redirect {
    Redirect::temporary("/event/")
}
