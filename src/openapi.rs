//! OpenAPI document for the public endpoints, served at `/openapi.json`.

use crate::error::ErrorBody;
use crate::model::EventView;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "Globoticket events API"),
    paths(
        crate::handlers::event::hello,
        crate::handlers::event::get_event,
        crate::handlers::event::get_events
    ),
    components(schemas(EventView, ErrorBody))
)]
pub struct ApiDoc;
