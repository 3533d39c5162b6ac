use crate::AppData;
use axum::routing::get;
use axum::Router;

pub fn routes() -> Router<AppData> {
    Router::new().route(
        "/api/formats/{format}/formations/{formation_id}",
        get(super::formation_slots_action),
    )
}
