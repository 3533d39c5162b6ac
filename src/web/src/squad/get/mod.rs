pub mod routes;

use crate::AppData;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;

pub async fn squad_get_action(State(state): State<AppData>) -> Response {
    Json(state.planner.squad.by_squad_number()).into_response()
}
