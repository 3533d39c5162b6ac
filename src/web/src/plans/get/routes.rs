use crate::AppData;
use axum::routing::get;
use axum::Router;

pub fn routes() -> Router<AppData> {
    Router::new()
        .route("/api/plans/{plan_id}", get(super::plan_get_action))
        .route("/api/plans/{plan_id}/available", get(super::plan_available_action))
        .route("/api/plans/{plan_id}/playing-time", get(super::plan_playing_time_action))
        .route("/api/plans/{plan_id}/problems", get(super::plan_problems_action))
}
