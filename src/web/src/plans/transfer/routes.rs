use crate::AppData;
use axum::routing::post;
use axum::Router;

pub fn routes() -> Router<AppData> {
    Router::new().route("/api/plans/{plan_id}/transfer", post(super::plan_transfer_action))
}
