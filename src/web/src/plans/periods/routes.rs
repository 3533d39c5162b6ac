use crate::AppData;
use axum::routing::{delete, post, put};
use axum::Router;

pub fn routes() -> Router<AppData> {
    Router::new()
        .route("/api/plans/{plan_id}/periods", post(super::period_add_action))
        .route(
            "/api/plans/{plan_id}/periods/{period_id}",
            delete(super::period_remove_action),
        )
        .route(
            "/api/plans/{plan_id}/periods/{period_id}/formation",
            put(super::period_formation_action),
        )
        .route(
            "/api/plans/{plan_id}/periods/{period_id}/duration",
            put(super::period_duration_action),
        )
        .route(
            "/api/plans/{plan_id}/periods/{period_id}/captain",
            put(super::period_captain_action),
        )
        .route(
            "/api/plans/{plan_id}/periods/{period_id}/clear",
            post(super::period_clear_action),
        )
        .route(
            "/api/plans/{plan_id}/periods/{period_id}/auto-fill",
            post(super::period_auto_fill_action),
        )
}
