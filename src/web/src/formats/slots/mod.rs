pub mod routes;

use crate::{ApiError, ApiResult, AppData};
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use lineup_core::GameFormat;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct FormationSlotsRequest {
    format: String,
    formation_id: String,
}

pub async fn formation_slots_action(
    State(state): State<AppData>,
    Path(route_params): Path<FormationSlotsRequest>,
) -> ApiResult<Response> {
    let format: GameFormat = route_params.format.parse().map_err(ApiError::BadRequest)?;

    let config = state
        .planner
        .format(format)
        .ok_or_else(|| ApiError::NotFound(format!("Format '{}' not configured", format)))?;

    if !config.catalog.contains(&route_params.formation_id) {
        return Err(ApiError::NotFound(format!(
            "Formation '{}' not found for {}",
            route_params.formation_id, format
        )));
    }

    let slots = config.slot_generator().generate(&route_params.formation_id);

    Ok(Json(slots).into_response())
}
