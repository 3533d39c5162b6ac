pub mod routes;

use crate::plans::{PlanRequest, PlanViewModel};
use crate::{ApiError, ApiResult, AppData};
use axum::extract::{Path, State};
use axum::response::Response;
use axum::Json;
use lineup_core::lineup::Transfer;

pub async fn plan_transfer_action(
    State(state): State<AppData>,
    Path(route_params): Path<PlanRequest>,
    Json(transfer): Json<Transfer>,
) -> ApiResult<Response> {
    if !state.planner.squad.contains(&transfer.player_id) {
        return Err(ApiError::BadRequest(format!(
            "Player '{}' is not in the squad",
            transfer.player_id
        )));
    }

    let mut plans = state.plans.write().await;
    let plan = plans.find_mut(&route_params.plan_id)?;

    plan.editor.transfer(&transfer);

    Ok(PlanViewModel::response(plan))
}
