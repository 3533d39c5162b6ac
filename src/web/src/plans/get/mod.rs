pub mod routes;

use crate::plans::{PlanRequest, PlanViewModel};
use crate::{ApiResult, AppData};
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::Json;

pub async fn plan_get_action(
    State(state): State<AppData>,
    Path(route_params): Path<PlanRequest>,
) -> ApiResult<Response> {
    let plans = state.plans.read().await;
    let plan = plans.find(&route_params.plan_id)?;

    Ok(PlanViewModel::response(plan))
}

pub async fn plan_available_action(
    State(state): State<AppData>,
    Path(route_params): Path<PlanRequest>,
) -> ApiResult<Response> {
    let plans = state.plans.read().await;
    let plan = plans.find(&route_params.plan_id)?;

    Ok(Json(plan.editor.available(&state.planner.squad)).into_response())
}

pub async fn plan_playing_time_action(
    State(state): State<AppData>,
    Path(route_params): Path<PlanRequest>,
) -> ApiResult<Response> {
    let plans = state.plans.read().await;
    let plan = plans.find(&route_params.plan_id)?;

    Ok(Json(plan.editor.playing_time(&state.planner.squad)).into_response())
}

pub async fn plan_problems_action(
    State(state): State<AppData>,
    Path(route_params): Path<PlanRequest>,
) -> ApiResult<Response> {
    let plans = state.plans.read().await;
    let plan = plans.find(&route_params.plan_id)?;

    Ok(Json(plan.editor.problems()).into_response())
}
