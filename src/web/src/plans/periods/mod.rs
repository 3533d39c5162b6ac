pub mod routes;

use crate::plans::{PeriodRequest, PlanRequest, PlanViewModel};
use crate::{ApiError, ApiResult, AppData};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use lineup_core::shared::PlayerId;
use log::debug;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct FormationChangeRequest {
    pub formation: String,
}

#[derive(Deserialize)]
pub struct DurationChangeRequest {
    pub duration: u32,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptainChangeRequest {
    #[serde(default)]
    pub captain_id: Option<PlayerId>,
}

pub async fn period_add_action(
    State(state): State<AppData>,
    Path(route_params): Path<PlanRequest>,
) -> ApiResult<Response> {
    let mut plans = state.plans.write().await;
    let plan = plans.find_mut(&route_params.plan_id)?;

    let period_id = plan.editor.add_period()?;

    debug!("plan {}: period {} added", plan.id, period_id);

    Ok((StatusCode::CREATED, PlanViewModel::response(plan)).into_response())
}

pub async fn period_remove_action(
    State(state): State<AppData>,
    Path(route_params): Path<PeriodRequest>,
) -> ApiResult<Response> {
    let mut plans = state.plans.write().await;
    let plan = plans.find_mut(&route_params.plan_id)?;

    plan.editor.remove_period(&route_params.period_id)?;

    Ok(PlanViewModel::response(plan))
}

pub async fn period_formation_action(
    State(state): State<AppData>,
    Path(route_params): Path<PeriodRequest>,
    Json(request): Json<FormationChangeRequest>,
) -> ApiResult<Response> {
    let mut plans = state.plans.write().await;
    let plan = plans.find_mut(&route_params.plan_id)?;

    if !plan.editor.config().catalog.contains(&request.formation) {
        return Err(ApiError::BadRequest(format!(
            "Formation '{}' not found for {}",
            request.formation, plan.format
        )));
    }

    plan.editor
        .change_formation(&route_params.period_id, &request.formation)?;

    Ok(PlanViewModel::response(plan))
}

pub async fn period_duration_action(
    State(state): State<AppData>,
    Path(route_params): Path<PeriodRequest>,
    Json(request): Json<DurationChangeRequest>,
) -> ApiResult<Response> {
    let mut plans = state.plans.write().await;
    let plan = plans.find_mut(&route_params.plan_id)?;

    plan.editor
        .set_duration(&route_params.period_id, request.duration)?;

    Ok(PlanViewModel::response(plan))
}

pub async fn period_captain_action(
    State(state): State<AppData>,
    Path(route_params): Path<PeriodRequest>,
    Json(request): Json<CaptainChangeRequest>,
) -> ApiResult<Response> {
    let mut plans = state.plans.write().await;
    let plan = plans.find_mut(&route_params.plan_id)?;

    plan.editor
        .set_captain(&route_params.period_id, request.captain_id)?;

    Ok(PlanViewModel::response(plan))
}

pub async fn period_clear_action(
    State(state): State<AppData>,
    Path(route_params): Path<PeriodRequest>,
) -> ApiResult<Response> {
    let mut plans = state.plans.write().await;
    let plan = plans.find_mut(&route_params.plan_id)?;

    plan.editor.clear_period(&route_params.period_id)?;

    Ok(PlanViewModel::response(plan))
}

pub async fn period_auto_fill_action(
    State(state): State<AppData>,
    Path(route_params): Path<PeriodRequest>,
) -> ApiResult<Response> {
    let mut plans = state.plans.write().await;
    let plan = plans.find_mut(&route_params.plan_id)?;

    plan.editor
        .auto_fill(&route_params.period_id, &state.planner.squad)?;

    Ok(PlanViewModel::response(plan))
}
