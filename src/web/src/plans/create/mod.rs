pub mod routes;

use crate::plans::PlanViewModel;
use crate::stores::Plan;
use crate::{ApiError, ApiResult, AppData};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use lineup_core::lineup::LineupEditor;
use lineup_core::shared::PlanId;
use lineup_core::GameFormat;
use log::info;
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanCreateRequest {
    pub format: GameFormat,
    pub formation: Option<String>,
    pub periods: Option<u32>,
    pub duration: Option<u32>,
}

pub async fn plan_create_action(
    State(state): State<AppData>,
    Json(request): Json<PlanCreateRequest>,
) -> ApiResult<Response> {
    let config = state
        .planner
        .format(request.format)
        .ok_or_else(|| ApiError::NotFound(format!("Format '{}' not configured", request.format)))?;

    let formation = request
        .formation
        .unwrap_or_else(|| config.default_formation.clone());

    if !config.catalog.contains(&formation) {
        return Err(ApiError::BadRequest(format!(
            "Formation '{}' not found for {}",
            formation, request.format
        )));
    }

    let period_count = request.periods.unwrap_or(config.default_period_count);
    let duration = request.duration.unwrap_or(config.default_period_duration);

    let plan_id = PlanId::generate();

    let editor = LineupEditor::with_periods(config, &formation, period_count, duration)?
        .observe(state.snapshots.observer(plan_id.clone()));

    state
        .snapshots
        .enqueue(plan_id.clone(), editor.periods().to_vec());

    let plan = Plan {
        id: plan_id.clone(),
        format: request.format,
        editor,
    };

    let mut plans = state.plans.write().await;

    let body = serde_json::to_value(PlanViewModel::from_plan(&plan))?;
    plans.insert(plan);

    info!("plan {} created, {} plans in memory", plan_id, plans.len());

    Ok((StatusCode::CREATED, Json(body)).into_response())
}
