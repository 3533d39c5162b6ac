pub mod create;
pub mod get;
pub mod periods;
pub mod transfer;

use crate::stores::Plan;
use crate::AppData;
use axum::response::{IntoResponse, Response};
use axum::Json;
use axum::Router;
use lineup_core::lineup::Period;
use lineup_core::shared::{PeriodId, PlanId};
use lineup_core::GameFormat;
use serde::{Deserialize, Serialize};

pub fn plan_routes() -> Router<AppData> {
    Router::new()
        .merge(create::routes::routes())
        .merge(get::routes::routes())
        .merge(periods::routes::routes())
        .merge(transfer::routes::routes())
}

#[derive(Deserialize)]
pub struct PlanRequest {
    pub plan_id: PlanId,
}

#[derive(Deserialize)]
pub struct PeriodRequest {
    pub plan_id: PlanId,
    pub period_id: PeriodId,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanViewModel<'p> {
    pub id: &'p PlanId,
    pub format: GameFormat,
    pub periods: &'p [Period],
}

impl<'p> PlanViewModel<'p> {
    pub fn from_plan(plan: &'p Plan) -> Self {
        PlanViewModel {
            id: &plan.id,
            format: plan.format,
            periods: plan.editor.periods(),
        }
    }

    pub fn response(plan: &Plan) -> Response {
        Json(PlanViewModel::from_plan(plan)).into_response()
    }
}
