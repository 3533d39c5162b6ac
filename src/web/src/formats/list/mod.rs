pub mod routes;

use crate::AppData;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use lineup_core::GameFormat;
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatListItem<'f> {
    pub format: GameFormat,
    pub name: &'f str,
    pub players_on_pitch: usize,
    pub default_formation: &'f str,
    pub default_period_count: u32,
    pub default_period_duration: u32,
    pub formations: Vec<&'f str>,
}

pub async fn format_list_action(State(state): State<AppData>) -> Response {
    let model: Vec<FormatListItem> = state
        .planner
        .formats
        .formats()
        .iter()
        .map(|config| FormatListItem {
            format: config.format,
            name: &config.name,
            players_on_pitch: config.format.players_on_pitch(),
            default_formation: &config.default_formation,
            default_period_count: config.default_period_count,
            default_period_duration: config.default_period_duration,
            formations: config.catalog.formation_ids(),
        })
        .collect();

    Json(model).into_response()
}
