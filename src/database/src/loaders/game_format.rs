use crate::DatabaseError;
use lineup_core::formation::{GameFormat, PositionGroup};
use serde::Deserialize;

const STATIC_GAME_FORMATS_JSON: &str = include_str!("../data/game_formats.json");

#[derive(Deserialize)]
pub struct GameFormatEntity {
    pub format: GameFormat,
    pub name: String,
    pub default_formation: String,
    pub default_period_count: u32,
    pub default_period_duration: u32,
    pub positions: Vec<PositionEntity>,
    pub formations: Vec<FormationEntity>,
}

#[derive(Deserialize)]
pub struct PositionEntity {
    pub name: String,
    pub abbreviation: String,
    pub group: PositionGroup,
}

#[derive(Deserialize)]
pub struct FormationEntity {
    pub id: String,
    pub positions: Vec<FormationPositionEntity>,
}

#[derive(Deserialize)]
pub struct FormationPositionEntity {
    pub position: String,
    pub x: f32,
    pub y: f32,
}

pub struct GameFormatLoader;

impl GameFormatLoader {
    pub fn load() -> Result<Vec<GameFormatEntity>, DatabaseError> {
        Self::parse(STATIC_GAME_FORMATS_JSON)
    }

    pub fn parse(json: &str) -> Result<Vec<GameFormatEntity>, DatabaseError> {
        serde_json::from_str(json).map_err(|e| DatabaseError::parse("game_formats.json", e))
    }
}
