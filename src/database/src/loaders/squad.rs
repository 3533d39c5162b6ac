use crate::DatabaseError;
use lineup_core::squad::{AvailabilityStatus, PlayerType, SquadRole};
use serde::Deserialize;

const STATIC_SQUAD_JSON: &str = include_str!("../data/squad.json");

#[derive(Deserialize)]
pub struct SquadPlayerEntity {
    pub id: String,
    pub name: String,
    pub squad_number: u32,
    pub player_type: PlayerType,
    #[serde(default = "default_availability")]
    pub availability_status: AvailabilityStatus,
    #[serde(default)]
    pub squad_role: Option<SquadRole>,
}

fn default_availability() -> AvailabilityStatus {
    AvailabilityStatus::Available
}

pub struct SquadLoader;

impl SquadLoader {
    pub fn load() -> Result<Vec<SquadPlayerEntity>, DatabaseError> {
        serde_json::from_str(STATIC_SQUAD_JSON).map_err(|e| DatabaseError::parse("squad.json", e))
    }
}
