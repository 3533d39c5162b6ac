use crate::shared::PlayerId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AvailabilityStatus {
    Available,
    Unavailable,
    Maybe,
    Pending,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerType {
    Goalkeeper,
    Outfield,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SquadRole {
    Captain,
    ViceCaptain,
    Player,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SquadPlayer {
    pub id: PlayerId,
    pub name: String,
    pub squad_number: u32,
    pub availability_status: AvailabilityStatus,
    #[serde(rename = "type")]
    pub player_type: PlayerType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub squad_role: Option<SquadRole>,
}

impl SquadPlayer {
    pub fn new(
        id: impl Into<PlayerId>,
        name: impl Into<String>,
        squad_number: u32,
        player_type: PlayerType,
    ) -> Self {
        SquadPlayer {
            id: id.into(),
            name: name.into(),
            squad_number,
            availability_status: AvailabilityStatus::Available,
            player_type,
            squad_role: None,
        }
    }

    pub fn with_status(mut self, status: AvailabilityStatus) -> Self {
        self.availability_status = status;
        self
    }

    pub fn with_role(mut self, role: SquadRole) -> Self {
        self.squad_role = Some(role);
        self
    }

    pub fn is_available(&self) -> bool {
        self.availability_status == AvailabilityStatus::Available
    }

    pub fn is_goalkeeper(&self) -> bool {
        self.player_type == PlayerType::Goalkeeper
    }
}
