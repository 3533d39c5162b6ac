use crate::formation::PositionGroup;
use crate::shared::{PlayerId, SlotId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionSlot {
    pub id: SlotId,
    pub position_name: String,
    pub abbreviation: String,
    pub position_group: PositionGroup,
    pub x: f32,
    pub y: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_id: Option<PlayerId>,
}

impl PositionSlot {
    pub fn new(
        position_name: impl Into<String>,
        abbreviation: impl Into<String>,
        position_group: PositionGroup,
        x: f32,
        y: f32,
    ) -> Self {
        PositionSlot {
            id: SlotId::generate(),
            position_name: position_name.into(),
            abbreviation: abbreviation.into(),
            position_group,
            x,
            y,
            player_id: None,
        }
    }

    pub fn is_occupied(&self) -> bool {
        self.player_id.is_some()
    }

    pub fn holds(&self, player_id: &PlayerId) -> bool {
        self.player_id.as_ref() == Some(player_id)
    }

    /// Same position with a fresh id and the current occupant.
    pub fn duplicate(&self) -> Self {
        PositionSlot {
            id: SlotId::generate(),
            ..self.clone()
        }
    }
}
