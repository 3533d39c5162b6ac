use crate::formation::PositionGroup;
use crate::lineup::Period;
use crate::squad::{SquadCollection, SquadPlayer};
use log::debug;

pub struct LineupSelector;

impl LineupSelector {
    /// Fills the empty slots of `period` with available players who are not
    /// yet in it. Goalkeeper slots prefer goalkeepers, outfield slots prefer
    /// outfield players, each in squad number order; when the preferred kind
    /// runs out any remaining player is used.
    pub fn fill(period: &Period, squad: &SquadCollection) -> Period {
        let mut updated = period.clone();

        let mut candidates: Vec<&SquadPlayer> = squad
            .by_squad_number()
            .into_iter()
            .filter(|p| p.is_available() && !period.involves(&p.id))
            .collect();

        for slot in updated.positions.iter_mut().filter(|s| !s.is_occupied()) {
            let wants_goalkeeper = slot.position_group == PositionGroup::Goalkeeper;

            let picked = candidates
                .iter()
                .position(|p| p.is_goalkeeper() == wants_goalkeeper)
                .or(if candidates.is_empty() { None } else { Some(0) });

            let Some(idx) = picked else {
                debug!("no players left to fill {}", slot.position_name);
                break;
            };

            let player = candidates.remove(idx);
            slot.player_id = Some(player.id.clone());
        }

        updated
    }
}
