use crate::formation::SlotGenerator;
use crate::lineup::{Period, PositionSlot};
use crate::shared::PlayerId;
use log::debug;

/// Carries players from `old_slots` onto a copy of `new_slots`.
///
/// Old occupied slots are visited in order. Each player takes the first
/// unclaimed slot with the same position name, else the first unclaimed slot
/// of the same position group, else is left out. Claims are greedy, so an
/// earlier player can take the only group match a later player needed.
pub fn preserve_assignments(old_slots: &[PositionSlot], new_slots: &[PositionSlot]) -> Vec<PositionSlot> {
    let mut result = new_slots.to_vec();
    let mut claimed: Vec<bool> = result.iter().map(|slot| slot.is_occupied()).collect();

    for old in old_slots {
        let Some(player_id) = &old.player_id else {
            continue;
        };

        if result.iter().any(|slot| slot.holds(player_id)) {
            continue;
        }

        let exact = (0..result.len())
            .find(|&idx| !claimed[idx] && result[idx].position_name == old.position_name);

        let target = exact.or_else(|| {
            (0..result.len()).find(|&idx| !claimed[idx] && result[idx].position_group == old.position_group)
        });

        match target {
            Some(idx) => {
                claimed[idx] = true;
                result[idx].player_id = Some(player_id.clone());
            }
            None => {
                debug!("no slot left for player {} from {}", player_id, old.position_name);
            }
        }
    }

    result
}

/// Players on `old_slots` that are missing from `new_slots`, in old order.
pub fn displaced_players(old_slots: &[PositionSlot], new_slots: &[PositionSlot]) -> Vec<PlayerId> {
    let mut displaced: Vec<PlayerId> = Vec::new();

    for player_id in old_slots.iter().filter_map(|slot| slot.player_id.as_ref()) {
        let placed = new_slots.iter().any(|slot| slot.holds(player_id));
        if !placed && !displaced.contains(player_id) {
            displaced.push(player_id.clone());
        }
    }

    displaced
}

/// Applies a new formation to a period, keeping whoever fits and benching
/// the rest. An unknown formation benches everyone on the pitch.
pub fn apply_formation_change(period: &Period, formation_id: &str, generator: &SlotGenerator<'_>) -> Period {
    let fresh = generator.generate(formation_id);
    let positions = preserve_assignments(&period.positions, &fresh);
    let displaced = displaced_players(&period.positions, &positions);

    let mut updated = Period {
        formation: formation_id.to_string(),
        positions,
        ..period.clone()
    };

    let placed: Vec<PlayerId> = updated.on_pitch().cloned().collect();
    updated.substitutes.retain(|id| !placed.contains(id));

    for player_id in displaced {
        updated.add_substitute(player_id);
    }

    updated
}
