use crate::lineup::Period;
use crate::shared::PlayerId;
use crate::squad::{SquadCollection, SquadPlayer};
use std::collections::HashSet;

/// Squad players marked available who are neither on a pitch nor on a bench
/// in any period. Recomputed from scratch on every call.
pub fn available_players<'s>(squad: &'s SquadCollection, periods: &[Period]) -> Vec<&'s SquadPlayer> {
    let assigned = assigned_players(periods);

    squad
        .available()
        .into_iter()
        .filter(|player| !assigned.contains(&player.id))
        .collect()
}

pub fn assigned_players(periods: &[Period]) -> HashSet<&PlayerId> {
    periods
        .iter()
        .flat_map(|period| period.on_pitch().chain(period.substitutes.iter()))
        .collect()
}
