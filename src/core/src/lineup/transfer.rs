use crate::lineup::Period;
use crate::shared::{PeriodId, PlayerId};
use log::debug;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Location {
    #[serde(rename_all = "camelCase")]
    Pitch { period_id: PeriodId, slot_index: usize },
    #[serde(rename_all = "camelCase")]
    Substitutes { period_id: PeriodId },
    AvailablePool,
}

/// A finished drag: `destination` is `None` when the player was dropped
/// outside every target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transfer {
    pub player_id: PlayerId,
    pub source: Location,
    #[serde(default)]
    pub destination: Option<Location>,
}

impl Transfer {
    pub fn new(player_id: impl Into<PlayerId>, source: Location, destination: Option<Location>) -> Self {
        Transfer {
            player_id: player_id.into(),
            source,
            destination,
        }
    }
}

/// Moves the dragged player and returns the new periods. Anything that does
/// not resolve to a real destination leaves the periods as they were.
pub fn apply_transfer(periods: &[Period], transfer: &Transfer) -> Vec<Period> {
    let mut updated = periods.to_vec();
    let player_id = &transfer.player_id;

    let Some(destination) = &transfer.destination else {
        debug!("player {} dropped outside any target", player_id);
        return updated;
    };

    if !location_exists(&updated, destination) {
        debug!("player {} dropped on unknown target {:?}", player_id, destination);
        return updated;
    }

    if &transfer.source == destination {
        return updated;
    }

    take_from_source(&mut updated, &transfer.source, player_id);

    match destination {
        Location::Pitch { period_id, slot_index } => {
            if let Some(period) = find_period_mut(&mut updated, period_id) {
                place_on_pitch(period, *slot_index, player_id);
            }
        }
        Location::Substitutes { period_id } => {
            if let Some(period) = find_period_mut(&mut updated, period_id) {
                period.release(player_id);
                period.add_substitute(player_id.clone());
            }
        }
        Location::AvailablePool => {}
    }

    updated
}

fn place_on_pitch(period: &mut Period, slot_index: usize, player_id: &PlayerId) {
    period.release(player_id);

    let displaced = period.positions[slot_index]
        .player_id
        .take()
        .filter(|current| current != player_id);

    if let Some(displaced) = displaced {
        debug!(
            "player {} displaced from {} to the bench",
            displaced, period.positions[slot_index].position_name
        );
        period.add_substitute(displaced);
    }

    period.positions[slot_index].player_id = Some(player_id.clone());
}

fn take_from_source(periods: &mut [Period], source: &Location, player_id: &PlayerId) {
    match source {
        Location::Pitch { period_id, slot_index } => {
            let slot = find_period_mut(periods, period_id).and_then(|p| p.positions.get_mut(*slot_index));
            match slot {
                Some(slot) if slot.holds(player_id) => slot.player_id = None,
                _ => debug!("source slot {} in period {} does not hold {}", slot_index, period_id, player_id),
            }
        }
        Location::Substitutes { period_id } => {
            if let Some(period) = find_period_mut(periods, period_id) {
                period.remove_substitute(player_id);
            }
        }
        Location::AvailablePool => {}
    }
}

fn location_exists(periods: &[Period], location: &Location) -> bool {
    match location {
        Location::Pitch { period_id, slot_index } => periods
            .iter()
            .find(|p| &p.id == period_id)
            .is_some_and(|p| *slot_index < p.positions.len()),
        Location::Substitutes { period_id } => periods.iter().any(|p| &p.id == period_id),
        Location::AvailablePool => true,
    }
}

fn find_period_mut<'p>(periods: &'p mut [Period], period_id: &PeriodId) -> Option<&'p mut Period> {
    periods.iter_mut().find(|p| &p.id == period_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formation::PositionGroup;
    use crate::lineup::PositionSlot;
    use proptest::prelude::*;

    fn period(number: u32, players: &[Option<&str>], bench: &[&str]) -> Period {
        let positions = players
            .iter()
            .map(|player| {
                let mut slot = PositionSlot::new("Midfielder Centre", "MC", PositionGroup::Midfielder, 50.0, 50.0);
                slot.player_id = player.map(PlayerId::from);
                slot
            })
            .collect();

        let mut period = Period::new(number, "test", 10, positions);
        period.id = PeriodId::new(format!("period-{}", number));
        period.substitutes = bench.iter().map(|id| PlayerId::from(*id)).collect();
        period
    }

    fn pitch(period: u32, slot_index: usize) -> Location {
        Location::Pitch {
            period_id: PeriodId::new(format!("period-{}", period)),
            slot_index,
        }
    }

    fn bench(period: u32) -> Location {
        Location::Substitutes {
            period_id: PeriodId::new(format!("period-{}", period)),
        }
    }

    fn occupant(period: &Period, idx: usize) -> Option<&str> {
        period.positions[idx].player_id.as_ref().map(|id| id.as_str())
    }

    fn ids(list: &[PlayerId]) -> Vec<&str> {
        list.iter().map(|id| id.as_str()).collect()
    }

    #[test]
    fn test_pitch_to_empty_pitch_slot() {
        let periods = vec![period(1, &[Some("a"), None], &[])];

        let result = apply_transfer(&periods, &Transfer::new("a", pitch(1, 0), Some(pitch(1, 1))));

        assert_eq!(occupant(&result[0], 0), None);
        assert_eq!(occupant(&result[0], 1), Some("a"));
        assert!(result[0].substitutes.is_empty());
    }

    #[test]
    fn test_pitch_to_occupied_slot_benches_the_occupant() {
        let periods = vec![period(1, &[Some("a"), Some("b")], &[])];

        let result = apply_transfer(&periods, &Transfer::new("a", pitch(1, 0), Some(pitch(1, 1))));

        assert_eq!(occupant(&result[0], 0), None);
        assert_eq!(occupant(&result[0], 1), Some("a"));
        assert_eq!(ids(&result[0].substitutes), vec!["b"]);
    }

    #[test]
    fn test_displaced_player_already_on_bench_is_not_duplicated() {
        // inconsistent input: b is on the pitch and the bench
        let periods = vec![period(1, &[Some("a"), Some("b")], &["b"])];

        let result = apply_transfer(&periods, &Transfer::new("a", pitch(1, 0), Some(pitch(1, 1))));

        assert_eq!(ids(&result[0].substitutes), vec!["b"]);
    }

    #[test]
    fn test_cross_period_pitch_move_benches_in_destination_period() {
        let periods = vec![
            period(1, &[Some("a")], &[]),
            period(2, &[Some("b")], &["c"]),
        ];

        let result = apply_transfer(&periods, &Transfer::new("a", pitch(1, 0), Some(pitch(2, 0))));

        assert_eq!(occupant(&result[0], 0), None);
        assert!(result[0].substitutes.is_empty());
        assert_eq!(occupant(&result[1], 0), Some("a"));
        assert_eq!(ids(&result[1].substitutes), vec!["c", "b"]);
    }

    #[test]
    fn test_pitch_to_substitutes() {
        let periods = vec![period(1, &[Some("a")], &["b"])];

        let result = apply_transfer(&periods, &Transfer::new("a", pitch(1, 0), Some(bench(1))));

        assert_eq!(occupant(&result[0], 0), None);
        assert_eq!(ids(&result[0].substitutes), vec!["b", "a"]);
    }

    #[test]
    fn test_substitutes_to_occupied_pitch_slot() {
        let periods = vec![period(1, &[Some("a")], &["b", "c"])];

        let result = apply_transfer(&periods, &Transfer::new("b", bench(1), Some(pitch(1, 0))));

        assert_eq!(occupant(&result[0], 0), Some("b"));
        assert_eq!(ids(&result[0].substitutes), vec!["c", "a"]);
    }

    #[test]
    fn test_substitutes_to_same_substitutes_is_noop() {
        let periods = vec![period(1, &[None], &["b", "c"])];

        let result = apply_transfer(&periods, &Transfer::new("b", bench(1), Some(bench(1))));

        assert_eq!(result, periods);
    }

    #[test]
    fn test_substitutes_across_periods() {
        let periods = vec![period(1, &[None], &["b"]), period(2, &[None], &["c"])];

        let result = apply_transfer(&periods, &Transfer::new("b", bench(1), Some(bench(2))));

        assert!(result[0].substitutes.is_empty());
        assert_eq!(ids(&result[1].substitutes), vec!["c", "b"]);
    }

    #[test]
    fn test_pool_to_pitch_and_bench() {
        let periods = vec![period(1, &[Some("a")], &[])];

        let result = apply_transfer(&periods, &Transfer::new("z", Location::AvailablePool, Some(pitch(1, 0))));
        assert_eq!(occupant(&result[0], 0), Some("z"));
        assert_eq!(ids(&result[0].substitutes), vec!["a"]);

        let result = apply_transfer(&result, &Transfer::new("y", Location::AvailablePool, Some(bench(1))));
        assert_eq!(ids(&result[0].substitutes), vec!["a", "y"]);

        let result = apply_transfer(&result, &Transfer::new("y", Location::AvailablePool, Some(bench(1))));
        assert_eq!(ids(&result[0].substitutes), vec!["a", "y"]);
    }

    #[test]
    fn test_back_to_pool_only_removes() {
        let periods = vec![period(1, &[Some("a")], &["b"])];

        let result = apply_transfer(&periods, &Transfer::new("a", pitch(1, 0), Some(Location::AvailablePool)));
        let result = apply_transfer(&result, &Transfer::new("b", bench(1), Some(Location::AvailablePool)));

        assert_eq!(occupant(&result[0], 0), None);
        assert!(result[0].substitutes.is_empty());
    }

    #[test]
    fn test_drop_outside_is_value_equal_clone() {
        let periods = vec![period(1, &[Some("a"), Some("b")], &["c"])];

        let result = apply_transfer(&periods, &Transfer::new("a", pitch(1, 0), None));

        assert_eq!(result, periods);
    }

    #[test]
    fn test_unknown_destination_is_noop() {
        let periods = vec![period(1, &[Some("a")], &[])];

        let out_of_range = apply_transfer(&periods, &Transfer::new("a", pitch(1, 0), Some(pitch(1, 5))));
        let missing_period = apply_transfer(&periods, &Transfer::new("a", pitch(1, 0), Some(bench(9))));

        assert_eq!(out_of_range, periods);
        assert_eq!(missing_period, periods);
    }

    #[test]
    fn test_dragging_onto_own_slot_changes_nothing() {
        let periods = vec![period(1, &[Some("a")], &[])];

        let result = apply_transfer(&periods, &Transfer::new("a", pitch(1, 0), Some(pitch(1, 0))));

        assert_eq!(result, periods);
    }

    #[test]
    fn test_player_already_elsewhere_in_destination_period_is_moved() {
        let periods = vec![
            period(1, &[Some("a")], &[]),
            period(2, &[None, None], &["a"]),
        ];

        let result = apply_transfer(&periods, &Transfer::new("a", pitch(1, 0), Some(pitch(2, 1))));

        assert_eq!(occupant(&result[1], 1), Some("a"));
        assert!(result[1].substitutes.is_empty());
        assert!(result[1].problems().is_empty());
    }

    #[test]
    fn test_location_wire_shape() {
        let json = r#"{"playerId":"p1","source":{"kind":"availablePool"},"destination":{"kind":"pitch","periodId":"x","slotIndex":3}}"#;
        let transfer: Transfer = serde_json::from_str(json).unwrap();

        assert_eq!(transfer.source, Location::AvailablePool);
        assert_eq!(
            transfer.destination,
            Some(Location::Pitch {
                period_id: PeriodId::from("x"),
                slot_index: 3
            })
        );
    }

    proptest! {
        #[test]
        fn displacement_keeps_everyone(
            slots in proptest::collection::vec(proptest::option::of(0u8..4), 1..6),
            from in 0usize..6,
            to in 0usize..6,
        ) {
            let from = from % slots.len();
            let to = to % slots.len();

            let names: Vec<Option<String>> = slots
                .iter()
                .enumerate()
                .map(|(idx, s)| s.map(|_| format!("p{}", idx)))
                .collect();
            let refs: Vec<Option<&str>> = names.iter().map(|n| n.as_deref()).collect();
            let periods = vec![period(1, &refs, &[])];

            prop_assume!(refs[from].is_some());
            let dragged = refs[from].unwrap_or_default();
            let before = refs[to];

            let result = apply_transfer(&periods, &Transfer::new(dragged, pitch(1, from), Some(pitch(1, to))));
            let p = &result[0];

            prop_assert_eq!(occupant(p, to), Some(dragged));
            prop_assert_eq!(p.on_pitch().filter(|id| id.as_str() == dragged).count(), 1);
            if let Some(b) = before.filter(|b| *b != dragged) {
                prop_assert_eq!(p.substitutes.iter().filter(|id| id.as_str() == b).count(), 1);
                prop_assert!(!p.is_on_pitch(&PlayerId::from(b)));
            }
            prop_assert!(p.problems().is_empty());
        }
    }
}
