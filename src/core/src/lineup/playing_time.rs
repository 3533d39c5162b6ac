use crate::lineup::Period;
use crate::shared::PlayerId;
use crate::squad::SquadCollection;
use itertools::Itertools;
use serde::Serialize;
use std::collections::BTreeMap;

/// Minutes on the pitch per player. Benched periods add nothing.
pub fn aggregate(periods: &[Period]) -> BTreeMap<PlayerId, u32> {
    let mut minutes: BTreeMap<PlayerId, u32> = BTreeMap::new();

    for period in periods {
        for player_id in period.on_pitch() {
            let entry = minutes.entry(player_id.clone()).or_default();
            *entry = entry.saturating_add(period.duration);
        }
    }

    minutes
}

pub fn total_minutes(periods: &[Period]) -> u32 {
    periods.iter().fold(0u32, |total, p| total.saturating_add(p.duration))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayingTimeEntry {
    pub player_id: PlayerId,
    pub name: String,
    pub squad_number: u32,
    pub minutes: u32,
    pub periods_on_pitch: u32,
    pub periods_on_bench: u32,
    /// 0.0 - 100.0 of the total match minutes.
    pub share: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayingTimeReport {
    pub total_minutes: u32,
    pub entries: Vec<PlayingTimeEntry>,
}

impl PlayingTimeReport {
    pub fn build(squad: &SquadCollection, periods: &[Period]) -> Self {
        let minutes = aggregate(periods);
        let total = total_minutes(periods);

        let entries = squad
            .players()
            .iter()
            .map(|player| {
                let played = minutes.get(&player.id).copied().unwrap_or(0);
                let share = if total > 0 {
                    played as f32 / total as f32 * 100.0
                } else {
                    0.0
                };

                PlayingTimeEntry {
                    player_id: player.id.clone(),
                    name: player.name.clone(),
                    squad_number: player.squad_number,
                    minutes: played,
                    periods_on_pitch: periods.iter().filter(|p| p.is_on_pitch(&player.id)).count() as u32,
                    periods_on_bench: periods.iter().filter(|p| p.is_substitute(&player.id)).count() as u32,
                    share,
                }
            })
            .sorted_by(|a, b| b.minutes.cmp(&a.minutes).then(a.squad_number.cmp(&b.squad_number)))
            .collect();

        PlayingTimeReport {
            total_minutes: total,
            entries,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formation::PositionGroup;
    use crate::lineup::PositionSlot;
    use crate::squad::{PlayerType, SquadPlayer};

    fn period(duration: u32, on_pitch: &[&str], bench: &[&str]) -> Period {
        let positions = on_pitch
            .iter()
            .map(|id| {
                let mut slot = PositionSlot::new("Midfielder Centre", "MC", PositionGroup::Midfielder, 50.0, 50.0);
                slot.player_id = Some(PlayerId::from(*id));
                slot
            })
            .collect();

        let mut period = Period::new(1, "test", duration, positions);
        period.substitutes = bench.iter().map(|id| PlayerId::from(*id)).collect();
        period
    }

    #[test]
    fn test_aggregate_is_additive() {
        let periods = vec![period(8, &["p1"], &[]), period(10, &["p1"], &[])];

        let minutes = aggregate(&periods);

        assert_eq!(minutes.get(&PlayerId::from("p1")), Some(&18));
    }

    #[test]
    fn test_bench_adds_nothing() {
        let periods = vec![period(8, &["p1"], &["p2"]), period(10, &["p2"], &["p1"])];

        let minutes = aggregate(&periods);

        assert_eq!(minutes.get(&PlayerId::from("p1")), Some(&8));
        assert_eq!(minutes.get(&PlayerId::from("p2")), Some(&10));
        assert_eq!(total_minutes(&periods), 18);
    }

    #[test]
    fn test_oversized_durations_saturate() {
        let periods = vec![period(u32::MAX, &["p1"], &[]), period(u32::MAX, &["p1"], &[])];

        assert_eq!(aggregate(&periods).get(&PlayerId::from("p1")), Some(&u32::MAX));
        assert_eq!(total_minutes(&periods), u32::MAX);
    }

    #[test]
    fn test_empty_slots_are_ignored() {
        let mut period = period(8, &["p1"], &[]);
        period.positions.push(PositionSlot::new("Goalkeeper", "GK", PositionGroup::Goalkeeper, 50.0, 90.0));

        assert_eq!(aggregate(&[period]).len(), 1);
    }

    #[test]
    fn test_report_orders_by_minutes_then_number() {
        let squad = SquadCollection::new(vec![
            SquadPlayer::new("p1", "Ash", 7, PlayerType::Outfield),
            SquadPlayer::new("p2", "Bo", 3, PlayerType::Outfield),
            SquadPlayer::new("p3", "Cy", 5, PlayerType::Outfield),
        ]);
        let periods = vec![period(10, &["p1", "p2"], &["p3"]), period(10, &["p1"], &["p2"])];

        let report = PlayingTimeReport::build(&squad, &periods);

        assert_eq!(report.total_minutes, 20);
        let order: Vec<&str> = report.entries.iter().map(|e| e.player_id.as_str()).collect();
        assert_eq!(order, vec!["p1", "p2", "p3"]);

        let bo = &report.entries[1];
        assert_eq!(bo.minutes, 10);
        assert_eq!(bo.periods_on_pitch, 1);
        assert_eq!(bo.periods_on_bench, 1);
        assert!((bo.share - 50.0).abs() < f32::EPSILON);

        assert_eq!(report.entries[2].minutes, 0);
    }
}
