use crate::formation::FormatConfig;
use crate::lineup::playing_time::{PlayingTimeReport, aggregate};
use crate::lineup::{
    LineupError, LineupProblem, LineupResult, Period, Transfer, apply_formation_change, apply_transfer,
    available_players,
};
use crate::shared::{PeriodId, PlayerId};
use crate::squad::{LineupSelector, SquadCollection, SquadPlayer};
use log::{debug, info};
use std::collections::BTreeMap;
use std::sync::Arc;

pub const MAX_PERIOD_COUNT: u32 = 20;

/// Minutes.
pub const MAX_PERIOD_DURATION: u32 = 120;

/// Receives every new periods snapshot. Whatever stores it lives outside
/// the editor.
pub trait LineupObserver: Send + Sync {
    fn periods_changed(&self, periods: &[Period]);
}

impl<F> LineupObserver for F
where
    F: Fn(&[Period]) + Send + Sync,
{
    fn periods_changed(&self, periods: &[Period]) {
        self(periods)
    }
}

/// Owns the periods of one match plan. Every mutation builds a new periods
/// vector, swaps it in and hands it to the observer.
pub struct LineupEditor {
    config: Arc<FormatConfig>,
    periods: Vec<Period>,
    observer: Option<Box<dyn LineupObserver>>,
}

impl LineupEditor {
    pub fn new(config: Arc<FormatConfig>, periods: Vec<Period>) -> Self {
        LineupEditor {
            config,
            periods,
            observer: None,
        }
    }

    pub fn with_periods(
        config: Arc<FormatConfig>,
        formation: &str,
        count: u32,
        duration: u32,
    ) -> LineupResult<Self> {
        if count == 0 || count > MAX_PERIOD_COUNT {
            return Err(LineupError::InvalidPeriodCount(count));
        }
        validate_duration(duration)?;

        let generator = config.slot_generator();

        let periods = (1..=count)
            .map(|number| Period::new(number, formation, duration, generator.generate(formation)))
            .collect();

        info!(
            "lineup created: {} periods of {} minutes, {} {}",
            count, duration, config.format, formation
        );

        Ok(LineupEditor::new(config, periods))
    }

    pub fn with_default_periods(config: Arc<FormatConfig>) -> LineupResult<Self> {
        let formation = config.default_formation.clone();
        let count = config.default_period_count;
        let duration = config.default_period_duration;

        LineupEditor::with_periods(config, &formation, count, duration)
    }

    pub fn observe(mut self, observer: impl LineupObserver + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    pub fn config(&self) -> &FormatConfig {
        &self.config
    }

    pub fn periods(&self) -> &[Period] {
        &self.periods
    }

    pub fn period(&self, period_id: &PeriodId) -> Option<&Period> {
        self.periods.iter().find(|p| &p.id == period_id)
    }

    pub fn change_formation(&mut self, period_id: &PeriodId, formation: &str) -> LineupResult<()> {
        let idx = self.index_of(period_id)?;
        let generator = self.config.slot_generator();

        let mut periods = self.periods.clone();
        periods[idx] = apply_formation_change(&self.periods[idx], formation, &generator);

        debug!("period {} switched to {}", periods[idx].period_number, formation);

        self.commit(periods);
        Ok(())
    }

    pub fn transfer(&mut self, transfer: &Transfer) {
        let periods = apply_transfer(&self.periods, transfer);
        self.commit(periods);
    }

    /// Appends a copy of the last period on fresh slot ids. Without any
    /// period a blank one with the default formation is added.
    pub fn add_period(&mut self) -> LineupResult<PeriodId> {
        let number = self.periods.len() as u32 + 1;

        if number > MAX_PERIOD_COUNT {
            return Err(LineupError::InvalidPeriodCount(number));
        }

        let period = match self.periods.last() {
            Some(last) => Period {
                id: PeriodId::generate(),
                period_number: number,
                positions: last.positions.iter().map(|slot| slot.duplicate()).collect(),
                ..last.clone()
            },
            None => Period::new(
                number,
                self.config.default_formation.as_str(),
                self.config.default_period_duration,
                self.config.slot_generator().generate(&self.config.default_formation),
            ),
        };

        let period_id = period.id.clone();

        let mut periods = self.periods.clone();
        periods.push(period);
        self.commit(periods);

        Ok(period_id)
    }

    pub fn remove_period(&mut self, period_id: &PeriodId) -> LineupResult<()> {
        let idx = self.index_of(period_id)?;

        let mut periods = self.periods.clone();
        periods.remove(idx);

        for (number, period) in periods.iter_mut().enumerate() {
            period.period_number = number as u32 + 1;
        }

        self.commit(periods);
        Ok(())
    }

    pub fn set_duration(&mut self, period_id: &PeriodId, minutes: u32) -> LineupResult<()> {
        validate_duration(minutes)?;

        self.update_period(period_id, |period| period.duration = minutes)
    }

    pub fn set_captain(&mut self, period_id: &PeriodId, captain_id: Option<PlayerId>) -> LineupResult<()> {
        let idx = self.index_of(period_id)?;

        if let Some(captain_id) = &captain_id {
            if !self.periods[idx].involves(captain_id) {
                return Err(LineupError::PlayerNotInPeriod {
                    period_id: period_id.clone(),
                    player_id: captain_id.clone(),
                });
            }
        }

        self.update_period(period_id, |period| period.captain_id = captain_id)
    }

    /// Sends everyone in the period back to the available pool.
    pub fn clear_period(&mut self, period_id: &PeriodId) -> LineupResult<()> {
        self.update_period(period_id, |period| {
            for slot in &mut period.positions {
                slot.player_id = None;
            }
            period.substitutes.clear();
            period.captain_id = None;
        })
    }

    pub fn auto_fill(&mut self, period_id: &PeriodId, squad: &SquadCollection) -> LineupResult<()> {
        let idx = self.index_of(period_id)?;

        let mut periods = self.periods.clone();
        periods[idx] = LineupSelector::fill(&self.periods[idx], squad);

        self.commit(periods);
        Ok(())
    }

    pub fn available<'s>(&self, squad: &'s SquadCollection) -> Vec<&'s SquadPlayer> {
        available_players(squad, &self.periods)
    }

    pub fn minutes(&self) -> BTreeMap<PlayerId, u32> {
        aggregate(&self.periods)
    }

    pub fn playing_time(&self, squad: &SquadCollection) -> PlayingTimeReport {
        PlayingTimeReport::build(squad, &self.periods)
    }

    pub fn problems(&self) -> Vec<LineupProblem> {
        self.periods.iter().flat_map(|p| p.problems()).collect()
    }

    fn index_of(&self, period_id: &PeriodId) -> LineupResult<usize> {
        self.periods
            .iter()
            .position(|p| &p.id == period_id)
            .ok_or_else(|| LineupError::PeriodNotFound(period_id.clone()))
    }

    fn update_period(&mut self, period_id: &PeriodId, update: impl FnOnce(&mut Period)) -> LineupResult<()> {
        let idx = self.index_of(period_id)?;

        let mut periods = self.periods.clone();
        update(&mut periods[idx]);

        self.commit(periods);
        Ok(())
    }

    fn commit(&mut self, periods: Vec<Period>) {
        self.periods = periods;

        if let Some(observer) = &self.observer {
            observer.periods_changed(&self.periods);
        }
    }
}

fn validate_duration(minutes: u32) -> LineupResult<()> {
    if minutes == 0 || minutes > MAX_PERIOD_DURATION {
        return Err(LineupError::InvalidDuration(minutes));
    }

    Ok(())
}
