use crate::lineup::PositionSlot;
use crate::shared::{PeriodId, PlayerId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Period {
    pub id: PeriodId,
    pub period_number: u32,
    pub formation: String,
    /// Minutes.
    pub duration: u32,
    pub positions: Vec<PositionSlot>,
    #[serde(default)]
    pub substitutes: Vec<PlayerId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub captain_id: Option<PlayerId>,
}

impl Period {
    pub fn new(
        period_number: u32,
        formation: impl Into<String>,
        duration: u32,
        positions: Vec<PositionSlot>,
    ) -> Self {
        Period {
            id: PeriodId::generate(),
            period_number,
            formation: formation.into(),
            duration,
            positions,
            substitutes: Vec::new(),
            captain_id: None,
        }
    }

    pub fn on_pitch(&self) -> impl Iterator<Item = &PlayerId> {
        self.positions.iter().filter_map(|slot| slot.player_id.as_ref())
    }

    pub fn is_on_pitch(&self, player_id: &PlayerId) -> bool {
        self.positions.iter().any(|slot| slot.holds(player_id))
    }

    pub fn is_substitute(&self, player_id: &PlayerId) -> bool {
        self.substitutes.contains(player_id)
    }

    pub fn involves(&self, player_id: &PlayerId) -> bool {
        self.is_on_pitch(player_id) || self.is_substitute(player_id)
    }

    /// Appends to the bench unless already there.
    pub fn add_substitute(&mut self, player_id: PlayerId) {
        if !self.substitutes.contains(&player_id) {
            self.substitutes.push(player_id);
        }
    }

    pub fn remove_substitute(&mut self, player_id: &PlayerId) {
        self.substitutes.retain(|id| id != player_id);
    }

    /// Takes the player off every slot and off the bench of this period.
    pub fn release(&mut self, player_id: &PlayerId) {
        for slot in &mut self.positions {
            if slot.holds(player_id) {
                slot.player_id = None;
            }
        }
        self.remove_substitute(player_id);
    }

    pub fn problems(&self) -> Vec<LineupProblem> {
        let mut problems = Vec::new();
        let mut seen_on_pitch = HashSet::new();

        for player_id in self.on_pitch() {
            if !seen_on_pitch.insert(player_id) {
                problems.push(LineupProblem::DuplicateOnPitch {
                    period_number: self.period_number,
                    player_id: player_id.clone(),
                });
            }
        }

        let mut seen_on_bench = HashSet::new();

        for player_id in &self.substitutes {
            if !seen_on_bench.insert(player_id) {
                problems.push(LineupProblem::DuplicateOnBench {
                    period_number: self.period_number,
                    player_id: player_id.clone(),
                });
            } else if seen_on_pitch.contains(player_id) {
                problems.push(LineupProblem::OnPitchAndBench {
                    period_number: self.period_number,
                    player_id: player_id.clone(),
                });
            }
        }

        if let Some(captain_id) = &self.captain_id {
            if !self.involves(captain_id) {
                problems.push(LineupProblem::CaptainNotInPeriod {
                    period_number: self.period_number,
                    player_id: captain_id.clone(),
                });
            }
        }

        problems
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum LineupProblem {
    #[serde(rename_all = "camelCase")]
    DuplicateOnPitch { period_number: u32, player_id: PlayerId },
    #[serde(rename_all = "camelCase")]
    DuplicateOnBench { period_number: u32, player_id: PlayerId },
    #[serde(rename_all = "camelCase")]
    OnPitchAndBench { period_number: u32, player_id: PlayerId },
    #[serde(rename_all = "camelCase")]
    CaptainNotInPeriod { period_number: u32, player_id: PlayerId },
}

impl fmt::Display for LineupProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineupProblem::DuplicateOnPitch { period_number, player_id } => {
                write!(f, "period {}: player {} occupies more than one slot", period_number, player_id)
            }
            LineupProblem::DuplicateOnBench { period_number, player_id } => {
                write!(f, "period {}: player {} is listed twice on the bench", period_number, player_id)
            }
            LineupProblem::OnPitchAndBench { period_number, player_id } => {
                write!(f, "period {}: player {} is both on the pitch and on the bench", period_number, player_id)
            }
            LineupProblem::CaptainNotInPeriod { period_number, player_id } => {
                write!(f, "period {}: captain {} is neither on the pitch nor on the bench", period_number, player_id)
            }
        }
    }
}
