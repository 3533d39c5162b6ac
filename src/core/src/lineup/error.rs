use crate::shared::{PeriodId, PlayerId};
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum LineupError {
    PeriodNotFound(PeriodId),
    PlayerNotInPeriod { period_id: PeriodId, player_id: PlayerId },
    InvalidDuration(u32),
    InvalidPeriodCount(u32),
}

impl fmt::Display for LineupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineupError::PeriodNotFound(period_id) => write!(f, "period not found: {}", period_id),
            LineupError::PlayerNotInPeriod { period_id, player_id } => {
                write!(f, "player {} is not in period {}", player_id, period_id)
            }
            LineupError::InvalidDuration(minutes) => write!(f, "invalid period duration: {} minutes", minutes),
            LineupError::InvalidPeriodCount(count) => write!(f, "invalid period count: {}", count),
        }
    }
}

impl std::error::Error for LineupError {}

pub type LineupResult<T> = Result<T, LineupError>;
