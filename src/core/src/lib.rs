pub mod planner;
pub use planner::*;

pub mod formation;
pub mod lineup;
pub mod shared;
pub mod squad;

pub use formation::{FormatConfig, FormatRegistry, GameFormat};
pub use lineup::{LineupEditor, LineupError, LineupObserver, Location, Period, PositionSlot, Transfer};
pub use squad::{SquadCollection, SquadPlayer};
