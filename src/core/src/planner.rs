use crate::formation::{FormatConfig, FormatRegistry, GameFormat};
use crate::squad::SquadCollection;
use std::sync::Arc;

/// Reference data a planner session works against.
pub struct PlannerData {
    pub formats: FormatRegistry,
    pub squad: SquadCollection,
}

impl PlannerData {
    pub fn new(formats: FormatRegistry, squad: SquadCollection) -> Self {
        PlannerData { formats, squad }
    }

    pub fn format(&self, format: GameFormat) -> Option<Arc<FormatConfig>> {
        self.formats.get(format)
    }
}
