use crate::formation::abbreviation::AbbreviationTable;
use crate::formation::template::FormationCatalog;
use crate::lineup::PositionSlot;
use log::warn;

pub struct SlotGenerator<'c> {
    catalog: &'c FormationCatalog,
    abbreviations: &'c AbbreviationTable,
}

impl<'c> SlotGenerator<'c> {
    pub fn new(catalog: &'c FormationCatalog, abbreviations: &'c AbbreviationTable) -> Self {
        SlotGenerator {
            catalog,
            abbreviations,
        }
    }

    /// Empty slots for `formation_id` in template order. An unknown formation
    /// yields an empty list.
    pub fn generate(&self, formation_id: &str) -> Vec<PositionSlot> {
        let Some(template) = self.catalog.template(formation_id) else {
            warn!("formation template not found: {}", formation_id);
            return Vec::new();
        };

        template
            .positions
            .iter()
            .map(|entry| {
                let info = self.abbreviations.resolve(&entry.position);
                PositionSlot::new(
                    entry.position.clone(),
                    info.abbreviation,
                    info.group,
                    entry.x,
                    entry.y,
                )
            })
            .collect()
    }
}
