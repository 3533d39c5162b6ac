use crate::loaders::{GameFormatEntity, SquadPlayerEntity};
use crate::DatabaseEntity;
use lineup_core::formation::{
    AbbreviationTable, FormatConfig, FormatRegistry, FormationCatalog, FormationTemplate, PositionInfo,
    TemplatePosition,
};
use lineup_core::squad::{SquadCollection, SquadPlayer};
use lineup_core::PlannerData;
use log::warn;

pub struct DatabaseGenerator;

impl DatabaseGenerator {
    pub fn generate(data: &DatabaseEntity) -> PlannerData {
        let formats = data
            .game_formats
            .iter()
            .map(DatabaseGenerator::generate_format)
            .collect();

        PlannerData::new(
            FormatRegistry::new(formats),
            DatabaseGenerator::generate_squad(&data.squad),
        )
    }

    fn generate_format(entity: &GameFormatEntity) -> FormatConfig {
        let abbreviations: AbbreviationTable = entity
            .positions
            .iter()
            .map(|position| {
                (
                    position.name.clone(),
                    PositionInfo {
                        abbreviation: position.abbreviation.clone(),
                        group: position.group,
                    },
                )
            })
            .collect();

        let templates = entity
            .formations
            .iter()
            .map(|formation| {
                if formation.positions.len() != entity.format.players_on_pitch() {
                    warn!(
                        "{} formation {} has {} positions, expected {}",
                        entity.format,
                        formation.id,
                        formation.positions.len(),
                        entity.format.players_on_pitch()
                    );
                }

                for position in &formation.positions {
                    if abbreviations.get(&position.position).is_none() {
                        warn!(
                            "{} formation {} uses unlisted position {}",
                            entity.format, formation.id, position.position
                        );
                    }
                }

                FormationTemplate::new(
                    formation.id.clone(),
                    formation
                        .positions
                        .iter()
                        .map(|position| TemplatePosition {
                            position: position.position.clone(),
                            x: position.x,
                            y: position.y,
                        })
                        .collect(),
                )
            })
            .collect();

        let catalog = FormationCatalog::new(templates);

        if !catalog.contains(&entity.default_formation) {
            warn!(
                "{} default formation {} is not in its catalog",
                entity.format, entity.default_formation
            );
        }

        FormatConfig {
            format: entity.format,
            name: entity.name.clone(),
            catalog,
            abbreviations,
            default_formation: entity.default_formation.clone(),
            default_period_count: entity.default_period_count,
            default_period_duration: entity.default_period_duration,
        }
    }

    fn generate_squad(players: &[SquadPlayerEntity]) -> SquadCollection {
        SquadCollection::new(
            players
                .iter()
                .map(|player| {
                    let mut squad_player = SquadPlayer::new(
                        player.id.as_str(),
                        player.name.as_str(),
                        player.squad_number,
                        player.player_type,
                    )
                    .with_status(player.availability_status);

                    if let Some(role) = player.squad_role {
                        squad_player = squad_player.with_role(role);
                    }

                    squad_player
                })
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DatabaseLoader;
    use lineup_core::formation::{GameFormat, PositionGroup};
    use lineup_core::lineup::{LineupEditor, Location, Transfer};
    use lineup_core::shared::PlayerId;

    fn planner() -> PlannerData {
        DatabaseGenerator::generate(&DatabaseLoader::load().unwrap())
    }

    #[test]
    fn test_every_format_is_generated() {
        let data = planner();

        for format in GameFormat::all() {
            let config = data.format(format).unwrap();
            assert!(config.catalog.contains(&config.default_formation));
            assert!(config.default_period_count > 0);
        }
    }

    #[test]
    fn test_every_template_position_is_configured() {
        let data = planner();

        for config in data.formats.formats() {
            for template in config.catalog.templates() {
                for position in &template.positions {
                    assert!(
                        config.abbreviations.get(&position.position).is_some(),
                        "{} {} {}",
                        config.format,
                        template.id,
                        position.position
                    );
                }
            }
        }
    }

    #[test]
    fn test_configured_abbreviations_win() {
        let data = planner();
        let config = data.format(GameFormat::ElevenASide).unwrap();

        let slots = config.slot_generator().generate("1-4-4-2");

        assert_eq!(slots.len(), 11);
        assert_eq!(slots[2].abbreviation, "DCL");
        assert_eq!(slots[2].position_group, PositionGroup::Defender);
    }

    #[test]
    fn test_squad_keeps_roles_and_status() {
        let data = planner();

        let captain = data.squad.players().iter().find(|p| p.squad_role.is_some());
        assert!(captain.is_some());
        assert!(data.squad.available().len() < data.squad.len());
    }

    #[test]
    fn test_seven_a_side_session() {
        let data = planner();
        let config = data.format(GameFormat::SevenASide).unwrap();
        let mut editor = LineupEditor::with_default_periods(config).unwrap();

        let first = editor.periods()[0].clone();
        assert_eq!(first.positions.len(), 7);
        assert_eq!(first.positions[0].position_group, PositionGroup::Goalkeeper);

        let keeper = PlayerId::from("player-1");
        editor.transfer(&Transfer::new(
            keeper.clone(),
            Location::AvailablePool,
            Some(Location::Pitch {
                period_id: first.id.clone(),
                slot_index: 0,
            }),
        ));
        editor.change_formation(&first.id, "1-3-3").unwrap();

        let period = editor.period(&first.id).unwrap();
        assert!(period.is_on_pitch(&keeper) || period.is_substitute(&keeper));
        assert!(period.positions[0].holds(&keeper));
        assert!(!editor.available(&data.squad).iter().any(|p| p.id == keeper));
    }
}
