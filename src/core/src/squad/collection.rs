use crate::shared::PlayerId;
use crate::squad::SquadPlayer;
use itertools::Itertools;

#[derive(Debug, Clone, Default)]
pub struct SquadCollection {
    pub players: Vec<SquadPlayer>,
}

impl SquadCollection {
    pub fn new(players: Vec<SquadPlayer>) -> Self {
        SquadCollection { players }
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn players(&self) -> &[SquadPlayer] {
        &self.players
    }

    pub fn find(&self, id: &PlayerId) -> Option<&SquadPlayer> {
        self.players.iter().find(|p| &p.id == id)
    }

    pub fn contains(&self, id: &PlayerId) -> bool {
        self.find(id).is_some()
    }

    /// Players whose availability status is `available`, in roster order.
    pub fn available(&self) -> Vec<&SquadPlayer> {
        self.players.iter().filter(|p| p.is_available()).collect()
    }

    pub fn by_squad_number(&self) -> Vec<&SquadPlayer> {
        self.players
            .iter()
            .sorted_by_key(|p| p.squad_number)
            .collect()
    }
}
