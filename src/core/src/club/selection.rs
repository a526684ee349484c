use serde::{Deserialize, Serialize};

pub const STARTING_SLOTS: usize = 11;
pub const MAX_SUBSTITUTES: usize = 5;

/// Starting eleven plus bench, stored as player ids.
///
/// Starter slots may be empty; the club that owns the selection guarantees
/// every id refers to one of its registered players.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamSelection {
    starters: [Option<u32>; STARTING_SLOTS],
    substitutes: Vec<u32>,
}

impl TeamSelection {
    pub fn new() -> Self {
        TeamSelection::default()
    }

    pub fn starters(&self) -> &[Option<u32>; STARTING_SLOTS] {
        &self.starters
    }

    pub fn substitutes(&self) -> &[u32] {
        &self.substitutes
    }

    pub fn starter_count(&self) -> usize {
        self.starters.iter().flatten().count()
    }

    pub fn contains(&self, player_id: u32) -> bool {
        self.starters.contains(&Some(player_id)) || self.substitutes.contains(&player_id)
    }

    pub fn is_full(&self) -> bool {
        self.starter_count() == STARTING_SLOTS
    }

    pub fn clear(&mut self) {
        self.starters = [None; STARTING_SLOTS];
        self.substitutes.clear();
    }

    pub(crate) fn set_starter(&mut self, slot: usize, player_id: Option<u32>) {
        self.starters[slot] = player_id;
    }

    pub(crate) fn push_substitute(&mut self, player_id: u32) {
        self.substitutes.push(player_id);
    }

    /// Drops the player from wherever they are selected.
    pub fn remove(&mut self, player_id: u32) {
        for slot in self.starters.iter_mut() {
            if *slot == Some(player_id) {
                *slot = None;
            }
        }

        self.substitutes.retain(|&id| id != player_id);
    }
}
