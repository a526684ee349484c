use crate::club::{PlayingStyle, STARTING_SLOTS, MAX_SUBSTITUTES, TeamSelection};
use crate::r#match::SquadSelector;
use crate::{LeagueError, Player};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Club {
    pub id: u32,
    pub name: String,

    pub reputation: u8,

    pub playing_style: PlayingStyle,

    pub players: Vec<Player>,

    pub selection: TeamSelection,
}

impl Club {
    pub fn new(
        id: u32,
        name: String,
        reputation: u8,
        playing_style: PlayingStyle,
        players: Vec<Player>,
    ) -> Self {
        Club {
            id,
            name,
            reputation,
            playing_style,
            players,
            selection: TeamSelection::new(),
        }
    }

    pub fn player(&self, player_id: u32) -> Option<&Player> {
        self.players.iter().find(|p| p.id == player_id)
    }

    pub fn player_mut(&mut self, player_id: u32) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == player_id)
    }

    /// Puts a registered player into a starting slot, moving them out of any
    /// other slot or the bench first.
    pub fn select_starter(&mut self, slot: usize, player_id: u32) -> Result<(), LeagueError> {
        if slot >= STARTING_SLOTS {
            return Err(LeagueError::InvalidSlot { slot });
        }

        self.ensure_registered(player_id)?;

        self.selection.remove(player_id);
        self.selection.set_starter(slot, Some(player_id));

        Ok(())
    }

    pub fn add_substitute(&mut self, player_id: u32) -> Result<(), LeagueError> {
        self.ensure_registered(player_id)?;

        if self.selection.substitutes().contains(&player_id) {
            return Ok(());
        }

        if self.selection.substitutes().len() >= MAX_SUBSTITUTES {
            return Err(LeagueError::BenchFull { club_id: self.id });
        }

        self.selection.remove(player_id);
        self.selection.push_substitute(player_id);

        Ok(())
    }

    /// Replaces the current selection with the best available eleven and bench.
    pub fn auto_select(&mut self) {
        self.selection = SquadSelector::select(self);
    }

    fn ensure_registered(&self, player_id: u32) -> Result<(), LeagueError> {
        match self.player(player_id) {
            Some(_) => Ok(()),
            None => Err(LeagueError::UnknownPlayerId {
                club_id: self.id,
                player_id,
            }),
        }
    }
}
