use crate::club::{Form, PlayerPositionType, PlayerSkills, PlayingStyle, STARTING_SLOTS};
use crate::{Club, LeagueError, Player};
use log::debug;

/// Read-only snapshot of a selected player, taken when the match is set up.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchPlayer {
    pub id: u32,
    pub position: PlayerPositionType,
    pub skills: PlayerSkills,
    pub fatigue: u16,
}

impl MatchPlayer {
    pub fn from_player(player: &Player) -> Self {
        MatchPlayer {
            id: player.id,
            position: player.position,
            skills: player.skills,
            fatigue: player.condition.fatigue,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchSquad {
    pub club_id: u32,
    pub starters: Vec<Option<MatchPlayer>>,
    pub substitutes: Vec<MatchPlayer>,
}

impl MatchSquad {
    pub fn new(club_id: u32, starters: Vec<Option<MatchPlayer>>, substitutes: Vec<MatchPlayer>) -> Self {
        MatchSquad {
            club_id,
            starters,
            substitutes,
        }
    }

    /// Resolves the club's current selection into player snapshots. Players
    /// injured since the selection was made are left out: their starting slot
    /// stays empty and they drop off the bench.
    pub fn from_club(club: &Club) -> Result<Self, LeagueError> {
        let resolve = |player_id: u32| -> Result<Option<MatchPlayer>, LeagueError> {
            let player = club.player(player_id).ok_or(LeagueError::UnknownPlayerId {
                club_id: club.id,
                player_id,
            })?;

            if !player.is_available() {
                debug!("{}: {} is unavailable, left out", club.name, player.name);
                return Ok(None);
            }

            Ok(Some(MatchPlayer::from_player(player)))
        };

        let mut starters = Vec::with_capacity(STARTING_SLOTS);
        for slot in club.selection.starters() {
            starters.push(match slot {
                Some(player_id) => resolve(*player_id)?,
                None => None,
            });
        }

        let mut substitutes = Vec::with_capacity(club.selection.substitutes().len());
        for &player_id in club.selection.substitutes() {
            substitutes.extend(resolve(player_id)?);
        }

        Ok(MatchSquad::new(club.id, starters, substitutes))
    }

    /// Non-empty starting slots.
    pub fn players(&self) -> impl Iterator<Item = &MatchPlayer> {
        self.starters.iter().flatten()
    }

    pub fn outfield_count(&self) -> usize {
        self.players().filter(|p| p.position.is_outfield()).count()
    }

    pub fn validate(&self) -> Result<(), LeagueError> {
        if self.outfield_count() == 0 {
            return Err(LeagueError::IncompleteSelection {
                club_id: self.club_id,
            });
        }

        Ok(())
    }
}

/// Club level inputs the engine needs besides the players themselves.
#[derive(Debug, Clone, Default)]
pub struct MatchModifiers {
    pub reputation: u8,
    pub playing_style: PlayingStyle,
    pub form: Form,
}

impl MatchModifiers {
    pub fn new(reputation: u8, playing_style: PlayingStyle, form: Form) -> Self {
        MatchModifiers {
            reputation,
            playing_style,
            form,
        }
    }

    pub fn from_club(club: &Club, form: &Form) -> Self {
        MatchModifiers::new(club.reputation, club.playing_style, form.clone())
    }
}
