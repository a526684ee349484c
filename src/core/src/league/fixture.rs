use crate::LeagueError;
use crate::r#match::MatchResult;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Venue {
    Home,
    Away,
}

/// A scheduled match. Everything except the result is fixed at creation, and
/// the result can only be recorded once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixture {
    pub id: u32,
    pub week: u32,
    pub home_club_id: u32,
    pub away_club_id: u32,
    pub referee_id: u32,
    resolved: bool,
    result: Option<MatchResult>,
}

impl Fixture {
    pub fn new(id: u32, week: u32, home_club_id: u32, away_club_id: u32, referee_id: u32) -> Self {
        Fixture {
            id,
            week,
            home_club_id,
            away_club_id,
            referee_id,
            resolved: false,
            result: None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.resolved
    }

    pub fn result(&self) -> Option<&MatchResult> {
        self.result.as_ref()
    }

    pub fn resolve(&mut self, result: MatchResult) -> Result<(), LeagueError> {
        if self.resolved {
            return Err(LeagueError::DuplicateResolution { fixture_id: self.id });
        }

        self.result = Some(result);
        self.resolved = true;

        Ok(())
    }

    pub fn involves(&self, club_id: u32) -> bool {
        self.home_club_id == club_id || self.away_club_id == club_id
    }

    pub fn opponent_of(&self, club_id: u32) -> Option<u32> {
        match self.venue_for(club_id)? {
            Venue::Home => Some(self.away_club_id),
            Venue::Away => Some(self.home_club_id),
        }
    }

    pub fn venue_for(&self, club_id: u32) -> Option<Venue> {
        if self.home_club_id == club_id {
            Some(Venue::Home)
        } else if self.away_club_id == club_id {
            Some(Venue::Away)
        } else {
            None
        }
    }
}

impl Display for Fixture {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.result {
            Some(result) => write!(
                f,
                "{} {}-{} {}",
                self.home_club_id,
                result.home_goals(),
                result.away_goals(),
                self.away_club_id
            ),
            None => write!(f, "{} v {}", self.home_club_id, self.away_club_id),
        }
    }
}
