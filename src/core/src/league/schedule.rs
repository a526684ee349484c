use crate::LeagueError;
use crate::league::{Fixture, Venue};
use crate::r#match::MatchResult;
use serde::{Deserialize, Serialize};

/// A club's view of one of its fixtures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClubFixture {
    pub fixture_id: u32,
    pub week: u32,
    pub opponent_id: u32,
    pub venue: Venue,
}

/// Season fixture list, ordered by id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    club_count: usize,
    fixtures: Vec<Fixture>,
}

impl Schedule {
    pub fn new(club_count: usize, fixtures: Vec<Fixture>) -> Self {
        Schedule {
            club_count,
            fixtures,
        }
    }

    pub fn fixtures(&self) -> &[Fixture] {
        &self.fixtures
    }

    pub fn len(&self) -> usize {
        self.fixtures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fixtures.is_empty()
    }

    pub fn fixture(&self, fixture_id: u32) -> Option<&Fixture> {
        self.fixtures.iter().find(|f| f.id == fixture_id)
    }

    pub fn fixture_mut(&mut self, fixture_id: u32) -> Option<&mut Fixture> {
        self.fixtures.iter_mut().find(|f| f.id == fixture_id)
    }

    pub fn fixtures_for_week(&self, week: u32) -> impl Iterator<Item = &Fixture> {
        self.fixtures.iter().filter(move |f| f.week == week)
    }

    pub fn fixtures_for_club(&self, club_id: u32) -> impl Iterator<Item = &Fixture> {
        self.fixtures.iter().filter(move |f| f.involves(club_id))
    }

    /// Rounds in a double round robin: 2N - 2.
    pub fn number_of_rounds(&self) -> u32 {
        (self.club_count * 2).saturating_sub(2) as u32
    }

    /// The club's fixtures in the first `weeks` weeks, with opponent and venue.
    pub fn opening_fixtures(&self, club_id: u32, weeks: u32) -> Vec<ClubFixture> {
        let mut opening: Vec<ClubFixture> = self
            .fixtures_for_club(club_id)
            .filter(|f| f.week < weeks)
            .filter_map(|f| {
                Some(ClubFixture {
                    fixture_id: f.id,
                    week: f.week,
                    opponent_id: f.opponent_of(club_id)?,
                    venue: f.venue_for(club_id)?,
                })
            })
            .collect();

        opening.sort_by_key(|f| f.week);
        opening
    }

    pub fn resolved_count(&self) -> usize {
        self.fixtures.iter().filter(|f| f.is_resolved()).count()
    }

    pub fn is_complete(&self) -> bool {
        self.fixtures.iter().all(|f| f.is_resolved())
    }

    pub fn resolve(&mut self, fixture_id: u32, result: MatchResult) -> Result<&Fixture, LeagueError> {
        let fixture = self
            .fixture_mut(fixture_id)
            .ok_or(LeagueError::UnknownFixture { fixture_id })?;

        fixture.resolve(result)?;

        Ok(fixture)
    }
}
