use crate::context::SeasonContext;
use crate::league::{League, LeagueResult, MatchdayCalendar, StandingsEntry};
use crate::LeagueError;
use chrono::NaiveDate;
use log::info;
use rand::Rng;

/// A league together with the week it has reached.
#[derive(Debug)]
pub struct Season {
    pub league: League,
    pub context: SeasonContext,
}

impl Season {
    /// Draws the fixture list and positions the season before its first week.
    pub fn start<R: Rng + ?Sized>(mut league: League, season: i32, rng: &mut R) -> Result<Self, LeagueError> {
        league.generate_schedule(rng)?;

        info!("{} {} season started", league.name, season);

        Ok(Season {
            league,
            context: SeasonContext::new(season, 0),
        })
    }

    pub fn is_finished(&self) -> bool {
        self.context.week >= self.league.schedule.number_of_rounds()
    }

    /// Plays the current week and moves on to the next one. Returns `None`
    /// once every week has been played.
    pub fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Option<LeagueResult>, LeagueError> {
        if self.is_finished() {
            return Ok(None);
        }

        let result = self.league.simulate(&self.context, rng)?;
        self.context = self.context.next_week();

        if self.is_finished() {
            if let Some(champion) = self.champion() {
                info!(
                    "{} {} season finished, champion: {} ({} pts)",
                    self.league.name, self.context.season, champion.club_name, champion.points
                );
            }
        }

        Ok(Some(result))
    }

    /// Plays every remaining week with the selections as they stand.
    pub fn play_to_end<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Vec<LeagueResult>, LeagueError> {
        let mut results = Vec::new();

        while let Some(result) = self.advance(rng)? {
            results.push(result);
        }

        Ok(results)
    }

    pub fn standings(&self) -> Vec<StandingsEntry> {
        self.league.table.snapshot(self.context.sort_mode())
    }

    pub fn champion(&self) -> Option<StandingsEntry> {
        self.league.table.find_champion()
    }

    /// Date of the week about to be played.
    pub fn matchday(&self) -> Option<NaiveDate> {
        MatchdayCalendar::new(self.context.season).date_for_week(self.context.week)
    }

    pub fn start_next_season<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), LeagueError> {
        self.league.reset_season(rng)?;
        self.context = SeasonContext::new(self.context.season + 1, 0);

        info!("{} {} season started", self.league.name, self.context.season);

        Ok(())
    }
}
