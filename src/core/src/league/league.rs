use crate::context::SeasonContext;
use crate::league::{Fixture, FixtureScheduler, LeagueResult, LeagueSettings, LeagueTable, Referee, Schedule};
use crate::r#match::{MatchEngine, MatchModifiers, MatchResult, MatchSquad, TeamMatchReport};
use crate::utils::Logging;
use crate::{Club, LeagueError};
use log::{debug, info};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use std::collections::HashSet;

#[derive(Debug)]
pub struct League {
    pub id: u32,
    pub name: String,
    pub clubs: Vec<Club>,
    pub referees: Vec<Referee>,
    pub schedule: Schedule,
    pub table: LeagueTable,
    pub settings: LeagueSettings,
    engine: MatchEngine,
}

/// Everything needed to play one fixture, gathered before any randomness is drawn.
struct PreparedMatch {
    fixture_id: u32,
    home: MatchSquad,
    away: MatchSquad,
    home_modifiers: MatchModifiers,
    away_modifiers: MatchModifiers,
    seed: u64,
}

impl League {
    pub fn new(
        id: u32,
        name: String,
        clubs: Vec<Club>,
        referees: Vec<Referee>,
        settings: LeagueSettings,
    ) -> Result<Self, LeagueError> {
        if clubs.is_empty() || clubs.len() % 2 != 0 {
            return Err(LeagueError::InvalidClubCount { count: clubs.len() });
        }

        let mut seen = HashSet::with_capacity(clubs.len());
        for club in &clubs {
            if !seen.insert(club.id) {
                return Err(LeagueError::DuplicateClubId { club_id: club.id });
            }
        }

        let table_clubs: Vec<(u32, String)> = clubs.iter().map(|c| (c.id, c.name.clone())).collect();

        Ok(League {
            id,
            name,
            clubs,
            referees,
            schedule: Schedule::default(),
            table: LeagueTable::new(&table_clubs),
            engine: MatchEngine::new(settings.engine.clone()),
            settings,
        })
    }

    pub fn club(&self, club_id: u32) -> Option<&Club> {
        self.clubs.iter().find(|c| c.id == club_id)
    }

    pub fn club_mut(&mut self, club_id: u32) -> Option<&mut Club> {
        self.clubs.iter_mut().find(|c| c.id == club_id)
    }

    pub fn club_ids(&self) -> Vec<u32> {
        self.clubs.iter().map(|c| c.id).collect()
    }

    pub fn generate_schedule<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), LeagueError> {
        let referee_ids = self.referees.iter().map(|r| r.id).collect();

        self.schedule = FixtureScheduler::new(referee_ids).generate(&self.club_ids(), rng)?;

        info!(
            "{}: {} fixtures scheduled over {} weeks",
            self.name,
            self.schedule.len(),
            self.schedule.number_of_rounds()
        );

        Ok(())
    }

    pub fn auto_select_clubs(&mut self) {
        self.clubs.iter_mut().for_each(Club::auto_select);
    }

    /// Plays every fixture of `ctx.week`. All selections are checked before
    /// the first random number is drawn, so a failed week changes nothing.
    pub fn simulate<R: Rng + ?Sized>(
        &mut self,
        ctx: &SeasonContext,
        rng: &mut R,
    ) -> Result<LeagueResult, LeagueError> {
        let prepared = self.prepare_week(ctx.week)?;

        // One seed per fixture, in id order, keeps parallel play reproducible
        let prepared: Vec<PreparedMatch> = prepared
            .into_iter()
            .map(|mut m| {
                m.seed = rng.next_u64();
                m
            })
            .collect();

        let engine = &self.engine;
        let message = format!("play week {} of {}", ctx.week, self.name);

        let results = Logging::estimate_result(
            || {
                prepared
                    .par_iter()
                    .map(|m| {
                        let mut match_rng = ChaCha8Rng::seed_from_u64(m.seed);
                        engine.resolve(
                            &m.home,
                            &m.away,
                            &m.home_modifiers,
                            &m.away_modifiers,
                            &mut match_rng,
                        )
                    })
                    .collect::<Result<Vec<MatchResult>, LeagueError>>()
            },
            &message,
        )?;

        self.recover_players();

        let mut fixtures = Vec::with_capacity(results.len());
        for (prepared_match, result) in prepared.iter().zip(results) {
            fixtures.push(self.apply_match(prepared_match, result)?);
        }

        info!(
            "{}: week {} played, {} fixtures",
            self.name,
            ctx.week,
            fixtures.len()
        );

        Ok(LeagueResult::new(self.id, ctx.week, fixtures))
    }

    fn prepare_week(&self, week: u32) -> Result<Vec<PreparedMatch>, LeagueError> {
        let mut prepared = Vec::new();

        for fixture in self.schedule.fixtures_for_week(week) {
            if fixture.is_resolved() {
                return Err(LeagueError::DuplicateResolution {
                    fixture_id: fixture.id,
                });
            }

            let (home, home_modifiers) = self.prepare_side(fixture.home_club_id)?;
            let (away, away_modifiers) = self.prepare_side(fixture.away_club_id)?;

            prepared.push(PreparedMatch {
                fixture_id: fixture.id,
                home,
                away,
                home_modifiers,
                away_modifiers,
                seed: 0,
            });
        }

        Ok(prepared)
    }

    fn prepare_side(&self, club_id: u32) -> Result<(MatchSquad, MatchModifiers), LeagueError> {
        let club = self.club(club_id).ok_or(LeagueError::UnknownClubId { club_id })?;
        let form = self.table.form(club_id).ok_or(LeagueError::UnknownClubId { club_id })?;

        let squad = MatchSquad::from_club(club)?;
        squad.validate()?;

        Ok((squad, MatchModifiers::from_club(club, form)))
    }

    fn apply_match(&mut self, prepared: &PreparedMatch, result: MatchResult) -> Result<Fixture, LeagueError> {
        let fixture = self.schedule.resolve(prepared.fixture_id, result)?.clone();

        self.table.apply_result(&fixture)?;

        if let Some(referee) = self.referees.iter_mut().find(|r| r.id == fixture.referee_id) {
            referee.increment_appearance();
        }

        if let Some(result) = fixture.result() {
            debug!("fixture {}: {}", fixture.id, fixture);

            self.apply_report(&prepared.home, &result.home)?;
            self.apply_report(&prepared.away, &result.away)?;
        }

        Ok(fixture)
    }

    /// Player statistics and injuries from one side's match.
    fn apply_report(&mut self, squad: &MatchSquad, report: &TeamMatchReport) -> Result<(), LeagueError> {
        let club_id = report.club_id;
        let club = self.club_mut(club_id).ok_or(LeagueError::UnknownClubId { club_id })?;

        for starter in squad.players() {
            if let Some(player) = club.player_mut(starter.id) {
                player.statistics.appearances += 1;
            }
        }

        for &player_id in &report.substitutes_used {
            if let Some(player) = club.player_mut(player_id) {
                player.statistics.substitute_appearances += 1;
            }
        }

        for goal in &report.goal_details {
            if let Some(player) = club.player_mut(goal.scorer_id) {
                player.statistics.goals += 1;
            }

            if let Some(assist_id) = goal.assist_id {
                if let Some(player) = club.player_mut(assist_id) {
                    player.statistics.assists += 1;
                }
            }
        }

        for injury in &report.injuries {
            if let Some(player) = club.players.iter_mut().find(|p| p.id == injury.player_id) {
                debug!(
                    "{}: {} out for {} weeks ({})",
                    club.name,
                    player.name,
                    injury.weeks,
                    injury.injury_type.name()
                );
                player.apply_injury(injury);
            }
        }

        Ok(())
    }

    /// Weekly injury countdown and condition recovery for every player.
    fn recover_players(&mut self) {
        let fitness = self.settings.fitness_recovery_per_week;
        let fatigue = self.settings.fatigue_recovery_per_week;

        self.clubs
            .iter_mut()
            .flat_map(|club| club.players.iter_mut())
            .for_each(|player| player.recover_week(fitness, fatigue));
    }

    /// Clears the table, referee and player statistics and draws a new schedule.
    pub fn reset_season<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), LeagueError> {
        self.table.reset();
        self.referees.iter_mut().for_each(Referee::reset_statistics);

        self.clubs
            .iter_mut()
            .flat_map(|club| club.players.iter_mut())
            .for_each(|player| player.statistics.reset());

        self.generate_schedule(rng)
    }
}
