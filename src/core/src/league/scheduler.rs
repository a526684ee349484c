use crate::LeagueError;
use crate::league::{Fixture, Schedule};
use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;

/// Builds a double round robin with the circle method.
#[derive(Debug, Clone)]
pub struct FixtureScheduler {
    referee_ids: Vec<u32>,
}

impl FixtureScheduler {
    pub fn new(referee_ids: Vec<u32>) -> Self {
        FixtureScheduler { referee_ids }
    }

    pub fn generate<R: Rng + ?Sized>(&self, club_ids: &[u32], rng: &mut R) -> Result<Schedule, LeagueError> {
        let club_count = club_ids.len();
        if club_count == 0 || club_count % 2 != 0 {
            return Err(LeagueError::InvalidClubCount { count: club_count });
        }

        let matches_per_week = club_count / 2;
        if self.referee_ids.len() < matches_per_week {
            return Err(LeagueError::NotEnoughReferees {
                required: matches_per_week,
                available: self.referee_ids.len(),
            });
        }

        let mut clubs = club_ids.to_vec();
        clubs.shuffle(rng);

        let rounds = club_count - 1;

        // (week, home, away) for the first half
        let mut pairings: Vec<(u32, u32, u32)> = Vec::with_capacity(rounds * matches_per_week);
        for week in 0..rounds {
            for pairing in 0..matches_per_week {
                let first = (week + pairing) % rounds;
                let second = if pairing == 0 {
                    rounds
                } else {
                    (club_count - 1 - pairing + week) % rounds
                };

                let (home, away) = if week % 2 == 1 {
                    (clubs[first], clubs[second])
                } else {
                    (clubs[second], clubs[first])
                };

                pairings.push((week as u32, home, away));
            }
        }

        // Return legs mirror the first half with venues swapped
        let return_legs: Vec<(u32, u32, u32)> = pairings
            .iter()
            .map(|&(week, home, away)| (week + rounds as u32, away, home))
            .collect();
        pairings.extend(return_legs);

        let mut fixtures = Vec::with_capacity(pairings.len());
        for week_pairings in pairings.chunks(matches_per_week) {
            let referees = self.referees_for_week(rng);

            for (&(week, home, away), &referee_id) in week_pairings.iter().zip(referees.iter()) {
                let id = fixtures.len() as u32 + 1;
                fixtures.push(Fixture::new(id, week, home, away, referee_id));
            }
        }

        debug!(
            "generated {} fixtures over {} weeks for {} clubs",
            fixtures.len(),
            rounds * 2,
            club_count
        );

        Ok(Schedule::new(club_count, fixtures))
    }

    /// The whole referee pool in a fresh random order.
    fn referees_for_week<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<u32> {
        let mut referees = self.referee_ids.clone();
        referees.shuffle(rng);
        referees
    }
}
