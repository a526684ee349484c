use crate::LeagueError;
use crate::club::{Form, FormResult};
use crate::league::Fixture;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortMode {
    /// Alphabetical, before a ball has been kicked.
    PreSeason,
    InSeason,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingsEntry {
    pub club_id: u32,
    pub club_name: String,
    pub played: u16,
    pub wins: u16,
    pub draws: u16,
    pub losses: u16,
    pub goals_for: u16,
    pub goals_against: u16,
    pub goal_difference: i32,
    pub points: u16,
    pub form: Form,
}

impl StandingsEntry {
    pub fn new(club_id: u32, club_name: String) -> Self {
        StandingsEntry {
            club_id,
            club_name,
            played: 0,
            wins: 0,
            draws: 0,
            losses: 0,
            goals_for: 0,
            goals_against: 0,
            goal_difference: 0,
            points: 0,
            form: Form::new(),
        }
    }

    fn record(&mut self, scored: u8, conceded: u8, result: FormResult) {
        self.played += 1;
        self.goals_for += scored as u16;
        self.goals_against += conceded as u16;
        self.goal_difference = self.goals_for as i32 - self.goals_against as i32;

        match result {
            FormResult::Win => {
                self.wins += 1;
                self.points += 3;
            }
            FormResult::Draw => {
                self.draws += 1;
                self.points += 1;
            }
            FormResult::Loss => self.losses += 1,
        }

        self.form.add(result);
    }

    fn reset(&mut self) {
        *self = StandingsEntry::new(self.club_id, std::mem::take(&mut self.club_name));
    }

    /// Points, goal difference and goals scored high to low, goals conceded low to high.
    fn in_season_order(&self, other: &Self) -> Ordering {
        other
            .points
            .cmp(&self.points)
            .then(other.goal_difference.cmp(&self.goal_difference))
            .then(other.goals_for.cmp(&self.goals_for))
            .then(self.goals_against.cmp(&other.goals_against))
    }
}

/// Standings rows in insertion order. Sorting only happens on snapshots.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeagueTable {
    rows: Vec<StandingsEntry>,
    #[serde(default)]
    applied_fixtures: HashSet<u32>,
}

impl LeagueTable {
    pub fn new(clubs: &[(u32, String)]) -> Self {
        LeagueTable {
            rows: clubs
                .iter()
                .map(|(club_id, name)| StandingsEntry::new(*club_id, name.clone()))
                .collect(),
            applied_fixtures: HashSet::new(),
        }
    }

    pub fn entry(&self, club_id: u32) -> Option<&StandingsEntry> {
        self.rows.iter().find(|row| row.club_id == club_id)
    }

    pub fn form(&self, club_id: u32) -> Option<&Form> {
        self.entry(club_id).map(|row| &row.form)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn position_of(&self, club_id: u32) -> Result<usize, LeagueError> {
        self.rows
            .iter()
            .position(|row| row.club_id == club_id)
            .ok_or(LeagueError::UnknownClubId { club_id })
    }

    /// Records a played fixture for both clubs, once per fixture id.
    /// Nothing changes on error.
    pub fn apply_result(&mut self, fixture: &Fixture) -> Result<(), LeagueError> {
        let result = match fixture.result() {
            Some(result) if fixture.is_resolved() => result,
            _ => {
                return Err(LeagueError::UnplayedFixture {
                    fixture_id: fixture.id,
                });
            }
        };

        if self.applied_fixtures.contains(&fixture.id) {
            return Err(LeagueError::DuplicateResolution {
                fixture_id: fixture.id,
            });
        }

        // The result must belong to the fixture's own clubs
        for (reported, scheduled) in [
            (result.home.club_id, fixture.home_club_id),
            (result.away.club_id, fixture.away_club_id),
        ] {
            if reported != scheduled {
                return Err(LeagueError::UnknownClubId { club_id: reported });
            }
        }

        let home = self.position_of(fixture.home_club_id)?;
        let away = self.position_of(fixture.away_club_id)?;

        let (home_form, away_form) = result.outcome().form_results();

        self.rows[home].record(result.home_goals(), result.away_goals(), home_form);
        self.rows[away].record(result.away_goals(), result.home_goals(), away_form);

        self.applied_fixtures.insert(fixture.id);

        Ok(())
    }

    pub fn snapshot(&self, sort_mode: SortMode) -> Vec<StandingsEntry> {
        match sort_mode {
            SortMode::PreSeason => self
                .rows
                .iter()
                .sorted_by(|a, b| a.club_name.cmp(&b.club_name))
                .cloned()
                .collect(),
            SortMode::InSeason => self
                .rows
                .iter()
                .sorted_by(|a, b| a.in_season_order(b))
                .cloned()
                .collect(),
        }
    }

    /// 1-based league position.
    pub fn find_position(&self, club_id: u32) -> Result<usize, LeagueError> {
        self.snapshot(SortMode::InSeason)
            .iter()
            .position(|row| row.club_id == club_id)
            .map(|index| index + 1)
            .ok_or(LeagueError::UnknownClubId { club_id })
    }

    pub fn find_champion(&self) -> Option<StandingsEntry> {
        self.snapshot(SortMode::InSeason).into_iter().next()
    }

    pub fn total_played(&self) -> u32 {
        self.rows.iter().map(|row| row.played as u32).sum()
    }

    pub fn total_points(&self) -> u32 {
        self.rows.iter().map(|row| row.points as u32).sum()
    }

    pub fn reset(&mut self) {
        self.rows.iter_mut().for_each(StandingsEntry::reset);
        self.applied_fixtures.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::r#match::{MatchResult, TeamMatchReport};
    use proptest::prelude::*;

    fn create_table() -> LeagueTable {
        LeagueTable::new(&[
            (1, "Rovers".to_string()),
            (2, "Albion".to_string()),
            (3, "United".to_string()),
            (4, "City".to_string()),
        ])
    }

    fn played_fixture(id: u32, home: u32, away: u32, home_goals: u8, away_goals: u8) -> Fixture {
        let mut fixture = Fixture::new(id, 0, home, away, 1);
        fixture
            .resolve(MatchResult::new(
                TeamMatchReport::new(home, home_goals),
                TeamMatchReport::new(away, away_goals),
            ))
            .unwrap();
        fixture
    }

    #[test]
    fn test_apply_home_win() {
        let mut table = create_table();

        table.apply_result(&played_fixture(1, 1, 2, 3, 1)).unwrap();

        let home = table.entry(1).unwrap();
        assert_eq!((home.played, home.wins, home.points), (1, 1, 3));
        assert_eq!((home.goals_for, home.goals_against, home.goal_difference), (3, 1, 2));
        assert_eq!(home.form.summary(6), "W");

        let away = table.entry(2).unwrap();
        assert_eq!((away.played, away.losses, away.points), (1, 1, 0));
        assert_eq!(away.goal_difference, -2);
        assert_eq!(away.form.summary(6), "L");
    }

    #[test]
    fn test_apply_draw() {
        let mut table = create_table();

        table.apply_result(&played_fixture(1, 3, 4, 2, 2)).unwrap();

        for club_id in [3, 4] {
            let row = table.entry(club_id).unwrap();
            assert_eq!((row.played, row.draws, row.points), (1, 1, 1));
            assert_eq!(row.goal_difference, 0);
        }
    }

    #[test]
    fn test_unplayed_fixture_rejected() {
        let mut table = create_table();

        assert_eq!(
            table.apply_result(&Fixture::new(8, 0, 1, 2, 1)),
            Err(LeagueError::UnplayedFixture { fixture_id: 8 })
        );
    }

    #[test]
    fn test_unknown_club_leaves_table_untouched() {
        let mut table = create_table();
        let before = table.clone();

        assert_eq!(
            table.apply_result(&played_fixture(1, 1, 99, 1, 0)),
            Err(LeagueError::UnknownClubId { club_id: 99 })
        );
        assert_eq!(table, before);
    }

    #[test]
    fn test_fixture_counted_once() {
        let mut table = create_table();
        let fixture = played_fixture(5, 1, 2, 2, 0);

        table.apply_result(&fixture).unwrap();
        let before = table.clone();

        assert_eq!(
            table.apply_result(&fixture),
            Err(LeagueError::DuplicateResolution { fixture_id: 5 })
        );
        assert_eq!(table, before);
        assert_eq!(table.total_played(), 2);
        assert_eq!(table.total_points(), 3);
    }

    #[test]
    fn test_result_for_other_clubs_rejected() {
        let mut table = create_table();
        let before = table.clone();

        let mut fixture = Fixture::new(6, 0, 1, 2, 1);
        fixture
            .resolve(MatchResult::new(
                TeamMatchReport::new(3, 1),
                TeamMatchReport::new(2, 0),
            ))
            .unwrap();

        assert_eq!(
            table.apply_result(&fixture),
            Err(LeagueError::UnknownClubId { club_id: 3 })
        );
        assert_eq!(table, before);
    }

    #[test]
    fn test_pre_season_sorted_by_name() {
        let table = create_table();

        let names: Vec<String> = table
            .snapshot(SortMode::PreSeason)
            .into_iter()
            .map(|row| row.club_name)
            .collect();

        assert_eq!(names, vec!["Albion", "City", "Rovers", "United"]);
    }

    #[test]
    fn test_in_season_tie_breakers() {
        let mut table = create_table();

        // 1 and 3 on 3 points with +1; 3 scored more
        table.apply_result(&played_fixture(1, 1, 2, 1, 0)).unwrap();
        table.apply_result(&played_fixture(2, 3, 4, 3, 2)).unwrap();

        let order: Vec<u32> = table
            .snapshot(SortMode::InSeason)
            .iter()
            .map(|row| row.club_id)
            .collect();

        // 4 lost but scored twice
        assert_eq!(order, vec![3, 1, 4, 2]);
        assert_eq!(table.find_position(3), Ok(1));
        assert_eq!(table.find_position(2), Ok(4));
        assert_eq!(table.find_champion().map(|row| row.club_id), Some(3));
    }

    #[test]
    fn test_fewer_goals_against_ranks_higher() {
        let mut table = LeagueTable::new(&[(1, "A".to_string()), (2, "B".to_string())]);

        // same points, difference and goals for
        table.rows[0].record(2, 2, FormResult::Draw);
        table.rows[1].record(2, 2, FormResult::Draw);
        table.rows[0].goals_against = 3;

        let order: Vec<u32> = table
            .snapshot(SortMode::InSeason)
            .iter()
            .map(|row| row.club_id)
            .collect();

        assert_eq!(order, vec![2, 1]);
    }

    #[test]
    fn test_ties_keep_insertion_order() {
        let table = create_table();

        let first = table.snapshot(SortMode::InSeason);
        let second = table.snapshot(SortMode::InSeason);

        assert_eq!(first, second);
        assert_eq!(
            first.iter().map(|row| row.club_id).collect::<Vec<_>>(),
            vec![1, 2, 3, 4]
        );
    }

    #[test]
    fn test_reset_keeps_clubs() {
        let mut table = create_table();
        table.apply_result(&played_fixture(1, 1, 2, 3, 1)).unwrap();

        table.reset();

        assert_eq!(table.len(), 4);
        assert_eq!(table.total_played(), 0);
        assert_eq!(table.entry(1).unwrap().club_name, "Rovers");
        assert!(table.form(1).unwrap().is_empty());

        // fixture ids start over next season
        table.apply_result(&played_fixture(1, 1, 2, 0, 0)).unwrap();
        assert_eq!(table.total_played(), 2);
    }

    #[test]
    fn test_find_position_unknown_club() {
        assert_eq!(
            create_table().find_position(42),
            Err(LeagueError::UnknownClubId { club_id: 42 })
        );
    }

    proptest! {
        #[test]
        fn test_table_invariants_hold(results in prop::collection::vec((0u32..4, 1u32..4, 0u8..6, 0u8..6), 0..60)) {
            let mut table = create_table();
            let mut expected_points = 0;

            for (index, (home, offset, home_goals, away_goals)) in results.iter().enumerate() {
                let home_id = home + 1;
                let away_id = (home + offset) % 4 + 1;

                let fixture = played_fixture(index as u32 + 1, home_id, away_id, *home_goals, *away_goals);
                expected_points += fixture.result().unwrap().outcome().points_awarded();

                table.apply_result(&fixture).unwrap();
            }

            prop_assert_eq!(table.total_played(), 2 * results.len() as u32);
            prop_assert_eq!(table.total_points(), expected_points);

            let snapshot = table.snapshot(SortMode::InSeason);
            for row in &snapshot {
                prop_assert_eq!(row.goal_difference, row.goals_for as i32 - row.goals_against as i32);
                prop_assert_eq!(row.played, row.wins + row.draws + row.losses);
            }

            for pair in snapshot.windows(2) {
                prop_assert_ne!(pair[0].in_season_order(&pair[1]), Ordering::Greater);
            }
        }
    }
}
