use crate::league::Fixture;

/// Fixtures resolved during one simulated week, in fixture id order.
#[derive(Debug, Clone)]
pub struct LeagueResult {
    pub league_id: u32,
    pub week: u32,
    pub fixtures: Vec<Fixture>,
}

impl LeagueResult {
    pub fn new(league_id: u32, week: u32, fixtures: Vec<Fixture>) -> Self {
        LeagueResult {
            league_id,
            week,
            fixtures,
        }
    }

    pub fn goals(&self) -> u32 {
        self.fixtures
            .iter()
            .filter_map(|f| f.result())
            .map(|r| r.home_goals() as u32 + r.away_goals() as u32)
            .sum()
    }

    pub fn draws(&self) -> usize {
        self.fixtures
            .iter()
            .filter_map(|f| f.result())
            .filter(|r| r.is_draw())
            .count()
    }
}
