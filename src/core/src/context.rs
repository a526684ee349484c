use crate::league::SortMode;
use serde::{Deserialize, Serialize};

/// Where the league is in time. Passed explicitly to everything that depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonContext {
    /// Year the season starts in.
    pub season: i32,
    /// Next week to be played, 0-based.
    pub week: u32,
}

impl SeasonContext {
    pub fn new(season: i32, week: u32) -> Self {
        SeasonContext { season, week }
    }

    pub fn sort_mode(&self) -> SortMode {
        if self.week == 0 {
            SortMode::PreSeason
        } else {
            SortMode::InSeason
        }
    }

    pub fn next_week(&self) -> Self {
        SeasonContext::new(self.season, self.week + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_mode_follows_week() {
        let ctx = SeasonContext::new(2024, 0);
        assert_eq!(ctx.sort_mode(), SortMode::PreSeason);

        let ctx = ctx.next_week();
        assert_eq!(ctx.week, 1);
        assert_eq!(ctx.sort_mode(), SortMode::InSeason);
    }
}
