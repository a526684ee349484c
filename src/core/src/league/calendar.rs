use chrono::{Duration, NaiveDate};

/// Matchdays of a season as (day, month). Dates from January on fall in the
/// year after the season starts.
const MATCHDAYS: [(u32, u32); 38] = [
    (16, 8),
    (23, 8),
    (30, 8),
    (13, 9),
    (20, 9),
    (27, 9),
    (4, 10),
    (18, 10),
    (25, 10),
    (1, 11),
    (8, 11),
    (22, 11),
    (29, 11),
    (2, 12),
    (6, 12),
    (13, 12),
    (20, 12),
    (26, 12),
    (28, 12),
    (1, 1),
    (10, 1),
    (17, 1),
    (31, 1),
    (7, 2),
    (10, 2),
    (21, 2),
    (28, 2),
    (3, 3),
    (14, 3),
    (21, 3),
    (4, 4),
    (11, 4),
    (18, 4),
    (25, 4),
    (2, 5),
    (9, 5),
    (16, 5),
    (24, 5),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchdayCalendar {
    season: i32,
}

impl MatchdayCalendar {
    pub fn new(season: i32) -> Self {
        MatchdayCalendar { season }
    }

    pub fn season(&self) -> i32 {
        self.season
    }

    /// Date of a week's matches. Leagues with more rounds than listed
    /// matchdays keep playing weekly after the last one.
    pub fn date_for_week(&self, week: u32) -> Option<NaiveDate> {
        let index = week as usize;

        if let Some(&(day, month)) = MATCHDAYS.get(index) {
            let year = if month < 8 { self.season + 1 } else { self.season };
            return NaiveDate::from_ymd_opt(year, month, day);
        }

        let last = self.date_for_week(MATCHDAYS.len() as u32 - 1)?;
        let extra_weeks = (index - (MATCHDAYS.len() - 1)) as i64;

        last.checked_add_signed(Duration::weeks(extra_weeks))
    }
}
