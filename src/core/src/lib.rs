pub mod club;
pub mod context;
pub mod error;
pub mod league;
pub mod r#match;
pub mod utils;

pub use club::{
    Club, Form, FormResult, Player, PlayerBuilder, PlayerCondition, PlayerInjury,
    PlayerPositionType, PlayerSkills, PlayerStatistics, PlayingStyle, TeamSelection,
    InjurySeverity, InjuryType,
};
pub use context::SeasonContext;
pub use error::LeagueError;
pub use league::{
    Fixture, FixtureScheduler, League, LeagueResult, LeagueSettings, LeagueTable, MatchdayCalendar,
    Referee, Schedule, Season, SortMode, StandingsEntry, Venue,
};
pub use r#match::{EngineSettings, MatchEngine, MatchOutcome, MatchResult, MatchSquad};
