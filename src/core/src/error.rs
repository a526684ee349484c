use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LeagueError {
    #[error("a league needs an even, non-zero number of clubs, got {count}")]
    InvalidClubCount { count: usize },

    #[error("club {club_id} has no outfield players in its starting eleven")]
    IncompleteSelection { club_id: u32 },

    #[error("fixture {fixture_id} has already been resolved")]
    DuplicateResolution { fixture_id: u32 },

    #[error("club {club_id} is not part of the league")]
    UnknownClubId { club_id: u32 },

    // Lookup and integrity errors
    #[error("fixture {fixture_id} does not exist")]
    UnknownFixture { fixture_id: u32 },

    #[error("fixture {fixture_id} has not been played yet")]
    UnplayedFixture { fixture_id: u32 },

    #[error("club {club_id} is registered more than once")]
    DuplicateClubId { club_id: u32 },

    #[error("{required} referees are needed every week, only {available} available")]
    NotEnoughReferees { required: usize, available: usize },

    // Team selection errors
    #[error("player {player_id} is not registered with club {club_id}")]
    UnknownPlayerId { club_id: u32, player_id: u32 },

    #[error("starting slot {slot} does not exist")]
    InvalidSlot { slot: usize },

    #[error("the bench of club {club_id} is already full")]
    BenchFull { club_id: u32 },
}

impl LeagueError {
    /// Contract violations point at a bug in the caller rather than bad input.
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            LeagueError::DuplicateResolution { .. }
                | LeagueError::UnknownClubId { .. }
                | LeagueError::UnknownFixture { .. }
        )
    }
}
