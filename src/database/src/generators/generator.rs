use crate::generators::PlayerGenerator;
use crate::{ClubEntity, DatabaseEntity};
use league_core::{Club, League, LeagueError, LeagueSettings, Player, PlayerPositionType, Referee};
use log::debug;
use rand::Rng;
use thiserror::Error;

pub const LEAGUE_ID: u32 = 1;
pub const LEAGUE_NAME: &str = "Premier Division";

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("{requested} clubs requested, only {available} bundled")]
    NotEnoughClubs { requested: usize, available: usize },

    #[error("failed to build player: {0}")]
    Player(String),

    #[error(transparent)]
    League(#[from] LeagueError),
}

pub struct DatabaseGenerator;

impl DatabaseGenerator {
    /// Builds a league from the bundled clubs with freshly generated squads.
    /// `club_count` takes the first clubs of the list, all of them when `None`.
    pub fn generate<R: Rng + ?Sized>(
        data: &DatabaseEntity,
        club_count: Option<usize>,
        settings: LeagueSettings,
        rng: &mut R,
    ) -> Result<League, GeneratorError> {
        let club_count = club_count.unwrap_or(data.clubs.len());
        if club_count > data.clubs.len() {
            return Err(GeneratorError::NotEnoughClubs {
                requested: club_count,
                available: data.clubs.len(),
            });
        }

        let mut player_generator = PlayerGenerator::with_people_names(&data.names);

        let clubs = data
            .clubs
            .iter()
            .take(club_count)
            .map(|club| Self::generate_club(club, &mut player_generator, rng))
            .collect::<Result<Vec<Club>, GeneratorError>>()?;

        let referees = data
            .referees
            .iter()
            .map(|referee| Referee::new(referee.id, referee.name.clone()))
            .collect();

        Ok(League::new(LEAGUE_ID, LEAGUE_NAME.to_string(), clubs, referees, settings)?)
    }

    fn generate_club<R: Rng + ?Sized>(
        club: &ClubEntity,
        player_generator: &mut PlayerGenerator,
        rng: &mut R,
    ) -> Result<Club, GeneratorError> {
        let players = Self::generate_players(player_generator, club.reputation, rng)?;

        debug!("generated {} players for {}", players.len(), club.name);

        Ok(Club::new(
            club.id,
            club.name.clone(),
            club.reputation,
            club.playing_style,
            players,
        ))
    }

    fn generate_players<R: Rng + ?Sized>(
        player_generator: &mut PlayerGenerator,
        club_reputation: u8,
        rng: &mut R,
    ) -> Result<Vec<Player>, GeneratorError> {
        let squad = [
            (PlayerPositionType::Goalkeeper, rng.gen_range(2..=3)),
            (PlayerPositionType::Defender, rng.gen_range(5..=7)),
            (PlayerPositionType::Midfielder, rng.gen_range(5..=7)),
            (PlayerPositionType::Attacker, rng.gen_range(3..=4)),
        ];

        let mut players = Vec::with_capacity(21);
        for (position, count) in squad {
            for _ in 0..count {
                let player = player_generator
                    .generate(position, club_reputation, rng)
                    .map_err(GeneratorError::Player)?;
                players.push(player);
            }
        }

        Ok(players)
    }
}
