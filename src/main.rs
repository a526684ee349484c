use database::{DatabaseGenerator, DatabaseLoader};
use env_logger::Env;
use league_core::utils::TimeEstimation;
use league_core::{Fixture, League, LeagueError, LeagueSettings, Season};
use log::{debug, info};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::env;

const SEASON_START_YEAR: i32 = 2024;
const FORM_LENGTH: usize = 6;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let seed = match env::var("SEED") {
        Ok(value) => value.parse::<u64>()?,
        Err(_) => rand::thread_rng().next_u64(),
    };

    let club_count = match env::var("CLUBS") {
        Ok(value) => Some(value.parse::<usize>()?),
        Err(_) => None,
    };

    info!("seed: {}", seed);

    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let (database, estimated) = TimeEstimation::estimate(DatabaseLoader::load);
    let database = database?;

    info!("database loaded: {} ms", estimated);

    let league = DatabaseGenerator::generate(&database, club_count, LeagueSettings::default(), &mut rng)?;
    let mut season = Season::start(league, SEASON_START_YEAR, &mut rng)?;

    let (result, estimated) = TimeEstimation::estimate(|| play_season(&mut season, &mut rng));
    result?;

    info!("season played: {} ms", estimated);

    print_table(&season);
    print_top_scorer(&season.league);

    Ok(())
}

fn play_season(season: &mut Season, rng: &mut ChaCha8Rng) -> Result<(), LeagueError> {
    while !season.is_finished() {
        season.league.auto_select_clubs();

        if let Some(date) = season.matchday() {
            debug!("matchday {}: {}", season.context.week + 1, date);
        }

        if let Some(result) = season.advance(rng)? {
            for fixture in &result.fixtures {
                info!("{}", describe_fixture(&season.league, fixture));
            }
        }
    }

    Ok(())
}

fn club_name(league: &League, club_id: u32) -> &str {
    league.club(club_id).map(|c| c.name.as_str()).unwrap_or("?")
}

fn describe_fixture(league: &League, fixture: &Fixture) -> String {
    let home = club_name(league, fixture.home_club_id);
    let away = club_name(league, fixture.away_club_id);

    match fixture.result() {
        Some(result) => format!(
            "week {:>2}: {} {} - {} {}",
            fixture.week + 1,
            home,
            result.home_goals(),
            result.away_goals(),
            away
        ),
        None => format!("week {:>2}: {} v {}", fixture.week + 1, home, away),
    }
}

fn print_table(season: &Season) {
    info!(
        "{:>3} {:<24} {:>3} {:>3} {:>3} {:>3} {:>4} {:>4} {:>4} {:>4}  form",
        "#", "club", "P", "W", "D", "L", "GF", "GA", "GD", "Pts"
    );

    for (position, row) in season.standings().iter().enumerate() {
        info!(
            "{:>3} {:<24} {:>3} {:>3} {:>3} {:>3} {:>4} {:>4} {:>4} {:>4}  {}",
            position + 1,
            row.club_name,
            row.played,
            row.wins,
            row.draws,
            row.losses,
            row.goals_for,
            row.goals_against,
            row.goal_difference,
            row.points,
            row.form.summary(FORM_LENGTH)
        );
    }

    if let Some(champion) = season.champion() {
        info!("champion: {}", champion.club_name);
    }
}

fn print_top_scorer(league: &League) {
    let top_scorer = league
        .clubs
        .iter()
        .flat_map(|club| club.players.iter().map(move |player| (club, player)))
        .max_by_key(|(_, player)| player.statistics.goals);

    if let Some((club, player)) = top_scorer {
        info!(
            "top scorer: {} ({}), {} goals, {} assists",
            player.name, club.name, player.statistics.goals, player.statistics.assists
        );
    }
}
