use crate::club::InjuryType;
use crate::r#match::{EngineSettings, InjuryEvent, MatchSquad};
use rand::Rng;
use rand::seq::SliceRandom;

/// Bench players brought on, chosen at random.
pub fn substitutes<R: Rng + ?Sized>(squad: &MatchSquad, settings: &EngineSettings, rng: &mut R) -> Vec<u32> {
    let limit = settings.max_substitutions.min(squad.substitutes.len());
    let count = rng.gen_range(0..=limit);

    squad
        .substitutes
        .choose_multiple(rng, count)
        .map(|player| player.id)
        .collect()
}

/// At most one injury per side and match. Tired starters get extra entries
/// in the pool.
pub fn injury<R: Rng + ?Sized>(
    squad: &MatchSquad,
    settings: &EngineSettings,
    rng: &mut R,
) -> Option<InjuryEvent> {
    if rng.gen_range(0..100) >= settings.injury_chance {
        return None;
    }

    let mut pool: Vec<u32> = Vec::new();
    for player in squad.players() {
        pool.push(player.id);

        if player.fatigue > settings.fatigue_threshold {
            let extra = (player.fatigue / 100) as usize;
            pool.extend(std::iter::repeat_n(player.id, extra));
        }
    }

    let player_id = *pool.choose(rng)?;
    let injury_type = *InjuryType::ALL.choose(rng)?;

    let (min_weeks, max_weeks) = injury_type.period_range();
    let (min_impact, max_impact) = injury_type.impact_range();

    Some(InjuryEvent {
        player_id,
        injury_type,
        weeks: rng.gen_range(min_weeks..=max_weeks),
        fitness_impact: rng.gen_range(min_impact..=max_impact),
    })
}
