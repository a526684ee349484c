use crate::club::PlayerPositionType;
use crate::r#match::{GoalDetail, MatchPlayer, MatchSquad};
use rand::Rng;
use rand::distributions::{Distribution, WeightedIndex};
use rand::seq::SliceRandom;

/// Goal count of the winning (or drawing) side: one goal, then a fixed number
/// of chances to add another, the chance halving after every success.
pub fn winning_goals<R: Rng + ?Sized>(
    goal_chance: u32,
    max_extra_goals: u8,
    min_goal_chance: u32,
    rng: &mut R,
) -> u8 {
    let mut goals = 1;
    let mut chance = goal_chance;

    for _ in 0..max_extra_goals {
        if rng.gen_range(0..100) < chance {
            goals += 1;
            chance = (chance / 2).max(min_goal_chance);
        }
    }

    goals
}

/// Goal count of the losing side, strictly below the winner's.
pub fn losing_goals<R: Rng + ?Sized>(winning_goals: u8, rng: &mut R) -> u8 {
    rng.gen_range(0..winning_goals.max(1))
}

/// How likely a player is to score, by position.
pub fn scoring_weight(player: &MatchPlayer) -> u32 {
    match player.position {
        PlayerPositionType::Goalkeeper => 1,
        PlayerPositionType::Defender => player.skills.tackling as u32,
        PlayerPositionType::Midfielder => (player.skills.passing as f32 * 2.5) as u32,
        PlayerPositionType::Attacker => player.skills.shooting as u32 * 5,
    }
}

/// Scorer and assister for each of `goals` goals.
pub fn goal_details<R: Rng + ?Sized>(squad: &MatchSquad, goals: u8, rng: &mut R) -> Vec<GoalDetail> {
    let players: Vec<&MatchPlayer> = squad.players().collect();
    if players.is_empty() {
        return Vec::new();
    }

    let weights: Vec<u32> = players.iter().map(|p| scoring_weight(p)).collect();
    // WeightedIndex rejects an all-zero table
    let distribution = WeightedIndex::new(&weights).ok();

    (0..goals)
        .map(|_| {
            let scorer = match &distribution {
                Some(distribution) => players[distribution.sample(rng)],
                None => players[rng.gen_range(0..players.len())],
            };

            let teammates: Vec<&&MatchPlayer> = players.iter().filter(|p| p.id != scorer.id).collect();
            let assist_id = teammates.choose(rng).map(|p| p.id);

            GoalDetail {
                scorer_id: scorer.id,
                assist_id,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::club::{PlayerSkills, STARTING_SLOTS};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn create_match_player(id: u32, position: PlayerPositionType, skills: PlayerSkills) -> MatchPlayer {
        MatchPlayer {
            id,
            position,
            skills,
            fatigue: 0,
        }
    }

    #[test]
    fn test_winning_goals_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);

        for _ in 0..2000 {
            let goals = winning_goals(65, 7, 1, &mut rng);
            assert!((1..=8).contains(&goals));
        }
    }

    #[test]
    fn test_no_chance_means_single_goal() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);

        assert_eq!(winning_goals(0, 7, 0, &mut rng), 1);
    }

    #[test]
    fn test_losing_goals_below_winner() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);

        for winner in 1..=8 {
            for _ in 0..200 {
                assert!(losing_goals(winner, &mut rng) < winner);
            }
        }
    }

    #[test]
    fn test_scoring_weights() {
        let mut skills = PlayerSkills::uniform(0);
        skills.tackling = 12;
        skills.passing = 7;
        skills.shooting = 15;

        assert_eq!(scoring_weight(&create_match_player(1, PlayerPositionType::Goalkeeper, skills)), 1);
        assert_eq!(scoring_weight(&create_match_player(2, PlayerPositionType::Defender, skills)), 12);
        assert_eq!(scoring_weight(&create_match_player(3, PlayerPositionType::Midfielder, skills)), 17);
        assert_eq!(scoring_weight(&create_match_player(4, PlayerPositionType::Attacker, skills)), 75);
    }

    #[test]
    fn test_zero_weight_players_never_score() {
        let mut starters = vec![None; STARTING_SLOTS];
        starters[0] = Some(create_match_player(1, PlayerPositionType::Goalkeeper, PlayerSkills::uniform(0)));
        starters[3] = Some(create_match_player(2, PlayerPositionType::Defender, PlayerSkills::uniform(0)));
        let squad = MatchSquad::new(1, starters, Vec::new());
        let mut rng = ChaCha8Rng::seed_from_u64(2);

        let details = goal_details(&squad, 8, &mut rng);

        assert_eq!(details.len(), 8);
        assert!(details.iter().all(|goal| goal.scorer_id == 1));
        assert!(details.iter().all(|goal| goal.assist_id == Some(2)));
    }

    #[test]
    fn test_all_zero_weights_fall_back_to_uniform() {
        let mut starters = vec![None; STARTING_SLOTS];
        starters[1] = Some(create_match_player(1, PlayerPositionType::Defender, PlayerSkills::uniform(0)));
        starters[2] = Some(create_match_player(2, PlayerPositionType::Defender, PlayerSkills::uniform(0)));
        let squad = MatchSquad::new(1, starters, Vec::new());
        let mut rng = ChaCha8Rng::seed_from_u64(9);

        let details = goal_details(&squad, 50, &mut rng);

        assert!(details.iter().any(|goal| goal.scorer_id == 1));
        assert!(details.iter().any(|goal| goal.scorer_id == 2));
    }

    #[test]
    fn test_lone_scorer_has_no_assist() {
        let mut starters = vec![None; STARTING_SLOTS];
        starters[9] = Some(create_match_player(9, PlayerPositionType::Attacker, PlayerSkills::uniform(10)));
        let squad = MatchSquad::new(1, starters, Vec::new());
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let details = goal_details(&squad, 3, &mut rng);

        assert_eq!(
            details,
            vec![
                GoalDetail {
                    scorer_id: 9,
                    assist_id: None
                };
                3
            ]
        );
    }
}
