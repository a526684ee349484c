use crate::r#match::engine::{events, goals};
use crate::r#match::{
    EngineSettings, MatchModifiers, MatchOutcome, MatchResult, MatchSquad, OutcomeWeights,
    SideRating, SkillAggregator, TeamMatchReport,
};
use crate::LeagueError;
use log::debug;
use rand::Rng;

/// Resolves a fixture into a score and the events around it in one shot.
#[derive(Debug, Clone, Default)]
pub struct MatchEngine {
    pub settings: EngineSettings,
}

impl MatchEngine {
    pub fn new(settings: EngineSettings) -> Self {
        MatchEngine { settings }
    }

    /// Fails with `IncompleteSelection` before touching `rng` when either
    /// side has no outfield starter.
    pub fn resolve<R: Rng + ?Sized>(
        &self,
        home: &MatchSquad,
        away: &MatchSquad,
        home_modifiers: &MatchModifiers,
        away_modifiers: &MatchModifiers,
        rng: &mut R,
    ) -> Result<MatchResult, LeagueError> {
        home.validate()?;
        away.validate()?;

        let weights = self.outcome_weights(home, away, home_modifiers, away_modifiers);
        let outcome = weights.pick(rng);

        let goal_chance = match outcome {
            MatchOutcome::AwayWin => away_modifiers.playing_style.goal_chance(),
            MatchOutcome::HomeWin | MatchOutcome::Draw => home_modifiers.playing_style.goal_chance(),
        };

        let winner_goals = goals::winning_goals(
            goal_chance,
            self.settings.max_extra_goals,
            self.settings.min_goal_chance,
            rng,
        );

        let (home_goals, away_goals) = match outcome {
            MatchOutcome::HomeWin => (winner_goals, goals::losing_goals(winner_goals, rng)),
            MatchOutcome::Draw => (winner_goals, winner_goals),
            MatchOutcome::AwayWin => (goals::losing_goals(winner_goals, rng), winner_goals),
        };

        let home_report = self.team_report(home, home_goals, rng);
        let away_report = self.team_report(away, away_goals, rng);

        debug!(
            "match {} vs {}: weights {}/{}/{}, score {}-{}",
            home.club_id,
            away.club_id,
            weights.home,
            weights.draw,
            weights.away,
            home_goals,
            away_goals
        );

        Ok(MatchResult::new(home_report, away_report))
    }

    pub fn outcome_weights(
        &self,
        home: &MatchSquad,
        away: &MatchSquad,
        home_modifiers: &MatchModifiers,
        away_modifiers: &MatchModifiers,
    ) -> OutcomeWeights {
        let home_rating = SideRating {
            strength: SkillAggregator::strength(home),
            reputation: home_modifiers.reputation,
        };
        let away_rating = SideRating {
            strength: SkillAggregator::strength(away),
            reputation: away_modifiers.reputation,
        };

        let home_advantage = home_modifiers.form.home_advantage(self.settings.home_form_length);

        OutcomeWeights::calculate(
            home_rating,
            away_rating,
            home_advantage,
            self.settings.reputation_factor,
        )
    }

    fn team_report<R: Rng + ?Sized>(&self, squad: &MatchSquad, goals: u8, rng: &mut R) -> TeamMatchReport {
        let mut report = TeamMatchReport::new(squad.club_id, goals);

        report.goal_details = goals::goal_details(squad, goals, rng);
        report.substitutes_used = events::substitutes(squad, &self.settings, rng);
        report.injuries = events::injury(squad, &self.settings, rng).into_iter().collect();

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::club::{Form, FormResult, PlayerPositionType, PlayerSkills, PlayingStyle, STARTING_SLOTS};
    use crate::r#match::MatchPlayer;
    use rand::{RngCore, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    const FORMATION: [PlayerPositionType; STARTING_SLOTS] = [
        PlayerPositionType::Goalkeeper,
        PlayerPositionType::Defender,
        PlayerPositionType::Defender,
        PlayerPositionType::Defender,
        PlayerPositionType::Defender,
        PlayerPositionType::Midfielder,
        PlayerPositionType::Midfielder,
        PlayerPositionType::Midfielder,
        PlayerPositionType::Midfielder,
        PlayerPositionType::Attacker,
        PlayerPositionType::Attacker,
    ];

    /// Eleven starters of skill 10 across the board, strength 990.
    fn create_squad(club_id: u32) -> MatchSquad {
        let starters = FORMATION
            .iter()
            .enumerate()
            .map(|(n, position)| {
                Some(MatchPlayer {
                    id: club_id * 100 + n as u32,
                    position: *position,
                    skills: PlayerSkills::uniform(10),
                    fatigue: 0,
                })
            })
            .collect();
        let substitutes = (20..25)
            .map(|n| MatchPlayer {
                id: club_id * 100 + n,
                position: PlayerPositionType::Midfielder,
                skills: PlayerSkills::uniform(8),
                fatigue: 0,
            })
            .collect();

        MatchSquad::new(club_id, starters, substitutes)
    }

    fn modifiers(reputation: u8) -> MatchModifiers {
        MatchModifiers::new(reputation, PlayingStyle::Balanced, Form::new())
    }

    #[test]
    fn test_incomplete_selection_leaves_rng_untouched() {
        let engine = MatchEngine::default();
        let empty = MatchSquad::new(2, vec![None; STARTING_SLOTS], Vec::new());

        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut untouched = rng.clone();

        let result = engine.resolve(&create_squad(1), &empty, &modifiers(10), &modifiers(10), &mut rng);

        assert_eq!(result, Err(LeagueError::IncompleteSelection { club_id: 2 }));
        assert_eq!(rng.next_u64(), untouched.next_u64());
    }

    #[test]
    fn test_empty_home_side_fails_before_any_draw() {
        let engine = MatchEngine::default();
        let empty = MatchSquad::new(1, vec![None; STARTING_SLOTS], Vec::new());
        let away = create_squad(2);
        assert_eq!(away.players().count(), STARTING_SLOTS);

        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let mut untouched = rng.clone();

        let result = engine.resolve(&empty, &away, &modifiers(10), &modifiers(10), &mut rng);

        assert_eq!(result, Err(LeagueError::IncompleteSelection { club_id: 1 }));
        assert_eq!(rng.next_u64(), untouched.next_u64());
    }

    #[test]
    fn test_same_seed_same_result() {
        let engine = MatchEngine::default();
        let home = create_squad(1);
        let away = create_squad(2);

        let first = engine
            .resolve(&home, &away, &modifiers(12), &modifiers(9), &mut ChaCha8Rng::seed_from_u64(7))
            .unwrap();
        let second = engine
            .resolve(&home, &away, &modifiers(12), &modifiers(9), &mut ChaCha8Rng::seed_from_u64(7))
            .unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_equal_sides_are_symmetric_and_never_draw() {
        let engine = MatchEngine::default();
        let home = create_squad(1);
        let away = create_squad(2);
        let mut rng = ChaCha8Rng::seed_from_u64(2024);

        let mut home_wins = 0;
        let mut away_wins = 0;

        for _ in 0..10_000 {
            let result = engine
                .resolve(&home, &away, &modifiers(10), &modifiers(10), &mut rng)
                .unwrap();

            let winner = result.home_goals().max(result.away_goals());
            let loser = result.home_goals().min(result.away_goals());
            assert!(winner >= 1);
            assert!(winner >= loser);

            match result.outcome() {
                MatchOutcome::HomeWin => home_wins += 1,
                MatchOutcome::AwayWin => away_wins += 1,
                MatchOutcome::Draw => panic!("draw range has zero width"),
            }
        }

        assert!((4700..=5300).contains(&home_wins));
        assert!((4700..=5300).contains(&away_wins));
    }

    #[test]
    fn test_draw_frequency_follows_draw_range() {
        let engine = MatchEngine::default();
        let home = create_squad(1);
        let away = create_squad(2);

        let mut form = Form::new();
        for _ in 0..6 {
            form.add(FormResult::Win);
        }
        let home_modifiers = MatchModifiers::new(10, PlayingStyle::Balanced, form);
        let away_modifiers = modifiers(10);

        let weights = engine.outcome_weights(&home, &away, &home_modifiers, &away_modifiers);
        assert_eq!(weights, OutcomeWeights::new(925, 900, 25));

        let mut rng = ChaCha8Rng::seed_from_u64(99);
        let trials = 10_000;
        let draws = (0..trials)
            .filter(|_| {
                engine
                    .resolve(&home, &away, &home_modifiers, &away_modifiers, &mut rng)
                    .unwrap()
                    .is_draw()
            })
            .count();

        let frequency = draws as f64 / trials as f64;
        assert!((frequency - weights.draw_probability()).abs() < 0.02);
    }

    #[test]
    fn test_draws_are_never_goalless() {
        let engine = MatchEngine::default();
        let mut rng = ChaCha8Rng::seed_from_u64(5);

        // zero reputation on both sides falls back to equal ranges
        for _ in 0..1000 {
            let result = engine
                .resolve(&create_squad(1), &create_squad(2), &modifiers(0), &modifiers(0), &mut rng)
                .unwrap();

            if result.is_draw() {
                assert!(result.home_goals() >= 1);
            }
        }
    }

    #[test]
    fn test_report_details_match_score() {
        let engine = MatchEngine::default();
        let home = create_squad(1);
        let away = create_squad(2);
        let mut rng = ChaCha8Rng::seed_from_u64(77);

        for _ in 0..500 {
            let result = engine
                .resolve(&home, &away, &modifiers(10), &modifiers(14), &mut rng)
                .unwrap();

            for (report, squad) in [(&result.home, &home), (&result.away, &away)] {
                assert_eq!(report.goal_details.len(), report.goals as usize);
                assert!(report.substitutes_used.len() <= 3);
                assert!(report.injuries.len() <= 1);

                for goal in &report.goal_details {
                    assert!(squad.players().any(|p| p.id == goal.scorer_id));
                    assert_ne!(goal.assist_id, Some(goal.scorer_id));
                }
            }
        }
    }
}
