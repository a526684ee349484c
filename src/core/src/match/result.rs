use crate::club::{FormResult, InjuryType};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchOutcome {
    HomeWin,
    Draw,
    AwayWin,
}

impl MatchOutcome {
    /// Form entries for (home, away).
    pub fn form_results(&self) -> (FormResult, FormResult) {
        match self {
            MatchOutcome::HomeWin => (FormResult::Win, FormResult::Loss),
            MatchOutcome::Draw => (FormResult::Draw, FormResult::Draw),
            MatchOutcome::AwayWin => (FormResult::Loss, FormResult::Win),
        }
    }

    /// Points shared out between both clubs.
    pub fn points_awarded(&self) -> u32 {
        match self {
            MatchOutcome::Draw => 2,
            MatchOutcome::HomeWin | MatchOutcome::AwayWin => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalDetail {
    pub scorer_id: u32,
    pub assist_id: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InjuryEvent {
    pub player_id: u32,
    pub injury_type: InjuryType,
    pub weeks: u8,
    pub fitness_impact: u8,
}

/// One side of a played match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMatchReport {
    pub club_id: u32,
    pub goals: u8,
    pub goal_details: Vec<GoalDetail>,
    pub substitutes_used: Vec<u32>,
    pub injuries: Vec<InjuryEvent>,
}

impl TeamMatchReport {
    pub fn new(club_id: u32, goals: u8) -> Self {
        TeamMatchReport {
            club_id,
            goals,
            goal_details: Vec::with_capacity(goals as usize),
            substitutes_used: Vec::new(),
            injuries: Vec::new(),
        }
    }

    /// Scorer ids, one entry per goal.
    pub fn goalscorers(&self) -> Vec<u32> {
        self.goal_details.iter().map(|goal| goal.scorer_id).collect()
    }

    pub fn assists(&self) -> impl Iterator<Item = u32> + '_ {
        self.goal_details.iter().filter_map(|goal| goal.assist_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub home: TeamMatchReport,
    pub away: TeamMatchReport,
}

impl MatchResult {
    pub fn new(home: TeamMatchReport, away: TeamMatchReport) -> Self {
        MatchResult { home, away }
    }

    pub fn home_goals(&self) -> u8 {
        self.home.goals
    }

    pub fn away_goals(&self) -> u8 {
        self.away.goals
    }

    pub fn outcome(&self) -> MatchOutcome {
        match self.home.goals.cmp(&self.away.goals) {
            std::cmp::Ordering::Greater => MatchOutcome::HomeWin,
            std::cmp::Ordering::Equal => MatchOutcome::Draw,
            std::cmp::Ordering::Less => MatchOutcome::AwayWin,
        }
    }

    pub fn is_draw(&self) -> bool {
        self.outcome() == MatchOutcome::Draw
    }

    pub fn winner(&self) -> Option<u32> {
        match self.outcome() {
            MatchOutcome::HomeWin => Some(self.home.club_id),
            MatchOutcome::AwayWin => Some(self.away.club_id),
            MatchOutcome::Draw => None,
        }
    }

    pub fn report_for(&self, club_id: u32) -> Option<&TeamMatchReport> {
        if self.home.club_id == club_id {
            Some(&self.home)
        } else if self.away.club_id == club_id {
            Some(&self.away)
        } else {
            None
        }
    }
}
