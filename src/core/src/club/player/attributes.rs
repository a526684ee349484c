use serde::{Deserialize, Serialize};

pub const FITNESS_MAX_VALUE: u8 = 100;

/// Physical state the match engine reads when picking injury victims.
///
/// `fatigue` accumulates the fitness lost to injuries and only drains slowly,
/// so repeatedly injured players stay more exposed for a while.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerCondition {
    pub fitness: u8,
    pub fatigue: u16,
}

impl Default for PlayerCondition {
    fn default() -> Self {
        PlayerCondition {
            fitness: FITNESS_MAX_VALUE,
            fatigue: 0,
        }
    }
}

impl PlayerCondition {
    pub fn take_impact(&mut self, impact: u8) {
        self.fitness = self.fitness.saturating_sub(impact);
        self.fatigue = self.fatigue.saturating_add(impact as u16);
    }

    pub fn rest(&mut self, fitness: u8, fatigue: u16) {
        self.fitness = self.fitness.saturating_add(fitness).min(FITNESS_MAX_VALUE);
        self.fatigue = self.fatigue.saturating_sub(fatigue);
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStatistics {
    pub appearances: u16,
    pub substitute_appearances: u16,
    pub goals: u16,
    pub assists: u16,
}

impl PlayerStatistics {
    pub fn reset(&mut self) {
        *self = PlayerStatistics::default();
    }
}
