use crate::club::player::builder::PlayerBuilder;
use crate::club::{PlayerCondition, PlayerInjury, PlayerPositionType, PlayerSkills, PlayerStatistics};
use crate::r#match::InjuryEvent;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: u32,
    pub name: String,
    pub position: PlayerPositionType,
    pub skills: PlayerSkills,
    pub condition: PlayerCondition,
    pub injury: Option<PlayerInjury>,
    pub statistics: PlayerStatistics,
}

impl Player {
    pub fn builder() -> PlayerBuilder {
        PlayerBuilder::new()
    }

    pub fn is_injured(&self) -> bool {
        self.injury.is_some()
    }

    pub fn is_available(&self) -> bool {
        !self.is_injured()
    }

    pub fn apply_injury(&mut self, event: &InjuryEvent) {
        self.injury = Some(PlayerInjury::new(event.injury_type, event.weeks));
        self.condition.take_impact(event.fitness_impact);
    }

    /// Weekly recovery: injuries count down, condition comes back.
    pub fn recover_week(&mut self, fitness: u8, fatigue: u16) {
        if let Some(injury) = self.injury.as_mut() {
            if injury.recover_week() {
                self.injury = None;
            }
        }

        self.condition.rest(fitness, fatigue);
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} ({})", self.name, self.position)
    }
}
