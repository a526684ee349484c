use crate::club::{PlayerCondition, PlayerInjury, PlayerPositionType, PlayerSkills, PlayerStatistics};
use crate::Player;

// Builder for Player
#[derive(Default)]
pub struct PlayerBuilder {
    id: Option<u32>,
    name: Option<String>,
    position: Option<PlayerPositionType>,
    skills: Option<PlayerSkills>,
    condition: Option<PlayerCondition>,
    injury: Option<PlayerInjury>,
    statistics: Option<PlayerStatistics>,
}

impl PlayerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: u32) -> Self {
        self.id = Some(id);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn position(mut self, position: PlayerPositionType) -> Self {
        self.position = Some(position);
        self
    }

    pub fn skills(mut self, skills: PlayerSkills) -> Self {
        self.skills = Some(skills);
        self
    }

    pub fn condition(mut self, condition: PlayerCondition) -> Self {
        self.condition = Some(condition);
        self
    }

    pub fn injury(mut self, injury: PlayerInjury) -> Self {
        self.injury = Some(injury);
        self
    }

    pub fn statistics(mut self, statistics: PlayerStatistics) -> Self {
        self.statistics = Some(statistics);
        self
    }

    pub fn build(self) -> Result<Player, String> {
        Ok(Player {
            id: self.id.ok_or("id is required")?,
            name: self.name.ok_or("name is required")?,
            position: self.position.ok_or("position is required")?,
            skills: self.skills.ok_or("skills is required")?,
            condition: self.condition.unwrap_or_default(),
            injury: self.injury,
            statistics: self.statistics.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_requires_position() {
        let result = PlayerBuilder::new()
            .id(1)
            .name("No Position")
            .skills(PlayerSkills::default())
            .build();

        assert_eq!(result.unwrap_err(), "position is required");
    }

    #[test]
    fn test_build_defaults() {
        let player = PlayerBuilder::new()
            .id(1)
            .name("Keeper")
            .position(PlayerPositionType::Goalkeeper)
            .skills(PlayerSkills::uniform(12))
            .build()
            .unwrap();

        assert_eq!(player.condition, PlayerCondition::default());
        assert!(player.injury.is_none());
        assert_eq!(player.statistics.appearances, 0);
    }
}
