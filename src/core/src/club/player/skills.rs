use crate::club::player::PlayerPositionType;
use serde::{Deserialize, Serialize};

pub const SKILL_MAX_VALUE: u8 = 20;

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSkills {
    pub keeping: u8,
    pub tackling: u8,
    pub passing: u8,
    pub shooting: u8,
    pub heading: u8,
    pub pace: u8,
    pub stamina: u8,
    pub ball_control: u8,
    pub set_pieces: u8,
}

impl PlayerSkills {
    pub fn values(&self) -> [u8; 9] {
        [
            self.keeping,
            self.tackling,
            self.passing,
            self.shooting,
            self.heading,
            self.pace,
            self.stamina,
            self.ball_control,
            self.set_pieces,
        ]
    }

    /// Sum of all nine attributes, the unit of team strength.
    pub fn total(&self) -> u32 {
        self.values().iter().map(|&value| value as u32).sum()
    }

    pub fn average(&self) -> f32 {
        self.total() as f32 / 9.0
    }

    /// How well the player fits a slot of the given position category.
    pub fn rating_for(&self, position: PlayerPositionType) -> u32 {
        let weighted = match position {
            PlayerPositionType::Goalkeeper => self.keeping as u32 * 4 + self.set_pieces as u32,
            PlayerPositionType::Defender => {
                self.tackling as u32 * 3 + self.heading as u32 * 2 + self.pace as u32
            }
            PlayerPositionType::Midfielder => {
                self.passing as u32 * 3 + self.ball_control as u32 * 2 + self.stamina as u32
            }
            PlayerPositionType::Attacker => {
                self.shooting as u32 * 3 + self.pace as u32 * 2 + self.heading as u32
            }
        };

        weighted * 2 + self.total()
    }

    pub fn uniform(value: u8) -> Self {
        let value = value.min(SKILL_MAX_VALUE);

        PlayerSkills {
            keeping: value,
            tackling: value,
            passing: value,
            shooting: value,
            heading: value,
            pace: value,
            stamina: value,
            ball_control: value,
            set_pieces: value,
        }
    }
}
