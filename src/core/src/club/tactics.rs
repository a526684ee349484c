use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayingStyle {
    Defensive,
    #[default]
    Balanced,
    Attacking,
}

impl PlayingStyle {
    /// Percentage chance that a winning side adds another goal.
    pub fn goal_chance(&self) -> u32 {
        match self {
            PlayingStyle::Defensive => 35,
            PlayingStyle::Balanced => 50,
            PlayingStyle::Attacking => 65,
        }
    }
}
