use crate::r#match::EngineSettings;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeagueSettings {
    pub engine: EngineSettings,
    /// Fitness every player gets back per simulated week.
    pub fitness_recovery_per_week: u8,
    pub fatigue_recovery_per_week: u16,
}

impl Default for LeagueSettings {
    fn default() -> Self {
        LeagueSettings {
            engine: EngineSettings::default(),
            fitness_recovery_per_week: 10,
            fatigue_recovery_per_week: 25,
        }
    }
}
