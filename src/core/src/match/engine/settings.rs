use serde::{Deserialize, Serialize};

/// Tunables of the match engine. Missing fields deserialize to their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    /// Number of recent results feeding home advantage.
    pub home_form_length: usize,
    /// Weight multiplier per reputation point.
    pub reputation_factor: f64,
    /// Extra goals the winning side may add on top of the first one.
    pub max_extra_goals: u8,
    /// Goal chance never halves below this percentage.
    pub min_goal_chance: u32,
    pub max_substitutions: usize,
    /// Percentage chance that a side picks up an injury.
    pub injury_chance: u32,
    /// Fatigue above which a starter becomes more injury prone.
    pub fatigue_threshold: u16,
}

impl Default for EngineSettings {
    fn default() -> Self {
        EngineSettings {
            home_form_length: 6,
            reputation_factor: 0.05,
            max_extra_goals: 7,
            min_goal_chance: 1,
            max_substitutions: 3,
            injury_chance: 20,
            fatigue_threshold: 100,
        }
    }
}
