use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Referee {
    pub id: u32,
    pub name: String,
    /// Matches officiated this season.
    #[serde(default)]
    pub matches: u16,
}

impl Referee {
    pub fn new(id: u32, name: String) -> Self {
        Referee {
            id,
            name,
            matches: 0,
        }
    }

    pub fn increment_appearance(&mut self) {
        self.matches += 1;
    }

    pub fn reset_statistics(&mut self) {
        self.matches = 0;
    }
}
