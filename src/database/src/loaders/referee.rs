use serde::Deserialize;

const STATIC_REFEREES_JSON: &str = include_str!("../data/referees.json");

#[derive(Debug, Clone, Deserialize)]
pub struct RefereeEntity {
    pub id: u32,
    pub name: String,
}

pub struct RefereeLoader;

impl RefereeLoader {
    pub fn load() -> Result<Vec<RefereeEntity>, serde_json::Error> {
        serde_json::from_str(STATIC_REFEREES_JSON)
    }
}
