use league_core::PlayingStyle;
use serde::Deserialize;

const STATIC_CLUBS_JSON: &str = include_str!("../data/clubs.json");

#[derive(Debug, Clone, Deserialize)]
pub struct ClubEntity {
    pub id: u32,
    pub name: String,
    pub reputation: u8,
    #[serde(default)]
    pub playing_style: PlayingStyle,
}

pub struct ClubLoader;

impl ClubLoader {
    pub fn load() -> Result<Vec<ClubEntity>, serde_json::Error> {
        serde_json::from_str(STATIC_CLUBS_JSON)
    }
}
