use crate::r#match::MatchSquad;

pub struct SkillAggregator;

impl SkillAggregator {
    /// Sum of every skill of every selected starter. Empty slots count as zero.
    pub fn strength(squad: &MatchSquad) -> u32 {
        squad.players().map(|player| player.skills.total()).sum()
    }
}
