use crate::NamesEntity;
use league_core::club::SKILL_MAX_VALUE;
use league_core::{Player, PlayerPositionType, PlayerSkills};
use rand::Rng;
use rand::seq::SliceRandom;

pub struct PlayerGenerator {
    first_names: Vec<String>,
    last_names: Vec<String>,
    next_id: u32,
}

impl PlayerGenerator {
    pub fn with_people_names(names: &NamesEntity) -> Self {
        PlayerGenerator {
            first_names: names.first_names.clone(),
            last_names: names.last_names.clone(),
            next_id: 1,
        }
    }

    pub fn generate<R: Rng + ?Sized>(
        &mut self,
        position: PlayerPositionType,
        club_reputation: u8,
        rng: &mut R,
    ) -> Result<Player, String> {
        let id = self.next_id;
        self.next_id += 1;

        Player::builder()
            .id(id)
            .name(self.generate_name(rng))
            .position(position)
            .skills(Self::generate_skills(position, club_reputation, rng))
            .build()
    }

    fn generate_name<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let first_name = self.first_names.choose(rng).map(String::as_str).unwrap_or("John");
        let last_name = self.last_names.choose(rng).map(String::as_str).unwrap_or("Smith");

        format!("{} {}", first_name, last_name)
    }

    /// Better clubs get better players; the position's key skills get a boost.
    fn generate_skills<R: Rng + ?Sized>(position: PlayerPositionType, club_reputation: u8, rng: &mut R) -> PlayerSkills {
        let skill_min = (3 + club_reputation / 4).min(SKILL_MAX_VALUE);
        let skill_max = (8 + club_reputation / 2).clamp(skill_min, SKILL_MAX_VALUE);

        let mut random_skill = || rng.gen_range(skill_min..=skill_max);

        let mut skills = PlayerSkills {
            keeping: random_skill(),
            tackling: random_skill(),
            passing: random_skill(),
            shooting: random_skill(),
            heading: random_skill(),
            pace: random_skill(),
            stamina: random_skill(),
            ball_control: random_skill(),
            set_pieces: random_skill(),
        };

        let boost = |value: u8| value.saturating_add(3).min(SKILL_MAX_VALUE);

        match position {
            PlayerPositionType::Goalkeeper => {
                skills.keeping = boost(skills.keeping);
            }
            PlayerPositionType::Defender => {
                skills.tackling = boost(skills.tackling);
                skills.heading = boost(skills.heading);
            }
            PlayerPositionType::Midfielder => {
                skills.passing = boost(skills.passing);
                skills.ball_control = boost(skills.ball_control);
            }
            PlayerPositionType::Attacker => {
                skills.shooting = boost(skills.shooting);
                skills.pace = boost(skills.pace);
            }
        }

        // Outfield players make poor keepers
        if position.is_outfield() {
            skills.keeping = skills.keeping.min(skill_min);
        }

        skills
    }
}
