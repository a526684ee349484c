use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InjurySeverity {
    Minor,
    Moderate,
    Severe,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InjuryType {
    // Minor (1-2 weeks)
    Bruise,
    Cramp,
    DeadLeg,
    // Moderate (2-6 weeks)
    HamstringStrain,
    CalfStrain,
    AnkleSprain,
    GroinStrain,
    // Severe (8-20 weeks)
    TornMeniscus,
    StressFracture,
    MCLSprain,
    // Critical (26-40 weeks)
    ACLTear,
    BrokenLeg,
}

impl InjuryType {
    pub const ALL: [InjuryType; 12] = [
        InjuryType::Bruise,
        InjuryType::Cramp,
        InjuryType::DeadLeg,
        InjuryType::HamstringStrain,
        InjuryType::CalfStrain,
        InjuryType::AnkleSprain,
        InjuryType::GroinStrain,
        InjuryType::TornMeniscus,
        InjuryType::StressFracture,
        InjuryType::MCLSprain,
        InjuryType::ACLTear,
        InjuryType::BrokenLeg,
    ];

    /// Returns (min_weeks, max_weeks) out of action
    pub fn period_range(&self) -> (u8, u8) {
        match self {
            InjuryType::Bruise => (1, 1),
            InjuryType::Cramp => (1, 1),
            InjuryType::DeadLeg => (1, 2),
            InjuryType::HamstringStrain => (2, 5),
            InjuryType::CalfStrain => (2, 4),
            InjuryType::AnkleSprain => (2, 6),
            InjuryType::GroinStrain => (2, 5),
            InjuryType::TornMeniscus => (8, 16),
            InjuryType::StressFracture => (8, 20),
            InjuryType::MCLSprain => (8, 16),
            InjuryType::ACLTear => (26, 40),
            InjuryType::BrokenLeg => (26, 36),
        }
    }

    /// Returns (min, max) fitness points lost when the injury happens
    pub fn impact_range(&self) -> (u8, u8) {
        match self.severity() {
            InjurySeverity::Minor => (5, 15),
            InjurySeverity::Moderate => (15, 30),
            InjurySeverity::Severe => (30, 50),
            InjurySeverity::Critical => (50, 70),
        }
    }

    pub fn severity(&self) -> InjurySeverity {
        match self {
            InjuryType::Bruise | InjuryType::Cramp | InjuryType::DeadLeg => InjurySeverity::Minor,

            InjuryType::HamstringStrain
            | InjuryType::CalfStrain
            | InjuryType::AnkleSprain
            | InjuryType::GroinStrain => InjurySeverity::Moderate,

            InjuryType::TornMeniscus | InjuryType::StressFracture | InjuryType::MCLSprain => {
                InjurySeverity::Severe
            }

            InjuryType::ACLTear | InjuryType::BrokenLeg => InjurySeverity::Critical,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            InjuryType::Bruise => "Bruise",
            InjuryType::Cramp => "Cramp",
            InjuryType::DeadLeg => "Dead Leg",
            InjuryType::HamstringStrain => "Hamstring Strain",
            InjuryType::CalfStrain => "Calf Strain",
            InjuryType::AnkleSprain => "Ankle Sprain",
            InjuryType::GroinStrain => "Groin Strain",
            InjuryType::TornMeniscus => "Torn Meniscus",
            InjuryType::StressFracture => "Stress Fracture",
            InjuryType::MCLSprain => "MCL Sprain",
            InjuryType::ACLTear => "ACL Tear",
            InjuryType::BrokenLeg => "Broken Leg",
        }
    }
}

/// An injury a player is currently recovering from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerInjury {
    pub injury_type: InjuryType,
    pub weeks_remaining: u8,
}

impl PlayerInjury {
    pub fn new(injury_type: InjuryType, weeks_remaining: u8) -> Self {
        PlayerInjury {
            injury_type,
            weeks_remaining,
        }
    }

    /// Advances recovery by one week, returns true once healed.
    pub fn recover_week(&mut self) -> bool {
        self.weeks_remaining = self.weeks_remaining.saturating_sub(1);
        self.weeks_remaining == 0
    }
}
