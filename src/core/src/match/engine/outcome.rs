use crate::r#match::MatchOutcome;
use rand::Rng;

/// Range widths used when every computed weight is zero, so a draw stays possible.
const FALLBACK_WEIGHTS: OutcomeWeights = OutcomeWeights {
    home: 2,
    draw: 2,
    away: 2,
};

/// Widths of the home win, draw and away win ranges laid end to end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutcomeWeights {
    pub home: u32,
    pub draw: u32,
    pub away: u32,
}

/// Per side inputs of the weight calculation.
#[derive(Debug, Clone, Copy)]
pub struct SideRating {
    pub strength: u32,
    pub reputation: u8,
}

impl OutcomeWeights {
    pub fn new(home: u32, draw: u32, away: u32) -> Self {
        OutcomeWeights { home, draw, away }
    }

    /// Share of total strength with home advantage added to the home share,
    /// both in percent, scaled by reputation. The draw range is the gap between sides.
    pub fn calculate(
        home: SideRating,
        away: SideRating,
        home_advantage: i32,
        reputation_factor: f64,
    ) -> Self {
        let total = home.strength + away.strength;
        if total == 0 {
            return OutcomeWeights::new(0, 0, 0).or_fallback();
        }

        let home_share = (home.strength as f64 / total as f64 + home_advantage as f64) * 100.0;
        let away_share = away.strength as f64 / total as f64 * 100.0;

        let home_weight = Self::scale(home_share, home.reputation, reputation_factor);
        let away_weight = Self::scale(away_share, away.reputation, reputation_factor);

        OutcomeWeights::new(home_weight, home_weight.abs_diff(away_weight), away_weight).or_fallback()
    }

    fn scale(share: f64, reputation: u8, reputation_factor: f64) -> u32 {
        let weight = (share * (reputation_factor * reputation as f64)).round();
        weight.max(0.0) as u32
    }

    fn or_fallback(self) -> Self {
        if self.total() == 0 {
            FALLBACK_WEIGHTS
        } else {
            self
        }
    }

    pub fn total(&self) -> u32 {
        self.home + self.draw + self.away
    }

    /// Half-open ranges `[0,h)`, `[h,h+d)`, `[h+d,total)`.
    pub fn ranges(&self) -> [std::ops::Range<u32>; 3] {
        let draw_start = self.home;
        let away_start = self.home + self.draw;

        [0..draw_start, draw_start..away_start, away_start..self.total()]
    }

    pub fn outcome_for(&self, value: u32) -> MatchOutcome {
        if value < self.home {
            MatchOutcome::HomeWin
        } else if value < self.home + self.draw {
            MatchOutcome::Draw
        } else {
            MatchOutcome::AwayWin
        }
    }

    /// One uniform draw over the laid out ranges.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> MatchOutcome {
        let value = rng.gen_range(0..self.total());
        self.outcome_for(value)
    }

    pub fn draw_probability(&self) -> f64 {
        self.draw as f64 / self.total() as f64
    }
}
