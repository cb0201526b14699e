//! Running statistics across rounds

/// Totals for every round finished in this process
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionTotals {
    games_played: u32,
    total_score: i64,
}

impl SessionTotals {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            games_played: 0,
            total_score: 0,
        }
    }

    /// Fold a finished round's final score into the totals
    pub fn record(&mut self, score: i32) {
        self.games_played += 1;
        self.total_score += i64::from(score);
    }

    #[must_use]
    pub const fn games_played(&self) -> u32 {
        self.games_played
    }

    #[must_use]
    pub const fn total_score(&self) -> i64 {
        self.total_score
    }

    /// Mean score per round, `None` before the first round
    #[must_use]
    pub fn average(&self) -> Option<f64> {
        (self.games_played > 0).then(|| self.total_score as f64 / f64::from(self.games_played))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_totals_have_no_average() {
        let totals = SessionTotals::new();
        assert_eq!(totals.games_played(), 0);
        assert_eq!(totals.total_score(), 0);
        assert_eq!(totals.average(), None);
    }

    #[test]
    fn record_accumulates() {
        let mut totals = SessionTotals::default();
        totals.record(95);
        totals.record(0);
        totals.record(-10);

        assert_eq!(totals.games_played(), 3);
        assert_eq!(totals.total_score(), 85);
        let average = totals.average().unwrap();
        assert!((average - 85.0 / 3.0).abs() < f64::EPSILON);
    }
}
