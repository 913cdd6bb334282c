//! Running score for one session

use serde::{Deserialize, Serialize};

/// A recent gain, shown as a floating "+N" label
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecentGain {
    pub points: u32,
    pub at: f64,
}

/// Accumulates points from pickups
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreLedger {
    total: u64,
    recent: Vec<RecentGain>,
}

impl ScoreLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    /// Points are never deduplicated, every pickup counts
    pub fn award(&mut self, points: u32, now: f64) {
        self.total += u64::from(points);
        self.recent.push(RecentGain { points, at: now });
    }

    /// Drop gain labels older than `ttl` seconds
    pub fn expire_recent(&mut self, now: f64, ttl: f64) {
        self.recent.retain(|g| now - g.at <= ttl);
    }

    pub fn recent(&self) -> &[RecentGain] {
        &self.recent
    }

    pub fn reset(&mut self) {
        self.total = 0;
        self.recent.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_is_sum_of_awards() {
        let mut ledger = ScoreLedger::new();
        for (i, points) in [1, 3, 1, 5].into_iter().enumerate() {
            ledger.award(points, i as f64);
        }
        assert_eq!(ledger.total(), 10);
    }

    #[test]
    fn test_recent_gains_expire() {
        let mut ledger = ScoreLedger::new();
        ledger.award(1, 0.0);
        ledger.award(1, 0.8);
        ledger.expire_recent(1.5, 1.0);
        assert_eq!(ledger.recent().len(), 1);
        assert_eq!(ledger.recent()[0].at, 0.8);
        assert_eq!(ledger.total(), 2);
    }

    #[test]
    fn test_reset() {
        let mut ledger = ScoreLedger::new();
        ledger.award(4, 0.0);
        ledger.reset();
        assert_eq!(ledger.total(), 0);
        assert!(ledger.recent().is_empty());
    }
}
