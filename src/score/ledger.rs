use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::game::GameMode;

/// Per-mode high/low pair. A low of 0 means "not set yet", never a
/// legitimate zero score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub high: u32,
    pub low: u32,
}

impl ScoreRecord {
    /// Fold a finished game's score in. High moves up on a strictly greater
    /// score; low moves down, or is set on first submission.
    pub fn absorb(&mut self, score: u32) -> bool {
        let mut updated = false;
        if score > self.high {
            self.high = score;
            updated = true;
        }
        // score == 0 never claims the low slot; 0 is the unset marker.
        if score > 0 && (self.low == 0 || score < self.low) {
            self.low = score;
            updated = true;
        }
        updated
    }
}

/// Per-mode score store consulted when a game ends.
pub trait ScoreLedger: Send {
    /// Best score for the mode; 0 when nothing recorded
    fn get_high(&self, mode: GameMode) -> u32;

    /// Worst score for the mode; 0 means unset
    fn get_low(&self, mode: GameMode) -> u32;

    /// Record a finished game. Returns whether anything changed.
    fn submit(&mut self, mode: GameMode, score: u32) -> bool;
}

/// Ledger without persistence, for tests and one-off sessions.
#[derive(Debug, Default)]
pub struct MemoryLedger {
    records: HashMap<GameMode, ScoreRecord>,
}

impl MemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScoreLedger for MemoryLedger {
    fn get_high(&self, mode: GameMode) -> u32 {
        self.records.get(&mode).map_or(0, |r| r.high)
    }

    fn get_low(&self, mode: GameMode) -> u32 {
        self.records.get(&mode).map_or(0, |r| r.low)
    }

    fn submit(&mut self, mode: GameMode, score: u32) -> bool {
        self.records.entry(mode).or_default().absorb(score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_submission_sets_high_and_low() {
        let mut ledger = MemoryLedger::new();
        assert_eq!(ledger.get_high(GameMode::Classic), 0);
        assert_eq!(ledger.get_low(GameMode::Classic), 0);

        assert!(ledger.submit(GameMode::Classic, 120));
        assert_eq!(ledger.get_high(GameMode::Classic), 120);
        assert_eq!(ledger.get_low(GameMode::Classic), 120);
    }

    #[test]
    fn test_high_and_low_move_independently() {
        let mut ledger = MemoryLedger::new();
        ledger.submit(GameMode::Expert, 100);

        assert!(ledger.submit(GameMode::Expert, 150));
        assert_eq!(ledger.get_high(GameMode::Expert), 150);
        assert_eq!(ledger.get_low(GameMode::Expert), 100);

        assert!(ledger.submit(GameMode::Expert, 40));
        assert_eq!(ledger.get_high(GameMode::Expert), 150);
        assert_eq!(ledger.get_low(GameMode::Expert), 40);

        // In-between score changes nothing.
        assert!(!ledger.submit(GameMode::Expert, 100));
    }

    #[test]
    fn test_modes_are_independent() {
        let mut ledger = MemoryLedger::new();
        ledger.submit(GameMode::Classic, 200);
        assert_eq!(ledger.get_high(GameMode::Labyrinth), 0);
        assert_eq!(ledger.get_low(GameMode::Labyrinth), 0);
    }

    #[test]
    fn test_zero_score_submission() {
        // A 0-point game cannot claim the low slot; 0 stays the unset marker.
        let mut ledger = MemoryLedger::new();
        assert!(!ledger.submit(GameMode::Classic, 0));
        assert_eq!(ledger.get_low(GameMode::Classic), 0);
        assert_eq!(ledger.get_high(GameMode::Classic), 0);
    }
}
