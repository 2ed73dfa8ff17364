//! JSON-file-backed score ledger
//!
//! Scores are loaded once at construction and written back after every
//! update. Persistence is best effort: a missing or unreadable file yields an
//! empty ledger, and a failed save never blocks or crashes the game — the
//! in-memory records stay authoritative for the session.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::ledger::{ScoreLedger, ScoreRecord};
use crate::game::GameMode;

pub struct FileLedger {
    path: PathBuf,
    records: HashMap<GameMode, ScoreRecord>,
}

impl FileLedger {
    /// Open the ledger at `path`, reading existing records if any.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let records = read_records(&path).unwrap_or_default();
        Self { path, records }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create directory {:?}", parent))?;
            }
        }
        let json = serde_json::to_string_pretty(&self.records)
            .context("failed to serialize score records")?;
        std::fs::write(&self.path, json)
            .with_context(|| format!("failed to write scores to {:?}", self.path))?;
        Ok(())
    }
}

fn read_records(path: &Path) -> Option<HashMap<GameMode, ScoreRecord>> {
    let json = std::fs::read_to_string(path).ok()?;
    serde_json::from_str(&json).ok()
}

impl ScoreLedger for FileLedger {
    fn get_high(&self, mode: GameMode) -> u32 {
        self.records.get(&mode).map_or(0, |r| r.high)
    }

    fn get_low(&self, mode: GameMode) -> u32 {
        self.records.get(&mode).map_or(0, |r| r.low)
    }

    fn submit(&mut self, mode: GameMode, score: u32) -> bool {
        let updated = self.records.entry(mode).or_default().absorb(score);
        if updated {
            // Best effort; the session keeps its in-memory values either way.
            let _ = self.persist();
        }
        updated
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_missing_file_yields_empty_ledger() {
        let dir = TempDir::new().unwrap();
        let ledger = FileLedger::load(dir.path().join("scores.json"));
        assert_eq!(ledger.get_high(GameMode::Classic), 0);
        assert_eq!(ledger.get_low(GameMode::Classic), 0);
    }

    #[test]
    fn test_corrupt_file_yields_empty_ledger() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("scores.json");
        std::fs::write(&path, "not json at all {").unwrap();

        let ledger = FileLedger::load(&path);
        assert_eq!(ledger.get_high(GameMode::Classic), 0);
    }

    #[test]
    fn test_scores_survive_reload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("scores.json");

        let mut ledger = FileLedger::load(&path);
        assert!(ledger.submit(GameMode::Classic, 120));
        assert!(ledger.submit(GameMode::Labyrinth, 80));
        assert!(ledger.submit(GameMode::Classic, 60));

        let reloaded = FileLedger::load(&path);
        assert_eq!(reloaded.get_high(GameMode::Classic), 120);
        assert_eq!(reloaded.get_low(GameMode::Classic), 60);
        assert_eq!(reloaded.get_high(GameMode::Labyrinth), 80);
        assert_eq!(reloaded.get_low(GameMode::Labyrinth), 80);
        assert_eq!(reloaded.get_high(GameMode::Expert), 0);
    }

    #[test]
    fn test_no_write_without_update() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("scores.json");

        let mut ledger = FileLedger::load(&path);
        ledger.submit(GameMode::Classic, 100);
        let saved = std::fs::read_to_string(&path).unwrap();

        // Neither high nor low moves, so nothing is rewritten.
        assert!(!ledger.submit(GameMode::Classic, 100));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), saved);
    }

    #[test]
    fn test_parent_directory_is_created() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("scores.json");

        let mut ledger = FileLedger::load(&path);
        ledger.submit(GameMode::Expert, 30);

        assert!(path.exists());
    }
}
