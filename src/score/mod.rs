//! Per-mode high/low score ledger

pub mod file_store;
pub mod ledger;

pub use file_store::FileLedger;
pub use ledger::{MemoryLedger, ScoreLedger, ScoreRecord};
