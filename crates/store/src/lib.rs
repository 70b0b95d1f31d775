//! File-backed persistence for scores and player accounts.
//!
//! Each store owns one JSON file in the data directory. A missing file reads
//! as an empty store and every write replaces the file via rename.

mod accounts;
mod error;
mod json;
mod scores;

pub use blockfall_types as types;

pub use accounts::{AccountStore, USERS_FILE};
pub use error::{Result, StoreError};
pub use scores::{ScoreRecord, ScoreStore, SCORES_FILE};

use types::SessionReport;

impl ScoreStore {
    /// Persist a finished session.
    pub fn record(&self, report: &SessionReport) -> Result<ScoreRecord> {
        self.save(&report.player, report.score, report.lines)
    }
}
