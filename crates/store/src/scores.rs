//! High-score table backed by `scores.json`.

use std::path::{Path, PathBuf};

use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::json::{load_or_default, save_atomic};

pub const SCORES_FILE: &str = "scores.json";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub id: u64,
    pub player: String,
    pub score: u32,
    pub lines: u32,
    /// Local time, `YYYY-MM-DD HH:MM:SS`
    pub timestamp: String,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct ScoreFile {
    #[serde(default)]
    scores: Vec<ScoreRecord>,
}

#[derive(Debug, Clone)]
pub struct ScoreStore {
    path: PathBuf,
}

impl ScoreStore {
    /// Store at `<dir>/scores.json`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::at(dir.as_ref().join(SCORES_FILE))
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append a record stamped with the current local time.
    pub fn save(&self, player: &str, score: u32, lines: u32) -> Result<ScoreRecord> {
        let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
        self.save_at(player, score, lines, timestamp)
    }

    fn save_at(
        &self,
        player: &str,
        score: u32,
        lines: u32,
        timestamp: String,
    ) -> Result<ScoreRecord> {
        let mut file: ScoreFile = load_or_default(&self.path)?;
        let id = file.scores.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        let record = ScoreRecord {
            id,
            player: player.to_string(),
            score,
            lines,
            timestamp,
        };
        file.scores.push(record.clone());
        save_atomic(&self.path, &file)?;

        log::info!(
            "saved score {} ({} lines) for {} as #{}",
            score,
            lines,
            player,
            id
        );
        Ok(record)
    }

    /// Every record in insertion order.
    pub fn all(&self) -> Result<Vec<ScoreRecord>> {
        let file: ScoreFile = load_or_default(&self.path)?;
        Ok(file.scores)
    }

    /// Up to `n` records, highest score first; ties keep the earlier record first.
    pub fn top(&self, n: usize) -> Result<Vec<ScoreRecord>> {
        let mut scores = self.all()?;
        // Stable sort keeps insertion order among equal scores.
        scores.sort_by(|a, b| b.score.cmp(&a.score));
        scores.truncate(n);
        Ok(scores)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_store(tag: &str) -> ScoreStore {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let dir = std::env::temp_dir().join(format!("blockfall_scores_{tag}_{nanos}"));
        ScoreStore::in_dir(dir)
    }

    #[test]
    fn missing_file_is_empty() {
        let store = temp_store("missing");
        assert!(store.top(10).unwrap().is_empty());
    }

    #[test]
    fn ids_increase_and_timestamp_has_expected_shape() {
        let store = temp_store("ids");
        let a = store.save("ann", 100, 1).unwrap();
        let b = store.save("bob", 0, 0).unwrap();
        assert_eq!((a.id, b.id), (1, 2));
        assert_eq!(a.timestamp.len(), 19);
        assert_eq!(&a.timestamp[4..5], "-");
        assert_eq!(&a.timestamp[10..11], " ");
        let _ = std::fs::remove_dir_all(store.path().parent().unwrap());
    }

    #[test]
    fn top_orders_by_score_then_insertion() {
        let store = temp_store("top");
        let ts = || "2024-01-01 00:00:00".to_string();
        store.save_at("a", 300, 3, ts()).unwrap();
        store.save_at("b", 900, 5, ts()).unwrap();
        store.save_at("c", 300, 2, ts()).unwrap();
        store.save_at("d", 100, 1, ts()).unwrap();

        let top: Vec<_> = store
            .top(3)
            .unwrap()
            .into_iter()
            .map(|r| r.player)
            .collect();
        assert_eq!(top, ["b", "a", "c"]);
        assert_eq!(store.all().unwrap().len(), 4);
        let _ = std::fs::remove_dir_all(store.path().parent().unwrap());
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let store = temp_store("corrupt");
        std::fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        std::fs::write(store.path(), "not json").unwrap();
        assert!(matches!(
            store.top(1),
            Err(crate::StoreError::Parse { .. })
        ));
        let _ = std::fs::remove_dir_all(store.path().parent().unwrap());
    }
}
