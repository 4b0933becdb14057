//! JSON-file persistence for progress and community data
//!
//! The service layer talks to a [`ProgressRepository`] so storage can be
//! swapped; the file-backed stores here persist pretty-printed JSON under
//! the platform data directory.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::community::Board;
use crate::config::Config;
use crate::progress::{ProgressRecord, QuizAttempt};

/// Seconds since the Unix epoch
pub(crate) fn unix_timestamp() -> i64 {
    SystemTime::now().duration_since(UNIX_EPOCH).map(|d| d.as_secs() as i64).unwrap_or(0)
}

/// Storage seam for per-user progress
///
/// One record per opaque user/session key. Concurrent writers to the same
/// key are last-write-wins; callers that need lost-update protection must
/// serialize their own read-modify-write cycles.
pub trait ProgressRepository {
    /// Fetch the record for a key, if one exists
    fn fetch(&self, key: &str) -> Option<ProgressRecord>;

    /// Store (insert or replace) the record for a key
    fn store(&mut self, key: &str, record: ProgressRecord);

    /// Append an immutable quiz attempt to the log
    fn log_attempt(&mut self, attempt: QuizAttempt);
}

/// File-backed progress storage
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProgressStore {
    /// Progress per user key
    pub records: HashMap<String, ProgressRecord>,
    /// Append-only quiz attempt log
    pub attempts: Vec<QuizAttempt>,
}

impl ProgressStore {
    /// Load progress from the default location on disk
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::progress_path()?)
    }

    /// Load progress from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read progress from {:?}", path))?;
            serde_json::from_str(&contents).with_context(|| "Failed to parse progress.json")
        } else {
            Ok(Self::default())
        }
    }

    /// Save progress to the default location on disk
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::progress_path()?)
    }

    /// Save progress to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create data directory {:?}", parent))?;
        }

        let contents =
            serde_json::to_string_pretty(self).with_context(|| "Failed to serialize progress")?;

        std::fs::write(path, contents)
            .with_context(|| format!("Failed to write progress to {:?}", path))?;

        Ok(())
    }

    /// Default path to progress.json
    fn progress_path() -> Result<PathBuf> {
        Ok(Config::data_dir()?.join("progress.json"))
    }

    /// Top users ranked by total quiz score
    pub fn top_users(&self, n: usize) -> Vec<(String, ProgressRecord)> {
        let mut users: Vec<_> =
            self.records.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
        users.sort_by(|a, b| b.1.total_score.cmp(&a.1.total_score));
        users.truncate(n);
        users
    }
}

impl ProgressRepository for ProgressStore {
    fn fetch(&self, key: &str) -> Option<ProgressRecord> {
        self.records.get(key).cloned()
    }

    fn store(&mut self, key: &str, record: ProgressRecord) {
        self.records.insert(key.to_string(), record);
    }

    fn log_attempt(&mut self, attempt: QuizAttempt) {
        self.attempts.push(attempt);
    }
}

/// In-memory repository for tests and one-shot sessions
#[derive(Debug, Clone, Default)]
pub struct MemoryRepository {
    records: HashMap<String, ProgressRecord>,
    attempts: Vec<QuizAttempt>,
}

impl MemoryRepository {
    /// Empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Logged quiz attempts, oldest first
    pub fn attempts(&self) -> &[QuizAttempt] {
        &self.attempts
    }
}

impl ProgressRepository for MemoryRepository {
    fn fetch(&self, key: &str) -> Option<ProgressRecord> {
        self.records.get(key).cloned()
    }

    fn store(&mut self, key: &str, record: ProgressRecord) {
        self.records.insert(key.to_string(), record);
    }

    fn log_attempt(&mut self, attempt: QuizAttempt) {
        self.attempts.push(attempt);
    }
}

/// File-backed community board storage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommunityStore {
    /// The bulletin board
    pub board: Board,
}

impl CommunityStore {
    /// Load the board from the default location on disk
    ///
    /// A missing file yields a board seeded with sample posts so first
    /// runs have something to show.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::community_path()?)
    }

    /// Load the board from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read community board from {:?}", path))?;
            serde_json::from_str(&contents).with_context(|| "Failed to parse community.json")
        } else {
            Ok(Self { board: Board::with_sample_posts() })
        }
    }

    /// Save the board to the default location on disk
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::community_path()?)
    }

    /// Save the board to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create data directory {:?}", parent))?;
        }

        let contents = serde_json::to_string_pretty(self)
            .with_context(|| "Failed to serialize community board")?;

        std::fs::write(path, contents)
            .with_context(|| format!("Failed to write community board to {:?}", path))?;

        Ok(())
    }

    /// Default path to community.json
    fn community_path() -> Result<PathBuf> {
        Ok(Config::data_dir()?.join("community.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_progress_file_loads_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = ProgressStore::load_from(&dir.path().join("progress.json")).unwrap();
        assert!(store.records.is_empty());
        assert!(store.attempts.is_empty());
    }

    #[test]
    fn progress_store_round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("progress.json");

        let mut store = ProgressStore::default();
        let mut record = ProgressRecord::default();
        record.record_topic("climate change");
        record.record_quiz(2);
        store.store("user_1", record.clone());
        store.log_attempt(QuizAttempt {
            user_key: "user_1".into(),
            topic: "climate change".into(),
            score: 2,
            total_questions: 3,
            percentage: 67,
            created_at: 0,
        });
        store.save_to(&path).unwrap();

        let loaded = ProgressStore::load_from(&path).unwrap();
        assert_eq!(loaded.fetch("user_1"), Some(record));
        assert_eq!(loaded.attempts.len(), 1);
    }

    #[test]
    fn top_users_rank_by_total_score() {
        let mut store = ProgressStore::default();
        let mut low = ProgressRecord::default();
        low.record_quiz(1);
        let mut high = ProgressRecord::default();
        high.record_quiz(3);

        store.store("low", low);
        store.store("high", high);

        let top = store.top_users(1);
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].0, "high");
    }

    #[test]
    fn missing_community_file_seeds_sample_posts() {
        let dir = tempfile::tempdir().unwrap();
        let store = CommunityStore::load_from(&dir.path().join("community.json")).unwrap();
        assert_eq!(store.board.len(), 5);
    }

    #[test]
    fn community_store_round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("community.json");

        let mut store = CommunityStore { board: Board::new() };
        store.board.post("alice", "planted a tree").unwrap();
        store.save_to(&path).unwrap();

        let loaded = CommunityStore::load_from(&path).unwrap();
        assert_eq!(loaded.board.len(), 1);
        assert_eq!(loaded.board.recent(1)[0].author, "alice");
    }

    #[test]
    fn memory_repository_fetch_returns_stored_record() {
        let mut repo = MemoryRepository::new();
        assert_eq!(repo.fetch("user"), None);

        let mut record = ProgressRecord::default();
        record.record_topic("water");
        repo.store("user", record.clone());
        assert_eq!(repo.fetch("user"), Some(record));
    }
}
