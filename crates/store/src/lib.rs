//! Leaderboard persistence.
//!
//! Scores are grouped by speed tier; each tier keeps a ranked top-3 of
//! `{name, score, timestamp}`. The whole table lives in one small JSON file.
//! A missing or corrupt file degrades to an empty table - losing an old high
//! score list is not worth refusing to run - but save failures surface to
//! the caller.
//!
//! The simulation itself is never persisted; only these session results are.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

/// Entries retained per speed tier.
pub const SCORES_PER_TIER: usize = 3;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to write leaderboard: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode leaderboard: {0}")]
    Encode(#[from] serde_json::Error),
}

/// One ranked result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub name: String,
    pub score: u32,
    /// Milliseconds since the Unix epoch, supplied by the caller.
    pub timestamp_ms: u64,
}

/// Top scores per speed tier, backed by a JSON file.
#[derive(Debug, Clone)]
pub struct Leaderboard {
    path: PathBuf,
    tiers: BTreeMap<u32, Vec<ScoreEntry>>,
}

impl Leaderboard {
    /// Open the leaderboard at `path`.
    ///
    /// Missing files start empty; unreadable or malformed files are logged
    /// and treated as empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let tiers = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(tiers) => tiers,
                Err(err) => {
                    warn!(path = %path.display(), %err, "corrupt leaderboard file, starting empty");
                    BTreeMap::new()
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => {
                warn!(path = %path.display(), %err, "unreadable leaderboard file, starting empty");
                BTreeMap::new()
            }
        };
        Self { path, tiers }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Record a result, keeping each tier sorted by score (ties keep the
    /// older entry first) and truncated to [`SCORES_PER_TIER`].
    ///
    /// Returns true if the entry made the cut.
    pub fn submit(&mut self, tier: u32, entry: ScoreEntry) -> bool {
        let scores = self.tiers.entry(tier).or_default();
        let rank = scores
            .iter()
            .position(|existing| entry.score > existing.score)
            .unwrap_or(scores.len());

        if rank >= SCORES_PER_TIER {
            return false;
        }

        scores.insert(rank, entry);
        scores.truncate(SCORES_PER_TIER);
        debug!(tier, rank, "leaderboard entry recorded");
        true
    }

    /// Ranked entries for one tier, best first.
    pub fn scores(&self, tier: u32) -> &[ScoreEntry] {
        self.tiers.get(&tier).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All tiers holding at least one score, ascending.
    pub fn tiers(&self) -> impl Iterator<Item = (u32, &[ScoreEntry])> {
        self.tiers.iter().map(|(tier, scores)| (*tier, scores.as_slice()))
    }

    /// Persist the table to its file, creating parent directories as needed.
    pub fn save(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let raw = serde_json::to_string_pretty(&self.tiers)?;
        fs::write(&self.path, raw)?;
        debug!(path = %self.path.display(), "leaderboard saved");
        Ok(())
    }
}
