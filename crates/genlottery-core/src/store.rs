//! Result store — one whole-file record per game type.
//!
//! Each game type owns exactly one file, `<save_dir>/<TYPE>.db`, holding a
//! JSON [`SavedBatch`]. Saves overwrite wholesale; there is no append or
//! merge, and no locking — the tool is single-process by contract.
//!
//! Field names inside the file keep the original short codes (`d`, `t`,
//! `l`, `x1`, `x2`) via serde renames, but lines live in a structured
//! array instead of index-suffixed keys.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use directories::UserDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::draw::DrawLine;
use crate::rules::LotteryType;

/// Directory under the user's home that holds the store files.
pub const SAVE_DIR_NAME: &str = "lottery-db";

/// Filename extension for store files.
pub const SAVE_FILE_EXT: &str = "db";

// ── Errors ──────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no saved results for {lottery_type}")]
    NotFound { lottery_type: LotteryType },

    #[error("saved file for {lottery_type} is unreadable")]
    Corrupt {
        lottery_type: LotteryType,
        #[source]
        source: serde_json::Error,
    },

    #[error("could not determine the home directory")]
    NoHomeDir,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Outcome of a delete request. A missing file is a normal, reportable
/// outcome, not a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    NotFound,
}

// ── Persisted record ────────────────────────────────────────────────

/// One persisted batch of generated lines for a single game type.
///
/// Overwritten wholesale on each save, read wholesale on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedBatch {
    /// When the batch was generated.
    #[serde(rename = "d")]
    pub created_at: DateTime<Utc>,

    /// The game the batch was generated for.
    #[serde(rename = "t")]
    pub lottery_type: LotteryType,

    /// Number of lines in the batch.
    #[serde(rename = "l")]
    pub line_count: usize,

    /// The generated lines, in order. A line's `x2` is `null` when the
    /// game has no secondary draw, so reads can tell "no secondary draw"
    /// from "secondary draw of zero numbers".
    #[serde(rename = "x")]
    pub lines: Vec<DrawLine>,
}

// ── Store ───────────────────────────────────────────────────────────

/// Filesystem-backed store, keyed by game type.
#[derive(Debug, Clone)]
pub struct ResultStore {
    dir: PathBuf,
}

impl ResultStore {
    /// A store rooted at an explicit directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// A store rooted at the default location, `~/lottery-db`.
    pub fn open_default() -> Result<Self, StoreError> {
        let dirs = UserDirs::new().ok_or(StoreError::NoHomeDir)?;
        Ok(Self::new(dirs.home_dir().join(SAVE_DIR_NAME)))
    }

    /// The directory holding the store files.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// The store file path for one game type: `<dir>/<TYPE>.db`.
    pub fn path_for(&self, lottery_type: LotteryType) -> PathBuf {
        let mut path = self.dir.join(lottery_type.as_str());
        path.set_extension(SAVE_FILE_EXT);
        path
    }

    /// Persist a batch, wholesale overwriting any previous record for
    /// that game type. Creates the save directory if absent.
    pub fn save(&self, batch: &SavedBatch) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(batch.lottery_type);
        let json = serde_json::to_string_pretty(batch).map_err(|source| StoreError::Corrupt {
            lottery_type: batch.lottery_type,
            source,
        })?;
        fs::write(&path, json)?;
        debug!(path = %path.display(), lines = batch.line_count, "batch saved");
        Ok(())
    }

    /// Load the saved batch for a game type.
    pub fn load(&self, lottery_type: LotteryType) -> Result<SavedBatch, StoreError> {
        let path = self.path_for(lottery_type);
        let contents = fs::read_to_string(&path).map_err(|err| {
            if err.kind() == ErrorKind::NotFound {
                StoreError::NotFound { lottery_type }
            } else {
                StoreError::Io(err)
            }
        })?;
        let batch = serde_json::from_str(&contents).map_err(|source| StoreError::Corrupt {
            lottery_type,
            source,
        })?;
        debug!(path = %path.display(), "batch loaded");
        Ok(batch)
    }

    /// Delete the store file for a game type, reporting whether there
    /// was one.
    pub fn delete(&self, lottery_type: LotteryType) -> Result<DeleteOutcome, StoreError> {
        let path = self.path_for(lottery_type);
        match fs::remove_file(&path) {
            Ok(()) => {
                debug!(path = %path.display(), "store file deleted");
                Ok(DeleteOutcome::Deleted)
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(DeleteOutcome::NotFound),
            Err(err) => Err(StoreError::Io(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use crate::draw::draw_many;
    use crate::rules::LotteryType;

    use super::*;

    fn batch_for(lottery_type: LotteryType, line_count: usize) -> SavedBatch {
        SavedBatch {
            created_at: Utc::now(),
            lottery_type,
            line_count,
            lines: draw_many(&lottery_type.rule(), line_count),
        }
    }

    #[test]
    fn save_then_load_round_trips_exactly() {
        let dir = TempDir::new().expect("tempdir");
        let store = ResultStore::new(dir.path());

        let batch = batch_for(LotteryType::Euro, 3);
        store.save(&batch).expect("save");

        let loaded = store.load(LotteryType::Euro).expect("load");
        assert_eq!(loaded, batch);
    }

    #[test]
    fn secondary_absence_survives_a_round_trip() {
        let dir = TempDir::new().expect("tempdir");
        let store = ResultStore::new(dir.path());

        let batch = batch_for(LotteryType::Lotto, 2);
        store.save(&batch).expect("save");

        let loaded = store.load(LotteryType::Lotto).expect("load");
        assert!(loaded.lines.iter().all(|line| line.secondary.is_none()));
    }

    #[test]
    fn save_overwrites_the_previous_record() {
        let dir = TempDir::new().expect("tempdir");
        let store = ResultStore::new(dir.path());

        store.save(&batch_for(LotteryType::Euro, 5)).expect("first save");
        let second = batch_for(LotteryType::Euro, 1);
        store.save(&second).expect("second save");

        let loaded = store.load(LotteryType::Euro).expect("load");
        assert_eq!(loaded.line_count, 1);
        assert_eq!(loaded, second);
    }

    #[test]
    fn each_game_type_owns_its_own_file() {
        let dir = TempDir::new().expect("tempdir");
        let store = ResultStore::new(dir.path());

        store.save(&batch_for(LotteryType::Euro, 1)).expect("save euro");
        store.save(&batch_for(LotteryType::Thunder, 1)).expect("save thunder");

        assert!(store.path_for(LotteryType::Euro).exists());
        assert!(store.path_for(LotteryType::Thunder).exists());
        assert!(store.path_for(LotteryType::Euro).ends_with("EURO.db"));
    }

    #[test]
    fn load_missing_file_is_not_found() {
        let dir = TempDir::new().expect("tempdir");
        let store = ResultStore::new(dir.path());

        let err = store.load(LotteryType::Set4Life).expect_err("should miss");
        assert!(matches!(err, StoreError::NotFound { .. }));
    }

    #[test]
    fn delete_reports_deleted_then_not_found() {
        let dir = TempDir::new().expect("tempdir");
        let store = ResultStore::new(dir.path());

        store.save(&batch_for(LotteryType::Thunder, 2)).expect("save");
        assert_eq!(
            store.delete(LotteryType::Thunder).expect("delete"),
            DeleteOutcome::Deleted
        );
        assert!(!store.path_for(LotteryType::Thunder).exists());

        // Second delete of the same file is a normal outcome, not an error
        assert_eq!(
            store.delete(LotteryType::Thunder).expect("delete again"),
            DeleteOutcome::NotFound
        );

        // And a subsequent load misses
        let err = store.load(LotteryType::Thunder).expect_err("load after delete");
        assert!(matches!(err, StoreError::NotFound { .. }));
    }

    #[test]
    fn corrupt_file_is_reported_as_corrupt() {
        let dir = TempDir::new().expect("tempdir");
        let store = ResultStore::new(dir.path());

        std::fs::create_dir_all(store.dir()).expect("mkdir");
        std::fs::write(store.path_for(LotteryType::Euro), "not json").expect("write");

        let err = store.load(LotteryType::Euro).expect_err("corrupt");
        assert!(matches!(err, StoreError::Corrupt { .. }));
    }
}
