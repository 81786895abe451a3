//! Saved schedules.
//!
//! A single JSON file holding a pretty-printed array of [`HistoryEntry`].
//! Every operation reads the whole file and writes it back; there is no
//! locking, so one store per file per process.
//!
//! A missing file is an empty history. So is a file that cannot be read or
//! parsed; an unparseable file is first copied to `<path>.bak` so the next
//! save does not destroy it.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::Local;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::models::{Match, Player};

/// Timestamp layout used for entries.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const EDITED_SUFFIX: &str = " (edited)";

/// History store failure.
#[derive(Debug, Error)]
pub enum HistoryError {
    /// The history file could not be read or written.
    #[error("history file I/O failed: {0}")]
    Io(#[from] std::io::Error),
    /// Entries could not be encoded as JSON.
    #[error("history encoding failed: {0}")]
    Json(#[from] serde_json::Error),
    /// No entry carries this id.
    #[error("history entry {0} not found")]
    NotFound(Uuid),
    /// Matches or players were empty.
    #[error("matches and players are required")]
    EmptyPayload,
}

impl HistoryError {
    /// HTTP status a transport should answer with.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::EmptyPayload => 400,
            Self::NotFound(_) => 404,
            Self::Io(_) | Self::Json(_) => 500,
        }
    }
}

/// One saved schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Random (v4) identifier assigned on save.
    pub id: Uuid,
    /// Local time of the last save, with an ` (edited)` suffix once updated.
    pub timestamp: String,
    /// Saved matches, in their original order.
    pub matches: Vec<Match>,
    /// Roster the matches were generated from.
    #[serde(default)]
    pub players: Vec<Player>,
}

impl HistoryEntry {
    /// Display title: timestamp plus roster size when a roster was saved.
    pub fn title(&self) -> String {
        if self.players.is_empty() {
            self.timestamp.clone()
        } else {
            format!("{} - {} players", self.timestamp, self.players.len())
        }
    }
}

/// JSON-file backed history.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    /// Opens a store at `path`. The file is created on first save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Where an unparseable history file is copied before being replaced.
    pub fn backup_path(&self) -> PathBuf {
        let mut name = self.path.clone().into_os_string();
        name.push(".bak");
        PathBuf::from(name)
    }

    /// All entries, newest timestamp first.
    pub fn list(&self) -> Vec<HistoryEntry> {
        let mut entries = self.read_all();
        entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        entries
    }

    /// Appends a new entry and returns its id.
    pub fn save(&self, matches: Vec<Match>, players: Vec<Player>) -> Result<Uuid, HistoryError> {
        if matches.is_empty() || players.is_empty() {
            return Err(HistoryError::EmptyPayload);
        }

        let mut entries = self.read_all();
        let entry = HistoryEntry {
            id: Uuid::new_v4(),
            timestamp: now(),
            matches,
            players,
        };
        let id = entry.id;
        info!(%id, matches = entry.matches.len(), "saving schedule to history");
        entries.push(entry);
        self.write_all(&entries)?;
        Ok(id)
    }

    /// Looks up an entry by id.
    pub fn get(&self, id: Uuid) -> Result<HistoryEntry, HistoryError> {
        self.read_all()
            .into_iter()
            .find(|e| e.id == id)
            .ok_or(HistoryError::NotFound(id))
    }

    /// Replaces an entry's matches and roster and marks it edited.
    pub fn update(
        &self,
        id: Uuid,
        matches: Vec<Match>,
        players: Vec<Player>,
    ) -> Result<(), HistoryError> {
        if matches.is_empty() || players.is_empty() {
            return Err(HistoryError::EmptyPayload);
        }

        let mut entries = self.read_all();
        let entry = entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(HistoryError::NotFound(id))?;
        entry.matches = matches;
        entry.players = players;
        entry.timestamp = format!("{}{EDITED_SUFFIX}", now());
        info!(%id, "updated history entry");
        self.write_all(&entries)
    }

    fn read_all(&self) -> Vec<HistoryEntry> {
        let data = match std::fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no history file yet");
                return Vec::new();
            }
            Err(e) => {
                warn!("Failed to read {}: {e}, using empty history", self.path.display());
                return Vec::new();
            }
        };
        match serde_json::from_str(&data) {
            Ok(entries) => entries,
            Err(e) => {
                let backup = self.backup_path();
                warn!(
                    "Failed to parse {}: {e}, using empty history (copy kept at {})",
                    self.path.display(),
                    backup.display()
                );
                if let Err(e) = std::fs::write(&backup, &data) {
                    warn!("Failed to write {}: {e}", backup.display());
                }
                Vec::new()
            }
        }
    }

    fn write_all(&self, entries: &[HistoryEntry]) -> Result<(), HistoryError> {
        let json = serde_json::to_string_pretty(entries)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}

fn now() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store() -> (TempDir, HistoryStore) {
        let dir = TempDir::new().unwrap();
        let store = HistoryStore::new(dir.path().join("history.json"));
        (dir, store)
    }

    fn sample() -> (Vec<Match>, Vec<Player>) {
        (
            vec![Match::singles("a", "b")],
            vec![Player::new("a"), Player::new("b")],
        )
    }

    #[test]
    fn test_missing_file_is_empty() {
        let (_dir, store) = store();
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_save_and_get() {
        let (_dir, store) = store();
        let (matches, players) = sample();
        let id = store.save(matches.clone(), players.clone()).unwrap();

        let entry = store.get(id).unwrap();
        assert_eq!(entry.matches, matches);
        assert_eq!(entry.players, players);
        assert_eq!(entry.timestamp.len(), "2024-01-01 00:00:00".len());
        assert_eq!(entry.title(), format!("{} - 2 players", entry.timestamp));
        assert!(store.path().exists());
    }

    #[test]
    fn test_save_rejects_empty_payload() {
        let (_dir, store) = store();
        let (matches, players) = sample();
        let err = store.save(Vec::new(), players).unwrap_err();
        assert!(matches!(err, HistoryError::EmptyPayload));
        assert_eq!(err.status_code(), 400);
        assert!(store.save(matches, Vec::new()).is_err());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_get_unknown_id() {
        let (_dir, store) = store();
        let err = store.get(Uuid::new_v4()).unwrap_err();
        assert!(matches!(err, HistoryError::NotFound(_)));
        assert_eq!(err.status_code(), 404);
    }

    #[test]
    fn test_update_marks_edited() {
        let (_dir, store) = store();
        let (matches, players) = sample();
        let id = store.save(matches, players).unwrap();

        let new_matches = vec![Match::singles("b", "c")];
        let new_players = vec![Player::new("b"), Player::new("c"), Player::new("d")];
        store
            .update(id, new_matches.clone(), new_players.clone())
            .unwrap();

        let entry = store.get(id).unwrap();
        assert_eq!(entry.matches, new_matches);
        assert_eq!(entry.players, new_players);
        assert!(entry.timestamp.ends_with(" (edited)"));
    }

    #[test]
    fn test_update_unknown_id() {
        let (_dir, store) = store();
        let (matches, players) = sample();
        store.save(matches.clone(), players.clone()).unwrap();
        let err = store.update(Uuid::new_v4(), matches, players).unwrap_err();
        assert!(matches!(err, HistoryError::NotFound(_)));
    }

    #[test]
    fn test_list_newest_first() {
        let (_dir, store) = store();
        let entries = vec![
            HistoryEntry {
                id: Uuid::new_v4(),
                timestamp: "2024-03-01 10:00:00".into(),
                matches: vec![Match::singles("a", "b")],
                players: Vec::new(),
            },
            HistoryEntry {
                id: Uuid::new_v4(),
                timestamp: "2024-05-01 09:00:00".into(),
                matches: vec![Match::singles("a", "b")],
                players: vec![Player::new("a"), Player::new("b")],
            },
        ];
        store.write_all(&entries).unwrap();

        let listed = store.list();
        assert_eq!(listed[0].id, entries[1].id);
        assert_eq!(listed[1].id, entries[0].id);
        assert_eq!(listed[0].title(), "2024-05-01 09:00:00 - 2 players");
        assert_eq!(listed[1].title(), "2024-03-01 10:00:00");
    }

    #[test]
    fn test_corrupt_file_is_empty() {
        let (_dir, store) = store();
        std::fs::write(store.path(), "not json").unwrap();
        assert!(store.list().is_empty());
        assert_eq!(
            std::fs::read_to_string(store.backup_path()).unwrap(),
            "not json"
        );

        let (matches, players) = sample();
        let id = store.save(matches, players).unwrap();
        assert_eq!(store.list().len(), 1);
        assert!(store.get(id).is_ok());
    }

    #[test]
    fn test_unparseable_file_survives_next_save() {
        let (_dir, store) = store();
        std::fs::write(store.path(), "[{\"id\": truncated").unwrap();

        let (matches, players) = sample();
        store.save(matches, players).unwrap();

        assert_eq!(store.list().len(), 1);
        assert_eq!(
            std::fs::read_to_string(store.backup_path()).unwrap(),
            "[{\"id\": truncated"
        );
        assert_eq!(
            store.backup_path().file_name().unwrap(),
            "history.json.bak"
        );
    }
}
