//! Host-side persistence for the worker session and broadcast history.
//!
//! The core treats persistence as the host's responsibility: the presence
//! record and broadcast history serialize verbatim as JSON. This module is
//! that host layer for the CLI — an explicit file-backed contract replacing
//! the original prototype's ambient local-storage key.

use crate::constants::DATA_DIR_ENV;
use crate::models::{BroadcastRecord, PresenceRecord};
use anyhow::{Context, Result};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// File name for the persisted presence record.
const PRESENCE_FILE: &str = "presence.json";

/// File name for the broadcast history.
const BROADCASTS_FILE: &str = "broadcasts.json";

/// File-backed store for one device's session state.
#[derive(Debug, Clone)]
pub struct SessionStore {
    data_dir: PathBuf,
}

impl SessionStore {
    /// Creates a store rooted at an explicit directory (used by tests).
    #[must_use]
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Creates a store at the platform data directory, honoring the
    /// `LABOUR_HAAT_DATA_DIR` override.
    pub fn open_default() -> Result<Self> {
        if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
            return Ok(Self::new(dir));
        }

        let base = dirs::data_dir().context("Could not determine platform data directory")?;
        Ok(Self::new(base.join("labour-haat")))
    }

    /// The directory this store reads and writes.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn presence_path(&self) -> PathBuf {
        self.data_dir.join(PRESENCE_FILE)
    }

    fn broadcasts_path(&self) -> PathBuf {
        self.data_dir.join(BROADCASTS_FILE)
    }

    /// Loads the persisted presence record, if one exists.
    pub fn load_presence(&self) -> Result<Option<PresenceRecord>> {
        let path = self.presence_path();
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path)
            .context(format!("Failed to read presence file: {}", path.display()))?;
        let record: PresenceRecord = serde_json::from_str(&content).context(format!(
            "Failed to parse presence file: {}",
            path.display()
        ))?;
        Ok(Some(record))
    }

    /// Persists the presence record.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save_presence(&self, record: &PresenceRecord) -> Result<()> {
        let content =
            serde_json::to_string_pretty(record).context("Failed to serialize presence record")?;
        self.write_atomic(&self.presence_path(), &content)?;
        debug!("Saved presence record to {}", self.presence_path().display());
        Ok(())
    }

    /// Removes the persisted presence record. A missing file is a no-op,
    /// matching check-out's idempotence.
    pub fn clear_presence(&self) -> Result<()> {
        let path = self.presence_path();
        if path.exists() {
            fs::remove_file(&path).context(format!(
                "Failed to remove presence file: {}",
                path.display()
            ))?;
        }
        Ok(())
    }

    /// Loads the broadcast history, oldest first. A missing file is an
    /// empty history.
    pub fn load_broadcasts(&self) -> Result<Vec<BroadcastRecord>> {
        let path = self.broadcasts_path();
        if !path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&path).context(format!(
            "Failed to read broadcast history: {}",
            path.display()
        ))?;
        let records: Vec<BroadcastRecord> = serde_json::from_str(&content).context(format!(
            "Failed to parse broadcast history: {}",
            path.display()
        ))?;
        Ok(records)
    }

    /// Appends one record to the broadcast history. Records are write-once;
    /// the history only ever grows.
    pub fn append_broadcast(&self, record: &BroadcastRecord) -> Result<()> {
        let mut records = self.load_broadcasts()?;
        records.push(record.clone());

        let content = serde_json::to_string_pretty(&records)
            .context("Failed to serialize broadcast history")?;
        self.write_atomic(&self.broadcasts_path(), &content)?;
        debug!("Appended broadcast {} to history", record.id);
        Ok(())
    }

    fn write_atomic(&self, path: &Path, content: &str) -> Result<()> {
        fs::create_dir_all(&self.data_dir).context(format!(
            "Failed to create data directory: {}",
            self.data_dir.display()
        ))?;

        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, content).context(format!(
            "Failed to write temp file: {}",
            temp_path.display()
        ))?;

        // Atomic rename
        fs::rename(&temp_path, path).context(format!(
            "Failed to rename temp file to: {}",
            path.display()
        ))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Coordinates, DeliveryMode, JobRequirement, Language};
    use chrono::{TimeZone, Utc};
    use tempfile::TempDir;
    use uuid::Uuid;

    fn sample_record() -> PresenceRecord {
        PresenceRecord {
            skill_id: "mason".to_string(),
            location: "Patia Chowk".to_string(),
            checked_in_at: Utc.with_ymd_and_hms(2025, 6, 1, 7, 30, 0).unwrap(),
            coordinates: Some(Coordinates::new(20.3537, 85.8246)),
        }
    }

    #[test]
    fn test_presence_save_load_clear() {
        let dir = TempDir::new().unwrap();
        let store = SessionStore::new(dir.path());

        assert!(store.load_presence().unwrap().is_none());

        let record = sample_record();
        store.save_presence(&record).unwrap();
        assert_eq!(store.load_presence().unwrap(), Some(record));

        store.clear_presence().unwrap();
        assert!(store.load_presence().unwrap().is_none());

        // Clearing again is a no-op
        store.clear_presence().unwrap();
    }

    #[test]
    fn test_save_overwrites_previous_record() {
        let dir = TempDir::new().unwrap();
        let store = SessionStore::new(dir.path());

        store.save_presence(&sample_record()).unwrap();

        let mut replacement = sample_record();
        replacement.skill_id = "welder".to_string();
        store.save_presence(&replacement).unwrap();

        assert_eq!(
            store.load_presence().unwrap().unwrap().skill_id,
            "welder"
        );
    }

    #[test]
    fn test_no_temp_file_left_behind() {
        let dir = TempDir::new().unwrap();
        let store = SessionStore::new(dir.path());
        store.save_presence(&sample_record()).unwrap();

        let leftovers: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(std::result::Result::ok)
            .filter(|e| e.path().extension().is_some_and(|ext| ext == "tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[test]
    fn test_broadcast_history_appends() {
        let dir = TempDir::new().unwrap();
        let store = SessionStore::new(dir.path());
        assert!(store.load_broadcasts().unwrap().is_empty());

        let record = BroadcastRecord {
            id: Uuid::new_v4(),
            requirement: JobRequirement::new("mason", 5, "Patia Chowk", 500),
            message: "Need 5 Mason at Patia Chowk. ₹500/day. . ".to_string(),
            language: Language::English,
            delivery_mode: DeliveryMode::SynthesizedVoice,
            created_at: Utc.with_ymd_and_hms(2025, 6, 1, 10, 0, 0).unwrap(),
        };

        store.append_broadcast(&record).unwrap();
        store.append_broadcast(&record).unwrap();

        let history = store.load_broadcasts().unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0], record);
    }
}
