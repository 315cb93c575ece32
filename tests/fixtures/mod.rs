//! Shared test fixtures for integration and E2E CLI tests.
#![allow(dead_code)] // Not every suite uses every fixture

use chrono::{DateTime, TimeZone, Utc};
use labour_haat::models::{AvailabilityEntry, JobRequirement, PresenceRecord};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// A deterministic "now" for tests.
pub fn test_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 7, 30, 0).unwrap()
}

/// The dashboard's seed snapshot: three skills at Patia Chowk plus a few
/// single-skill locations.
pub fn test_baseline() -> Vec<AvailabilityEntry> {
    vec![
        AvailabilityEntry::new("mason", "Patia Chowk", 12),
        AvailabilityEntry::new("carpenter", "Patia Chowk", 8),
        AvailabilityEntry::new("helper", "Patia Chowk", 25),
        AvailabilityEntry::new("mason", "Khandagiri Square", 6),
        AvailabilityEntry::new("painter", "Khandagiri Square", 4),
        AvailabilityEntry::new("electrician", "Master Canteen Square", 3),
        AvailabilityEntry::new("plumber", "Jaydev Vihar", 5),
        AvailabilityEntry::new("driver", "Baramunda Bus Stand", 15),
        AvailabilityEntry::new("welder", "Saheed Nagar", 2),
    ]
}

/// A presence record for the given pair with the deterministic timestamp.
pub fn test_record(skill_id: &str, location: &str) -> PresenceRecord {
    PresenceRecord {
        skill_id: skill_id.to_string(),
        location: location.to_string(),
        checked_in_at: test_time(),
        coordinates: None,
    }
}

/// The reference requirement: 5 masons at Patia Chowk, 500/day,
/// starting tomorrow.
pub fn sample_requirement() -> JobRequirement {
    JobRequirement::new("mason", 5, "Patia Chowk", 500).with_duration("Starts tomorrow")
}

/// Creates an isolated data directory for a CLI test run and returns it
/// with its guard. Pass the path via `LABOUR_HAAT_DATA_DIR`.
pub fn temp_data_dir() -> (PathBuf, TempDir) {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let path = temp.path().to_path_buf();
    (path, temp)
}

/// Writes a baseline snapshot to a JSON file inside the given temp dir.
pub fn write_baseline_file(dir: &TempDir, entries: &[AvailabilityEntry]) -> PathBuf {
    let path = dir.path().join("baseline.json");
    let content = serde_json::to_string_pretty(entries).expect("Failed to serialize baseline");
    fs::write(&path, content).expect("Failed to write baseline file");
    path
}
