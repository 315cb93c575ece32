//! Worker presence state machine.
//!
//! A session is either checked out (no active record) or checked in (exactly
//! one active record). Check-in while already checked in replaces the record
//! with a fresh timestamp; check-out is idempotent. These are the only two
//! mutation paths.

use crate::catalog::Catalog;
use crate::models::{Coordinates, PresenceRecord};
use chrono::{DateTime, Utc};

/// Invalid input passed to check-in. The store is left untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Skill id not present in the catalog
    UnknownSkill(String),
    /// Location not one of the recognized muster points
    UnknownLocation(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownSkill(id) => write!(f, "Unknown skill: '{id}'"),
            Self::UnknownLocation(loc) => write!(f, "Unknown location: '{loc}'"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Holds the single worker-session's active check-in.
///
/// The store owns the only mutable cell in the core. It does not read the
/// clock; the host passes "now" in, which keeps transitions deterministic
/// and testable.
#[derive(Debug, Clone, Default)]
pub struct PresenceStore {
    active: Option<PresenceRecord>,
}

impl PresenceStore {
    /// Creates an empty (checked-out) store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restores a store from a previously persisted record, if any. Hosts
    /// that persist the record across restarts rebuild the session with this.
    #[must_use]
    pub fn with_record(record: Option<PresenceRecord>) -> Self {
        Self { active: record }
    }

    /// Declares availability for a skill at a muster point.
    ///
    /// Validates both ids against the catalog before touching state; on
    /// failure the previous record (if any) stays active. On success any
    /// existing record is replaced — never duplicated — and the new record
    /// is stamped with `now`.
    pub fn check_in(
        &mut self,
        catalog: &Catalog,
        skill_id: &str,
        location: &str,
        coordinates: Option<Coordinates>,
        now: DateTime<Utc>,
    ) -> Result<PresenceRecord, ValidationError> {
        if !catalog.is_valid_skill(skill_id) {
            return Err(ValidationError::UnknownSkill(skill_id.to_string()));
        }
        if !catalog.is_valid_location(location) {
            return Err(ValidationError::UnknownLocation(location.to_string()));
        }

        let record = PresenceRecord {
            skill_id: skill_id.to_string(),
            location: location.to_string(),
            checked_in_at: now,
            coordinates,
        };
        self.active = Some(record.clone());
        Ok(record)
    }

    /// Clears the active record. Calling this while already checked out is a
    /// no-op, not an error.
    pub fn check_out(&mut self) {
        self.active = None;
    }

    /// The active record, if the session is checked in.
    pub fn current(&self) -> Option<&PresenceRecord> {
        self.active.as_ref()
    }

    /// Returns true when a record is active.
    pub fn is_checked_in(&self) -> bool {
        self.active.is_some()
    }
}
