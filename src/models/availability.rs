//! Aggregated availability data structures.

use serde::{Deserialize, Serialize};

/// Aggregated count of available workers for one (skill, location) pair.
///
/// Entries are derived data: the aggregation engine recomputes them on
/// demand from a baseline snapshot plus the current presence record, so they
/// own no independent state. `is_live` marks the bucket that includes the
/// current session's check-in, distinguishing it from baseline seed data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityEntry {
    /// Skill id for this bucket
    pub skill_id: String,
    /// Muster-point location for this bucket
    pub location: String,
    /// Number of available workers
    pub count: u32,
    /// True when this bucket includes the current session's check-in
    #[serde(default)]
    pub is_live: bool,
}

impl AvailabilityEntry {
    /// Creates a baseline (non-live) entry.
    pub fn new(skill_id: impl Into<String>, location: impl Into<String>, count: u32) -> Self {
        Self {
            skill_id: skill_id.into(),
            location: location.into(),
            count,
            is_live: false,
        }
    }

    /// Returns true when this entry is the bucket for the given pair.
    pub fn matches(&self, skill_id: &str, location: &str) -> bool {
        self.skill_id == skill_id && self.location == location
    }
}
