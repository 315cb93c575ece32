//! Worker presence data structures.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Geographic coordinates captured by the host's geolocation source.
///
/// The core never reads sensors; coordinates arrive as plain values and are
/// stored verbatim on the presence record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coordinates {
    /// Latitude in decimal degrees
    pub lat: f64,
    /// Longitude in decimal degrees
    pub lng: f64,
}

impl Coordinates {
    /// Creates a new coordinate pair.
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// One worker's declared availability: skill, muster point, and when they
/// checked in.
///
/// # Invariants
///
/// - At most one active record exists per worker session; a new check-in
///   replaces the old record rather than adding a second one.
/// - Records are never mutated in place, only replaced or cleared.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresenceRecord {
    /// Skill id, validated against the catalog at check-in
    pub skill_id: String,
    /// Muster-point location, validated against the catalog at check-in
    pub location: String,
    /// When the worker checked in
    pub checked_in_at: DateTime<Utc>,
    /// Device coordinates at check-in, when the host captured them
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
}
