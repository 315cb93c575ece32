//! Broadcast record data structures.

use crate::models::JobRequirement;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Language a broadcast message is rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Hindi rendering (the default for worker-facing broadcasts)
    Hindi,
    /// English rendering
    English,
}

impl Language {
    /// Lowercase tag used on the wire and in CLI flags.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hindi => "hindi",
            Self::English => "english",
        }
    }

    /// BCP 47 tag the host hands to its speech synthesizer.
    #[must_use]
    pub const fn speech_tag(self) -> &'static str {
        match self {
            Self::Hindi => "hi-IN",
            Self::English => "en-IN",
        }
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hindi" | "hi" => Ok(Self::Hindi),
            "english" | "en" => Ok(Self::English),
            other => Err(format!(
                "Unknown language '{other}' (expected 'hindi' or 'english')"
            )),
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How the broadcast message is delivered to workers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeliveryMode {
    /// Message text composed from the requirement, spoken by the host's
    /// text-to-speech engine
    SynthesizedVoice,
    /// Contractor-recorded voice message, sent as-is
    CustomVoice,
}

/// One sent broadcast event. Immutable once created; the host appends it to
/// its broadcast history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BroadcastRecord {
    /// Unique id for this broadcast
    pub id: Uuid,
    /// The requirement this broadcast was composed from
    pub requirement: JobRequirement,
    /// The message text delivered to workers
    pub message: String,
    /// Language the message is rendered in
    pub language: Language,
    /// How the message is delivered
    pub delivery_mode: DeliveryMode,
    /// When the broadcast was sent
    pub created_at: DateTime<Utc>,
}
