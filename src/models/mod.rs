//! Data models for presence, availability, and job broadcasts.
//!
//! This module contains all the core data structures used throughout the
//! application. Models are designed to be independent of UI and business
//! logic, and serialize with camelCase field names so host layers can pass
//! them to web or mobile frontends unchanged.

pub mod availability;
pub mod broadcast;
pub mod presence;
pub mod requirement;

// Re-export all model types
pub use availability::AvailabilityEntry;
pub use broadcast::{BroadcastRecord, DeliveryMode, Language};
pub use presence::{Coordinates, PresenceRecord};
pub use requirement::{IncompleteRequirementError, JobRequirement, RequirementField};
