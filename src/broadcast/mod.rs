//! Job broadcast composition and dispatch.
//!
//! Composition is deterministic string rendering from a requirement and a
//! language; dispatch validates completeness and produces the write-once
//! [`BroadcastRecord`]. Actual delivery (speech synthesis, display) belongs
//! to the host's [`NotificationSink`].

pub mod sink;

pub use sink::NotificationSink;

use crate::catalog::Catalog;
use crate::models::{
    BroadcastRecord, DeliveryMode, IncompleteRequirementError, JobRequirement, Language,
};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Renders the requirement as a human-readable message in the given language.
///
/// Total: never fails. An unresolvable skill id yields an empty string
/// (callers are expected to validate completeness before composing for
/// delivery). All segments interpolate positionally and verbatim — an empty
/// duration or description still produces the template's separators, so a
/// trailing space after the final "." is intentional.
pub fn compose(catalog: &Catalog, requirement: &JobRequirement, language: Language) -> String {
    let Some(skill) = catalog.skill_by_id(&requirement.skill_id) else {
        return String::new();
    };

    let count = requirement.count.map(|c| c.to_string()).unwrap_or_default();
    let wage = requirement
        .daily_wage
        .map(|w| w.to_string())
        .unwrap_or_default();

    match language {
        Language::Hindi => format!(
            "{} {} चाहिए {} में। ₹{}/दिन। {}। {}",
            count, skill.hindi, requirement.location, wage, requirement.duration,
            requirement.description
        ),
        Language::English => format!(
            "Need {} {} at {}. ₹{}/day. {}. {}",
            count, skill.name, requirement.location, wage, requirement.duration,
            requirement.description
        ),
    }
}

/// Produces the broadcast record for a complete requirement.
///
/// A contractor-recorded message overrides the composed text and marks the
/// delivery as custom voice; otherwise the message is composed from the
/// requirement and spoken by the host's synthesizer. Fails with
/// [`IncompleteRequirementError`] when any of skill, count, location, or
/// daily wage is missing or invalid — no record is created in that case.
///
/// The returned record is not delivered here; hand it to a
/// [`NotificationSink`].
pub fn send(
    catalog: &Catalog,
    requirement: &JobRequirement,
    custom_message: Option<String>,
    language: Language,
    now: DateTime<Utc>,
) -> Result<BroadcastRecord, IncompleteRequirementError> {
    requirement.validate(catalog)?;

    let (message, delivery_mode) = match custom_message {
        Some(message) => (message, DeliveryMode::CustomVoice),
        None => (
            compose(catalog, requirement, language),
            DeliveryMode::SynthesizedVoice,
        ),
    };

    Ok(BroadcastRecord {
        id: Uuid::new_v4(),
        requirement: requirement.clone(),
        message,
        language,
        delivery_mode,
        created_at: now,
    })
}
