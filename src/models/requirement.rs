//! Job requirement data structure and completeness validation.

use crate::catalog::Catalog;
use serde::{Deserialize, Serialize};

/// A contractor's job requirement, as entered in the broadcast form.
///
/// Mirrors the form state: `count` and `daily_wage` are absent until the
/// contractor fills them in, and `skill_id`/`location` may be empty strings.
/// A requirement is *broadcastable* only when [`JobRequirement::validate`]
/// passes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRequirement {
    /// Required skill id
    pub skill_id: String,
    /// Number of workers needed (>= 1 to broadcast)
    pub count: Option<u32>,
    /// Work location
    pub location: String,
    /// Daily wage in rupees (>= 1 to broadcast)
    pub daily_wage: Option<u32>,
    /// Free-text work duration (e.g., "Starts tomorrow")
    #[serde(default)]
    pub duration: String,
    /// Free-text additional details
    #[serde(default)]
    pub description: String,
}

impl JobRequirement {
    /// Creates a requirement with the four broadcast-gating fields set.
    pub fn new(
        skill_id: impl Into<String>,
        count: u32,
        location: impl Into<String>,
        daily_wage: u32,
    ) -> Self {
        Self {
            skill_id: skill_id.into(),
            count: Some(count),
            location: location.into(),
            daily_wage: Some(daily_wage),
            duration: String::new(),
            description: String::new(),
        }
    }

    /// Sets the work duration.
    #[must_use]
    pub fn with_duration(mut self, duration: impl Into<String>) -> Self {
        self.duration = duration.into();
        self
    }

    /// Sets the additional details.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Checks completeness against the catalog.
    ///
    /// A requirement is complete when the skill resolves, the location is
    /// non-empty, and both count and daily wage are present and at least 1.
    /// The location is deliberately not checked against the catalog here:
    /// requirements loaded from older snapshots may name retired muster
    /// points and must stay broadcastable.
    pub fn validate(&self, catalog: &Catalog) -> Result<(), IncompleteRequirementError> {
        let mut missing = Vec::new();

        if self.skill_id.is_empty() || catalog.skill_by_id(&self.skill_id).is_none() {
            missing.push(RequirementField::Skill);
        }
        if !self.count.is_some_and(|c| c >= 1) {
            missing.push(RequirementField::Count);
        }
        if self.location.is_empty() {
            missing.push(RequirementField::Location);
        }
        if !self.daily_wage.is_some_and(|w| w >= 1) {
            missing.push(RequirementField::DailyWage);
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(IncompleteRequirementError { missing })
        }
    }

    /// Returns true when [`JobRequirement::validate`] would pass.
    pub fn is_complete(&self, catalog: &Catalog) -> bool {
        self.validate(catalog).is_ok()
    }
}

/// Fields that gate broadcasting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequirementField {
    /// Skill id missing or not in the catalog
    Skill,
    /// Worker count missing or zero
    Count,
    /// Location missing
    Location,
    /// Daily wage missing or zero
    DailyWage,
}

impl std::fmt::Display for RequirementField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Skill => write!(f, "skill"),
            Self::Count => write!(f, "number of workers"),
            Self::Location => write!(f, "location"),
            Self::DailyWage => write!(f, "daily wage"),
        }
    }
}

/// Broadcast attempted on a requirement with missing or invalid fields.
///
/// Recoverable: the caller fills in the listed fields and retries. No
/// broadcast record is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncompleteRequirementError {
    /// The fields that are missing or invalid
    pub missing: Vec<RequirementField>,
}

impl std::fmt::Display for IncompleteRequirementError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let fields: Vec<String> = self.missing.iter().map(ToString::to_string).collect();
        write!(
            f,
            "Job requirement is incomplete: please fill in {}",
            fields.join(", ")
        )
    }
}

impl std::error::Error for IncompleteRequirementError {}
