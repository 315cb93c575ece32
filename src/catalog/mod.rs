//! Skill and location reference catalog.
//!
//! This module provides access to the embedded catalog of recognized trades
//! and muster points. Every other component validates and resolves display
//! labels through it.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A recognized trade with its display labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    /// Stable identifier (e.g., "mason", "carpenter")
    pub id: String,
    /// English display name (e.g., "Mason")
    pub name: String,
    /// Hindi display name (e.g., "राजमिस्त्री")
    pub hindi: String,
    /// Emoji icon shown in pickers and listings
    pub icon: String,
}

/// Catalog schema from catalog.json.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CatalogData {
    version: String,
    skills: Vec<Skill>,
    locations: Vec<String>,
}

/// Display labels for a skill id, with a generic fallback for ids the
/// catalog does not know (display code must degrade gracefully).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillDisplay {
    /// English label (raw id when unknown)
    pub name: String,
    /// Hindi label (raw id when unknown)
    pub hindi: String,
    /// Icon (generic worker icon when unknown)
    pub icon: String,
}

/// Fallback icon used when a skill id does not resolve.
pub const FALLBACK_ICON: &str = "👷";

/// Skill and location catalog with fast lookup.
///
/// The catalog is embedded in the binary at compile time and loaded on
/// access. Skills and locations keep their declaration order, which is the
/// order selection controls present them in.
#[derive(Debug, Clone)]
pub struct Catalog {
    skills: Vec<Skill>,
    locations: Vec<String>,
    /// Fast lookup by skill id
    lookup: HashMap<String, usize>,
}

impl Catalog {
    /// Loads the catalog from the embedded JSON file.
    pub fn load() -> Result<Self> {
        let json_data = include_str!("catalog.json");
        let data: CatalogData =
            serde_json::from_str(json_data).context("Failed to parse embedded catalog.json")?;

        let lookup = data
            .skills
            .iter()
            .enumerate()
            .map(|(idx, skill)| (skill.id.clone(), idx))
            .collect();

        Ok(Self {
            skills: data.skills,
            locations: data.locations,
            lookup,
        })
    }

    /// Looks up a skill by id. Returns `None` for unknown ids; callers that
    /// render output should fall back via [`Catalog::display_for`].
    pub fn skill_by_id(&self, id: &str) -> Option<&Skill> {
        self.lookup.get(id).map(|&idx| &self.skills[idx])
    }

    /// Returns true if the id names a recognized skill.
    pub fn is_valid_skill(&self, id: &str) -> bool {
        self.lookup.contains_key(id)
    }

    /// All skills in catalog order.
    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }

    /// All muster-point locations in catalog order.
    pub fn locations(&self) -> &[String] {
        &self.locations
    }

    /// Returns true if the location is one of the recognized muster points.
    pub fn is_valid_location(&self, location: &str) -> bool {
        self.locations.iter().any(|l| l == location)
    }

    /// Display labels for a skill id, degrading to the raw id and a generic
    /// icon when the id is unknown.
    pub fn display_for(&self, skill_id: &str) -> SkillDisplay {
        match self.skill_by_id(skill_id) {
            Some(skill) => SkillDisplay {
                name: skill.name.clone(),
                hindi: skill.hindi.clone(),
                icon: skill.icon.clone(),
            },
            None => SkillDisplay {
                name: skill_id.to_string(),
                hindi: skill_id.to_string(),
                icon: FALLBACK_ICON.to_string(),
            },
        }
    }

    /// Number of skills in the catalog.
    pub fn skill_count(&self) -> usize {
        self.skills.len()
    }

    /// Number of locations in the catalog.
    pub fn location_count(&self) -> usize {
        self.locations.len()
    }
}
