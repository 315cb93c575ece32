//! Availability aggregation over baseline snapshots and the live check-in.
//!
//! Everything in this module is a pure function over its inputs: the merge
//! never accumulates state across calls, so re-aggregating the same baseline
//! and record yields the same output. The baseline snapshot is an externally
//! supplied seed list, treated as read-only.

use crate::models::{AvailabilityEntry, PresenceRecord};
use std::collections::HashMap;

/// Merges the live check-in (if any) into a baseline availability snapshot.
///
/// A baseline entry matching the record's (skill, location) pair absorbs the
/// live worker: its count goes up by 1 and it is marked live. With no match,
/// a new live entry with count 1 is appended at the end. Baseline order is
/// preserved either way, and `None` returns the baseline unchanged.
pub fn merge_live(
    baseline: &[AvailabilityEntry],
    live: Option<&PresenceRecord>,
) -> Vec<AvailabilityEntry> {
    let mut entries = baseline.to_vec();

    if let Some(record) = live {
        match entries
            .iter_mut()
            .find(|e| e.matches(&record.skill_id, &record.location))
        {
            Some(entry) => {
                entry.count += 1;
                entry.is_live = true;
            }
            None => entries.push(AvailabilityEntry {
                skill_id: record.skill_id.clone(),
                location: record.location.clone(),
                count: 1,
                is_live: true,
            }),
        }
    }

    entries
}

/// Filter criteria for availability listings. `None` or the literal `"all"`
/// matches everything for that dimension.
#[derive(Debug, Clone, Default)]
pub struct AvailabilityFilter {
    /// Location to keep, if narrowing by location
    pub location: Option<String>,
    /// Skill id to keep, if narrowing by skill
    pub skill_id: Option<String>,
}

impl AvailabilityFilter {
    /// Returns true when the entry passes all supplied criteria.
    pub fn matches(&self, entry: &AvailabilityEntry) -> bool {
        let location_ok = match self.location.as_deref() {
            None | Some("all") => true,
            Some(location) => entry.location == location,
        };
        let skill_ok = match self.skill_id.as_deref() {
            None | Some("all") => true,
            Some(skill_id) => entry.skill_id == skill_id,
        };
        location_ok && skill_ok
    }
}

/// Keeps the entries matching all supplied filter criteria, in input order.
pub fn filter_entries(
    entries: &[AvailabilityEntry],
    filter: &AvailabilityFilter,
) -> Vec<AvailabilityEntry> {
    entries
        .iter()
        .filter(|e| filter.matches(e))
        .cloned()
        .collect()
}

/// Sum of worker counts across all entries.
pub fn total_workers(entries: &[AvailabilityEntry]) -> u32 {
    entries.iter().map(|e| e.count).sum()
}

/// Worker totals grouped by location.
pub fn totals_by_location(entries: &[AvailabilityEntry]) -> HashMap<String, u32> {
    let mut totals = HashMap::new();
    for entry in entries {
        *totals.entry(entry.location.clone()).or_insert(0) += entry.count;
    }
    totals
}

/// Worker totals grouped by skill id.
pub fn totals_by_skill(entries: &[AvailabilityEntry]) -> HashMap<String, u32> {
    let mut totals = HashMap::new();
    for entry in entries {
        *totals.entry(entry.skill_id.clone()).or_insert(0) += entry.count;
    }
    totals
}

/// Number of distinct locations with at least one entry.
pub fn distinct_location_count(entries: &[AvailabilityEntry]) -> usize {
    totals_by_location(entries).len()
}

/// Number of distinct skills with at least one entry.
pub fn distinct_skill_count(entries: &[AvailabilityEntry]) -> usize {
    totals_by_skill(entries).len()
}

/// The dashboard's three headline figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketSummary {
    /// Total available workers across all buckets
    pub total_workers: u32,
    /// Distinct locations with availability
    pub active_locations: usize,
    /// Distinct skills with availability
    pub available_skills: usize,
}

/// Computes the headline summary for a set of entries. Empty input yields
/// all zeroes, not an error.
pub fn summarize(entries: &[AvailabilityEntry]) -> MarketSummary {
    MarketSummary {
        total_workers: total_workers(entries),
        active_locations: distinct_location_count(entries),
        available_skills: distinct_skill_count(entries),
    }
}
