//! Contractor dashboard command: aggregated worker availability.

use crate::aggregation::{
    filter_entries, merge_live, summarize, AvailabilityFilter, MarketSummary,
};
use crate::catalog::Catalog;
use crate::cli::common::{CliError, CliResult};
use crate::models::AvailabilityEntry;
use crate::session::SessionStore;
use clap::Args;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

/// View aggregated worker supply by location and skill
#[derive(Debug, Clone, Args)]
pub struct WorkersArgs {
    /// Filter by location ("all" matches everything)
    #[arg(short, long, value_name = "LOCATION", default_value = "all")]
    pub location: String,

    /// Filter by skill id ("all" matches everything)
    #[arg(short, long, value_name = "SKILL", default_value = "all")]
    pub skill: String,

    /// Baseline availability snapshot to aggregate over (JSON file);
    /// defaults to the embedded market snapshot
    #[arg(short, long, value_name = "FILE")]
    pub baseline: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct WorkersResult {
    summary: MarketSummary,
    entries: Vec<AvailabilityEntry>,
}

impl WorkersArgs {
    /// Execute the workers command
    pub fn execute(&self) -> CliResult<()> {
        let catalog = Catalog::load()
            .map_err(|e| CliError::io(format!("Failed to load catalog: {e}")))?;
        let session = SessionStore::open_default()
            .map_err(|e| CliError::io(format!("Failed to open session store: {e}")))?;

        let baseline = self.load_baseline()?;
        let live = session
            .load_presence()
            .map_err(|e| CliError::io(format!("Failed to load session: {e}")))?;

        // Aggregation is recomputed fresh on every call; a checked-out
        // session simply contributes nothing.
        let merged = merge_live(&baseline, live.as_ref());
        let summary = summarize(&merged);

        let filter = AvailabilityFilter {
            location: Some(self.location.clone()),
            skill_id: Some(self.skill.clone()),
        };
        let entries = filter_entries(&merged, &filter);

        if self.json {
            let result = WorkersResult { summary, entries };
            println!(
                "{}",
                serde_json::to_string_pretty(&result)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
            return Ok(());
        }

        println!(
            "Workers: {}   Locations: {}   Skills: {}",
            summary.total_workers, summary.active_locations, summary.available_skills
        );
        println!();

        if entries.is_empty() {
            println!("No workers found matching your filters.");
            println!("Try adjusting the location or skill filter.");
            return Ok(());
        }

        for entry in &entries {
            let display = catalog.display_for(&entry.skill_id);
            let live_tag = if entry.is_live { "  [LIVE]" } else { "" };
            println!(
                "{} {:<12} {:<24} {:>3} available{}",
                display.icon, display.name, entry.location, entry.count, live_tag
            );
        }

        Ok(())
    }

    /// Loads the baseline snapshot from the given file, or the embedded
    /// default market snapshot.
    fn load_baseline(&self) -> CliResult<Vec<AvailabilityEntry>> {
        let content = match &self.baseline {
            Some(path) => fs::read_to_string(path).map_err(|e| {
                CliError::io(format!("Failed to read baseline {}: {e}", path.display()))
            })?,
            None => include_str!("default_baseline.json").to_string(),
        };

        serde_json::from_str(&content)
            .map_err(|e| CliError::io(format!("Failed to parse baseline snapshot: {e}")))
    }
}
