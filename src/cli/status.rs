//! Worker session status command.

use crate::catalog::Catalog;
use crate::cli::common::{CliError, CliResult};
use crate::models::PresenceRecord;
use crate::presence::PresenceStore;
use crate::session::SessionStore;
use clap::Args;
use serde::Serialize;

/// Show the current check-in, if any
#[derive(Debug, Clone, Args)]
pub struct StatusArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StatusResult<'a> {
    checked_in: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    record: Option<&'a PresenceRecord>,
}

impl StatusArgs {
    /// Execute the status command
    pub fn execute(&self) -> CliResult<()> {
        let catalog = Catalog::load()
            .map_err(|e| CliError::io(format!("Failed to load catalog: {e}")))?;
        let session = SessionStore::open_default()
            .map_err(|e| CliError::io(format!("Failed to open session store: {e}")))?;

        let record = session
            .load_presence()
            .map_err(|e| CliError::io(format!("Failed to load session: {e}")))?;
        let store = PresenceStore::with_record(record);

        let result = StatusResult {
            checked_in: store.is_checked_in(),
            record: store.current(),
        };

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&result)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else if let Some(record) = store.current() {
            let display = catalog.display_for(&record.skill_id);
            println!(
                "{} Checked in: {} ({}) at {}",
                display.icon, display.hindi, display.name, record.location
            );
            println!("Since: {}", record.checked_in_at.to_rfc3339());
            if let Some(coords) = record.coordinates {
                println!("Position: {}, {}", coords.lat, coords.lng);
            }
        } else {
            println!("Not checked in.");
        }

        Ok(())
    }
}
