//! Worker check-in and check-out commands.

use crate::catalog::Catalog;
use crate::cli::common::{CliError, CliResult};
use crate::models::Coordinates;
use crate::presence::PresenceStore;
use crate::session::SessionStore;
use chrono::Utc;
use clap::Args;
use log::info;

/// Declare availability for a skill at a muster point
#[derive(Debug, Clone, Args)]
pub struct CheckinArgs {
    /// Skill id (see `skills` for the catalog)
    #[arg(short, long, value_name = "SKILL")]
    pub skill: String,

    /// Muster-point location (see `locations` for the catalog)
    #[arg(short, long, value_name = "LOCATION")]
    pub location: String,

    /// Device latitude, when the host captured a position
    #[arg(long, value_name = "DEG", requires = "lng")]
    pub lat: Option<f64>,

    /// Device longitude, when the host captured a position
    #[arg(long, value_name = "DEG", requires = "lat")]
    pub lng: Option<f64>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl CheckinArgs {
    /// Execute the checkin command
    pub fn execute(&self) -> CliResult<()> {
        let catalog = Catalog::load()
            .map_err(|e| CliError::io(format!("Failed to load catalog: {e}")))?;
        let session = SessionStore::open_default()
            .map_err(|e| CliError::io(format!("Failed to open session store: {e}")))?;

        let previous = session
            .load_presence()
            .map_err(|e| CliError::io(format!("Failed to load session: {e}")))?;
        let was_checked_in = previous.is_some();
        let mut store = PresenceStore::with_record(previous);

        let coordinates = match (self.lat, self.lng) {
            (Some(lat), Some(lng)) => Some(Coordinates::new(lat, lng)),
            _ => None,
        };

        let record = store
            .check_in(&catalog, &self.skill, &self.location, coordinates, Utc::now())
            .map_err(|e| CliError::validation(e.to_string()))?;

        session
            .save_presence(&record)
            .map_err(|e| CliError::io(format!("Failed to save session: {e}")))?;
        info!(
            "Checked in: {} at {} (replaced previous: {})",
            record.skill_id, record.location, was_checked_in
        );

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&record)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            let display = catalog.display_for(&record.skill_id);
            if was_checked_in {
                println!("Replaced previous check-in.");
            }
            println!(
                "{} Checked in: {} ({}) at {}",
                display.icon, display.hindi, display.name, record.location
            );
        }

        Ok(())
    }
}

/// Clear the active check-in
#[derive(Debug, Clone, Args)]
pub struct CheckoutArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl CheckoutArgs {
    /// Execute the checkout command
    pub fn execute(&self) -> CliResult<()> {
        let session = SessionStore::open_default()
            .map_err(|e| CliError::io(format!("Failed to open session store: {e}")))?;

        let previous = session
            .load_presence()
            .map_err(|e| CliError::io(format!("Failed to load session: {e}")))?;
        let mut store = PresenceStore::with_record(previous);

        // Idempotent: checking out with no active record is not an error
        let was_checked_in = store.is_checked_in();
        store.check_out();
        session
            .clear_presence()
            .map_err(|e| CliError::io(format!("Failed to clear session: {e}")))?;
        info!("Checked out (was checked in: {})", was_checked_in);

        if self.json {
            println!("{{\"checkedOut\": true, \"wasCheckedIn\": {was_checked_in}}}");
        } else if was_checked_in {
            println!("Checked out. Availability cleared.");
        } else {
            println!("Already checked out.");
        }

        Ok(())
    }
}
