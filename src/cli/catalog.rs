//! Catalog listing commands for populating selection controls.

use crate::catalog::Catalog;
use crate::cli::common::{CliError, CliResult};
use clap::Args;

/// List the recognized skills
#[derive(Debug, Clone, Args)]
pub struct SkillsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl SkillsArgs {
    /// Execute the skills command
    pub fn execute(&self) -> CliResult<()> {
        let catalog = Catalog::load()
            .map_err(|e| CliError::io(format!("Failed to load catalog: {e}")))?;

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(catalog.skills())
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            for skill in catalog.skills() {
                println!(
                    "{} {:<12} {:<16} [{}]",
                    skill.icon, skill.name, skill.hindi, skill.id
                );
            }
        }

        Ok(())
    }
}

/// List the recognized muster-point locations
#[derive(Debug, Clone, Args)]
pub struct LocationsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl LocationsArgs {
    /// Execute the locations command
    pub fn execute(&self) -> CliResult<()> {
        let catalog = Catalog::load()
            .map_err(|e| CliError::io(format!("Failed to load catalog: {e}")))?;

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(catalog.locations())
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            for location in catalog.locations() {
                println!("{location}");
            }
        }

        Ok(())
    }
}
