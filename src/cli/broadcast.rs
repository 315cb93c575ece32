//! Contractor broadcast command: compose and send a job requirement.

use crate::broadcast::{compose, send, NotificationSink};
use crate::catalog::Catalog;
use crate::cli::common::{CliError, CliResult};
use crate::models::{BroadcastRecord, JobRequirement, Language};
use crate::session::SessionStore;
use chrono::Utc;
use clap::Args;
use log::info;

/// Broadcast a job requirement to workers as a spoken/text message
#[derive(Debug, Clone, Args)]
pub struct BroadcastArgs {
    /// Required skill id
    #[arg(short, long, value_name = "SKILL")]
    pub skill: String,

    /// Number of workers needed
    #[arg(short, long, value_name = "N")]
    pub count: Option<u32>,

    /// Work location
    #[arg(short, long, value_name = "LOCATION")]
    pub location: String,

    /// Daily wage in rupees
    #[arg(short, long, value_name = "RUPEES")]
    pub wage: Option<u32>,

    /// Work duration (e.g., "Starts tomorrow, 1 week project")
    #[arg(short, long, value_name = "TEXT", default_value = "")]
    pub duration: String,

    /// Additional requirements or details
    #[arg(long, value_name = "TEXT", default_value = "")]
    pub description: String,

    /// Broadcast language
    #[arg(long, value_name = "LANG", default_value = "hindi")]
    pub language: Language,

    /// Contractor-recorded message, sent as-is instead of the composed text
    #[arg(short, long, value_name = "TEXT")]
    pub message: Option<String>,

    /// Compose and print the message without sending
    #[arg(short, long)]
    pub preview: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Sink that "speaks" by printing the message with its speech tag and
/// logging the delivery. Stands in for the device's speech synthesizer.
struct ConsoleSink;

impl NotificationSink for ConsoleSink {
    fn deliver(&self, record: &BroadcastRecord) -> anyhow::Result<()> {
        println!("🔊 [{}] {}", record.language.speech_tag(), record.message);
        info!(
            "Delivered broadcast {} ({})",
            record.id,
            record.language.as_str()
        );
        Ok(())
    }
}

impl BroadcastArgs {
    /// Execute the broadcast command
    pub fn execute(&self) -> CliResult<()> {
        let catalog = Catalog::load()
            .map_err(|e| CliError::io(format!("Failed to load catalog: {e}")))?;

        let requirement = self.requirement();

        if self.preview {
            return self.preview_message(&catalog, &requirement);
        }

        let record = send(
            &catalog,
            &requirement,
            self.message.clone(),
            self.language,
            Utc::now(),
        )
        .map_err(|e| CliError::incomplete(e.to_string()))?;

        // Delivery and history are host concerns; the core only produced
        // the record. JSON consumers drive their own sink, so the console
        // sink only speaks in human mode.
        if !self.json {
            ConsoleSink
                .deliver(&record)
                .map_err(|e| CliError::io(format!("Failed to deliver broadcast: {e}")))?;
        }

        let session = SessionStore::open_default()
            .map_err(|e| CliError::io(format!("Failed to open session store: {e}")))?;
        session
            .append_broadcast(&record)
            .map_err(|e| CliError::io(format!("Failed to record broadcast: {e}")))?;

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&record)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            println!("Job broadcasted. Workers in the area will be notified.");
        }

        Ok(())
    }

    fn requirement(&self) -> JobRequirement {
        JobRequirement {
            skill_id: self.skill.clone(),
            count: self.count,
            location: self.location.clone(),
            daily_wage: self.wage,
            duration: self.duration.clone(),
            description: self.description.clone(),
        }
    }

    fn preview_message(&self, catalog: &Catalog, requirement: &JobRequirement) -> CliResult<()> {
        let message = compose(catalog, requirement, self.language);
        if message.is_empty() {
            return Err(CliError::validation(format!(
                "Unknown skill: '{}'",
                self.skill
            )));
        }

        if self.json {
            println!(
                "{}",
                serde_json::json!({
                    "message": message,
                    "language": self.language.as_str(),
                })
            );
        } else {
            println!("{message}");
        }
        Ok(())
    }
}
