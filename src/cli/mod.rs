//! CLI command handlers for Labour Haat.
//!
//! This module provides headless, scriptable access to the core: the worker
//! view (`checkin`, `checkout`, `status`), the contractor dashboard
//! (`workers`), the broadcast view (`broadcast`), and catalog listings
//! (`skills`, `locations`). Every command supports `--json` output.

pub mod broadcast;
pub mod catalog;
pub mod checkin;
pub mod common;
pub mod status;
pub mod workers;

// Re-export types used by main.rs and tests
pub use broadcast::BroadcastArgs;
pub use catalog::{LocationsArgs, SkillsArgs};
pub use checkin::{CheckinArgs, CheckoutArgs};
pub use common::{CliError, CliResult};
pub use status::StatusArgs;
pub use workers::WorkersArgs;
