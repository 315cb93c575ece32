//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and the data directory override.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Labour Haat";

/// The binary name of the application (used in command examples, lowercase with hyphens).
pub const APP_BINARY_NAME: &str = "labour-haat";

/// Environment variable that overrides the data directory (used by tests
/// and portable installs).
pub const DATA_DIR_ENV: &str = "LABOUR_HAAT_DATA_DIR";
