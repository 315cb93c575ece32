//! Labour Haat Library
//!
//! This library provides the core functionality for the Labour Haat digital
//! muster application: the skill/location catalog, worker presence tracking,
//! availability aggregation, and bilingual job-broadcast composition. The
//! CLI in `src/main.rs` is one host layer driving this core; any other UI
//! could drive it identically.

// Module declarations
pub mod aggregation;
pub mod broadcast;
pub mod catalog;
pub mod cli;
pub mod constants;
pub mod models;
pub mod presence;
pub mod session;
