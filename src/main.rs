//! Labour Haat - local-first digital muster for day-labour markets
//!
//! Workers declare availability (skill + muster point), contractors view
//! aggregated supply and broadcast job requirements back to workers as a
//! synthesized bilingual message. All state lives on this device.

use clap::{Parser, Subcommand};
use labour_haat::cli::{
    BroadcastArgs, CheckinArgs, CheckoutArgs, LocationsArgs, SkillsArgs, StatusArgs, WorkersArgs,
};
use labour_haat::constants::APP_BINARY_NAME;

/// Labour Haat - local-first digital muster for day-labour markets
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Declare availability for a skill at a muster point
    Checkin(CheckinArgs),
    /// Clear the active check-in
    Checkout(CheckoutArgs),
    /// Show the current check-in, if any
    Status(StatusArgs),
    /// View aggregated worker supply by location and skill
    Workers(WorkersArgs),
    /// Broadcast a job requirement to workers
    Broadcast(BroadcastArgs),
    /// List the recognized skills
    Skills(SkillsArgs),
    /// List the recognized muster-point locations
    Locations(LocationsArgs),
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let result = match &cli.command {
        Command::Checkin(args) => args.execute(),
        Command::Checkout(args) => args.execute(),
        Command::Status(args) => args.execute(),
        Command::Workers(args) => args.execute(),
        Command::Broadcast(args) => args.execute(),
        Command::Skills(args) => args.execute(),
        Command::Locations(args) => args.execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code());
    }
}
