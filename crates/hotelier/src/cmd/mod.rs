//! Command implementations for the hotelier CLI.
//!
//! Each module contains the full implementation for one subcommand; the
//! `hotelier` binary is a thin wrapper over [`main`].

pub mod audit;
pub mod bill;
pub mod check_in;
pub mod check_out;
pub mod feedback;
pub mod grievance;
pub mod housekeeping;
pub mod menu;
pub mod order;
pub mod rooms;

use crate::{FrontDesk, FrontDeskError};
use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::Level;

/// Reservation ledger and billing engine.
#[derive(Parser, Debug)]
#[command(name = "hotelier", version, about, long_about = None)]
pub struct Cli {
    /// Directory holding the ledger files
    #[arg(long, global = true, default_value = "data", value_name = "DIR")]
    pub data_dir: PathBuf,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The operation to run
    #[command(subcommand)]
    pub command: Command,
}

/// All subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List all rooms and their status
    Rooms,
    /// Show the food, item, and housekeeping price lists
    Menu,
    /// Allocate a room and open a stay
    CheckIn(check_in::Args),
    /// Close a stay, free its room, and print the final bill
    CheckOut(IdentityArgs),
    /// Show the running bill for an active stay
    Bill(bill::Args),
    /// Order food to the room
    OrderFood(order::Args),
    /// Order non-food items to the room
    OrderItem(order::Args),
    /// Request housekeeping services
    Housekeeping(housekeeping::Args),
    /// File a grievance
    Grievance(grievance::Args),
    /// Leave feedback about a stay
    Feedback(feedback::Args),
    /// Check the ledger files for inconsistencies
    Audit,
}

/// Identity fields shared by the guest-scoped subcommands.
#[derive(Args, Debug)]
pub struct IdentityArgs {
    /// Guest name (matched case-insensitively)
    #[arg(long)]
    pub name: String,

    /// ID proof (matched exactly)
    #[arg(long, value_name = "ID")]
    pub id_proof: String,
}

/// Parse arguments and run the requested subcommand.
pub fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt().with_max_level(Level::DEBUG).init();
    }

    match run(&cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let desk = FrontDesk::open(&cli.data_dir)
        .with_context(|| format!("failed to open data directory {}", cli.data_dir.display()))?;

    match &cli.command {
        Command::Rooms => rooms::run(&desk),
        Command::Menu => Ok(menu::run()),
        Command::CheckIn(args) => check_in::run(&desk, args),
        Command::CheckOut(args) => check_out::run(&desk, args),
        Command::Bill(args) => bill::run(&desk, args),
        Command::OrderFood(args) => order::run(&desk, args, order::OrderKind::Food),
        Command::OrderItem(args) => order::run(&desk, args, order::OrderKind::Items),
        Command::Housekeeping(args) => housekeeping::run(&desk, args),
        Command::Grievance(args) => grievance::run(&desk, args),
        Command::Feedback(args) => feedback::run(&desk, args),
        Command::Audit => audit::run(&desk),
    }
}

/// Report a recoverable front-desk failure and exit non-zero.
///
/// Storage failures propagate as hard errors instead.
pub(crate) fn fail(error: FrontDeskError) -> anyhow::Result<ExitCode> {
    match error {
        FrontDeskError::Storage(_) => Err(error.into()),
        recoverable => {
            eprintln!("{recoverable}");
            Ok(ExitCode::FAILURE)
        }
    }
}
