//! File a grievance.

use super::IdentityArgs;
use crate::FrontDesk;
use hotelier_core::GrievancePriority;
use std::process::ExitCode;

/// Arguments for `hotelier grievance`.
#[derive(clap::Args, Debug)]
pub struct Args {
    /// Guest identity
    #[command(flatten)]
    pub identity: IdentityArgs,

    /// Complaint category (e.g. "Room Cleanliness", "Staff Behavior")
    #[arg(long)]
    pub category: String,

    /// Priority (high, medium, low)
    #[arg(long, default_value = "medium")]
    pub priority: String,

    /// Free-text description of the problem
    #[arg(long)]
    pub description: String,
}

/// Run the `grievance` subcommand.
pub fn run(desk: &FrontDesk, args: &Args) -> anyhow::Result<ExitCode> {
    let priority: GrievancePriority = match args.priority.parse() {
        Ok(priority) => priority,
        Err(reason) => {
            eprintln!("{reason}");
            return Ok(ExitCode::FAILURE);
        }
    };

    match desk.file_grievance(
        &args.identity.name,
        &args.identity.id_proof,
        &args.category,
        priority,
        &args.description,
    ) {
        Ok(grievance) => {
            println!(
                "Grievance filed for room {}; our team will address it shortly.",
                grievance.room_number
            );
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => super::fail(error),
    }
}
