//! Request housekeeping services.

use super::IdentityArgs;
use crate::{catalog, FrontDesk, HousekeepingRequest, ServiceLine};
use std::process::ExitCode;

/// Arguments for `hotelier housekeeping`.
#[derive(clap::Args, Debug)]
pub struct Args {
    /// Guest identity
    #[command(flatten)]
    pub identity: IdentityArgs,

    /// Service to request (repeatable)
    #[arg(long = "service", value_name = "NAME", required = true)]
    pub services: Vec<String>,

    /// Preferred time of service
    #[arg(long, default_value = "Now")]
    pub time: String,

    /// Special requirements
    #[arg(long, default_value = "")]
    pub note: String,
}

/// Run the `housekeeping` subcommand.
pub fn run(desk: &FrontDesk, args: &Args) -> anyhow::Result<ExitCode> {
    let mut services = Vec::new();
    for name in &args.services {
        let Some((canonical, cost)) = catalog::find_service(name) else {
            eprintln!("unknown service: {name} (see `hotelier menu`)");
            return Ok(ExitCode::FAILURE);
        };
        services.push(ServiceLine {
            service: canonical.to_string(),
            cost,
        });
    }

    let request = HousekeepingRequest {
        services,
        preferred_time: args.time.clone(),
        special_request: args.note.clone(),
    };
    match desk.request_housekeeping(&args.identity.name, &args.identity.id_proof, request) {
        Ok(receipt) => {
            println!(
                "Housekeeping requested for room {}. Total: \u{20b9}{}",
                receipt.room_number, receipt.total
            );
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => super::fail(error),
    }
}
