//! Show the running bill for an active stay.

use super::IdentityArgs;
use crate::{report, FrontDesk};
use clap::ValueEnum;
use std::process::ExitCode;

/// Output format for the bill.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output (default)
    #[default]
    Text,
    /// JSON output for tooling integration
    Json,
}

/// Arguments for `hotelier bill`.
#[derive(clap::Args, Debug)]
pub struct Args {
    /// Guest identity
    #[command(flatten)]
    pub identity: IdentityArgs,

    /// Output format (text or json)
    #[arg(long, short = 'f', value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Run the `bill` subcommand.
pub fn run(desk: &FrontDesk, args: &Args) -> anyhow::Result<ExitCode> {
    match desk.current_bill(&args.identity.name, &args.identity.id_proof) {
        Ok(bill) => {
            match args.format {
                OutputFormat::Text => print!("{}", report::render_bill(&bill)),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&bill)?),
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => super::fail(error),
    }
}
