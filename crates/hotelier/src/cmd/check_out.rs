//! Close a stay and print the final bill.

use super::IdentityArgs;
use crate::{report, FrontDesk};
use std::process::ExitCode;

/// Run the `check-out` subcommand.
pub fn run(desk: &FrontDesk, args: &IdentityArgs) -> anyhow::Result<ExitCode> {
    match desk.check_out(&args.name, &args.id_proof) {
        Ok(receipt) => {
            println!("Thank you for staying with us!");
            println!("Room {} is now available.", receipt.room_number);
            print!("{}", report::render_bill(&receipt.bill));
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => super::fail(error),
    }
}
