//! Allocate a room and open a stay.

use super::IdentityArgs;
use crate::{CheckInRequest, FrontDesk};
use hotelier_core::{timestamp, RoomType};
use std::process::ExitCode;

/// Arguments for `hotelier check-in`.
#[derive(clap::Args, Debug)]
pub struct Args {
    /// Guest identity
    #[command(flatten)]
    pub identity: IdentityArgs,

    /// Room type to book (normal, deluxe, suite)
    #[arg(long, value_name = "TYPE")]
    pub room_type: String,

    /// Number of nights
    #[arg(long)]
    pub nights: u32,

    /// Contact phone number
    #[arg(long)]
    pub phone: String,
}

/// Run the `check-in` subcommand.
pub fn run(desk: &FrontDesk, args: &Args) -> anyhow::Result<ExitCode> {
    let room_type: RoomType = match args.room_type.parse() {
        Ok(room_type) => room_type,
        Err(reason) => {
            eprintln!("{reason}");
            return Ok(ExitCode::FAILURE);
        }
    };

    let request = CheckInRequest {
        name: args.identity.name.clone(),
        id_proof: args.identity.id_proof.clone(),
        room_type,
        nights: args.nights,
        phone: args.phone.clone(),
    };
    match desk.check_in(request) {
        Ok(receipt) => {
            println!(
                "Room {} ({}) booked for {} night(s) at \u{20b9}{}/night",
                receipt.room_number, receipt.room_type, receipt.nights, receipt.price_per_night
            );
            println!("Room total: \u{20b9}{}", receipt.room_total);
            println!(
                "Check-in time: {}",
                receipt.checked_in_at.format(timestamp::FORMAT)
            );
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => super::fail(error),
    }
}
