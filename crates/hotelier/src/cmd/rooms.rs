//! List rooms and their status.

use crate::{report, FrontDesk};
use std::process::ExitCode;

/// Run the `rooms` subcommand.
pub fn run(desk: &FrontDesk) -> anyhow::Result<ExitCode> {
    match desk.list_rooms() {
        Ok(rooms) => {
            print!("{}", report::render_rooms(&rooms));
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => super::fail(error),
    }
}
