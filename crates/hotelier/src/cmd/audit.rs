//! Check the ledger files for inconsistencies.

use crate::{report, FrontDesk};
use std::process::ExitCode;

/// Run the `audit` subcommand.
pub fn run(desk: &FrontDesk) -> anyhow::Result<ExitCode> {
    match desk.audit() {
        Ok(issues) => {
            print!("{}", report::render_audit(&issues));
            let errors = issues.iter().filter(|i| !i.code.is_warning()).count();
            Ok(if errors > 0 {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            })
        }
        Err(error) => super::fail(error),
    }
}
