//! The hotelier CLI binary.

use std::process::ExitCode;

fn main() -> ExitCode {
    hotelier::cmd::main()
}
