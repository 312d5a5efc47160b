//! Leave feedback about a stay.

use crate::FrontDesk;
use hotelier_core::Ratings;
use std::process::ExitCode;

/// Arguments for `hotelier feedback`.
#[derive(clap::Args, Debug)]
pub struct Args {
    /// Guest name
    #[arg(long)]
    pub name: String,

    /// ID proof, used to look up the room if currently checked in
    #[arg(long, value_name = "ID")]
    pub id_proof: Option<String>,

    /// Room quality rating, 1-5
    #[arg(long, default_value_t = 5)]
    pub room: u8,

    /// Staff service rating, 1-5
    #[arg(long, default_value_t = 5)]
    pub staff: u8,

    /// Food quality rating, 1-5
    #[arg(long, default_value_t = 5)]
    pub food: u8,

    /// Overall experience rating, 1-5
    #[arg(long, default_value_t = 5)]
    pub overall: u8,

    /// Would you recommend us? (yes or no)
    #[arg(long, default_value = "yes")]
    pub recommend: String,

    /// Additional comments
    #[arg(long, default_value = "")]
    pub comments: String,
}

/// Run the `feedback` subcommand.
pub fn run(desk: &FrontDesk, args: &Args) -> anyhow::Result<ExitCode> {
    let recommend = match args.recommend.to_lowercase().as_str() {
        "yes" => true,
        "no" => false,
        other => {
            eprintln!("expected yes or no for --recommend, got {other}");
            return Ok(ExitCode::FAILURE);
        }
    };

    let ratings = Ratings {
        room: args.room,
        staff: args.staff,
        food: args.food,
        overall: args.overall,
    };
    match desk.leave_feedback(
        &args.name,
        args.id_proof.as_deref(),
        ratings,
        recommend,
        &args.comments,
    ) {
        Ok(_) => {
            println!("Thank you for your feedback!");
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => super::fail(error),
    }
}
