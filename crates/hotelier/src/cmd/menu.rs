//! Show the food, item, and housekeeping price lists.

use crate::catalog;
use std::process::ExitCode;

/// Run the `menu` subcommand.
pub fn run() -> ExitCode {
    print_section("FOOD MENU", catalog::FOOD_MENU);
    print_section("NON-FOOD ITEMS", catalog::ITEM_CATALOG);
    print_section("HOUSEKEEPING SERVICES", catalog::HOUSEKEEPING_SERVICES);
    ExitCode::SUCCESS
}

fn print_section(title: &str, entries: &[(&str, u32)]) {
    println!("{title}");
    for (name, price) in entries {
        println!("  {name:<20} \u{20b9}{price}");
    }
    println!();
}
