//! Order food or non-food items to the room.

use super::IdentityArgs;
use crate::{catalog, FrontDesk, OrderLine};
use std::process::ExitCode;

/// Which catalog an order draws from.
#[derive(Debug, Clone, Copy)]
pub enum OrderKind {
    /// The food menu, billed to the food ledger.
    Food,
    /// The non-food item list, billed to the services ledger.
    Items,
}

/// Arguments for `hotelier order-food` and `hotelier order-item`.
#[derive(clap::Args, Debug)]
pub struct Args {
    /// Guest identity
    #[command(flatten)]
    pub identity: IdentityArgs,

    /// Items to order as NAME=QTY (e.g. "Pizza=2"); bare NAME means one
    #[arg(value_name = "ITEM=QTY", required = true)]
    pub items: Vec<String>,
}

/// Run the `order-food` or `order-item` subcommand.
pub fn run(desk: &FrontDesk, args: &Args, kind: OrderKind) -> anyhow::Result<ExitCode> {
    let mut lines = Vec::new();
    for raw in &args.items {
        let (name, quantity) = match parse_item(raw) {
            Ok(parsed) => parsed,
            Err(reason) => {
                eprintln!("{reason}");
                return Ok(ExitCode::FAILURE);
            }
        };
        let found = match kind {
            OrderKind::Food => catalog::find_food(&name),
            OrderKind::Items => catalog::find_item(&name),
        };
        let Some((canonical, unit_price)) = found else {
            eprintln!("unknown item: {name} (see `hotelier menu`)");
            return Ok(ExitCode::FAILURE);
        };
        lines.push(OrderLine {
            description: canonical.to_string(),
            quantity,
            unit_price,
        });
    }

    let result = match kind {
        OrderKind::Food => desk.order_food(&args.identity.name, &args.identity.id_proof, lines),
        OrderKind::Items => desk.order_items(&args.identity.name, &args.identity.id_proof, lines),
    };
    match result {
        Ok(receipt) => {
            println!(
                "Order placed for room {}. Total: \u{20b9}{}",
                receipt.room_number, receipt.total
            );
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => super::fail(error),
    }
}

fn parse_item(raw: &str) -> Result<(String, u32), String> {
    let (name, quantity) = raw.split_once('=').unwrap_or((raw, "1"));
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing item name in {raw:?}"));
    }
    let quantity = quantity
        .trim()
        .parse::<u32>()
        .map_err(|_| format!("invalid quantity in {raw:?}"))?;
    Ok((name.to_string(), quantity))
}
