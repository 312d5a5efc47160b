//! Billing aggregation for the reservation ledger.
//!
//! [`compute_bill`] is a pure function: given the (possibly absent) active
//! occupancy and the charge lines already filtered to one guest, it produces
//! an itemized [`Bill`] with per-category sub-totals and a grand total. It
//! never touches storage and never fails; an unavailable charge source
//! contributes 0 to its sub-total and surfaces as a [`BillWarning`] instead.
//!
//! The [`audit`] module checks the cross-record invariants between the room
//! inventory and the occupancy registry.
//!
//! # Example
//!
//! ```
//! use hotelier_billing::{compute_bill, ChargeSource};
//! use hotelier_core::{timestamp, GuestId, Occupancy, OrderCharge, RoomType};
//! use rust_decimal_macros::dec;
//!
//! let guest = GuestId::new("Ann", "P1");
//! let stay = Occupancy::new(&guest, "101", RoomType::Normal, 2, dec!(1000), "", timestamp::now());
//! let food = vec![OrderCharge::new(&guest, "101", "Pizza", 1, dec!(450), timestamp::now())];
//!
//! let bill = compute_bill(
//!     &guest,
//!     Some(&stay),
//!     &ChargeSource::available(food),
//!     &ChargeSource::available(vec![]),
//!     &ChargeSource::available(vec![]),
//! );
//! assert_eq!(bill.grand_total, dec!(2450));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod audit;

pub use audit::{audit, AuditCode, AuditIssue, Severity};

use hotelier_core::{GuestId, HousekeepingCharge, Occupancy, OrderCharge};
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Which charge ledger a warning refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LedgerKind {
    /// The food order ledger.
    Food,
    /// The non-food item ledger.
    Services,
    /// The housekeeping ledger.
    Housekeeping,
}

impl fmt::Display for LedgerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Food => write!(f, "food"),
            Self::Services => write!(f, "services"),
            Self::Housekeeping => write!(f, "housekeeping"),
        }
    }
}

/// A non-fatal problem encountered while aggregating a bill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
pub enum BillWarning {
    /// A charge ledger could not be read; its sub-total is reported as 0.
    #[error("{ledger} ledger unavailable, sub-total shown as 0")]
    LedgerUnavailable {
        /// The affected ledger.
        ledger: LedgerKind,
    },
}

/// Charge lines for one guest from one ledger, or a marker that the ledger
/// could not be read.
#[derive(Debug, Clone)]
pub struct ChargeSource<T> {
    records: Vec<T>,
    available: bool,
}

impl<T> ChargeSource<T> {
    /// Lines that were read successfully (possibly none).
    #[must_use]
    pub const fn available(records: Vec<T>) -> Self {
        Self {
            records,
            available: true,
        }
    }

    /// Marker for a ledger that could not be read.
    #[must_use]
    pub const fn unavailable() -> Self {
        Self {
            records: Vec::new(),
            available: false,
        }
    }
}

/// One itemized line on a bill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BillLine {
    /// Human-readable description of the charge.
    pub description: String,
    /// Amount charged for this line.
    pub amount: Decimal,
}

/// One category of a bill: its line items and their sub-total.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BillSection {
    /// Line items in ledger order.
    pub lines: Vec<BillLine>,
    /// Sum of the line amounts.
    pub total: Decimal,
}

impl BillSection {
    /// Whether this category has nothing to show.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.lines.is_empty() && self.total.is_zero()
    }

    fn push(&mut self, description: String, amount: Decimal) {
        self.total += amount;
        self.lines.push(BillLine {
            description,
            amount,
        });
    }
}

/// An itemized bill for one guest.
///
/// Deterministic for the same inputs; computing it twice without intervening
/// mutation yields identical results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bill {
    /// The billed identity.
    pub guest: GuestId,
    /// Room of the active stay, if one exists.
    pub room_number: Option<String>,
    /// Room charges (one frozen line, or empty after check-out).
    pub room: BillSection,
    /// Food order charges.
    pub food: BillSection,
    /// Non-food item charges.
    pub services: BillSection,
    /// Housekeeping charges.
    pub housekeeping: BillSection,
    /// Sum of all four sub-totals.
    pub grand_total: Decimal,
    /// Non-fatal problems encountered while aggregating.
    pub warnings: Vec<BillWarning>,
}

/// Aggregate an itemized bill from pre-filtered charge lines.
///
/// The caller is responsible for filtering each source to the guest's
/// identity; this function only merges and sums. An absent occupancy
/// contributes a room total of 0 (the guest already checked out or never
/// checked in).
#[must_use]
pub fn compute_bill(
    guest: &GuestId,
    occupancy: Option<&Occupancy>,
    food: &ChargeSource<OrderCharge>,
    services: &ChargeSource<OrderCharge>,
    housekeeping: &ChargeSource<HousekeepingCharge>,
) -> Bill {
    let mut warnings = Vec::new();

    let mut room = BillSection::default();
    if let Some(occupancy) = occupancy {
        room.push(
            format!(
                "{} Room - {} night(s) @ {}/night",
                occupancy.room_type,
                occupancy.nights,
                occupancy.price_per_night()
            ),
            occupancy.room_total,
        );
    }

    let food = order_section(food, LedgerKind::Food, &mut warnings);
    let services = order_section(services, LedgerKind::Services, &mut warnings);
    let housekeeping = housekeeping_section(housekeeping, &mut warnings);

    let grand_total = room.total + food.total + services.total + housekeeping.total;

    Bill {
        guest: guest.clone(),
        room_number: occupancy.map(|o| o.room_number.clone()),
        room,
        food,
        services,
        housekeeping,
        grand_total,
        warnings,
    }
}

fn order_section(
    source: &ChargeSource<OrderCharge>,
    kind: LedgerKind,
    warnings: &mut Vec<BillWarning>,
) -> BillSection {
    let mut section = BillSection::default();
    if source.available {
        for charge in &source.records {
            section.push(
                format!("{} x{}", charge.description, charge.quantity),
                charge.line_total,
            );
        }
    } else {
        warnings.push(BillWarning::LedgerUnavailable { ledger: kind });
    }
    section
}

fn housekeeping_section(
    source: &ChargeSource<HousekeepingCharge>,
    warnings: &mut Vec<BillWarning>,
) -> BillSection {
    let mut section = BillSection::default();
    if source.available {
        for charge in &source.records {
            section.push(charge.service.clone(), charge.cost);
        }
    } else {
        warnings.push(BillWarning::LedgerUnavailable {
            ledger: LedgerKind::Housekeeping,
        });
    }
    section
}

#[cfg(test)]
mod tests {
    use super::*;
    use hotelier_core::{timestamp, RoomType};
    use rust_decimal_macros::dec;

    fn guest() -> GuestId {
        GuestId::new("Ann", "P1")
    }

    fn stay(nights: u32, price: Decimal) -> Occupancy {
        Occupancy::new(
            &guest(),
            "101",
            RoomType::Normal,
            nights,
            price,
            "555-0100",
            timestamp::now(),
        )
    }

    fn food(description: &str, quantity: u32, unit_price: Decimal) -> OrderCharge {
        OrderCharge::new(
            &guest(),
            "101",
            description,
            quantity,
            unit_price,
            timestamp::now(),
        )
    }

    #[test]
    fn test_full_scenario() {
        // Seeded Normal room at 1000/night, 2 nights, one Pizza at 450.
        let stay = stay(2, dec!(1000));
        let bill = compute_bill(
            &guest(),
            Some(&stay),
            &ChargeSource::available(vec![food("Pizza", 1, dec!(450))]),
            &ChargeSource::available(vec![]),
            &ChargeSource::available(vec![]),
        );

        assert_eq!(bill.room.total, dec!(2000));
        assert_eq!(
            bill.room.lines[0].description,
            "Normal Room - 2 night(s) @ 1000/night"
        );
        assert_eq!(bill.food.total, dec!(450));
        assert_eq!(bill.food.lines[0].description, "Pizza x1");
        assert!(bill.services.is_zero());
        assert!(bill.housekeeping.is_zero());
        assert_eq!(bill.grand_total, dec!(2450));
        assert_eq!(bill.room_number.as_deref(), Some("101"));
        assert!(bill.warnings.is_empty());
    }

    #[test]
    fn test_no_active_occupancy_bills_room_as_zero() {
        let bill = compute_bill(
            &guest(),
            None,
            &ChargeSource::available(vec![food("Pizza", 1, dec!(450))]),
            &ChargeSource::available(vec![]),
            &ChargeSource::available(vec![]),
        );

        assert!(bill.room.is_zero());
        assert_eq!(bill.room_number, None);
        assert_eq!(bill.grand_total, dec!(450));
    }

    #[test]
    fn test_per_night_display_floors() {
        let mut stay = stay(3, dec!(1000));
        stay.room_total = dec!(1000);
        let bill = compute_bill(
            &guest(),
            Some(&stay),
            &ChargeSource::available(vec![]),
            &ChargeSource::available(vec![]),
            &ChargeSource::available(vec![]),
        );
        assert_eq!(
            bill.room.lines[0].description,
            "Normal Room - 3 night(s) @ 333/night"
        );
        // The frozen total is reported, not nights * floor(per-night).
        assert_eq!(bill.room.total, dec!(1000));
    }

    #[test]
    fn test_unavailable_ledger_degrades_with_warning() {
        let stay = stay(2, dec!(1000));
        let bill = compute_bill(
            &guest(),
            Some(&stay),
            &ChargeSource::unavailable(),
            &ChargeSource::available(vec![]),
            &ChargeSource::available(vec![]),
        );

        assert!(bill.food.is_zero());
        assert_eq!(bill.grand_total, dec!(2000));
        assert_eq!(
            bill.warnings,
            vec![BillWarning::LedgerUnavailable {
                ledger: LedgerKind::Food
            }]
        );
    }

    #[test]
    fn test_compute_is_idempotent() {
        let stay = stay(2, dec!(1800));
        let sources = (
            ChargeSource::available(vec![food("Sandwich", 2, dec!(150))]),
            ChargeSource::available(vec![food("Iron", 1, dec!(100))]),
            ChargeSource::<hotelier_core::HousekeepingCharge>::available(vec![]),
        );

        let first = compute_bill(&guest(), Some(&stay), &sources.0, &sources.1, &sources.2);
        let second = compute_bill(&guest(), Some(&stay), &sources.0, &sources.1, &sources.2);
        assert_eq!(first, second);
    }
}
