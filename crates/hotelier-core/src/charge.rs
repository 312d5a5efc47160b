//! Billable charge records.
//!
//! Two record shapes cover the three charge ledgers: [`OrderCharge`] for food
//! orders and non-food items (quantity times unit price), and
//! [`HousekeepingCharge`] for flat-cost housekeeping services. All charge
//! records are append-only: once written they are never mutated or deleted,
//! and they outlive the stay that caused them.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::identity::{GuestId, Identified};
use crate::timestamp;

/// A billable order line for food or non-food items.
///
/// Field order matches the on-disk record layout: name, id-proof, room
/// number, description, quantity, unit price, line total, timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderCharge {
    /// Guest name at order time.
    pub name: String,
    /// Identity document reference, matched exactly.
    pub id_proof: String,
    /// Room the order was placed from.
    pub room_number: String,
    /// What was ordered.
    pub description: String,
    /// Positive number of units.
    pub quantity: u32,
    /// Price per unit.
    pub unit_price: Decimal,
    /// Frozen `unit_price * quantity`.
    pub line_total: Decimal,
    /// When the order was placed.
    #[serde(with = "timestamp")]
    pub ordered_at: NaiveDateTime,
}

impl OrderCharge {
    /// Create a new order line, freezing `line_total = unit_price * quantity`.
    #[must_use]
    pub fn new(
        guest: &GuestId,
        room_number: impl Into<String>,
        description: impl Into<String>,
        quantity: u32,
        unit_price: Decimal,
        ordered_at: NaiveDateTime,
    ) -> Self {
        Self {
            name: guest.name.clone(),
            id_proof: guest.id_proof.clone(),
            room_number: room_number.into(),
            description: description.into(),
            quantity,
            unit_price,
            line_total: unit_price * Decimal::from(quantity),
            ordered_at,
        }
    }
}

impl Identified for OrderCharge {
    fn guest_name(&self) -> &str {
        &self.name
    }

    fn guest_id_proof(&self) -> &str {
        &self.id_proof
    }
}

/// Fulfilment state of a housekeeping request.
///
/// The billing core records requests as `Pending` and never transitions
/// them; the operations side owns completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum HousekeepingStatus {
    /// Requested, not yet carried out.
    #[default]
    Pending,
    /// Carried out (written by the operations side).
    Completed,
}

impl FromStr for HousekeepingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "completed" => Ok(Self::Completed),
            _ => Err(format!("unknown housekeeping status: {s}")),
        }
    }
}

impl fmt::Display for HousekeepingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "Pending"),
            Self::Completed => write!(f, "Completed"),
        }
    }
}

/// A flat-cost housekeeping service request.
///
/// Field order matches the on-disk record layout: name, id-proof, room
/// number, service, cost, preferred time, special request, timestamp, status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HousekeepingCharge {
    /// Guest name at request time.
    pub name: String,
    /// Identity document reference, matched exactly.
    pub id_proof: String,
    /// Room the service was requested for.
    pub room_number: String,
    /// The requested service.
    pub service: String,
    /// Flat cost of the service, no quantity.
    pub cost: Decimal,
    /// Free-text preferred time of service.
    pub preferred_time: String,
    /// Free-text special requirements, may be empty.
    pub special_request: String,
    /// When the service was requested.
    #[serde(with = "timestamp")]
    pub requested_at: NaiveDateTime,
    /// Fulfilment state.
    pub status: HousekeepingStatus,
}

impl HousekeepingCharge {
    /// Create a new pending housekeeping request.
    #[must_use]
    pub fn new(
        guest: &GuestId,
        room_number: impl Into<String>,
        service: impl Into<String>,
        cost: Decimal,
        preferred_time: impl Into<String>,
        special_request: impl Into<String>,
        requested_at: NaiveDateTime,
    ) -> Self {
        Self {
            name: guest.name.clone(),
            id_proof: guest.id_proof.clone(),
            room_number: room_number.into(),
            service: service.into(),
            cost,
            preferred_time: preferred_time.into(),
            special_request: special_request.into(),
            requested_at,
            status: HousekeepingStatus::Pending,
        }
    }
}

impl Identified for HousekeepingCharge {
    fn guest_name(&self) -> &str {
        &self.name
    }

    fn guest_id_proof(&self) -> &str {
        &self.id_proof
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_order_charge_line_total() {
        let charge = OrderCharge::new(
            &GuestId::new("Ann", "P1"),
            "101",
            "Pizza",
            3,
            dec!(450),
            timestamp::now(),
        );
        assert_eq!(charge.line_total, dec!(1350));
    }

    #[test]
    fn test_housekeeping_starts_pending() {
        let charge = HousekeepingCharge::new(
            &GuestId::new("Ann", "P1"),
            "101",
            "Room Cleaning",
            dec!(200),
            "Now",
            "",
            timestamp::now(),
        );
        assert_eq!(charge.status, HousekeepingStatus::Pending);
    }

    #[test]
    fn test_housekeeping_status_from_str() {
        assert_eq!(
            "pending".parse::<HousekeepingStatus>(),
            Ok(HousekeepingStatus::Pending)
        );
        assert_eq!(
            "Completed".parse::<HousekeepingStatus>(),
            Ok(HousekeepingStatus::Completed)
        );
        assert!("done".parse::<HousekeepingStatus>().is_err());
    }

    #[test]
    fn test_charge_identity_matching() {
        let charge = OrderCharge::new(
            &GuestId::new("Ann", "P1"),
            "101",
            "Pizza",
            1,
            dec!(450),
            timestamp::now(),
        );
        assert!(charge.matches("ANN", "P1"));
        assert!(!charge.matches("Bob", "P1"));
    }
}
