//! The occupancy record: one active stay.
//!
//! An [`Occupancy`] is created at check-in after a room has been allocated
//! and destroyed at check-out together with freeing that room. The room total
//! is computed once at creation and frozen; later price changes on the room
//! never affect an open stay.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::identity::{GuestId, Identified};
use crate::room::RoomType;
use crate::timestamp;

/// One active stay, referencing exactly one room.
///
/// Field order matches the on-disk record layout: name, id-proof, room
/// number, room type, nights, room total, phone, check-in timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occupancy {
    /// Guest name as given at check-in.
    pub name: String,
    /// Identity document reference, matched exactly.
    pub id_proof: String,
    /// The room held by this stay.
    pub room_number: String,
    /// Type of the room at allocation time.
    pub room_type: RoomType,
    /// Length of the stay in nights, always positive.
    pub nights: u32,
    /// Frozen total: nightly price at allocation time times nights.
    pub room_total: Decimal,
    /// Contact phone number.
    pub phone: String,
    /// When the guest checked in.
    #[serde(with = "timestamp")]
    pub checked_in_at: NaiveDateTime,
}

impl Occupancy {
    /// Create a new occupancy, freezing `room_total = price_per_night * nights`.
    #[must_use]
    pub fn new(
        guest: &GuestId,
        room_number: impl Into<String>,
        room_type: RoomType,
        nights: u32,
        price_per_night: Decimal,
        phone: impl Into<String>,
        checked_in_at: NaiveDateTime,
    ) -> Self {
        Self {
            name: guest.name.clone(),
            id_proof: guest.id_proof.clone(),
            room_number: room_number.into(),
            room_type,
            nights,
            room_total: price_per_night * Decimal::from(nights),
            phone: phone.into(),
            checked_in_at,
        }
    }

    /// The per-night price derived from the frozen total, floored.
    ///
    /// This is a display derivation only; the authoritative value is
    /// `room_total`.
    #[must_use]
    pub fn price_per_night(&self) -> Decimal {
        (self.room_total / Decimal::from(self.nights.max(1))).floor()
    }
}

impl Identified for Occupancy {
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

    fn stay(nights: u32, price: Decimal) -> Occupancy {
        Occupancy::new(
            &GuestId::new("Ann", "P1"),
            "101",
            RoomType::Normal,
            nights,
            price,
            "555-0100",
            timestamp::now(),
        )
    }

    #[test]
    fn test_room_total_frozen_at_creation() {
        let occupancy = stay(3, dec!(1800));
        assert_eq!(occupancy.room_total, dec!(5400));
    }

    #[test]
    fn test_price_per_night_floors() {
        let mut occupancy = stay(3, dec!(1000));
        // 3000 / 3 divides evenly
        assert_eq!(occupancy.price_per_night(), dec!(1000));
        // A hand-edited total that does not divide evenly floors
        occupancy.room_total = dec!(1000);
        assert_eq!(occupancy.price_per_night(), dec!(333));
    }

    #[test]
    fn test_identity_matching_policy() {
        let occupancy = stay(1, dec!(1000));
        assert!(occupancy.matches("ann", "P1"));
        assert!(!occupancy.matches("ann", "p1"));
        assert_eq!(occupancy.guest(), GuestId::new("Ann", "P1"));
    }
}
