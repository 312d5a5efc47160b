//! Room types and the room record.
//!
//! A [`Room`] is a rentable unit with a fixed type and nightly price. Its
//! status is the only mutable field and flips between `Available` and
//! `Booked` as stays are opened and closed.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The room categories offered by the property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomType {
    /// Standard room.
    Normal,
    /// Deluxe room.
    Deluxe,
    /// Suite.
    Suite,
}

impl RoomType {
    /// All room types in display order.
    pub const ALL: [Self; 3] = [Self::Normal, Self::Deluxe, Self::Suite];
}

impl FromStr for RoomType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "normal" => Ok(Self::Normal),
            "deluxe" => Ok(Self::Deluxe),
            "suite" => Ok(Self::Suite),
            _ => Err(format!("unknown room type: {s}")),
        }
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal => write!(f, "Normal"),
            Self::Deluxe => write!(f, "Deluxe"),
            Self::Suite => write!(f, "Suite"),
        }
    }
}

/// Whether a room can currently be allocated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomStatus {
    /// Free for allocation.
    Available,
    /// Held by exactly one active occupancy.
    Booked,
}

impl fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Available => write!(f, "Available"),
            Self::Booked => write!(f, "Booked"),
        }
    }
}

/// A rentable room.
///
/// Rooms are created when the inventory is seeded and never destroyed; only
/// `status` changes afterwards. Field order matches the on-disk record
/// layout: number, type, status, price per night.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Unique room number, stable for the lifetime of the inventory.
    pub number: String,
    /// Room category.
    pub room_type: RoomType,
    /// Current allocation status.
    pub status: RoomStatus,
    /// Positive nightly price.
    pub price_per_night: Decimal,
}

impl Room {
    /// Create a new room record.
    #[must_use]
    pub fn new(
        number: impl Into<String>,
        room_type: RoomType,
        status: RoomStatus,
        price_per_night: Decimal,
    ) -> Self {
        Self {
            number: number.into(),
            room_type,
            status,
            price_per_night,
        }
    }

    /// Whether the room is free for allocation.
    #[must_use]
    pub const fn is_available(&self) -> bool {
        matches!(self.status, RoomStatus::Available)
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, {}, {}/night)",
            self.number, self.room_type, self.status, self.price_per_night
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_room_type_from_str() {
        assert_eq!("Normal".parse::<RoomType>().unwrap(), RoomType::Normal);
        assert_eq!("deluxe".parse::<RoomType>().unwrap(), RoomType::Deluxe);
        assert_eq!("SUITE".parse::<RoomType>().unwrap(), RoomType::Suite);
        assert!("penthouse".parse::<RoomType>().is_err());
    }

    #[test]
    fn test_room_type_display_round_trips() {
        for room_type in RoomType::ALL {
            assert_eq!(room_type.to_string().parse::<RoomType>(), Ok(room_type));
        }
    }

    #[test]
    fn test_is_available() {
        let mut room = Room::new("101", RoomType::Normal, RoomStatus::Available, dec!(1000));
        assert!(room.is_available());
        room.status = RoomStatus::Booked;
        assert!(!room.is_available());
    }
}
