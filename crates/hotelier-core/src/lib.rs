//! Core types for hotelier
//!
//! This crate provides the fundamental types used throughout the hotelier
//! project:
//!
//! - [`Room`] - A rentable room with type, status, and nightly price
//! - [`Occupancy`] - One active stay, referencing exactly one room
//! - [`OrderCharge`] - A billable food or non-food order line
//! - [`HousekeepingCharge`] - A flat-cost housekeeping request
//! - [`Grievance`] / [`Feedback`] - Append-only side logs, not billed
//! - [`GuestId`] - The (name, id-proof) identity pair and its matching policy
//!
//! # Example
//!
//! ```
//! use hotelier_core::{GuestId, Identified, Occupancy, RoomType, timestamp};
//! use rust_decimal_macros::dec;
//!
//! let guest = GuestId::new("Ann", "P1");
//! let stay = Occupancy::new(
//!     &guest,
//!     "101",
//!     RoomType::Normal,
//!     2,
//!     dec!(1000),
//!     "555-0100",
//!     timestamp::now(),
//! );
//!
//! assert_eq!(stay.room_total, dec!(2000));
//! // Name matching is case-insensitive, id-proof matching is exact.
//! assert!(stay.matches("ANN", "P1"));
//! assert!(!stay.matches("Ann", "P2"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod charge;
pub mod identity;
pub mod occupancy;
pub mod room;
pub mod sidelog;
pub mod timestamp;

pub use charge::{HousekeepingCharge, HousekeepingStatus, OrderCharge};
pub use identity::{GuestId, Identified};
pub use occupancy::Occupancy;
pub use room::{Room, RoomStatus, RoomType};
pub use sidelog::{Feedback, Grievance, GrievancePriority, GrievanceStatus, Ratings};

// Re-export commonly used external types
pub use chrono::NaiveDateTime;
pub use rust_decimal::Decimal;
