//! Reservation ledger and billing engine.
//!
//! This crate ties the stores and the billing aggregator together behind the
//! [`FrontDesk`], the single entry point a presentation layer calls with
//! already-validated field values:
//!
//! - `check_in` / `check_out`: the room state machine, run as one logical
//!   transaction under an exclusive lock
//! - `current_bill`: the running bill for an active stay
//! - `order_food` / `order_items` / `request_housekeeping`: charge appends
//! - `file_grievance` / `leave_feedback`: side-log appends
//! - `audit`: cross-record invariant check over the ledger files
//!
//! The `hotelier` binary in this crate is one such presentation layer: a thin
//! CLI over the same calls.
//!
//! # Example
//!
//! ```no_run
//! use hotelier::{CheckInRequest, FrontDesk};
//! use hotelier_core::RoomType;
//!
//! let desk = FrontDesk::open("./data")?;
//! let receipt = desk.check_in(CheckInRequest {
//!     name: "Ann".into(),
//!     id_proof: "P1".into(),
//!     room_type: RoomType::Normal,
//!     nights: 2,
//!     phone: "555-0100".into(),
//! })?;
//! println!("room {} for {}", receipt.room_number, receipt.room_total);
//! # Ok::<(), hotelier::FrontDeskError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod catalog;
pub mod cmd;
mod desk;
pub mod report;

pub use desk::{
    CheckInReceipt, CheckInRequest, CheckOutReceipt, FrontDesk, FrontDeskError,
    HousekeepingRequest, OrderLine, OrderReceipt, ServiceLine,
};
