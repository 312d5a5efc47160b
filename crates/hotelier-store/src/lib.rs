//! Flat-file persistence for the reservation ledger.
//!
//! Every store is a line-oriented, comma-separated file under one data
//! directory, with one record per line and no header row. The inventory and
//! the registry are rewritten as a whole snapshot on every mutation (temp
//! file, fsync, atomic rename); the charge ledgers and side logs are
//! append-only.
//!
//! The [`Store`] handle owns the directory layout: opening it creates the
//! directory, seeds the room inventory on first use, and hands out typed
//! accessors for each file. There is no ambient state; everything reachable
//! from a `Store` was configured by the caller that opened it.
//!
//! # Example
//!
//! ```no_run
//! use hotelier_store::Store;
//!
//! let store = Store::open("./data")?;
//! for room in store.rooms().list()? {
//!     println!("{room}");
//! }
//! # Ok::<(), hotelier_store::StoreError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod persist;

pub mod ledger;
pub mod occupancy;
pub mod rooms;
pub mod sidelog;

pub use ledger::ChargeLedger;
pub use occupancy::OccupancyRegistry;
pub use rooms::{seed_rooms, RoomInventory};
pub use sidelog::SideLog;

use hotelier_core::{Feedback, Grievance, HousekeepingCharge, OrderCharge};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name of the room inventory store.
pub const ROOMS_FILE: &str = "rooms.csv";
/// File name of the occupancy registry store.
pub const OCCUPANCY_FILE: &str = "occupancy.csv";
/// File name of the food order ledger.
pub const FOOD_FILE: &str = "food_orders.csv";
/// File name of the non-food item ledger.
pub const SERVICES_FILE: &str = "services.csv";
/// File name of the housekeeping ledger.
pub const HOUSEKEEPING_FILE: &str = "housekeeping.csv";
/// File name of the grievance side log.
pub const GRIEVANCES_FILE: &str = "grievances.csv";
/// File name of the feedback side log.
pub const FEEDBACK_FILE: &str = "feedback.csv";

/// Errors that can occur while reading or writing a store file.
#[derive(Debug, Error)]
pub enum StoreError {
    /// IO error reading a store file.
    #[error("failed to read {path}: {source}")]
    Read {
        /// The path that failed to read.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// IO error writing a store file.
    #[error("failed to write {path}: {source}")]
    Write {
        /// The path that failed to write.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// A record could not be decoded or encoded.
    #[error("malformed record in {path} at line {line}: {message}")]
    Malformed {
        /// The file with the malformed record.
        path: PathBuf,
        /// 1-based line of the record, 0 when unknown.
        line: u64,
        /// Decoder message.
        message: String,
    },
}

/// Handle to all stores under one data directory.
///
/// Lifecycle is explicit: [`Store::open`] creates the directory and seeds it,
/// the accessors operate on it, and dropping the handle closes it. No file
/// handles are held between operations, so a drop has nothing to flush.
#[derive(Debug)]
pub struct Store {
    data_dir: PathBuf,
    rooms: RoomInventory,
    occupancies: OccupancyRegistry,
    food: ChargeLedger<OrderCharge>,
    items: ChargeLedger<OrderCharge>,
    housekeeping: ChargeLedger<HousekeepingCharge>,
    grievances: SideLog<Grievance>,
    feedback: SideLog<Feedback>,
}

impl Store {
    /// Open the stores under `data_dir`, creating and seeding them on first use.
    ///
    /// Seeding writes the initial room set (3 Normal, 3 Deluxe, 2 Suite) when
    /// the inventory file is missing or empty, and ensures every other store
    /// file exists.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the directory or any store file cannot be
    /// created.
    pub fn open(data_dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let data_dir = data_dir.into();
        fs::create_dir_all(&data_dir).map_err(|source| StoreError::Write {
            path: data_dir.clone(),
            source,
        })?;

        let store = Self {
            rooms: RoomInventory::new(data_dir.join(ROOMS_FILE)),
            occupancies: OccupancyRegistry::new(data_dir.join(OCCUPANCY_FILE)),
            food: ChargeLedger::new(data_dir.join(FOOD_FILE)),
            items: ChargeLedger::new(data_dir.join(SERVICES_FILE)),
            housekeeping: ChargeLedger::new(data_dir.join(HOUSEKEEPING_FILE)),
            grievances: SideLog::new(data_dir.join(GRIEVANCES_FILE)),
            feedback: SideLog::new(data_dir.join(FEEDBACK_FILE)),
            data_dir,
        };

        if store.rooms.seed_if_empty()? {
            tracing::info!(path = %store.rooms.path().display(), "seeded room inventory");
        }
        for path in [
            store.occupancies.path(),
            store.food.path(),
            store.items.path(),
            store.housekeeping.path(),
            store.grievances.path(),
            store.feedback.path(),
        ] {
            persist::touch(path)?;
        }

        Ok(store)
    }

    /// The directory this store was opened on.
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// The room inventory.
    #[must_use]
    pub const fn rooms(&self) -> &RoomInventory {
        &self.rooms
    }

    /// The occupancy registry.
    #[must_use]
    pub const fn occupancies(&self) -> &OccupancyRegistry {
        &self.occupancies
    }

    /// The food order ledger.
    #[must_use]
    pub const fn food(&self) -> &ChargeLedger<OrderCharge> {
        &self.food
    }

    /// The non-food item ledger.
    #[must_use]
    pub const fn items(&self) -> &ChargeLedger<OrderCharge> {
        &self.items
    }

    /// The housekeeping ledger.
    #[must_use]
    pub const fn housekeeping(&self) -> &ChargeLedger<HousekeepingCharge> {
        &self.housekeeping
    }

    /// The grievance side log.
    #[must_use]
    pub const fn grievances(&self) -> &SideLog<Grievance> {
        &self.grievances
    }

    /// The feedback side log.
    #[must_use]
    pub const fn feedback(&self) -> &SideLog<Feedback> {
        &self.feedback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_creates_and_seeds() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path().join("data")).unwrap();

        let rooms = store.rooms().list().unwrap();
        assert_eq!(rooms.len(), 8);
        assert!(store.data_dir().join(OCCUPANCY_FILE).exists());
        assert!(store.data_dir().join(FEEDBACK_FILE).exists());
    }

    #[test]
    fn test_reopen_preserves_state() {
        let dir = tempfile::tempdir().unwrap();
        let data_dir = dir.path().join("data");

        let store = Store::open(&data_dir).unwrap();
        store.rooms().mark_booked("101").unwrap();
        drop(store);

        let store = Store::open(&data_dir).unwrap();
        let rooms = store.rooms().list().unwrap();
        assert!(!rooms.iter().find(|r| r.number == "101").unwrap().is_available());
        // Re-opening must not re-seed a non-empty inventory.
        assert_eq!(rooms.len(), 8);
    }
}
