//! The file-backed room inventory.
//!
//! Rooms are kept in storage order; every lookup scans that order, so the
//! first-available tie-break is the insertion order of the seed file, not the
//! price or the room number. Status changes rewrite the whole snapshot.

use hotelier_core::{Room, RoomStatus, RoomType};
use rust_decimal::Decimal;
use std::fs;
use std::path::{Path, PathBuf};

use crate::{persist, StoreError};

/// The initial room set written on first use.
///
/// 3 Normal rooms at 1000/night, 3 Deluxe at 1800, 2 Suites at 3000.
#[must_use]
pub fn seed_rooms() -> Vec<Room> {
    const SEED: [(&str, RoomType, u32); 8] = [
        ("101", RoomType::Normal, 1000),
        ("102", RoomType::Normal, 1000),
        ("103", RoomType::Normal, 1000),
        ("201", RoomType::Deluxe, 1800),
        ("202", RoomType::Deluxe, 1800),
        ("203", RoomType::Deluxe, 1800),
        ("301", RoomType::Suite, 3000),
        ("302", RoomType::Suite, 3000),
    ];

    SEED.iter()
        .map(|&(number, room_type, price)| {
            Room::new(
                number,
                room_type,
                RoomStatus::Available,
                Decimal::from(price),
            )
        })
        .collect()
}

/// File-backed set of rentable rooms.
#[derive(Debug)]
pub struct RoomInventory {
    path: PathBuf,
}

impl RoomInventory {
    pub(crate) const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All rooms in storage order.
    pub fn list(&self) -> Result<Vec<Room>, StoreError> {
        persist::read_records(&self.path)
    }

    /// The first `Available` room of the given type in storage order.
    pub fn find_available(&self, room_type: RoomType) -> Result<Option<Room>, StoreError> {
        Ok(self
            .list()?
            .into_iter()
            .find(|room| room.room_type == room_type && room.is_available()))
    }

    /// Mark a room as booked. Idempotent; unknown numbers are a no-op.
    pub fn mark_booked(&self, number: &str) -> Result<(), StoreError> {
        self.set_status(number, RoomStatus::Booked)
    }

    /// Mark a room as available. Idempotent; unknown numbers are a no-op.
    pub fn mark_available(&self, number: &str) -> Result<(), StoreError> {
        self.set_status(number, RoomStatus::Available)
    }

    fn set_status(&self, number: &str, status: RoomStatus) -> Result<(), StoreError> {
        let mut rooms = self.list()?;
        for room in &mut rooms {
            if room.number == number {
                room.status = status;
            }
        }
        persist::write_snapshot(&self.path, &rooms)
    }

    /// Write the seed set when the backing file is missing or empty.
    ///
    /// Returns whether seeding happened.
    pub(crate) fn seed_if_empty(&self) -> Result<bool, StoreError> {
        let empty = match fs::metadata(&self.path) {
            Ok(metadata) => metadata.len() == 0,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => true,
            Err(source) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        if empty {
            persist::write_snapshot(&self.path, &seed_rooms())?;
        }
        Ok(empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_inventory(dir: &Path) -> RoomInventory {
        let inventory = RoomInventory::new(dir.join("rooms.csv"));
        inventory.seed_if_empty().unwrap();
        inventory
    }

    #[test]
    fn test_seed_layout() {
        let dir = tempfile::tempdir().unwrap();
        let inventory = seeded_inventory(dir.path());

        let rooms = inventory.list().unwrap();
        assert_eq!(rooms.len(), 8);
        assert_eq!(rooms[0].number, "101");
        assert_eq!(rooms[3].room_type, RoomType::Deluxe);
        assert!(rooms.iter().all(Room::is_available));
    }

    #[test]
    fn test_seed_is_not_repeated() {
        let dir = tempfile::tempdir().unwrap();
        let inventory = seeded_inventory(dir.path());
        inventory.mark_booked("101").unwrap();

        assert!(!inventory.seed_if_empty().unwrap());
        assert!(!inventory.list().unwrap()[0].is_available());
    }

    #[test]
    fn test_find_available_takes_storage_order() {
        let dir = tempfile::tempdir().unwrap();
        let inventory = seeded_inventory(dir.path());

        let first = inventory.find_available(RoomType::Normal).unwrap().unwrap();
        assert_eq!(first.number, "101");

        inventory.mark_booked("101").unwrap();
        let next = inventory.find_available(RoomType::Normal).unwrap().unwrap();
        assert_eq!(next.number, "102");
    }

    #[test]
    fn test_find_available_exhausted_type() {
        let dir = tempfile::tempdir().unwrap();
        let inventory = seeded_inventory(dir.path());

        inventory.mark_booked("301").unwrap();
        inventory.mark_booked("302").unwrap();
        assert!(inventory.find_available(RoomType::Suite).unwrap().is_none());
        // Other types are unaffected.
        assert!(inventory.find_available(RoomType::Deluxe).unwrap().is_some());
    }

    #[test]
    fn test_mark_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let inventory = seeded_inventory(dir.path());

        inventory.mark_booked("102").unwrap();
        inventory.mark_booked("102").unwrap();
        inventory.mark_available("102").unwrap();
        inventory.mark_available("102").unwrap();

        let rooms = inventory.list().unwrap();
        assert!(rooms.iter().find(|r| r.number == "102").unwrap().is_available());
        assert_eq!(rooms.len(), 8);
    }
}
