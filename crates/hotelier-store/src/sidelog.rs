//! Generic append-only side log.
//!
//! Backs the grievance and feedback files. The core only ever appends;
//! reading back is provided for the operations side and for tests.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::slice;

use crate::{persist, StoreError};

/// File-backed append-only log of externally consumed records.
#[derive(Debug)]
pub struct SideLog<T> {
    path: PathBuf,
    _record: PhantomData<T>,
}

impl<T> SideLog<T>
where
    T: Serialize + DeserializeOwned,
{
    pub(crate) const fn new(path: PathBuf) -> Self {
        Self {
            path,
            _record: PhantomData,
        }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one entry.
    pub fn append(&self, entry: &T) -> Result<(), StoreError> {
        persist::append_records(&self.path, slice::from_ref(entry))
    }

    /// Every entry in storage order.
    pub fn entries(&self) -> Result<Vec<T>, StoreError> {
        persist::read_records(&self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hotelier_core::{timestamp, Feedback, Ratings};

    #[test]
    fn test_append_then_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let log: SideLog<Feedback> = SideLog::new(dir.path().join("feedback.csv"));

        let entry = Feedback::new(
            "Ann",
            "P1",
            "101",
            Ratings {
                room: 5,
                staff: 4,
                food: 5,
                overall: 5,
            },
            true,
            "lovely stay, will return",
            timestamp::now(),
        );
        log.append(&entry).unwrap();

        let entries = log.entries().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0], entry);
        assert!(entries[0].recommend);
    }
}
