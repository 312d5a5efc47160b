//! The file-backed occupancy registry.
//!
//! One record per active stay. Lookups scan in storage order and return the
//! first identity match; removal deletes the first match and rewrites the
//! remaining records in their original relative order. A missing record is a
//! normal outcome, not an error.

use hotelier_core::{Identified, Occupancy};
use std::path::{Path, PathBuf};
use std::slice;

use crate::{persist, StoreError};

/// File-backed set of active stays.
#[derive(Debug)]
pub struct OccupancyRegistry {
    path: PathBuf,
}

impl OccupancyRegistry {
    pub(crate) const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All active stays in storage order.
    pub fn list(&self) -> Result<Vec<Occupancy>, StoreError> {
        persist::read_records(&self.path)
    }

    /// The first active stay matching the identity pair, if any.
    pub fn find_active(
        &self,
        name: &str,
        id_proof: &str,
    ) -> Result<Option<Occupancy>, StoreError> {
        Ok(self
            .list()?
            .into_iter()
            .find(|occupancy| occupancy.matches(name, id_proof)))
    }

    /// Append a new stay.
    ///
    /// The caller must already hold the room; no availability check happens
    /// here.
    pub fn create(&self, occupancy: &Occupancy) -> Result<(), StoreError> {
        persist::append_records(&self.path, slice::from_ref(occupancy))
    }

    /// Remove the first stay matching the identity pair and return it.
    ///
    /// Non-matching records keep their original relative order. Returns
    /// `None` without touching the file when nothing matches.
    pub fn remove(&self, name: &str, id_proof: &str) -> Result<Option<Occupancy>, StoreError> {
        let mut removed = None;
        let mut remaining = Vec::new();
        for occupancy in self.list()? {
            if removed.is_none() && occupancy.matches(name, id_proof) {
                removed = Some(occupancy);
            } else {
                remaining.push(occupancy);
            }
        }

        if removed.is_some() {
            persist::write_snapshot(&self.path, &remaining)?;
        }
        Ok(removed)
    }
}
