//! Generic append-only charge ledger.
//!
//! One [`ChargeLedger`] backs each of the food, non-food, and housekeeping
//! logs. Appends never rewrite existing lines, and reads go back to the file
//! on every call so they always reflect the latest appends. Records are never
//! deleted; charges outlive the stay that caused them.

use hotelier_core::Identified;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::slice;

use crate::{persist, StoreError};

/// File-backed append-only log of charge records.
#[derive(Debug)]
pub struct ChargeLedger<T> {
    path: PathBuf,
    _record: PhantomData<T>,
}

impl<T> ChargeLedger<T>
where
    T: Serialize + DeserializeOwned + Identified,
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

    /// Append one record.
    pub fn append(&self, record: &T) -> Result<(), StoreError> {
        persist::append_records(&self.path, slice::from_ref(record))
    }

    /// Append several records as one write.
    pub fn append_all(&self, records: &[T]) -> Result<(), StoreError> {
        persist::append_records(&self.path, records)
    }

    /// Every record in storage order.
    pub fn all(&self) -> Result<Vec<T>, StoreError> {
        persist::read_records(&self.path)
    }

    /// Records belonging to the given identity pair, in storage order.
    ///
    /// Re-reads the backing file on every call.
    pub fn lines_for(&self, name: &str, id_proof: &str) -> Result<Vec<T>, StoreError> {
        Ok(self
            .all()?
            .into_iter()
            .filter(|record| record.matches(name, id_proof))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hotelier_core::{timestamp, GuestId, OrderCharge};
    use rust_decimal_macros::dec;

    fn pizza(name: &str, id_proof: &str, quantity: u32) -> OrderCharge {
        OrderCharge::new(
            &GuestId::new(name, id_proof),
            "101",
            "Pizza",
            quantity,
            dec!(450),
            timestamp::now(),
        )
    }

    #[test]
    fn test_lines_for_filters_by_identity() {
        let dir = tempfile::tempdir().unwrap();
        let ledger: ChargeLedger<OrderCharge> = ChargeLedger::new(dir.path().join("food.csv"));

        ledger.append(&pizza("Ann", "P1", 1)).unwrap();
        ledger.append(&pizza("Bob", "P2", 2)).unwrap();
        ledger.append(&pizza("ANN", "P1", 3)).unwrap();

        let lines = ledger.lines_for("ann", "P1").unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].quantity, 1);
        assert_eq!(lines[1].quantity, 3);
    }

    #[test]
    fn test_reads_reflect_latest_appends() {
        let dir = tempfile::tempdir().unwrap();
        let ledger: ChargeLedger<OrderCharge> = ChargeLedger::new(dir.path().join("food.csv"));

        ledger.append(&pizza("Ann", "P1", 1)).unwrap();
        assert_eq!(ledger.lines_for("Ann", "P1").unwrap().len(), 1);

        ledger.append(&pizza("Ann", "P1", 2)).unwrap();
        assert_eq!(ledger.lines_for("Ann", "P1").unwrap().len(), 2);
    }

    #[test]
    fn test_append_all_is_one_write() {
        let dir = tempfile::tempdir().unwrap();
        let ledger: ChargeLedger<OrderCharge> = ChargeLedger::new(dir.path().join("food.csv"));

        ledger
            .append_all(&[pizza("Ann", "P1", 1), pizza("Ann", "P1", 2)])
            .unwrap();
        assert_eq!(ledger.all().unwrap().len(), 2);
    }

    #[test]
    fn test_free_text_with_commas_survives() {
        let dir = tempfile::tempdir().unwrap();
        let ledger: ChargeLedger<OrderCharge> = ChargeLedger::new(dir.path().join("food.csv"));

        let charge = OrderCharge::new(
            &GuestId::new("Ann", "P1"),
            "101",
            "Thali, extra papad",
            1,
            dec!(350),
            timestamp::now(),
        );
        ledger.append(&charge).unwrap();

        let lines = ledger.lines_for("Ann", "P1").unwrap();
        assert_eq!(lines[0].description, "Thali, extra papad");
        assert_eq!(lines[0].line_total, dec!(350));
    }
}
