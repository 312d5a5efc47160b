//! Shared read/write plumbing for the line-oriented stores.
//!
//! Records are encoded with the `csv` crate without a header row, so the
//! files stay one-record-per-line and comma separated while free-text fields
//! containing commas are quoted instead of corrupting the record. Snapshot
//! writes go through a temp file, fsync, and an atomic rename; appends are
//! encoded in memory first and written with a single call.

use csv::{ReaderBuilder, WriterBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::ffi::OsString;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::StoreError;

/// Read every record from `path` in storage order.
pub(crate) fn read_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, StoreError> {
    let file = File::open(path).map_err(|source| StoreError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = ReaderBuilder::new().has_headers(false).from_reader(file);

    let mut records = Vec::new();
    for result in reader.deserialize() {
        records.push(result.map_err(|e| csv_error(path, e))?);
    }
    Ok(records)
}

/// Replace the whole file with the given records.
///
/// The new state is written next to the target, synced to disk, and renamed
/// over the old file, so readers never observe a partially written snapshot.
pub(crate) fn write_snapshot<T: Serialize>(path: &Path, records: &[T]) -> Result<(), StoreError> {
    let bytes = encode(path, records)?;
    let tmp = tmp_path(path);

    write_and_sync(&tmp, &bytes, false).map_err(|source| StoreError::Write {
        path: tmp.clone(),
        source,
    })?;
    fs::rename(&tmp, path).map_err(|source| StoreError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Append the given records to the end of the file.
pub(crate) fn append_records<T: Serialize>(path: &Path, records: &[T]) -> Result<(), StoreError> {
    if records.is_empty() {
        return Ok(());
    }
    let bytes = encode(path, records)?;
    write_and_sync(path, &bytes, true).map_err(|source| StoreError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Ensure the file exists without touching its contents.
pub(crate) fn touch(path: &Path) -> Result<(), StoreError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map(|_| ())
        .map_err(|source| StoreError::Write {
            path: path.to_path_buf(),
            source,
        })
}

/// Encode records to their on-disk form in memory.
fn encode<T: Serialize>(path: &Path, records: &[T]) -> Result<Vec<u8>, StoreError> {
    let mut bytes = Vec::new();
    {
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .from_writer(&mut bytes);
        for record in records {
            writer.serialize(record).map_err(|e| csv_error(path, e))?;
        }
        writer.flush().map_err(|source| StoreError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    }
    Ok(bytes)
}

fn write_and_sync(path: &Path, bytes: &[u8], append: bool) -> std::io::Result<()> {
    let mut file = if append {
        OpenOptions::new().create(true).append(true).open(path)?
    } else {
        File::create(path)?
    };
    file.write_all(bytes)?;
    file.sync_all()
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}

fn csv_error(path: &Path, error: csv::Error) -> StoreError {
    let line = error.position().map_or(0, csv::Position::line);
    let message = error.to_string();
    match error.into_kind() {
        csv::ErrorKind::Io(source) => StoreError::Read {
            path: path.to_path_buf(),
            source,
        },
        _ => StoreError::Malformed {
            path: path.to_path_buf(),
            line,
            message,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hotelier_core::{Room, RoomStatus, RoomType};
    use rust_decimal_macros::dec;

    fn sample_rooms() -> Vec<Room> {
        vec![
            Room::new("101", RoomType::Normal, RoomStatus::Available, dec!(1000)),
            Room::new("201", RoomType::Deluxe, RoomStatus::Booked, dec!(1800)),
        ]
    }

    #[test]
    fn test_snapshot_then_read_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rooms.csv");

        write_snapshot(&path, &sample_rooms()).unwrap();
        let read: Vec<Room> = read_records(&path).unwrap();
        assert_eq!(read, sample_rooms());
        assert!(!tmp_path(&path).exists());
    }

    #[test]
    fn test_snapshot_matches_wire_layout() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rooms.csv");

        write_snapshot(&path, &sample_rooms()).unwrap();
        let raw = fs::read_to_string(&path).unwrap();
        assert_eq!(raw, "101,Normal,Available,1000\n201,Deluxe,Booked,1800\n");
    }

    #[test]
    fn test_append_accumulates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rooms.csv");

        let rooms = sample_rooms();
        append_records(&path, &rooms[..1]).unwrap();
        append_records(&path, &rooms[1..]).unwrap();
        let read: Vec<Room> = read_records(&path).unwrap();
        assert_eq!(read, rooms);
    }

    #[test]
    fn test_read_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result: Result<Vec<Room>, _> = read_records(&dir.path().join("absent.csv"));
        assert!(matches!(result, Err(StoreError::Read { .. })));
    }

    #[test]
    fn test_read_malformed_record_reports_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rooms.csv");
        fs::write(&path, "101,Normal,Available,1000\n102,Nope,Available,1000\n").unwrap();

        let result: Result<Vec<Room>, _> = read_records(&path);
        match result {
            Err(StoreError::Malformed { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected malformed error, got {other:?}"),
        }
    }

    #[test]
    fn test_legacy_unquoted_lines_still_parse() {
        // Files written by hand (or by the previous system) carry no quoting;
        // they must still read back as long as fields contain no commas.
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rooms.csv");
        fs::write(&path, "301,Suite,Available,3000\n").unwrap();

        let read: Vec<Room> = read_records(&path).unwrap();
        assert_eq!(read[0].number, "301");
        assert_eq!(read[0].price_per_night, dec!(3000));
    }
}
