//! # Per-date persistence
//!
//! Attendance sheets are persisted in an embedded, transactional key-value
//! store (redb), one JSON record per calendar date under a namespaced key
//! `attendance/<YYYY-MM-DD>`. The prefix keeps the records from colliding
//! with anything else sharing the database file, and prefix + date is
//! injective: distinct dates can never map to the same key.
//!
//! The record shape is `{ "<column>:<student>": "present" | "absent" }`.
//! `unmarked` entries are represented by key absence and never written.
//!
//! Writes are synchronous and transactional, so an interruption after a
//! status change loses at most the in-flight write. Reads never fail from
//! the caller's perspective: a missing, corrupt or undecodable record is
//! recovered as the empty sheet.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use redb::{Database, TableDefinition};

use crate::attendance::{DateKey, Status};
use crate::error::StoreError;
use crate::roster::SeatId;

/// Table holding one JSON-encoded sheet per date key.
const SHEETS: TableDefinition<&str, &str> = TableDefinition::new("sheets");

/// Namespace prefix for storage keys.
const KEY_PREFIX: &str = "attendance/";

fn storage_key(date: DateKey) -> String {
    format!("{KEY_PREFIX}{date}")
}

fn redb_err(context: &str, e: impl std::fmt::Display) -> StoreError {
    StoreError::Redb {
        message: format!("{context}: {e}"),
    }
}

/// Durable store for attendance sheets, keyed by date.
pub struct SheetStore {
    db: Database,
}

impl SheetStore {
    /// Open or create the store inside the given data directory.
    pub fn open(data_dir: &Path) -> Result<Self, StoreError> {
        std::fs::create_dir_all(data_dir).map_err(StoreError::Open)?;
        let db_path = data_dir.join("rollcall.redb");
        let db = Database::create(&db_path)
            .map_err(|e| redb_err(&format!("failed to open {}", db_path.display()), e))?;
        Ok(Self { db })
    }

    /// Persist the sheet for `date`, overwriting any prior record.
    ///
    /// An empty sheet is written as `{}` rather than deleting the key, so a
    /// reset is itself a durable record.
    pub fn write(
        &self,
        date: DateKey,
        entries: &HashMap<SeatId, Status>,
    ) -> Result<(), StoreError> {
        // BTreeMap for a deterministic record; Unmarked is key absence.
        let record: BTreeMap<String, Status> = entries
            .iter()
            .filter(|(_, status)| **status != Status::Unmarked)
            .map(|(seat, status)| (seat.encode(), *status))
            .collect();
        let payload = serde_json::to_string(&record)?;

        let txn = self
            .db
            .begin_write()
            .map_err(|e| redb_err("begin_write failed", e))?;
        {
            let mut table = txn
                .open_table(SHEETS)
                .map_err(|e| redb_err("open_table failed", e))?;
            table
                .insert(storage_key(date).as_str(), payload.as_str())
                .map_err(|e| redb_err("insert failed", e))?;
        }
        txn.commit().map_err(|e| redb_err("commit failed", e))?;
        Ok(())
    }

    /// Read the sheet for `date`.
    ///
    /// Absent, corrupt or undecodable records all come back as the empty
    /// sheet ("no prior record") and are only logged, never surfaced.
    pub fn read(&self, date: DateKey) -> HashMap<SeatId, Status> {
        match self.read_raw(&storage_key(date)) {
            Some(payload) => match decode_sheet(&payload) {
                Some(entries) => entries,
                None => {
                    log::warn!("corrupt attendance record for {date}, treating as empty");
                    HashMap::new()
                }
            },
            None => HashMap::new(),
        }
    }

    /// Dates that have a persisted record, in ascending order.
    pub fn stored_dates(&self) -> Result<Vec<DateKey>, StoreError> {
        let txn = self
            .db
            .begin_read()
            .map_err(|e| redb_err("begin_read failed", e))?;
        let table = match txn.open_table(SHEETS) {
            Ok(table) => table,
            // No table yet means nothing was ever written.
            Err(redb::TableError::TableDoesNotExist(_)) => return Ok(Vec::new()),
            Err(e) => return Err(redb_err("open_table failed", e)),
        };

        let mut dates = Vec::new();
        let range = table
            .range(KEY_PREFIX..)
            .map_err(|e| redb_err("range failed", e))?;
        for entry in range {
            let (key, _) = entry.map_err(|e| redb_err("range iteration failed", e))?;
            let Some(date) = key.value().strip_prefix(KEY_PREFIX) else {
                break; // Past the namespace.
            };
            if let Ok(date) = date.parse::<DateKey>() {
                dates.push(date);
            }
        }
        Ok(dates)
    }

    fn read_raw(&self, key: &str) -> Option<String> {
        let txn = match self.db.begin_read() {
            Ok(txn) => txn,
            Err(e) => {
                log::warn!("attendance read transaction failed: {e}");
                return None;
            }
        };
        let table = match txn.open_table(SHEETS) {
            Ok(table) => table,
            Err(redb::TableError::TableDoesNotExist(_)) => return None,
            Err(e) => {
                log::warn!("attendance table open failed: {e}");
                return None;
            }
        };
        match table.get(key) {
            Ok(value) => value.map(|guard| guard.value().to_string()),
            Err(e) => {
                log::warn!("attendance read failed for {key}: {e}");
                None
            }
        }
    }

    /// Test hook for planting arbitrary payloads under a date key.
    #[cfg(test)]
    fn put_raw(&self, key: &str, value: &str) {
        let txn = self.db.begin_write().unwrap();
        {
            let mut table = txn.open_table(SHEETS).unwrap();
            table.insert(key, value).unwrap();
        }
        txn.commit().unwrap();
    }
}

impl std::fmt::Debug for SheetStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SheetStore").finish()
    }
}

/// Decode one JSON record into sheet entries. `None` means corrupt.
fn decode_sheet(payload: &str) -> Option<HashMap<SeatId, Status>> {
    let record: BTreeMap<String, Status> = serde_json::from_str(payload).ok()?;
    let mut entries = HashMap::new();
    for (key, status) in record {
        let seat = SeatId::decode(&key)?;
        if status != Status::Unmarked {
            entries.insert(seat, status);
        }
    }
    Some(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn date(s: &str) -> DateKey {
        s.parse().unwrap()
    }

    fn sheet(entries: &[(&str, Status)]) -> HashMap<SeatId, Status> {
        entries
            .iter()
            .map(|(key, status)| (SeatId::decode(key).unwrap(), *status))
            .collect()
    }

    #[test]
    fn write_read_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = SheetStore::open(dir.path()).unwrap();

        let entries = sheet(&[("0:ALPHA", Status::Present), ("1:BETA", Status::Absent)]);
        store.write(date("2024-01-01"), &entries).unwrap();
        assert_eq!(store.read(date("2024-01-01")), entries);
    }

    #[test]
    fn missing_record_reads_empty() {
        let dir = TempDir::new().unwrap();
        let store = SheetStore::open(dir.path()).unwrap();
        assert!(store.read(date("2024-01-01")).is_empty());
    }

    #[test]
    fn corrupt_record_reads_empty() {
        let dir = TempDir::new().unwrap();
        let store = SheetStore::open(dir.path()).unwrap();

        store.put_raw("attendance/2024-01-01", "not json at all {");
        assert!(store.read(date("2024-01-01")).is_empty());

        // Valid JSON, but an unknown status word is still corrupt.
        store.put_raw("attendance/2024-01-02", r#"{"0:ALPHA":"tardy"}"#);
        assert!(store.read(date("2024-01-02")).is_empty());

        // Valid JSON, malformed seat key.
        store.put_raw("attendance/2024-01-03", r#"{"no-column":"present"}"#);
        assert!(store.read(date("2024-01-03")).is_empty());
    }

    #[test]
    fn unmarked_is_never_written() {
        let dir = TempDir::new().unwrap();
        let store = SheetStore::open(dir.path()).unwrap();

        let entries = sheet(&[("0:ALPHA", Status::Unmarked), ("0:BETA", Status::Present)]);
        store.write(date("2024-01-01"), &entries).unwrap();

        let back = store.read(date("2024-01-01"));
        assert_eq!(back, sheet(&[("0:BETA", Status::Present)]));
    }

    #[test]
    fn overwrite_replaces_prior_record() {
        let dir = TempDir::new().unwrap();
        let store = SheetStore::open(dir.path()).unwrap();
        let d = date("2024-01-01");

        store.write(d, &sheet(&[("0:ALPHA", Status::Present)])).unwrap();
        store.write(d, &sheet(&[("0:BETA", Status::Absent)])).unwrap();
        assert_eq!(store.read(d), sheet(&[("0:BETA", Status::Absent)]));
    }

    #[test]
    fn distinct_dates_do_not_collide() {
        let dir = TempDir::new().unwrap();
        let store = SheetStore::open(dir.path()).unwrap();

        store
            .write(date("2024-01-01"), &sheet(&[("0:ALPHA", Status::Present)]))
            .unwrap();
        store
            .write(date("2024-01-02"), &sheet(&[("0:ALPHA", Status::Absent)]))
            .unwrap();

        assert_eq!(
            store.read(date("2024-01-01")),
            sheet(&[("0:ALPHA", Status::Present)])
        );
        assert_eq!(
            store.read(date("2024-01-02")),
            sheet(&[("0:ALPHA", Status::Absent)])
        );
    }

    #[test]
    fn stored_dates_lists_written_records() {
        let dir = TempDir::new().unwrap();
        let store = SheetStore::open(dir.path()).unwrap();
        assert!(store.stored_dates().unwrap().is_empty());

        store.write(date("2024-02-01"), &HashMap::new()).unwrap();
        store.write(date("2024-01-15"), &HashMap::new()).unwrap();
        assert_eq!(
            store.stored_dates().unwrap(),
            vec![date("2024-01-15"), date("2024-02-01")]
        );
    }

    #[test]
    fn persists_across_reopen() {
        let dir = TempDir::new().unwrap();
        let d = date("2024-01-01");
        {
            let store = SheetStore::open(dir.path()).unwrap();
            store.write(d, &sheet(&[("0:ALPHA", Status::Present)])).unwrap();
        }
        let store = SheetStore::open(dir.path()).unwrap();
        assert_eq!(store.read(d), sheet(&[("0:ALPHA", Status::Present)]));
    }
}
