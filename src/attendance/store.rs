//! # Attendance state store
//!
//! Owns the statuses of every marked seat for the currently selected date.
//! This is the single source of truth for attendance data: the registry and
//! the picker only read seat identities and request recolors, they never
//! write status.
//!
//! Every mutation is written through to the [`SheetStore`] synchronously
//! before returning, so no interruption loses more than the in-flight call.

use std::collections::HashMap;

use crate::attendance::{DateKey, Status};
use crate::error::StoreError;
use crate::persist::SheetStore;
use crate::roster::SeatId;

/// Per-date attendance state with synchronous write-through persistence.
pub struct AttendanceStore {
    persist: SheetStore,
    date: DateKey,
    entries: HashMap<SeatId, Status>,
}

impl AttendanceStore {
    /// Create a store positioned on `date`, loading any persisted sheet.
    pub fn new(persist: SheetStore, date: DateKey) -> Self {
        let entries = persist.read(date);
        Self {
            persist,
            date,
            entries,
        }
    }

    /// The currently selected date.
    pub fn date(&self) -> DateKey {
        self.date
    }

    /// Switch to `date`, fully replacing the in-memory sheet.
    ///
    /// No merging: whatever was loaded before is dropped wholesale and the
    /// persisted sheet for the new date (or empty) takes its place.
    pub fn set_date(&mut self, date: DateKey) {
        self.date = date;
        self.entries = self.persist.read(date);
    }

    /// Recorded status for a seat, `Unmarked` when no entry exists.
    ///
    /// Total by construction: an absent key and an explicit `Unmarked`
    /// entry are indistinguishable through this function.
    pub fn status_of(&self, seat: &SeatId) -> Status {
        self.entries.get(seat).copied().unwrap_or_default()
    }

    /// Overwrite the entry for a seat and persist the sheet.
    pub fn set(&mut self, seat: SeatId, status: Status) -> Result<(), StoreError> {
        if status == Status::Unmarked {
            // Unmarked is represented by absence, in memory as on disk.
            self.entries.remove(&seat);
        } else {
            self.entries.insert(seat, status);
        }
        self.persist.write(self.date, &self.entries)
    }

    /// Advance a seat one step along the status cycle; returns the new status.
    pub fn cycle(&mut self, seat: SeatId) -> Result<Status, StoreError> {
        let next = self.status_of(&seat).next();
        self.set(seat, next)?;
        Ok(next)
    }

    /// Clear every entry for the current date and persist the empty sheet.
    pub fn reset(&mut self) -> Result<(), StoreError> {
        self.entries.clear();
        self.persist.write(self.date, &self.entries)
    }

    /// The underlying persistence layer (e.g. for listing stored dates).
    pub fn persist(&self) -> &SheetStore {
        &self.persist
    }
}
