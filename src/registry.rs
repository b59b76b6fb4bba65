//! # Seat registry
//!
//! Binds every seat identity derived from the roster to the visual handle
//! the render adapter created for it. The registry owns the identity →
//! handle mapping, nothing else: geometry stays with the adapter, status
//! stays with the attendance store.
//!
//! Built exactly once per process (the roster is static) and only asked
//! to recolor afterwards. Recoloring an identity the registry does not know
//! is a logged no-op, so records from a drifted roster have no effect.

use std::collections::HashMap;

use crate::attendance::{AttendanceStore, Status};
use crate::gfx::adapter::{RenderAdapter, SeatVisual};
use crate::roster::{Roster, SeatId};

/// Identity → visual handle mapping for every seat in the roster.
pub struct SeatRegistry {
    handles: HashMap<SeatId, SeatVisual>,
    /// Seat identities in roster order, for deterministic bulk refresh.
    order: Vec<SeatId>,
}

impl SeatRegistry {
    /// Create one visual per roster seat, seeded with its current status.
    ///
    /// Seats are created column by column, row by row, so node allocation
    /// in the adapter is deterministic across rebuilds.
    pub fn build<A: RenderAdapter>(
        roster: &Roster,
        adapter: &mut A,
        store: &AttendanceStore,
    ) -> Self {
        let mut handles = HashMap::new();
        let mut order = Vec::with_capacity(roster.seat_count());
        for seat in roster.seats() {
            let status = store.status_of(&seat.id);
            let visual =
                adapter.create_seat_visual(seat.id.clone(), seat.id.column, seat.row, status);
            handles.insert(seat.id.clone(), visual);
            order.push(seat.id);
        }
        Self { handles, order }
    }

    /// Number of registered seats.
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Visual handle for a seat, if the roster knows it.
    pub fn get(&self, seat: &SeatId) -> Option<&SeatVisual> {
        self.handles.get(seat)
    }

    /// All seat visual handles, in roster order.
    pub fn handles(&self) -> impl Iterator<Item = &SeatVisual> {
        self.order.iter().filter_map(|seat| self.handles.get(seat))
    }

    /// Recolor one seat. Unknown identities are ignored.
    pub fn recolor<A: RenderAdapter>(&self, adapter: &mut A, seat: &SeatId, status: Status) {
        match self.handles.get(seat) {
            Some(visual) => adapter.set_status_color(visual, status),
            None => log::debug!("recolor for unknown seat {seat}, ignoring"),
        }
    }

    /// Recolor every seat from the store's current sheet, e.g. after a date
    /// switch replaced the sheet wholesale.
    pub fn refresh<A: RenderAdapter>(&self, adapter: &mut A, store: &AttendanceStore) {
        for seat in &self.order {
            self.recolor(adapter, seat, store.status_of(seat));
        }
    }
}
