// src/lib.rs
//! Rollcall
//!
//! Interactive seating-chart attendance core for a 3D classroom view.
//!
//! Every student has a fixed seat; clicking a seat cycles its attendance
//! status (unmarked → present → absent → unmarked); statuses are persisted
//! per calendar date and exportable as CSV. Rendering and windowing stay
//! outside the crate behind [`gfx::RenderAdapter`]; the built-in
//! [`gfx::SceneArena`] provides the pickable scene the core needs.

pub mod app;
pub mod attendance;
pub mod error;
pub mod export;
pub mod gfx;
pub mod persist;
pub mod registry;
pub mod roster;

// Re-export main types for convenience
pub use app::{App, InputEvent};
pub use attendance::{AttendanceStore, DateKey, Status};
pub use error::RollcallError;
pub use persist::SheetStore;
pub use registry::SeatRegistry;
pub use roster::{Roster, SeatId};
