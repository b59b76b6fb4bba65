//! # Attendance state
//!
//! The attendance side of the core: the three-valued [`Status`] cycle, the
//! [`DateKey`] partitioning persisted records, and the write-through
//! [`AttendanceStore`] that owns all status data for the selected date.

pub mod date;
pub mod status;
pub mod store;

// Re-export main types
pub use date::DateKey;
pub use status::Status;
pub use store::AttendanceStore;
