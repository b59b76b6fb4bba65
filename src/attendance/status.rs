//! Attendance status values and the click-cycle ordering.

use serde::{Deserialize, Serialize};

/// Attendance value for one seat on one date.
///
/// Clicking a seat advances its status in a fixed three-step cycle:
/// Unmarked → Present → Absent → Unmarked. Any seat without a recorded
/// entry is `Unmarked`; the persisted record never stores `Unmarked`
/// explicitly, absence of the key means the same thing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Unmarked,
    Present,
    Absent,
}

impl Status {
    /// The next status in the click cycle.
    pub fn next(self) -> Status {
        match self {
            Status::Unmarked => Status::Present,
            Status::Present => Status::Absent,
            Status::Absent => Status::Unmarked,
        }
    }

    /// Lowercase text form, as persisted and exported.
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Unmarked => "unmarked",
            Status::Present => "present",
            Status::Absent => "absent",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
