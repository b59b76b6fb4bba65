//! # Roster and seat identity
//!
//! The roster is the static, ordered definition of the classroom: a list of
//! columns, each holding the students seated in that column from front to
//! back. Every (column, student) pair derives exactly one [`SeatId`], fixed
//! for the lifetime of the process.
//!
//! Row position matters only for spatial placement; identity is carried by
//! the column index and the display name, so reordering rows between runs
//! does not orphan persisted records.

use crate::error::RosterError;

/// Stable identity of one seat: column index plus student display name.
///
/// The string encoding `<column>:<name>` is the key used in persisted
/// records. The column index never contains `:`, so splitting on the first
/// `:` is unambiguous even when the name itself contains one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SeatId {
    pub column: u32,
    pub student: String,
}

impl SeatId {
    pub fn new(column: u32, student: impl Into<String>) -> Self {
        Self {
            column,
            student: student.into(),
        }
    }

    /// Deterministic, collision-free string form used as a record key.
    pub fn encode(&self) -> String {
        format!("{}:{}", self.column, self.student)
    }

    /// Inverse of [`SeatId::encode`]. `None` if the key is malformed.
    pub fn decode(key: &str) -> Option<Self> {
        let (column, student) = key.split_once(':')?;
        let column = column.parse().ok()?;
        Some(Self::new(column, student))
    }
}

impl std::fmt::Display for SeatId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.column, self.student)
    }
}

/// One seat as laid out in the room: identity plus its row within the column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seat {
    pub id: SeatId,
    pub row: u32,
}

/// Static, ordered classroom definition.
///
/// Validated once at construction; immutable afterwards.
#[derive(Debug, Clone)]
pub struct Roster {
    columns: Vec<Vec<String>>,
}

impl Roster {
    /// Build a roster from columns of student display names.
    ///
    /// A duplicate name within a single column would collapse two seats onto
    /// one identity and is rejected. The same name in *different* columns is
    /// fine, the column index disambiguates.
    pub fn from_columns(columns: Vec<Vec<String>>) -> Result<Self, RosterError> {
        for (column, students) in columns.iter().enumerate() {
            for (row, student) in students.iter().enumerate() {
                if students[..row].iter().any(|other| other == student) {
                    return Err(RosterError::DuplicateStudent {
                        column: column as u32,
                        student: student.clone(),
                    });
                }
            }
        }
        Ok(Self { columns })
    }

    /// Total number of seats across all columns.
    pub fn seat_count(&self) -> usize {
        self.columns.iter().map(|c| c.len()).sum()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Iterate every seat in roster order: column by column, row by row.
    ///
    /// This is the canonical ordering for registry construction and export.
    pub fn seats(&self) -> impl Iterator<Item = Seat> + '_ {
        self.columns.iter().enumerate().flat_map(|(column, students)| {
            students.iter().enumerate().map(move |(row, student)| Seat {
                id: SeatId::new(column as u32, student.clone()),
                row: row as u32,
            })
        })
    }
}
