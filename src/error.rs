//! Error types for the rollcall core.
//!
//! The interaction path is deliberately forgiving: corrupt persisted data,
//! unknown seat identities and missed ray casts all degrade to safe defaults
//! instead of surfacing here. What remains is the small set of conditions
//! that genuinely cannot be recovered from: a bad roster definition, a
//! storage backend failure, and an unusable render surface at startup.

use thiserror::Error;

/// Top-level error type for the rollcall crate.
#[derive(Debug, Error)]
pub enum RollcallError {
    #[error(transparent)]
    Roster(#[from] RosterError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Init(#[from] InitError),

    #[error("export failed: {0}")]
    Export(#[from] csv::Error),
}

/// Roster definitions are validated once, at construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RosterError {
    /// Seat identity is (column, name); a duplicate name in one column would
    /// make two seats indistinguishable.
    #[error("duplicate student {student:?} in column {column}")]
    DuplicateStudent { column: u32, student: String },
}

/// Failures of the durable key-value backend.
///
/// Note that a *corrupt value* is not an error; reads recover it as an
/// empty sheet. These variants cover the backend itself misbehaving.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to open attendance store: {0}")]
    Open(std::io::Error),

    #[error("storage backend error: {message}")]
    Redb { message: String },

    #[error("failed to encode attendance sheet: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Startup is the only place the core is allowed to be fatal: without a
/// usable render surface there is nothing to hit-test against.
#[derive(Debug, Error)]
pub enum InitError {
    #[error("render surface has invalid dimensions {width}x{height}")]
    InvalidSurface { width: f32, height: f32 },
}
