//! Validation error types

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Which input collection of a two-sided operation a record came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// First collection (employees in a company join)
    Left,

    /// Second collection (offices in a company join)
    Right,
}

impl Display for Side {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => f.write_str("left"),
            Self::Right => f.write_str("right"),
        }
    }
}

/// Kind of validation failure, without diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// Numeric payload missing or negative
    InvalidSalary,

    /// Sector missing
    InvalidSector,

    /// Join key missing
    InvalidGroupKey,
}

/// Validation failure
///
/// Raised for the first violating record in check order; the whole
/// operation is rejected and no partial result is produced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A record has no salary, a negative salary, or NaN
    #[error("salary is required")]
    InvalidSalary {
        /// Index of the first offending record
        index: usize,
    },

    /// A record has no sector
    #[error("sector is required")]
    InvalidSector {
        /// Index of the first offending record
        index: usize,
    },

    /// A record in either join input has no company id
    #[error("company id is required")]
    InvalidGroupKey {
        /// Collection holding the offending record
        side: Side,
        /// Index within that collection
        index: usize,
    },
}

impl ValidationError {
    /// Kind of this failure
    #[inline]
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidSalary { .. } => ErrorKind::InvalidSalary,
            Self::InvalidSector { .. } => ErrorKind::InvalidSector,
            Self::InvalidGroupKey { .. } => ErrorKind::InvalidGroupKey,
        }
    }

    /// Index of the offending record
    #[inline]
    #[must_use]
    pub fn index(&self) -> usize {
        match self {
            Self::InvalidSalary { index }
            | Self::InvalidSector { index }
            | Self::InvalidGroupKey { index, .. } => *index,
        }
    }
}
