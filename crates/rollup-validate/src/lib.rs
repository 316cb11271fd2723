//! Rollup Validation
//!
//! Structural preconditions checked before any aggregation runs.
//!
//! # Overview
//!
//! - **RecordCheck**: a single predicate over a whole collection
//! - **Validator**: an ordered list of checks; the first failure wins
//! - **ValidationError**: kinded failure carrying the offending record index
//!
//! # Example
//!
//! ```rust
//! use rollup_model::Collaborator;
//! use rollup_validate::{ErrorKind, Validator};
//!
//! let records = vec![Collaborator::new("Paulo Gustavo", Some(-1.0), None)];
//! let err = Validator::salaries().validate(&records).unwrap_err();
//!
//! // salary is checked before sector
//! assert_eq!(err.kind(), ErrorKind::InvalidSalary);
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod check;
mod error;
mod validator;

pub use check::{AmountCheck, KeyCheck, KeyRole, RecordCheck};
pub use error::{ErrorKind, Side, ValidationError};
pub use validator::{validate_join, Validator};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for validation
    pub use crate::{ErrorKind, RecordCheck, Side, ValidationError, Validator};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
