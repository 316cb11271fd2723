//! Rollup Model
//!
//! Immutable record and summary value types for grouped aggregation.
//!
//! # Core Concepts
//!
//! - [`Keyed`], [`Named`], [`Weighted`]: accessor traits the validator and
//!   aggregator are generic over
//! - [`Collaborator`] / [`SectorSummary`]: salary records and their per-sector rollup
//! - [`Employee`] / [`Office`] / [`Company`]: the two sides of a company join
//!   and the merged entity
//! - [`Person`]: nested address records for the state filter
//!
//! Required fields that callers may leave out are modelled as `Option`, so a
//! missing value is visible in the type and checked before aggregation.

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod company;
mod person;
mod record;
mod staff;

pub use company::{Company, Employee, Office};
pub use person::{Address, City, Person, State};
pub use record::{Keyed, Named, Weighted};
pub use staff::{Collaborator, Collaborators, Sector, SectorSummary};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
