//! Rollup Aggregation
//!
//! Group validated records by key and reduce each group to a summary.
//!
//! # Core Concepts
//!
//! - [`GroupReducer`]: per-group reduction (pluggable)
//! - [`SumSorted`]: sum a numeric payload and order members by it
//! - [`GroupedAggregator`]: single-pass partition, then reduce each group
//! - [`JoinAggregator`]: full outer join of two keyed collections
//! - [`SectorService`] / [`OfficeService`]: validate, then aggregate
//!
//! # Example
//!
//! ```rust
//! use rollup_aggregate::SectorService;
//! use rollup_model::{Collaborator, Collaborators};
//!
//! let staff = Collaborators::new(vec![
//!     Collaborator::in_sector("Wellington Macedo", 300_000.0, "XTW04"),
//!     Collaborator::in_sector("Paulo Gustavo", 500_000.0, "XTW04"),
//! ]);
//!
//! let sectors = SectorService::new().compile(&staff)?;
//! assert_eq!(sectors["XTW04"].total, 800_000.0);
//! # Ok::<(), rollup_validate::ValidationError>(())
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod grouped;
mod join;
mod reducer;
mod service;

pub use grouped::GroupedAggregator;
pub use join::{JoinAggregator, JoinedGroup};
pub use reducer::{GroupReducer, Rollup, SumSorted};
pub use service::{OfficeService, SectorService, SectorSummaries};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
