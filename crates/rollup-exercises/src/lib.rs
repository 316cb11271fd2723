//! Rollup Exercises
//!
//! Two flat pipelines that sit next to the grouped aggregation:
//!
//! - [`PersonService::states`]: filter people by age and city population,
//!   then list distinct states
//! - [`fibonacci_until`]: the Fibonacci prefix that ends just before a
//!   boundary term

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod fibonacci;
mod states;

pub use fibonacci::{fibonacci, fibonacci_until, FibonacciError};
pub use states::{PersonService, StateFilter};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
