//! tk-core: stable foundation for tankflow.
//!
//! Contains:
//! - units (uom SI types + constructors + API 650 conversion factors)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{TkError, TkResult};
pub use numeric::*;
pub use units::*;
