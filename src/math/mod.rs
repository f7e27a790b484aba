//! Generic float support and tolerant comparison of float tables.

mod float;
mod float_compare;

pub use float::*;
pub use float_compare::*;
