//! ## Alphabets and shared error plumbing.
//!
//! Symbols are handled in digital form throughout the crate: every residue is
//! an integer code into an [`Alphabet`], and score tables are indexed by those
//! codes. The canonical residues come first, followed by the gap and any
//! degenerate symbols, so "is this a concrete residue" is a single comparison.

mod alphabet;

#[cfg(feature = "fuzzing")]
pub mod arbitrary;
pub mod err;

pub use alphabet::*;
