#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]
#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,
    clippy::similar_names,
    clippy::wildcard_imports,
    clippy::enum_glob_use
)]

/// Alphabets, error helpers, and fuzzing support.
pub mod data;
/// Floating point utilities.
pub mod math;
/// The profile parameters the score tables are built from.
pub mod profile;
/// Construction, enrichment, cloning, and release of the score tables.
pub mod scoredata;

mod private {
    pub trait Sealed {}
}

/// Common structures and traits re-exported
pub mod prelude {
    pub use crate::data::{Alphabet, err::GetCode};
    pub use crate::profile::{Profile, RawProfile, SsvProfile, Transition};
    pub use crate::scoredata::{
        DEFAULT_WINDOW_BETA, Direction, ScoreData, ScoreDataError, ScoreMode, ScoreTable, destroy, raw_window_length,
    };
}
