//! Precomputed score tables for diagonal filtering.
//!
//! Before a profile is aligned to a long target with the expensive
//! Viterbi/Forward algorithms, a cheap ungapped filter looks for promising
//! diagonals. A [`ScoreData`] holds everything that filter and the subsequent
//! window extraction need, built in two phases:
//!
//! 1. [`ScoreData::new`] extracts the per-position match emission scores. With
//!    only a finalized profile the scores are bytes ([`ScoreMode::Quantized`])
//!    for the standard filter. When a raw profile is also given the scores are
//!    floats ([`ScoreMode::Float`]) and the [`Extensions`] used to prune
//!    diagonals in the index-based filter are computed as well.
//! 2. [`ScoreData::enrich`] adds the [`WindowLengths`] used to size the window
//!    around a surviving diagonal, along with the full-precision
//!    [`ForwardTables`]. Most diagonals never pass the filter, so this is done
//!    only when needed.
//!
//! Each worker thread should own its container. Build a template once, then
//! hand out copies with [`ScoreData::try_clone`].
//!
//! ## Example
//!
//! ```
//! # use scoredata::{data::Alphabet, profile::Profile, scoredata::{Direction, ScoreData, ScoreMode}};
//! let profile = Profile::sample(Alphabet::DNA, 50, 1).unwrap();
//!
//! let template = ScoreData::new(&profile, Some(&profile)).unwrap();
//! assert_eq!(template.mode(), ScoreMode::Float);
//! assert!(template.extension(10, 3, Direction::Forward).is_some());
//!
//! let worker = template.try_clone().unwrap().enrich(&profile).unwrap();
//! assert!(worker.is_enriched());
//! assert!(!template.is_enriched());
//! ```

use crate::{data::Alphabet, profile::Transition};

mod builder;
mod errors;
mod extension;
mod lifecycle;
mod std_traits;
mod tables;
mod window;

pub use errors::*;
pub use lifecycle::destroy;
pub use tables::*;
pub use window::*;

pub(crate) use tables::try_filled;


/// The longest extension, in model positions, for which bounds are stored.
pub const MAX_EXTENSION: usize = 10;

/// Score tables for one profile, as consumed by the diagonal filters and the
/// window extraction that follows them.
///
/// See the [module documentation](self) for the two construction phases.
#[derive(Clone, PartialEq, Debug)]
pub struct ScoreData {
    pub(crate) m:          usize,
    pub(crate) alphabet:   Alphabet,
    pub(crate) scores:     ScoreTable,
    pub(crate) extensions: Option<Extensions>,
    pub(crate) windows:    Option<WindowLengths>,
    pub(crate) forward:    Option<ForwardTables>,
}

impl ScoreData {
    /// The model length `M`.
    #[inline]
    #[must_use]
    pub fn model_len(&self) -> usize {
        self.m
    }

    /// The alphabet whose codes index the score tables.
    #[inline]
    #[must_use]
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Whether the scores are bytes or floats.
    #[inline]
    #[must_use]
    pub fn mode(&self) -> ScoreMode {
        self.scores.mode()
    }

    /// The match emission score table, `(M + 1)` rows by `Kp` columns.
    #[inline]
    #[must_use]
    pub fn scores(&self) -> &ScoreTable {
        &self.scores
    }

    /// The byte score at `(pos, symbol)`, or `None` if the container is in
    /// float mode or the indices are out of range.
    #[inline]
    #[must_use]
    pub fn quantized_score(&self, pos: usize, symbol: usize) -> Option<u8> {
        self.scores.as_quantized()?.get(pos, symbol)
    }

    /// The float score at `(pos, symbol)`, or `None` if the container is in
    /// quantized mode or the indices are out of range.
    #[inline]
    #[must_use]
    pub fn float_score(&self, pos: usize, symbol: usize) -> Option<f32> {
        self.scores.as_float()?.get(pos, symbol)
    }

    /// The extension bounds, present only in float mode.
    #[inline]
    #[must_use]
    pub fn extensions(&self) -> Option<&Extensions> {
        self.extensions.as_ref()
    }

    /// The best-case score gained by extending a diagonal `offset` positions
    /// (`1..=MAX_EXTENSION`) beyond internal position `pos` in `direction`.
    #[inline]
    #[must_use]
    pub fn extension(&self, pos: usize, offset: usize, direction: Direction) -> Option<f32> {
        self.extensions.as_ref()?.bound(pos, offset, direction)
    }

    /// Whether [`enrich`](ScoreData::enrich) has been run.
    #[inline]
    #[must_use]
    pub fn is_enriched(&self) -> bool {
        self.windows.is_some() && self.forward.is_some()
    }

    /// The window lengths, present only after enrichment.
    #[inline]
    #[must_use]
    pub fn window_lengths(&self) -> Option<&WindowLengths> {
        self.windows.as_ref()
    }

    /// The cumulative prefix length at `pos`, present only after enrichment.
    #[inline]
    #[must_use]
    pub fn prefix_length(&self, pos: usize) -> Option<f32> {
        self.windows.as_ref()?.prefix(pos)
    }

    /// The cumulative suffix length at `pos`, present only after enrichment.
    #[inline]
    #[must_use]
    pub fn suffix_length(&self, pos: usize) -> Option<f32> {
        self.windows.as_ref()?.suffix(pos)
    }

    /// The full-precision tables, present only after enrichment.
    #[inline]
    #[must_use]
    pub fn forward_tables(&self) -> Option<&ForwardTables> {
        self.forward.as_ref()
    }

    /// The full-precision emission score at `(pos, symbol)`, present only
    /// after enrichment.
    #[inline]
    #[must_use]
    pub fn forward_score(&self, pos: usize, symbol: usize) -> Option<f32> {
        self.forward.as_ref()?.emissions.get(pos, symbol)
    }

    /// The full-precision transition value of `kind` at `pos`, present only
    /// after enrichment.
    #[inline]
    #[must_use]
    pub fn forward_transition(&self, kind: Transition, pos: usize) -> Option<f32> {
        self.forward.as_ref()?.transitions.get(kind, pos)
    }
}
