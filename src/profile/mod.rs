//! Input models consumed by [`ScoreData`](crate::scoredata::ScoreData).
//!
//! A search pipeline holds two views of the same profile:
//!
//! - A *finalized* profile ([`SsvProfile`]), whose match emissions have been
//!   quantized to bytes for the fast diagonal filter.
//! - A *raw* profile ([`RawProfile`]), holding full-precision match scores,
//!   emission odds, and transition probabilities.
//!
//! Both are addressed by model position `0..=M` (where `M` is the model length
//! and row `0` is the begin state) and by symbol code from an
//! [`Alphabet`](crate::data::Alphabet). Any model type can be used by
//! implementing the traits; [`Profile`] is a plain in-memory implementation of
//! both.

use crate::data::Alphabet;

mod model;
#[cfg(feature = "rand")]
mod sample;

pub use model::*;

#[cfg(test)]
mod test;

/// The number of transition kinds stored per model position.
pub const NUM_TRANSITIONS: usize = 8;

/// The kinds of state transitions in a profile layer.
///
/// The discriminants give the storage order used by
/// [`TransitionTable`](crate::scoredata::TransitionTable).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Transition {
    /// Begin to match (local entry)
    BeginMatch   = 0,
    MatchMatch   = 1,
    InsertMatch  = 2,
    DeleteMatch  = 3,
    MatchDelete  = 4,
    MatchInsert  = 5,
    InsertInsert = 6,
    DeleteDelete = 7,
}

impl Transition {
    /// All transition kinds, in storage order.
    pub const ALL: [Transition; NUM_TRANSITIONS] = [
        Transition::BeginMatch,
        Transition::MatchMatch,
        Transition::InsertMatch,
        Transition::DeleteMatch,
        Transition::MatchDelete,
        Transition::MatchInsert,
        Transition::InsertInsert,
        Transition::DeleteDelete,
    ];

    /// A short label such as `"MI"`.
    #[inline]
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Transition::BeginMatch => "BM",
            Transition::MatchMatch => "MM",
            Transition::InsertMatch => "IM",
            Transition::DeleteMatch => "DM",
            Transition::MatchDelete => "MD",
            Transition::MatchInsert => "MI",
            Transition::InsertInsert => "II",
            Transition::DeleteDelete => "DD",
        }
    }
}

impl From<Transition> for usize {
    #[inline]
    fn from(value: Transition) -> Self {
        value as usize
    }
}

impl TryFrom<usize> for Transition {
    type Error = usize;

    /// Looks up the transition at `value` in [`Transition::ALL`], returning the
    /// value back if it is out of range.
    #[inline]
    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Transition::ALL.get(value).copied().ok_or(value)
    }
}

/// A finalized profile with byte-quantized match emission scores, as used by
/// the standard fast diagonal filter.
pub trait SsvProfile {
    /// The number of match positions `M`.
    fn model_len(&self) -> usize;

    /// The alphabet whose codes index the emission scores.
    fn alphabet(&self) -> &Alphabet;

    /// The quantized match emission score of symbol code `symbol` at position
    /// `pos`, for `pos` in `0..=M` and `symbol` in `0..Kp`.
    fn ssv_score(&self, pos: usize, symbol: usize) -> u8;
}

/// A profile with full-precision scores and probabilities.
pub trait RawProfile {
    /// The number of match positions `M`.
    fn model_len(&self) -> usize;

    /// The alphabet whose codes index the emission scores.
    fn alphabet(&self) -> &Alphabet;

    /// The unquantized match emission score of `symbol` at `pos`.
    fn match_score(&self, pos: usize, symbol: usize) -> f32;

    /// The full-precision emission score of `symbol` at `pos` used by the
    /// Forward/Backward stage.
    fn forward_emission(&self, pos: usize, symbol: usize) -> f32;

    /// The transition probability of kind `kind` leaving position `pos`.
    fn transition(&self, pos: usize, kind: Transition) -> f32;
}

impl<P: SsvProfile + ?Sized> SsvProfile for &P {
    #[inline]
    fn model_len(&self) -> usize {
        (**self).model_len()
    }

    #[inline]
    fn alphabet(&self) -> &Alphabet {
        (**self).alphabet()
    }

    #[inline]
    fn ssv_score(&self, pos: usize, symbol: usize) -> u8 {
        (**self).ssv_score(pos, symbol)
    }
}

impl<P: RawProfile + ?Sized> RawProfile for &P {
    #[inline]
    fn model_len(&self) -> usize {
        (**self).model_len()
    }

    #[inline]
    fn alphabet(&self) -> &Alphabet {
        (**self).alphabet()
    }

    #[inline]
    fn match_score(&self, pos: usize, symbol: usize) -> f32 {
        (**self).match_score(pos, symbol)
    }

    #[inline]
    fn forward_emission(&self, pos: usize, symbol: usize) -> f32 {
        (**self).forward_emission(pos, symbol)
    }

    #[inline]
    fn transition(&self, pos: usize, kind: Transition) -> f32 {
        (**self).transition(pos, kind)
    }
}
