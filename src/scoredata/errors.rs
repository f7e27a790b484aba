use crate::{data::err::GetCode, profile::Transition};
use std::{collections::TryReserveError, error::Error, fmt};

/// An enum representing errors that can happen when building, enriching, or
/// cloning a [`ScoreData`](super::ScoreData).
#[non_exhaustive]
#[derive(Eq, PartialEq)]
pub enum ScoreDataError {
    /// An allocation could not be satisfied
    OutOfMemory,
    /// The model has no match positions
    EmptyModel,
    /// The alphabet has no canonical symbols, or more canonical symbols than
    /// symbols
    InvalidAlphabet,
    /// The finalized and raw models have different lengths
    LengthMismatch { expected: usize, found: usize },
    /// The finalized and raw models use different alphabets
    AlphabetMismatch,
    /// An insertion transition at an internal position is not strictly between
    /// zero and one
    InvalidTransition { position: usize, kind: Transition },
    /// The tail probability for window lengths is not strictly between zero
    /// and one
    InvalidBeta,
}

impl fmt::Display for ScoreDataError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ScoreDataError::OutOfMemory => write!(f, "Memory could not be allocated for the score tables!"),
            ScoreDataError::EmptyModel => write!(f, "The model has no match positions!"),
            ScoreDataError::InvalidAlphabet => {
                write!(f, "The alphabet must have between one and all of its symbols canonical!")
            }
            ScoreDataError::LengthMismatch { expected, found } => write!(
                f,
                "The raw model has {found} match positions but the finalized model has {expected}!"
            ),
            ScoreDataError::AlphabetMismatch => write!(f, "The raw and finalized models use different alphabets!"),
            ScoreDataError::InvalidTransition { position, kind } => write!(
                f,
                "The {} transition probability at position {position} must be strictly between 0 and 1!",
                kind.label()
            ),
            ScoreDataError::InvalidBeta => write!(f, "The window tail probability must be strictly between 0 and 1!"),
        }
    }
}

impl fmt::Debug for ScoreDataError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl Error for ScoreDataError {}
impl GetCode for ScoreDataError {}

impl From<TryReserveError> for ScoreDataError {
    #[inline]
    fn from(_: TryReserveError) -> Self {
        ScoreDataError::OutOfMemory
    }
}
