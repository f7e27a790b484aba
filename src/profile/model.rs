use super::{NUM_TRANSITIONS, RawProfile, SsvProfile, Transition};
use crate::{
    data::Alphabet,
    scoredata::{ScoreDataError, try_filled},
};

/// An in-memory profile holding both the quantized and the full-precision
/// parameters for every position `0..=M`.
///
/// All parameters start at zero and are filled in with the setters (or drawn
/// at random with [`Profile::sample`] when the *rand* feature is enabled).
/// Rows are stored contiguously, one row of `Kp` values per position.
#[derive(Clone, PartialEq, Debug)]
pub struct Profile {
    pub(crate) alphabet:    Alphabet,
    pub(crate) len:         usize,
    pub(crate) ssv:         Vec<u8>,
    pub(crate) match_sc:    Vec<f32>,
    pub(crate) emissions:   Vec<f32>,
    pub(crate) transitions: Vec<[f32; NUM_TRANSITIONS]>,
}

impl Profile {
    /// Creates a profile of length `len` with every parameter set to zero.
    ///
    /// ## Errors
    ///
    /// * [`ScoreDataError::EmptyModel`] if `len` is zero
    /// * [`ScoreDataError::OutOfMemory`] if the parameters cannot be allocated
    pub fn new(alphabet: Alphabet, len: usize) -> Result<Self, ScoreDataError> {
        if len == 0 {
            return Err(ScoreDataError::EmptyModel);
        }

        let rows = len.checked_add(1).ok_or(ScoreDataError::OutOfMemory)?;
        let cells = rows.checked_mul(alphabet.size()).ok_or(ScoreDataError::OutOfMemory)?;
        Ok(Profile {
            alphabet,
            len,
            ssv:         try_filled(cells, 0)?,
            match_sc:    try_filled(cells, 0.0)?,
            emissions:   try_filled(cells, 0.0)?,
            transitions: try_filled(rows, [0.0; NUM_TRANSITIONS])?,
        })
    }

    #[inline]
    fn cell(&self, pos: usize, symbol: usize) -> usize {
        assert!(
            pos <= self.len && symbol < self.alphabet.size(),
            "position {pos} or symbol {symbol} is out of range for the profile"
        );
        pos * self.alphabet.size() + symbol
    }

    /// Sets the quantized match emission score of `symbol` at `pos`.
    ///
    /// ## Panics
    ///
    /// `pos` must be at most the model length and `symbol` must be a valid code
    /// for the alphabet.
    #[inline]
    pub fn set_ssv_score(&mut self, pos: usize, symbol: usize, score: u8) {
        let i = self.cell(pos, symbol);
        self.ssv[i] = score;
    }

    /// Sets the unquantized match emission score of `symbol` at `pos`.
    ///
    /// ## Panics
    ///
    /// `pos` must be at most the model length and `symbol` must be a valid code
    /// for the alphabet.
    #[inline]
    pub fn set_match_score(&mut self, pos: usize, symbol: usize, score: f32) {
        let i = self.cell(pos, symbol);
        self.match_sc[i] = score;
    }

    /// Sets the full-precision emission score of `symbol` at `pos`.
    ///
    /// ## Panics
    ///
    /// `pos` must be at most the model length and `symbol` must be a valid code
    /// for the alphabet.
    #[inline]
    pub fn set_forward_emission(&mut self, pos: usize, symbol: usize, score: f32) {
        let i = self.cell(pos, symbol);
        self.emissions[i] = score;
    }

    /// Sets the probability of transition `kind` leaving `pos`.
    ///
    /// ## Panics
    ///
    /// `pos` must be at most the model length.
    #[inline]
    pub fn set_transition(&mut self, pos: usize, kind: Transition, prob: f32) {
        self.transitions[pos][usize::from(kind)] = prob;
    }

    /// Sets the match-to-insert and insert-to-insert probabilities at `pos`,
    /// the two rates that govern insertion run lengths.
    #[inline]
    pub fn set_insert_rates(&mut self, pos: usize, match_insert: f32, insert_insert: f32) {
        self.set_transition(pos, Transition::MatchInsert, match_insert);
        self.set_transition(pos, Transition::InsertInsert, insert_insert);
    }
}

impl SsvProfile for Profile {
    #[inline]
    fn model_len(&self) -> usize {
        self.len
    }

    #[inline]
    fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    #[inline]
    fn ssv_score(&self, pos: usize, symbol: usize) -> u8 {
        self.ssv[self.cell(pos, symbol)]
    }
}

impl RawProfile for Profile {
    #[inline]
    fn model_len(&self) -> usize {
        self.len
    }

    #[inline]
    fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    #[inline]
    fn match_score(&self, pos: usize, symbol: usize) -> f32 {
        self.match_sc[self.cell(pos, symbol)]
    }

    #[inline]
    fn forward_emission(&self, pos: usize, symbol: usize) -> f32 {
        self.emissions[self.cell(pos, symbol)]
    }

    #[inline]
    fn transition(&self, pos: usize, kind: Transition) -> f32 {
        self.transitions[pos][usize::from(kind)]
    }
}
