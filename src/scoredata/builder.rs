use super::{
    ScoreData, ScoreDataError, ScoreMatrix, ScoreTable,
    extension::build_extensions,
    tables::try_filled,
};
use crate::{
    data::Alphabet,
    profile::{RawProfile, SsvProfile},
};

/// Checks that `raw` describes the same model as the finalized profile.
pub(crate) fn check_raw_matches<R>(m: usize, alphabet: &Alphabet, raw: &R) -> Result<(), ScoreDataError>
where
    R: RawProfile + ?Sized, {
    if raw.model_len() != m {
        Err(ScoreDataError::LengthMismatch {
            expected: m,
            found:    raw.model_len(),
        })
    } else if raw.alphabet() != alphabet {
        Err(ScoreDataError::AlphabetMismatch)
    } else {
        Ok(())
    }
}

impl ScoreData {
    /// Builds the score tables for a profile.
    ///
    /// Without a raw profile this is [`ScoreData::quantized`]; with one it is
    /// [`ScoreData::float`], which also computes the extension bounds.
    ///
    /// ## Errors
    ///
    /// See [`ScoreData::quantized`] and [`ScoreData::float`].
    pub fn new<P, R>(profile: &P, raw: Option<&R>) -> Result<Self, ScoreDataError>
    where
        P: SsvProfile + ?Sized,
        R: RawProfile + ?Sized, {
        match raw {
            Some(raw) => Self::float(profile, raw),
            None => Self::quantized(profile),
        }
    }

    /// Builds a quantized container by copying every byte score of every
    /// position `0..=M` of `profile`.
    ///
    /// ## Errors
    ///
    /// * [`ScoreDataError::EmptyModel`] if the profile has no match positions
    /// * [`ScoreDataError::OutOfMemory`] if the table cannot be allocated
    pub fn quantized<P: SsvProfile + ?Sized>(profile: &P) -> Result<Self, ScoreDataError> {
        let m = profile.model_len();
        if m == 0 {
            return Err(ScoreDataError::EmptyModel);
        }
        let rows = m.checked_add(1).ok_or(ScoreDataError::OutOfMemory)?;
        let alphabet = *profile.alphabet();
        let kp = alphabet.size();

        let mut table = ScoreMatrix::try_new(rows, kp, 0u8)?;
        for pos in 0..=m {
            for (x, score) in table.row_mut(pos).iter_mut().enumerate() {
                *score = profile.ssv_score(pos, x);
            }
        }

        log::debug!("Built quantized score data (M = {m}, Kp = {kp})");

        Ok(ScoreData {
            m,
            alphabet,
            scores: ScoreTable::Quantized(table),
            extensions: None,
            windows: None,
            forward: None,
        })
    }

    /// Builds a float container from the unquantized match scores of `raw`,
    /// along with the forward and reverse extension bounds.
    ///
    /// Only canonical residues are copied; row `0` and the gap and degenerate
    /// columns hold zero. The model length and alphabet are those of `profile`.
    ///
    /// ## Errors
    ///
    /// * [`ScoreDataError::EmptyModel`] if the profile has no match positions
    /// * [`ScoreDataError::LengthMismatch`] or
    ///   [`ScoreDataError::AlphabetMismatch`] if `raw` does not describe the
    ///   same model
    /// * [`ScoreDataError::OutOfMemory`] if a table cannot be allocated
    pub fn float<P, R>(profile: &P, raw: &R) -> Result<Self, ScoreDataError>
    where
        P: SsvProfile + ?Sized,
        R: RawProfile + ?Sized, {
        let m = profile.model_len();
        if m == 0 {
            return Err(ScoreDataError::EmptyModel);
        }
        let alphabet = *profile.alphabet();
        check_raw_matches(m, &alphabet, raw)?;
        let rows = m.checked_add(1).ok_or(ScoreDataError::OutOfMemory)?;

        let mut table = ScoreMatrix::try_new(rows, alphabet.size(), 0.0f32)?;
        // The best score at a position never drops below zero, so a column of
        // penalties adds nothing to an extension bound.
        let mut max_scores = try_filled(rows, 0.0f32)?;

        for (pos, max) in max_scores.iter_mut().enumerate().skip(1) {
            let row = table.row_mut(pos);
            for (x, score) in row.iter_mut().enumerate().take(alphabet.canonical_size()) {
                *score = raw.match_score(pos, x);
                if *score > *max {
                    *max = *score;
                }
            }
        }

        let extensions = build_extensions(&max_scores)?;

        log::debug!(
            "Built float score data (M = {m}, Kp = {}) with {} extension rows",
            alphabet.size(),
            extensions.forward.len()
        );

        Ok(ScoreData {
            m,
            alphabet,
            scores: ScoreTable::Float(table),
            extensions: Some(extensions),
            windows: None,
            forward: None,
        })
    }
}
