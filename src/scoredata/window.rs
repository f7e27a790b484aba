//! Window lengths around surviving diagonals.
//!
//! When a diagonal passes the filter, the target is cut into a window that
//! must be wide enough to hold any plausible alignment through that diagonal.
//! Insert states are what let an alignment run longer than the model, so the
//! width allotted to each model position comes from the length of its
//! insertion runs.
//!
//! For position $i$ with match-to-insert probability $p_{mi}$ and
//! insert-to-insert probability $p_{ii}$, an insertion run reaches length $n$
//! with probability $p_{mi} \cdot p_{ii}^{n}$. Solving for the length at which
//! this drops below the tail probability $\beta$ gives
//!
//! $$ L_i = 2 + \max\left(0, \left\lceil \frac{\ln(\beta / p_{mi})}{\ln p_{ii}} \right\rceil\right) $$
//!
//! where the two accounts for the match state and one inserted residue. When
//! $p_{mi}$ is already below $\beta$ no insertion is needed at all, so the run
//! term is floored at zero and every internal position gets at least two. The
//! lengths are normalized to sum to one across the internal positions and then
//! accumulated, so `prefix[i]` is the share of the total window that lies at or
//! before position `i`.

use super::{
    ForwardTables, ScoreData, ScoreDataError, ScoreMatrix, TransitionTable, WindowLengths, builder::check_raw_matches,
    tables::try_filled,
};
use crate::{
    math::Float,
    profile::{RawProfile, Transition},
};

/// The default tail probability $\beta$ for [`raw_window_length`].
pub const DEFAULT_WINDOW_BETA: f64 = 1e-7;

/// The insertion-run length $L_i$ beyond which less than `beta` of the
/// probability mass remains, for a position with match-to-insert probability
/// `p_mi` and insert-to-insert probability `p_ii`.
///
/// Both probabilities should lie strictly between zero and one. The result is
/// never below two, even when `p_mi` is smaller than `beta`.
///
/// ## Example
///
/// ```
/// # use scoredata::scoredata::raw_window_length;
/// // ln(1e-6) / ln(0.5) = 19.93...
/// assert_eq!(raw_window_length(0.1, 0.5, 1e-7), 22.0);
/// assert_eq!(raw_window_length(1e-9, 0.5, 1e-7), 2.0);
/// ```
#[inline]
#[must_use]
pub fn raw_window_length<T: Float>(p_mi: T, p_ii: T, beta: T) -> T {
    let two = T::ONE + T::ONE;
    let run = ((beta / p_mi).ln() / p_ii.ln()).ceil();
    if run > T::ZERO { two + run } else { two }
}

impl ScoreData {
    /// Adds the window lengths and full-precision tables to the container,
    /// using [`DEFAULT_WINDOW_BETA`].
    ///
    /// This is the second, deferred construction phase. It reads only `raw`, so
    /// it may be applied to a container in either mode. The container is
    /// consumed: on failure it is dropped in full, since a partially enriched
    /// container cannot be scored.
    ///
    /// ## Errors
    ///
    /// * [`ScoreDataError::LengthMismatch`] or
    ///   [`ScoreDataError::AlphabetMismatch`] if `raw` is a different model
    /// * [`ScoreDataError::InvalidTransition`] if a match-to-insert or
    ///   insert-to-insert probability at an internal position is not strictly
    ///   between zero and one
    /// * [`ScoreDataError::OutOfMemory`] if a table cannot be allocated
    #[inline]
    pub fn enrich<R: RawProfile + ?Sized>(self, raw: &R) -> Result<Self, ScoreDataError> {
        self.enrich_with_beta(raw, DEFAULT_WINDOW_BETA)
    }

    /// Same as [`enrich`](ScoreData::enrich), with a custom tail probability.
    ///
    /// ## Errors
    ///
    /// [`ScoreDataError::InvalidBeta`] if `beta` is not strictly between zero
    /// and one, as well as the errors of [`enrich`](ScoreData::enrich).
    pub fn enrich_with_beta<R: RawProfile + ?Sized>(mut self, raw: &R, beta: f64) -> Result<Self, ScoreDataError> {
        if !(beta > 0.0 && beta < 1.0) {
            return Err(ScoreDataError::InvalidBeta);
        }
        check_raw_matches(self.m, &self.alphabet, raw)?;
        check_insert_rates(self.m, raw)?;

        let forward = copy_forward_tables(self.m, self.alphabet.size(), raw)?;
        let windows = estimate_window_lengths(
            forward.transitions.row(Transition::MatchInsert),
            forward.transitions.row(Transition::InsertInsert),
            beta,
        )?;

        self.forward = Some(forward);
        self.windows = Some(windows);

        log::debug!("Enriched score data (M = {}, beta = {beta:e})", self.m);
        Ok(self)
    }
}

fn check_insert_rates<R: RawProfile + ?Sized>(m: usize, raw: &R) -> Result<(), ScoreDataError> {
    for position in 1..m {
        for kind in [Transition::MatchInsert, Transition::InsertInsert] {
            let p = raw.transition(position, kind);
            if !(p > 0.0 && p < 1.0) {
                return Err(ScoreDataError::InvalidTransition { position, kind });
            }
        }
    }
    Ok(())
}

/// Copies the full emission table and every transition row of `raw`.
fn copy_forward_tables<R>(m: usize, kp: usize, raw: &R) -> Result<ForwardTables, ScoreDataError>
where
    R: RawProfile + ?Sized, {
    let mut emissions = ScoreMatrix::try_new(m + 1, kp, 0.0f32)?;
    for pos in 0..=m {
        for (x, score) in emissions.row_mut(pos).iter_mut().enumerate() {
            *score = raw.forward_emission(pos, x);
        }
    }

    let mut transitions = TransitionTable::try_new(m)?;
    for kind in Transition::ALL {
        for (pos, value) in transitions.row_mut(kind).iter_mut().enumerate() {
            *value = raw.transition(pos, kind);
        }
    }

    Ok(ForwardTables { emissions, transitions })
}

/// Computes the cumulative prefix and suffix lengths from the insertion rates
/// at positions `0..=M`.
///
/// The suffix runs in the opposite direction: `suffix[M]` is seeded with the
/// normalized length at `M - 1`, and each lower position `i` adds the
/// normalized length at `i - 1`.
#[allow(clippy::cast_possible_truncation)]
fn estimate_window_lengths(mi: &[f32], ii: &[f32], beta: f64) -> Result<WindowLengths, ScoreDataError> {
    let m = mi.len() - 1;
    let mut prefix = try_filled(m + 1, 0.0f32)?;
    let mut suffix = try_filled(m + 1, 0.0f32)?;

    let mut lengths = try_filled(m + 1, 0.0f64)?;
    let mut total = 0.0;
    for pos in 1..m {
        lengths[pos] = raw_window_length(f64::from(mi[pos]), f64::from(ii[pos]), beta);
        total += lengths[pos];
    }
    // Each internal length is at least two, so `total` is zero only when the
    // range is empty.
    for len in &mut lengths[1..m] {
        *len /= total;
    }

    let mut acc = lengths[m - 1];
    suffix[m] = acc as f32;
    for pos in (1..m).rev() {
        acc += lengths[pos - 1];
        suffix[pos] = acc as f32;
    }

    let mut acc = 0.0;
    for pos in 1..m {
        acc += lengths[pos];
        prefix[pos] = acc as f32;
    }

    Ok(WindowLengths { prefix, suffix })
}
