use super::{Profile, Transition};
use crate::{data::Alphabet, scoredata::ScoreDataError};
use rand_xoshiro::{
    Xoshiro256PlusPlus,
    rand_core::{RngCore, SeedableRng},
};

/// Scale for quantized scores: one third of a bit per unit.
const SSV_SCALE: f32 = 3.0 / std::f32::consts::LN_2;
/// Range of the sampled log-odds match scores.
const SCORE_RANGE: (f32, f32) = (-4.0, 2.0);

/// Draws a value uniformly from `[lo, hi)`.
#[inline]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
fn uniform(rng: &mut Xoshiro256PlusPlus, lo: f32, hi: f32) -> f32 {
    let unit = (rng.next_u64() >> 11) as f64 / (1u64 << 53) as f64;
    lo + (hi - lo) * unit as f32
}

/// Converts a log-odds score to a byte, offset by `bias` and saturating at
/// both ends.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn byteify(score: f32, bias: f32) -> u8 {
    (SSV_SCALE * score + bias).round().clamp(0.0, 255.0) as u8
}

impl Profile {
    /// Draws a reproducible random profile of length `len`.
    ///
    /// Match scores of canonical residues are drawn from a bounded log-odds
    /// range and degenerate residues receive the mean over the canonical ones.
    /// The gap and trailing special symbols score zero. Quantized scores are
    /// derived from the match scores with a bias that maps the lowest possible
    /// score to zero. Transition probabilities at internal positions are drawn
    /// strictly inside `(0, 1)`; insertions out of the boundary positions have
    /// probability zero.
    ///
    /// ## Errors
    ///
    /// [`ScoreDataError::EmptyModel`] is returned if `len` is zero.
    ///
    /// ## Example
    ///
    /// ```
    /// # use scoredata::{data::Alphabet, profile::{Profile, RawProfile}};
    /// let profile = Profile::sample(Alphabet::DNA, 100, 42).unwrap();
    /// assert_eq!(profile.model_len(), 100);
    /// ```
    pub fn sample(alphabet: Alphabet, len: usize, seed: u64) -> Result<Self, ScoreDataError> {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
        let mut profile = Profile::new(alphabet, len)?;

        let k = alphabet.canonical_size();
        let kp = alphabet.size();
        let bias = -SSV_SCALE * SCORE_RANGE.0;

        for pos in 1..=len {
            let mut total = 0.0;
            for x in 0..k {
                let score = uniform(&mut rng, SCORE_RANGE.0, SCORE_RANGE.1);
                total += score;
                profile.set_match_score(pos, x, score);
                profile.set_forward_emission(pos, x, score.exp());
                profile.set_ssv_score(pos, x, byteify(score, bias));
            }

            #[allow(clippy::cast_precision_loss)]
            let mean = total / k as f32;
            for x in (k + 1)..kp.saturating_sub(2) {
                profile.set_match_score(pos, x, mean);
                profile.set_forward_emission(pos, x, mean.exp());
                profile.set_ssv_score(pos, x, byteify(mean, bias));
            }
        }

        #[allow(clippy::cast_precision_loss)]
        let entry = 2.0 / (len * (len + 1)) as f32;
        for pos in 0..=len {
            let internal = pos > 0 && pos < len;
            let (mi, ii) = if internal {
                (uniform(&mut rng, 0.01, 0.2), uniform(&mut rng, 0.05, 0.6))
            } else {
                (0.0, 0.0)
            };
            let md = uniform(&mut rng, 0.01, 0.2);
            let dd = uniform(&mut rng, 0.05, 0.6);

            profile.set_transition(pos, Transition::BeginMatch, entry);
            profile.set_transition(pos, Transition::MatchMatch, 1.0 - mi - md);
            profile.set_transition(pos, Transition::InsertMatch, 1.0 - ii);
            profile.set_transition(pos, Transition::DeleteMatch, 1.0 - dd);
            profile.set_transition(pos, Transition::MatchDelete, md);
            profile.set_insert_rates(pos, mi, ii);
            profile.set_transition(pos, Transition::DeleteDelete, dd);
        }

        Ok(profile)
    }
}
