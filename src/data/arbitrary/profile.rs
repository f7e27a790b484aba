//! Arbitrary implementations and specification structs for [`Profile`].

use super::ArbitrarySpecs;
use crate::{
    data::Alphabet,
    profile::{NUM_TRANSITIONS, Profile, Transition},
};
use arbitrary::{Arbitrary, Result, Unstructured};

/// Draws a finite score in `-20.0..=20.0` with two decimal places.
#[inline]
fn finite_score(u: &mut Unstructured<'_>) -> Result<f32> {
    Ok(f32::from(u.int_in_range(0..=4000u16)?) / 100.0 - 20.0)
}

/// Draws a probability strictly between zero and one.
#[inline]
fn open_unit(u: &mut Unstructured<'_>) -> Result<f32> {
    Ok(f32::from(u.int_in_range(1..=999u16)?) / 1000.0)
}

/// Specifications for generating an arbitrary [`Profile`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ProfileSpecs {
    /// The alphabet to use, or `None` to pick one at random.
    pub alphabet: Option<Alphabet>,

    /// The largest model length generated. Lengths start at one.
    pub max_len: usize,

    /// Whether every score is restricted to a finite, bounded range.
    pub finite: bool,

    /// Whether the insertion rates at internal positions lie strictly inside
    /// `(0, 1)` and those at the boundary positions are zero.
    pub valid_insert_rates: bool,
}

impl Default for ProfileSpecs {
    fn default() -> Self {
        Self {
            alphabet:           None,
            max_len:            256,
            finite:             false,
            valid_insert_rates: false,
        }
    }
}

impl<'a> ArbitrarySpecs<'a> for ProfileSpecs {
    type Output = Profile;

    fn make_arbitrary(&self, u: &mut Unstructured<'a>) -> Result<Self::Output> {
        let alphabet = match self.alphabet {
            Some(alphabet) => alphabet,
            None => Alphabet::arbitrary(u)?,
        };
        let len = u.int_in_range(1..=self.max_len.max(1))?;
        let Ok(mut profile) = Profile::new(alphabet, len) else {
            return Err(arbitrary::Error::IncorrectFormat);
        };

        for pos in 0..=len {
            for x in 0..alphabet.size() {
                profile.set_ssv_score(pos, x, u8::arbitrary(u)?);
                if self.finite {
                    profile.set_match_score(pos, x, finite_score(u)?);
                    profile.set_forward_emission(pos, x, finite_score(u)?);
                } else {
                    profile.set_match_score(pos, x, f32::arbitrary(u)?);
                    profile.set_forward_emission(pos, x, f32::arbitrary(u)?);
                }
            }

            let mut probs = [0.0; NUM_TRANSITIONS];
            for p in &mut probs {
                *p = if self.valid_insert_rates { open_unit(u)? } else { f32::arbitrary(u)? };
            }
            profile.transitions[pos] = probs;

            if self.valid_insert_rates && (pos == 0 || pos == len) {
                profile.set_insert_rates(pos, 0.0, 0.0);
            }
        }

        Ok(profile)
    }
}

impl<'a> Arbitrary<'a> for Profile {
    #[inline]
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        ProfileSpecs::default().make_arbitrary(u)
    }
}

/// A wrapper around [`Profile`] such that the implementation of
/// [`Arbitrary`](https://docs.rs/arbitrary/latest/arbitrary/trait.Arbitrary.html)
/// only generates profiles that can be built and enriched. This means:
///
/// - All scores are finite
/// - Internal insertion rates lie strictly between zero and one
/// - Boundary insertion rates are zero
#[derive(Clone, Debug)]
pub struct ProfileValid(pub Profile);

impl std::ops::Deref for ProfileValid {
    type Target = Profile;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'a> Arbitrary<'a> for ProfileValid {
    #[inline]
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        let specs = ProfileSpecs {
            finite: true,
            valid_insert_rates: true,
            ..ProfileSpecs::default()
        };
        Ok(ProfileValid(specs.make_arbitrary(u)?))
    }
}

/// A pair of a valid profile and a transition to corrupt in it, used to check
/// that enrichment rejects out-of-range insertion rates.
#[derive(Clone, Debug)]
pub struct ProfileCorrupted {
    /// The profile after corruption.
    pub profile:  Profile,
    /// The position corrupted.
    pub position: usize,
    /// The transition corrupted.
    pub kind:     Transition,
}

impl<'a> Arbitrary<'a> for ProfileCorrupted {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        let specs = ProfileSpecs {
            max_len: 64,
            finite: true,
            valid_insert_rates: true,
            ..ProfileSpecs::default()
        };
        let mut profile = specs.make_arbitrary(u)?;
        if profile.len < 2 {
            return Err(arbitrary::Error::IncorrectFormat);
        }

        let position = u.int_in_range(1..=profile.len - 1)?;
        let kind = *u.choose(&[Transition::MatchInsert, Transition::InsertInsert])?;
        let value = *u.choose(&[0.0, 1.0, -0.5, 2.0, f32::NAN])?;
        profile.set_transition(position, kind, value);

        Ok(ProfileCorrupted { profile, position, kind })
    }
}
