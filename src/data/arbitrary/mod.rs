//! A module providing implementations of
//! [`Arbitrary`](https://docs.rs/arbitrary/latest/arbitrary/trait.Arbitrary.html)
//! for the crate's input types, as well as specification structs to generate
//! inputs with stronger guarantees.
//!
//! <div class="warning note">
//!
//! **Note**
//!
//! You must enable the *fuzzing* feature in your `Cargo.toml` to use these
//! functions.
//!
//! </div>

use crate::{data::Alphabet, profile::Transition};
use arbitrary::{Arbitrary, Result, Unstructured};

mod profile;

pub use profile::*;

/// A trait for specification structs which can generate arbitrary values
/// according to their settings.
pub trait ArbitrarySpecs<'a> {
    /// The type generated.
    type Output;

    /// Generates an arbitrary value obeying the specifications.
    ///
    /// ## Errors
    ///
    /// Any error from the underlying [`Unstructured`] is propagated.
    fn make_arbitrary(&self, u: &mut Unstructured<'a>) -> Result<Self::Output>;
}

impl<'a> Arbitrary<'a> for Alphabet {
    #[inline]
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        Ok(*u.choose(&[Alphabet::DNA, Alphabet::AMINO])?)
    }

    fn size_hint(depth: usize) -> (usize, Option<usize>) {
        let _ = depth;
        (1, Some(4))
    }
}

impl<'a> Arbitrary<'a> for Transition {
    #[inline]
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        Ok(*u.choose(&Transition::ALL)?)
    }

    fn size_hint(depth: usize) -> (usize, Option<usize>) {
        let _ = depth;
        (1, Some(4))
    }
}
