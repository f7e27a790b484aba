use super::Float;
use std::fmt::Debug;

/// How closely two floats must agree to be considered equal.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Tolerance<T> {
    /// The difference relative to the magnitudes must be below the value. Near
    /// zero, where relative error is meaningless, the difference must instead
    /// be below the value scaled by the smallest normal float. See
    /// <https://floating-point-gui.de/errors/comparison/>.
    Relative(T),
    /// The difference must be below the value.
    Absolute(T),
}

impl<T: Float> Tolerance<T> {
    /// Whether `a` and `b` agree within the tolerance. Equal infinities agree.
    #[inline]
    #[allow(clippy::float_cmp)]
    pub fn accepts(self, a: T, b: T) -> bool {
        if a == b {
            return true;
        }

        let diff = (a - b).abs();
        match self {
            Tolerance::Absolute(eps) => diff < eps,
            Tolerance::Relative(eps) => {
                let scale = a.abs() + b.abs();
                if a == T::ZERO || b == T::ZERO || scale < T::MIN_POSITIVE {
                    diff < eps * T::MIN_POSITIVE
                } else {
                    diff / scale.min(T::MAX) < eps
                }
            }
        }
    }
}

/// The first pair of floats found to disagree, or `None` when the values
/// differ in shape (lengths, modes, or which tables are present).
pub type Mismatch<T> = Option<(T, T)>;

/// Equality within a [`Tolerance`] for floats and for structures holding them.
/// `T` is the float type of the tolerance.
pub trait NearlyEqual<T> {
    /// Compares `self` to `other` element by element, stopping at the first
    /// disagreement.
    ///
    /// ## Errors
    ///
    /// The [`Mismatch`] responsible for the values differing.
    fn compare(&self, other: &Self, tol: Tolerance<T>) -> Result<(), Mismatch<T>>;
}

macro_rules! impl_float_nearly_equal {
    {$($ty:ty),* } => {
        $(
            impl NearlyEqual<$ty> for $ty {
                #[inline]
                fn compare(&self, other: &Self, tol: Tolerance<$ty>) -> Result<(), Mismatch<$ty>> {
                    if tol.accepts(*self, *other) { Ok(()) } else { Err(Some((*self, *other))) }
                }
            }
        )*
    }
}

impl_float_nearly_equal!(f32, f64);

impl<T, S: NearlyEqual<T>> NearlyEqual<T> for Option<S> {
    #[inline]
    fn compare(&self, other: &Self, tol: Tolerance<T>) -> Result<(), Mismatch<T>> {
        match (self, other) {
            (Some(x), Some(y)) => x.compare(y, tol),
            (None, None) => Ok(()),
            _ => Err(None),
        }
    }
}

impl<T: Copy, S: NearlyEqual<T>> NearlyEqual<T> for [S] {
    #[inline]
    fn compare(&self, other: &Self, tol: Tolerance<T>) -> Result<(), Mismatch<T>> {
        if self.len() != other.len() {
            return Err(None);
        }
        self.iter().zip(other).try_for_each(|(x, y)| x.compare(y, tol))
    }
}

impl<T: Copy, S: NearlyEqual<T>, const N: usize> NearlyEqual<T> for [S; N] {
    #[inline]
    fn compare(&self, other: &Self, tol: Tolerance<T>) -> Result<(), Mismatch<T>> {
        self.as_slice().compare(other.as_slice(), tol)
    }
}

impl<T: Copy, S: NearlyEqual<T>> NearlyEqual<T> for Vec<S> {
    #[inline]
    fn compare(&self, other: &Self, tol: Tolerance<T>) -> Result<(), Mismatch<T>> {
        self.as_slice().compare(other.as_slice(), tol)
    }
}

/// Panics with both values and the first disagreement unless `found` and
/// `expected` agree within `tol`. Called by [`assert_fp_eq`].
#[doc(hidden)]
#[track_caller]
pub fn assert_nearly_equal<T, S>(found: &S, expected: &S, tol: Tolerance<T>)
where
    T: Float,
    S: NearlyEqual<T> + Debug, {
    match found.compare(expected, tol) {
        Ok(()) => {}
        Err(Some((a, b))) => panic!(
            "assertion failed: `(found ≈ expected)` with {tol:?}\n found:    {found:?}\n expected: {expected:?}\n\n first difference: {a} vs {b}"
        ),
        Err(None) => panic!(
            "assertion failed: `(found ≈ expected)` with {tol:?}\n found:    {found:?}\n expected: {expected:?}\n\n the values differ in shape"
        ),
    }
}

/// Assert that two floating point values, or two structures of them, are
/// approximately equal.
///
/// By default the values are compared by relative error with a tolerance of
/// $10^{-8}$:
/// ```
/// # use scoredata::assert_fp_eq;
/// assert_fp_eq!(3.0, 1.0 + 2.0);
/// assert_fp_eq!(3.0, 2.99999, 1e-4);
/// ```
///
/// Prefix the arguments with `@absolute` to bound the difference itself, which
/// is the right choice for values accumulated towards zero or one:
/// ```
/// # use scoredata::assert_fp_eq;
/// assert_fp_eq!(@absolute, 1e-10, 2e-10, 1e-8);
/// assert_fp_eq!(@relative, vec![1.0f32, 2.0], vec![1.0, 2.000_001], 1e-6);
/// ```
///
/// Both sides must implement [`NearlyEqual`](crate::math::NearlyEqual). Besides
/// `f32` and `f64`, this covers `Option`, arrays, slices, and `Vec` of such
/// values, as well as every table of a
/// [`ScoreData`](crate::scoredata::ScoreData).
#[macro_export]
macro_rules! assert_fp_eq {
    (@relative, $a:expr, $b:expr, $epsilon:expr) => {
        $crate::math::assert_nearly_equal(&$a, &$b, $crate::math::Tolerance::Relative($epsilon))
    };
    (@absolute, $a:expr, $b:expr, $epsilon:expr) => {
        $crate::math::assert_nearly_equal(&$a, &$b, $crate::math::Tolerance::Absolute($epsilon))
    };
    ($a:expr, $b:expr, $epsilon:expr) => {
        $crate::assert_fp_eq!(@relative, $a, $b, $epsilon)
    };
    ($a:expr, $b:expr) => {
        $crate::assert_fp_eq!(@relative, $a, $b, 1e-8)
    };
}
