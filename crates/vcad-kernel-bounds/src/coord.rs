//! Scalar types a bounding box can be built from.
//!
//! Integer and real boxes share one implementation. What differs between
//! them lives here: the extreme values used for the empty sentinel, the
//! accumulator type used for volumes and squared distances, and how `min` /
//! `max` treat NaN.

use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Neg, Sub};

use nalgebra::Scalar;

/// A coordinate type for [`Aabb`](crate::Aabb).
pub trait Coord:
    Scalar + Copy + PartialOrd + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self>
{
    /// Additive identity.
    const ZERO: Self;
    /// Smallest representable value (`-inf` for reals).
    const LOWEST: Self;
    /// Largest representable value (`+inf` for reals).
    const HIGHEST: Self;

    /// Accumulator for products of extents.
    ///
    /// Never overflows. `i32` boxes accumulate exactly in `i128`; `i64`
    /// boxes accumulate in `f64`, exact up to 2^53 and rounded beyond.
    type Wide: Copy
        + Debug
        + PartialOrd
        + Add<Output = Self::Wide>
        + Sub<Output = Self::Wide>
        + Mul<Output = Self::Wide>;

    /// Zero in the accumulator type.
    const WIDE_ZERO: Self::Wide;

    /// Lossless conversion into the accumulator type.
    fn widen(self) -> Self::Wide;

    /// Accumulator value as `f64` (used for square roots).
    fn wide_to_f64(wide: Self::Wide) -> f64;

    /// Smaller of two values. Reals return the non-NaN operand if one is NaN.
    fn min_of(self, other: Self) -> Self;

    /// Larger of two values. Reals return the non-NaN operand if one is NaN.
    fn max_of(self, other: Self) -> Self;

    /// Midpoint of `a` and `b` without intermediate overflow.
    fn halfway(a: Self, b: Self) -> Self;
}

/// A real (floating-point) coordinate type.
///
/// Ray tests need division and IEEE infinities, so they are only available
/// on boxes over these types.
pub trait RealCoord: Coord + Div<Output = Self> + Neg<Output = Self> {
    /// Multiplicative identity.
    const ONE: Self;
    /// Positive infinity; the "no hit" distance.
    const INFINITY: Self;

    /// Square root.
    fn sqrt(self) -> Self;

    /// `true` for NaN.
    fn is_nan(self) -> bool;
}

/// Larger of two accumulator values.
#[inline]
pub(crate) fn wide_max<W: PartialOrd>(a: W, b: W) -> W {
    if a > b {
        a
    } else {
        b
    }
}

macro_rules! impl_int_coord {
    ($($t:ty => $wide:ty, $wide_zero:expr);*) => {$(
        impl Coord for $t {
            const ZERO: Self = 0;
            const LOWEST: Self = <$t>::MIN;
            const HIGHEST: Self = <$t>::MAX;

            type Wide = $wide;
            const WIDE_ZERO: $wide = $wide_zero;

            #[inline]
            fn widen(self) -> $wide {
                self as $wide
            }

            #[inline]
            fn wide_to_f64(wide: $wide) -> f64 {
                wide as f64
            }

            #[inline]
            fn min_of(self, other: Self) -> Self {
                Ord::min(self, other)
            }

            #[inline]
            fn max_of(self, other: Self) -> Self {
                Ord::max(self, other)
            }

            #[inline]
            fn halfway(a: Self, b: Self) -> Self {
                // The sum of two narrow values always fits i128, and the
                // halved result is back in range.
                ((i128::from(a) + i128::from(b)) / 2) as $t
            }
        }
    )*};
}

macro_rules! impl_real_coord {
    ($($t:ty),*) => {$(
        impl Coord for $t {
            const ZERO: Self = 0.0;
            const LOWEST: Self = <$t>::NEG_INFINITY;
            const HIGHEST: Self = <$t>::INFINITY;

            type Wide = f64;
            const WIDE_ZERO: f64 = 0.0;

            #[inline]
            fn widen(self) -> f64 {
                f64::from(self)
            }

            #[inline]
            fn wide_to_f64(wide: f64) -> f64 {
                wide
            }

            #[inline]
            fn min_of(self, other: Self) -> Self {
                self.min(other)
            }

            #[inline]
            fn max_of(self, other: Self) -> Self {
                self.max(other)
            }

            #[inline]
            fn halfway(a: Self, b: Self) -> Self {
                (a + b) * 0.5
            }
        }

        impl RealCoord for $t {
            const ONE: Self = 1.0;
            const INFINITY: Self = <$t>::INFINITY;

            #[inline]
            fn sqrt(self) -> Self {
                <$t>::sqrt(self)
            }

            #[inline]
            fn is_nan(self) -> bool {
                <$t>::is_nan(self)
            }
        }
    )*};
}

impl_int_coord!(i32 => i128, 0; i64 => f64, 0.0);
impl_real_coord!(f32, f64);
