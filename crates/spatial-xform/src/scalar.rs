//! Scalar arithmetic shared by the numeric and symbolic backends.

use std::fmt::Debug;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_traits::{One, Zero};

/// Arithmetic capability every transform in this crate is generic over.
///
/// The operator supertraits are exactly what nalgebra needs for matrix
/// products and negation, so `Mat3<T>`, `Mat6<T>` etc. work for any `T: Scalar`.
pub trait Scalar:
    Clone
    + Debug
    + PartialEq
    + Zero
    + One
    + Add<Output = Self>
    + AddAssign
    + Sub<Output = Self>
    + SubAssign
    + Mul<Output = Self>
    + MulAssign
    + Div<Output = Self>
    + DivAssign
    + Neg<Output = Self>
    + 'static
{
    /// Lift a numeric literal.
    fn from_f64(value: f64) -> Self;

    fn sqrt(self) -> Self;

    fn sin(self) -> Self;

    fn cos(self) -> Self;

    /// Four-quadrant arctangent of `self / other`.
    fn atan2(self, other: Self) -> Self;

    fn asin(self) -> Self;

    fn abs(self) -> Self;

    /// The larger of `self` and `other`.
    fn max(self, other: Self) -> Self;

    /// `(sin, cos)` pair.
    #[inline]
    fn sin_cos(self) -> (Self, Self) {
        (self.clone().sin(), self.cos())
    }
}

macro_rules! impl_float_scalar {
    ($t:ty) => {
        impl Scalar for $t {
            #[inline]
            fn from_f64(value: f64) -> Self {
                value as $t
            }

            #[inline]
            fn sqrt(self) -> Self {
                <$t>::sqrt(self)
            }

            #[inline]
            fn sin(self) -> Self {
                <$t>::sin(self)
            }

            #[inline]
            fn cos(self) -> Self {
                <$t>::cos(self)
            }

            #[inline]
            fn atan2(self, other: Self) -> Self {
                <$t>::atan2(self, other)
            }

            #[inline]
            fn asin(self) -> Self {
                <$t>::asin(self)
            }

            #[inline]
            fn abs(self) -> Self {
                <$t>::abs(self)
            }

            #[inline]
            fn max(self, other: Self) -> Self {
                <$t>::max(self, other)
            }

            #[inline]
            fn sin_cos(self) -> (Self, Self) {
                <$t>::sin_cos(self)
            }
        }
    };
}

impl_float_scalar!(f64);
impl_float_scalar!(f32);
