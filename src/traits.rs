use std::{fmt, ops};

mod sealed {
    pub trait Sealed {}

    impl Sealed for i32 {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// Types that have a "zero" value (an additive identity).
pub trait Zero {
    /// The *0* value of this type.
    const ZERO: Self;
}

/// Types that have a "one" value (a multiplicative identity).
pub trait One {
    /// The *1* value of this type.
    const ONE: Self;
}

/// The element types a [`Vector`][crate::Vector] can be instantiated with.
///
/// This trait is sealed and implemented for exactly [`i32`], [`f32`] and [`f64`]. Every vector
/// operation is bounded on it, so using any other element type is a compile-time error:
///
/// ```compile_fail
/// # use math_utils::*;
/// let v = vec2(1u8, 2u8);
/// let _ = v.dot(v);
/// ```
pub trait Element:
    sealed::Sealed
    + Zero
    + One
    + ops::Neg<Output = Self>
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + ops::AddAssign
    + ops::SubAssign
    + ops::MulAssign
    + ops::DivAssign
    + PartialEq
    + Copy
    + Default
    + fmt::Debug
    + 'static
{
    /// The "not-a-number" sentinel returned by mathematically undefined operations.
    ///
    /// For [`f32`] and [`f64`] this is the IEEE 754 quiet NaN. [`i32`] has no such value, so its
    /// sentinel is `0`.
    const NAN: Self;

    /// Returns a `'static` reference to [`Element::NAN`].
    fn nan_ref() -> &'static Self;

    /// Converts `self` to an [`f64`].
    fn to_f64(self) -> f64;

    /// Converts an [`f64`] to this type, truncating toward zero for integers.
    fn from_f64(value: f64) -> Self;

    /// Divides `self` by a nonzero `rhs`.
    ///
    /// Quotients that cannot be represented (`i32::MIN / -1`) yield [`Element::NAN`] instead of
    /// panicking.
    fn div_or_nan(self, rhs: Self) -> Self;

    /// Returns whether `self` equals [`Zero::ZERO`].
    #[inline]
    fn is_zero(self) -> bool {
        self == Self::ZERO
    }
}

impl Zero for i32 {
    const ZERO: Self = 0;
}
impl Zero for f32 {
    const ZERO: Self = 0.0;
}
impl Zero for f64 {
    const ZERO: Self = 0.0;
}

impl One for i32 {
    const ONE: Self = 1;
}
impl One for f32 {
    const ONE: Self = 1.0;
}
impl One for f64 {
    const ONE: Self = 1.0;
}

impl Element for i32 {
    const NAN: Self = 0;

    fn nan_ref() -> &'static Self {
        &0
    }

    #[inline]
    fn to_f64(self) -> f64 {
        self.into()
    }

    #[inline]
    fn from_f64(value: f64) -> Self {
        // `as` saturates and maps NaN to 0.
        value as i32
    }

    #[inline]
    fn div_or_nan(self, rhs: Self) -> Self {
        self.checked_div(rhs).unwrap_or(Self::NAN)
    }
}

impl Element for f32 {
    const NAN: Self = f32::NAN;

    fn nan_ref() -> &'static Self {
        &f32::NAN
    }

    #[inline]
    fn to_f64(self) -> f64 {
        self.into()
    }

    #[inline]
    fn from_f64(value: f64) -> Self {
        value as f32
    }

    #[inline]
    fn div_or_nan(self, rhs: Self) -> Self {
        self / rhs
    }
}

impl Element for f64 {
    const NAN: Self = f64::NAN;

    fn nan_ref() -> &'static Self {
        &f64::NAN
    }

    #[inline]
    fn to_f64(self) -> f64 {
        self
    }

    #[inline]
    fn from_f64(value: f64) -> Self {
        value
    }

    #[inline]
    fn div_or_nan(self, rhs: Self) -> Self {
        self / rhs
    }
}
