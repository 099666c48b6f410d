//! Angle conversion and fractional-part helpers.

use std::f64::consts::PI;

/// Converts an angle from degrees to radians.
///
/// # Examples
///
/// ```
/// # use math_utils::angle::*;
/// let radian = degree_to_radian(180.0);
/// assert!((radian - std::f64::consts::PI).abs() < 1e-12);
/// ```
#[inline]
pub fn degree_to_radian(degree: f64) -> f64 {
    degree * PI / 180.0
}

/// Converts an angle from radians to degrees.
///
/// # Examples
///
/// ```
/// # use math_utils::angle::*;
/// let degree = radian_to_degree(std::f64::consts::FRAC_PI_2);
/// assert!((degree - 90.0).abs() < 1e-12);
/// ```
#[inline]
pub fn radian_to_degree(radian: f64) -> f64 {
    radian * 180.0 / PI
}

/// Returns the fractional part of `v`, keeping its sign.
///
/// The integer part is removed by truncating toward zero, so `fraction(-3.75)` is `-0.75`.
/// Non-finite inputs follow IEEE 754 semantics (`NaN` and infinities yield `NaN`).
///
/// # Examples
///
/// ```
/// # use math_utils::angle::*;
/// assert_eq!(fraction(3.75), 0.75);
/// assert_eq!(fraction(-3.75), -0.75);
/// ```
#[inline]
pub fn fraction(v: f32) -> f32 {
    v - v.trunc()
}
