//! Implementations of `std::ops`.

use std::ops::{
    Add, AddAssign, BitXor, BitXorAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg,
    Sub, SubAssign,
};

use crate::Element;

use super::Vector;

/// Out-of-range indices yield a reference to [`Element::NAN`].
impl<T: Element, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        match self.0.get(index) {
            Some(elem) => elem,
            None => {
                log::error!(
                    "index {} is out of range for a vector with {} components",
                    index,
                    N
                );
                T::nan_ref()
            }
        }
    }
}

/// # Panics
///
/// Panics if `index` is out of range. Use [`Vector::get_mut`] for a non-panicking alternative.
impl<T: Element, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

impl<T: Element, const N: usize> PartialEq for Vector<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<const N: usize> Eq for Vector<i32, N> {}

impl<T: Element, const N: usize> PartialEq<[T; N]> for Vector<T, N> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.0.eq(other)
    }
}

impl<T: Element, const N: usize> PartialEq<Vector<T, N>> for [T; N] {
    fn eq(&self, other: &Vector<T, N>) -> bool {
        *self == other.0
    }
}

#[cfg(feature = "approx")]
impl<T, const N: usize> approx::AbsDiffEq for Vector<T, N>
where
    T: Element + approx::AbsDiffEq,
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.0
            .iter()
            .zip(&other.0)
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

#[cfg(feature = "approx")]
impl<T, const N: usize> approx::RelativeEq for Vector<T, N>
where
    T: Element + approx::RelativeEq,
    T::Epsilon: Copy,
{
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.0
            .iter()
            .zip(&other.0)
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

#[cfg(feature = "approx")]
impl<T, const N: usize> approx::UlpsEq for Vector<T, N>
where
    T: Element + approx::UlpsEq,
    T::Epsilon: Copy,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.0
            .iter()
            .zip(&other.0)
            .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
    }
}

/// Element-wise negation.
impl<T: Element, const N: usize> Neg for Vector<T, N> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.map(T::neg)
    }
}

/// Element-wise addition.
impl<T: Element, const N: usize> Add for Vector<T, N> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.zip_with(rhs, |l, r| l + r)
    }
}

/// Element-wise addition.
impl<T: Element, const N: usize> AddAssign for Vector<T, N> {
    fn add_assign(&mut self, rhs: Self) {
        self.as_mut_slice()
            .iter_mut()
            .zip(rhs.into_array())
            .for_each(|(lhs, rhs)| *lhs += rhs);
    }
}

/// Element-wise subtraction.
impl<T: Element, const N: usize> Sub for Vector<T, N> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.zip_with(rhs, |l, r| l - r)
    }
}

/// Element-wise subtraction.
impl<T: Element, const N: usize> SubAssign for Vector<T, N> {
    fn sub_assign(&mut self, rhs: Self) {
        self.as_mut_slice()
            .iter_mut()
            .zip(rhs.into_array())
            .for_each(|(lhs, rhs)| *lhs -= rhs);
    }
}

/// Dot product.
impl<T: Element, const N: usize> Mul for Vector<T, N> {
    type Output = T;

    fn mul(self, rhs: Self) -> Self::Output {
        self.dot(rhs)
    }
}

/// Vector-Scalar multiplication (scaling).
impl<T: Element, const N: usize> Mul<T> for Vector<T, N> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self::Output {
        self.map(|elem| elem * rhs)
    }
}

/// Vector-Scalar multiplication (scaling).
impl<T: Element, const N: usize> MulAssign<T> for Vector<T, N> {
    fn mul_assign(&mut self, rhs: T) {
        self.as_mut_slice().iter_mut().for_each(|lhs| *lhs *= rhs);
    }
}

macro_rules! scalar_lhs_mul {
    ($($types:ty),+) => {
        $(
            /// Scalar-Vector multiplication (scaling).
            impl<const N: usize> Mul<Vector<$types, N>> for $types {
                type Output = Vector<$types, N>;

                fn mul(self, rhs: Vector<$types, N>) -> Self::Output {
                    rhs * self
                }
            }
        )+
    };
}
scalar_lhs_mul!(i32, f32, f64);

/// Vector-Scalar division (scaling).
///
/// Dividing by zero yields a vector filled with [`Element::NAN`].
impl<T: Element, const N: usize> Div<T> for Vector<T, N> {
    type Output = Self;

    fn div(self, rhs: T) -> Self::Output {
        if rhs.is_zero() {
            log::warn!("division of {:?} by zero", self);
            return Self::splat(T::NAN);
        }
        self.map(|elem| elem.div_or_nan(rhs))
    }
}

/// Vector-Scalar division (scaling).
///
/// Dividing by zero fills `self` with [`Element::NAN`].
impl<T: Element, const N: usize> DivAssign<T> for Vector<T, N> {
    fn div_assign(&mut self, rhs: T) {
        if rhs.is_zero() {
            log::warn!("division of {:?} by zero", self);
            self.fill(T::NAN);
            return;
        }
        self.as_mut_slice()
            .iter_mut()
            .for_each(|lhs| *lhs = lhs.div_or_nan(rhs));
    }
}

/// Cross product.
impl<T: Element> BitXor for Vector<T, 3> {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self::Output {
        self.cross(rhs)
    }
}

/// Cross product.
impl<T: Element> BitXorAssign for Vector<T, 3> {
    fn bitxor_assign(&mut self, rhs: Self) {
        self.cross_assign(rhs);
    }
}

/// Cross product of the X, Y and Z components. W of the result is zero.
impl<T: Element> BitXor for Vector<T, 4> {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self::Output {
        self.cross(rhs)
    }
}

/// Cross product of the X, Y and Z components. W of the result is zero.
impl<T: Element> BitXorAssign for Vector<T, 4> {
    fn bitxor_assign(&mut self, rhs: Self) {
        self.cross_assign(rhs);
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn arithmetic() {
        let a = vec3(1i32, 2, 3);
        let b = vec3(10i32, 20, 30);
        assert_eq!(a + b, vec3(11, 22, 33));
        assert_eq!(b - a, vec3(9, 18, 27));
        assert_eq!(-a, vec3(-1, -2, -3));
        assert_eq!(a * 2, vec3(2, 4, 6));
        assert_eq!(2 * a, vec3(2, 4, 6));
        assert_eq!(b / 10, a);
        assert_eq!(0.5f64 * vec2(4.0, 8.0), vec2(2.0, 4.0));
        assert_eq!(vec4(1.0f32, 2.0, 3.0, 4.0) * 0.0, Vector4f::ZERO);
    }

    #[test]
    fn compound() {
        let mut v = vec2(1.0, 2.0);
        v += vec2(1.0, 1.0);
        assert_eq!(v, vec2(2.0, 3.0));
        v -= vec2(0.5, 0.5);
        assert_eq!(v, vec2(1.5, 2.5));
        v *= 2.0;
        assert_eq!(v, vec2(3.0, 5.0));
        v /= 2.0;
        assert_eq!(v, vec2(1.5, 2.5));

        let mut v = vec3(1, 0, 0);
        v ^= vec3(0, 1, 0);
        assert_eq!(v, Vector3i::Z);

        let mut v = vec4(0.0, 1.0, 0.0, 3.0);
        v ^= Vector4d::Z;
        assert_eq!(v, Vector4d::X);
    }

    #[test]
    fn divide_by_zero() {
        let v = vec3(1.0f32, 2.0, 3.0) / 0.0;
        assert!(v.as_array().iter().all(|e| e.is_nan()));

        let mut v = vec2(1.0f64, 2.0);
        v /= 0.0;
        assert!(v.as_array().iter().all(|e| e.is_nan()));

        let mut v = vec4(1.0f32, 2.0, 3.0, 4.0);
        v /= -0.0;
        assert!(v.as_array().iter().all(|e| e.is_nan()));

        // Integers have no NaN; the sentinel is 0 and nothing panics.
        assert_eq!(vec2(1, 2) / 0, Vector2i::ZERO);
        let mut v = vec3(4, 5, 6);
        v /= 0;
        assert_eq!(v, Vector3i::ZERO);
    }

    #[test]
    fn divide_overflow() {
        assert_eq!(vec2(i32::MIN, 1) / -1, vec2(0, -1));
        assert_eq!(vec2(i32::MIN, 6) / 2, vec2(i32::MIN / 2, 3));

        let mut v = vec3(i32::MIN, i32::MAX, -4);
        v /= -1;
        assert_eq!(v, vec3(0, -i32::MAX, 4));
    }

    #[test]
    fn index() {
        let v = vec2(1i32, 2);
        assert_eq!(v[0], 1);
        assert_eq!(v[1], 2);
        assert_eq!(v[2], 0);

        let v = vec3(1.0f64, 2.0, 3.0);
        assert!(v[3].is_nan());
        assert!(v[usize::MAX].is_nan());

        let mut v = vec4(1, 2, 3, 4);
        v[3] = 9;
        assert_eq!(v, vec4(1, 2, 3, 9));
    }

    #[test]
    #[should_panic]
    fn index_mut_out_of_range() {
        let mut v = vec2(1, 2);
        v[2] = 3;
    }

    #[test]
    fn equality() {
        assert_eq!(vec3(1, 2, 3), [1, 2, 3]);
        assert_eq!([1, 2, 3], vec3(1, 2, 3));
        assert_ne!(vec3(1, 2, 3), vec3(1, 2, 4));
        assert_ne!(vec2(f32::NAN, 0.0), vec2(f32::NAN, 0.0));
        assert_eq!(vec2(0.0, -0.0), Vector2f::ZERO);
    }

    #[test]
    fn cross_operator() {
        assert_eq!(Vector3f::X ^ Vector3f::Y, Vector3f::Z);
        assert_eq!(Vector3f::Y ^ Vector3f::X, -Vector3f::Z);
        assert_eq!(vec4(1, 0, 0, 1) ^ vec4(0, 1, 0, 1), Vector4i::Z);
    }
}
