use std::{array, fmt, mem};

use crate::{Axis, Element, VectorError};

mod ops;
mod view;

/// A 2-dimensional vector.
pub type Vector2<T> = Vector<T, 2>;
/// A 2-dimensional vector with [`i32`] elements.
pub type Vector2i = Vector2<i32>;
/// A 2-dimensional vector with [`f32`] elements.
pub type Vector2f = Vector2<f32>;
/// A 2-dimensional vector with [`f64`] elements.
pub type Vector2d = Vector2<f64>;
/// A 3-dimensional vector.
pub type Vector3<T> = Vector<T, 3>;
/// A 3-dimensional vector with [`i32`] elements.
pub type Vector3i = Vector3<i32>;
/// A 3-dimensional vector with [`f32`] elements.
pub type Vector3f = Vector3<f32>;
/// A 3-dimensional vector with [`f64`] elements.
pub type Vector3d = Vector3<f64>;
/// A 4-dimensional vector.
pub type Vector4<T> = Vector<T, 4>;
/// A 4-dimensional vector with [`i32`] elements.
pub type Vector4i = Vector4<i32>;
/// A 4-dimensional vector with [`f32`] elements.
pub type Vector4f = Vector4<f32>;
/// A 4-dimensional vector with [`f64`] elements.
pub type Vector4d = Vector4<f64>;

/// An `N`-element vector storing elements of type `T`.
///
/// `T` is restricted to the [`Element`] types [`i32`], [`f32`] and [`f64`].
///
/// # Construction
///
/// - The freestanding [`vec2`], [`vec3`] and [`vec4`] functions directly create vectors from
///   provided values.
/// - [`Vector::splat`] creates a vector by copying the given value into each element.
/// - [`Vector::from_partial`] copies leading elements from a slice and zero-fills the rest.
/// - [`Vector::from_fn`] creates a vector by invoking a closure with the index of each element.
/// - Vectors can be created from arrays using their [`From`] implementation.
/// - Smaller vectors convert into larger ones (zero-filling) and larger ones into smaller ones
///   (truncating) via [`From`], or via [`Vector::resize`].
/// - The [`Default`] implementation and [`Vector::ZERO`] produce all-zeroes.
/// - [`Vector::ONE`] contains all-ones, and `Vector::X`, `Vector::Y`, `Vector::Z` and `Vector::W`
///   are unit vectors pointing along one axis.
///
/// # Element Access
///
/// - Elements can be accessed as fields `x`, `y`, `z`, or `w`. Reading a field copies the value,
///   `&mut v.x` borrows it mutably and `&v.x` borrows it immutably.
/// - The [`Index`] impl returns a "not-a-number" sentinel ([`Element::NAN`]) for out-of-range
///   indices instead of panicking. [`Vector::get`] and [`Vector::get_mut`] report them as a
///   [`VectorError`] instead.
/// - [`Vector::as_array`], [`Vector::as_slice`], and [`Vector::into_array`] expose the underlying
///   elements.
///
/// # Arithmetic
///
/// Vectors support element-wise `+` and `-`, negation, and scaling by a scalar with `*` and `/`
/// (scalars can appear on either side of `*`). `*` between two vectors is the [dot
/// product][Vector::dot], `^` is the [cross product][Vector::cross].
///
/// Dividing by zero yields a vector filled with [`Element::NAN`] rather than infinities or a
/// panic.
///
/// [`Index`]: std::ops::Index
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Vector<T: Element, const N: usize>([T; N]);

#[cfg(feature = "bytemuck")]
unsafe impl<T: Element + bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Vector<T, N> {}
#[cfg(feature = "bytemuck")]
unsafe impl<T: Element + bytemuck::Pod, const N: usize> bytemuck::Pod for Vector<T, N> {}

impl<T: Element, const N: usize> Vector<T, N> {
    /// A vector with each element initialized to 0.
    ///
    /// This uses [`T::ZERO`][crate::Zero::ZERO] as the value for all elements.
    pub const ZERO: Self = Self([T::ZERO; N]);

    /// A vector with each element initialized to 1.
    pub const ONE: Self = Self([T::ONE; N]);
}

impl<T: Element> Vector<T, 2> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE]);
}

impl<T: Element> Vector<T, 3> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE]);
}

impl<T: Element> Vector<T, 4> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the W direction.
    pub const W: Self = Self([T::ZERO, T::ZERO, T::ZERO, T::ONE]);
}

impl<T: Element, const N: usize> Vector<T, N> {
    /// Creates a vector with each element initialized to `elem`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use math_utils::*;
    /// let v = Vector::splat(2);
    /// assert_eq!(v, vec3(2, 2, 2));
    /// ```
    #[inline]
    pub fn splat(elem: T) -> Self {
        Self([elem; N])
    }

    /// Creates a vector from the leading elements of `values`.
    ///
    /// Elements missing from `values` are set to zero, surplus values are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// # use math_utils::*;
    /// assert_eq!(Vector4f::from_partial(&[1.0, 2.0]), vec4(1.0, 2.0, 0.0, 0.0));
    /// assert_eq!(Vector2i::from_partial(&[7, 8, 9]), vec2(7, 8));
    /// ```
    pub fn from_partial(values: &[T]) -> Self {
        Self::from_fn(|i| values.get(i).copied().unwrap_or(T::ZERO))
    }

    /// Creates a vector where each element is initialized by invoking a closure with its index.
    ///
    /// Analogous to [`array::from_fn`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use math_utils::*;
    /// let v = Vector::from_fn(|i| i as i32 + 100);
    /// assert_eq!(v, vec3(100, 101, 102));
    /// ```
    pub fn from_fn<F>(cb: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self(array::from_fn(cb))
    }

    /// Applies a closure to each element, returning a new vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use math_utils::*;
    /// let v = vec3(1i32, 2, 3).map(|i| i as f32 * 0.5);
    /// assert_eq!(v, vec3(0.5, 1.0, 1.5));
    /// ```
    pub fn map<F, U>(self, f: F) -> Vector<U, N>
    where
        F: FnMut(T) -> U,
        U: Element,
    {
        Vector(self.0.map(f))
    }

    /// Combines the elements of `self` and `other` pairwise with a closure.
    pub(crate) fn zip_with<F>(self, other: Self, mut f: F) -> Self
    where
        F: FnMut(T, T) -> T,
    {
        Self::from_fn(|i| f(self.0[i], other.0[i]))
    }

    /// Returns a reference to the underlying elements as an array of length `N`.
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as an array of length `N`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use math_utils::*;
    /// let mut v = vec3(1, 2, 3);
    /// v.as_mut_array()[1] = 777;
    /// assert_eq!(v, [1, 777, 3]);
    /// ```
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.0
    }

    /// Returns a reference to the underlying elements as a slice.
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as a slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    /// Converts this [`Vector`] into an `N`-element array.
    ///
    /// # Examples
    ///
    /// ```
    /// # use math_utils::*;
    /// assert_eq!(vec3(1, 2, 3).into_array(), [1, 2, 3]);
    /// ```
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    /// Returns the element at `index`, or an error if `index` is not less than `N`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use math_utils::*;
    /// let v = vec2(1, 2);
    /// assert_eq!(v.get(1), Ok(2));
    /// assert_eq!(v.get(2), Err(VectorError::IndexOutOfRange { index: 2, len: 2 }));
    /// ```
    pub fn get(&self, index: usize) -> Result<T, VectorError> {
        self.0
            .get(index)
            .copied()
            .ok_or(VectorError::IndexOutOfRange { index, len: N })
    }

    /// Returns a mutable reference to the element at `index`, or an error if `index` is not less
    /// than `N`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use math_utils::*;
    /// let mut v = vec2(1, 2);
    /// *v.get_mut(0)? = 5;
    /// assert_eq!(v, vec2(5, 2));
    /// assert!(v.get_mut(3).is_err());
    /// # Ok::<(), VectorError>(())
    /// ```
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, VectorError> {
        self.0
            .get_mut(index)
            .ok_or(VectorError::IndexOutOfRange { index, len: N })
    }

    /// Returns the element along `axis`.
    ///
    /// Fails for [`Axis::Z`] on 2-dimensional vectors.
    pub fn component(&self, axis: Axis) -> Result<T, VectorError> {
        self.get(axis.index())
    }

    /// Returns the current value and resets `self` to [`Vector::ZERO`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use math_utils::*;
    /// let mut v = vec3(1.0, 2.0, 3.0);
    /// let moved = v.take();
    /// assert_eq!(moved, vec3(1.0, 2.0, 3.0));
    /// assert_eq!(v, Vector3f::ZERO);
    /// ```
    #[inline]
    pub fn take(&mut self) -> Self {
        mem::replace(self, Self::ZERO)
    }

    /// Sets every element to `value`.
    #[inline]
    pub fn fill(&mut self, value: T) {
        self.0.fill(value);
    }

    /// Resets every element to zero.
    #[inline]
    pub fn set_zero(&mut self) {
        *self = Self::ZERO;
    }

    /// Overwrites `self` with the leading elements of `values`, zero-filling the rest.
    ///
    /// This is the in-place equivalent of [`Vector::from_partial`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use math_utils::*;
    /// let mut v = vec3(9, 9, 9);
    /// v.set(&[1, 2]);
    /// assert_eq!(v, vec3(1, 2, 0));
    /// ```
    pub fn set(&mut self, values: &[T]) {
        *self = Self::from_partial(values);
    }

    /// Converts `self` into a vector with `M` elements.
    ///
    /// Elements beyond `N` are zero-filled, elements beyond `M` are dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// # use math_utils::*;
    /// assert_eq!(vec2(1, 2).resize::<4>(), vec4(1, 2, 0, 0));
    /// assert_eq!(vec4(1, 2, 3, 4).resize::<3>(), vec3(1, 2, 3));
    /// ```
    pub fn resize<const M: usize>(self) -> Vector<T, M> {
        Vector::from_fn(|i| if i < N { self.0[i] } else { T::ZERO })
    }

    /// Computes the dot product between `self` and `other`.
    ///
    /// The same operation is available as the `*` operator between two vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// # use math_utils::*;
    /// let a = vec3(1, 3, -5);
    /// let b = vec3(4, -2, -1);
    /// assert_eq!(a.dot(b), 3);
    /// assert_eq!(a * b, 3);
    /// ```
    pub fn dot(self, other: Self) -> T {
        self.into_array()
            .into_iter()
            .zip(other.into_array())
            .fold(T::ZERO, |acc, (a, b)| acc + a * b)
    }

    /// Returns the squared length of this [`Vector`].
    ///
    /// Computed in `T`, like [`Vector::dot`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use math_utils::*;
    /// assert_eq!(vec2(4, 0).length_squared(), 16);
    /// ```
    pub fn length_squared(&self) -> T {
        self.dot(*self)
    }

    /// Returns the length of this [`Vector`].
    ///
    /// The result is an [`f64`] for all element types. The computation happens in `f64` too, so
    /// integer vectors get a meaningful magnitude even when their squared length would overflow
    /// `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use math_utils::*;
    /// assert_eq!(vec2(3, 4).length(), 5.0);
    /// assert_eq!(Vector3f::Z.length(), 1.0);
    /// ```
    pub fn length(&self) -> f64 {
        self.0
            .iter()
            .map(|elem| {
                let elem = elem.to_f64();
                elem * elem
            })
            .sum::<f64>()
            .sqrt()
    }

    /// Returns the squared distance between `self` and `other`.
    ///
    /// Computed in `T`, so large integer vectors can overflow. Use [`Vector::distance`] for a
    /// result that cannot.
    pub fn distance_squared(&self, other: &Self) -> T {
        (*self - *other).length_squared()
    }

    /// Returns the distance between `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use math_utils::*;
    /// assert_eq!(vec2(1.0, 1.0).distance(&vec2(4.0, 5.0)), 5.0);
    /// ```
    pub fn distance(&self, other: &Self) -> f64 {
        self.0
            .iter()
            .zip(&other.0)
            .map(|(a, b)| {
                let d = a.to_f64() - b.to_f64();
                d * d
            })
            .sum::<f64>()
            .sqrt()
    }

    /// Divides this vector by its length, resulting in a unit vector.
    ///
    /// A vector of length zero normalizes to [`Vector::ZERO`]. Integer vectors have each element
    /// truncated toward zero after the division.
    ///
    /// # Examples
    ///
    /// ```
    /// # use math_utils::*;
    /// let z = vec3(0.0, 0.0, 4.0).normalize();
    /// assert_eq!(z, vec3(0.0, 0.0, 1.0));
    /// assert_eq!(Vector3f::ZERO.normalize(), Vector3f::ZERO);
    /// ```
    pub fn normalize(self) -> Self {
        let length = self.length();
        if length > 0.0 {
            self.map(|elem| T::from_f64(elem.to_f64() / length))
        } else {
            log::trace!("normalizing degenerate vector {:?}", self);
            Self::ZERO
        }
    }

    /// Normalizes `self` in place.
    ///
    /// See [`Vector::normalize`].
    pub fn normalize_mut(&mut self) {
        *self = self.normalize();
    }
}

impl<T: Element> Vector<T, 2> {
    /// Appends another value to the vector, yielding a vector with 3 dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// # use math_utils::*;
    /// let v = vec2(-1.0, 2.0).extend(5.0);
    /// assert_eq!(v, vec3(-1.0, 2.0, 5.0));
    /// ```
    pub fn extend(self, value: T) -> Vector<T, 3> {
        let [x, y] = self.into_array();
        vec3(x, y, value)
    }
}

impl<T: Element> Vector<T, 3> {
    /// Returns the unit vector pointing along `axis`.
    pub fn axis(axis: Axis) -> Self {
        match axis {
            Axis::X => Self::X,
            Axis::Y => Self::Y,
            Axis::Z => Self::Z,
        }
    }

    /// Removes the last element of this vector, yielding a vector with 2 elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use math_utils::*;
    /// let v = vec3(-1.0, 2.0, 3.5).truncate();
    /// assert_eq!(v, vec2(-1.0, 2.0));
    /// ```
    pub fn truncate(self) -> Vector<T, 2> {
        let [x, y, ..] = self.into_array();
        vec2(x, y)
    }

    /// Appends another value to the vector, yielding a vector with 4 dimensions.
    pub fn extend(self, value: T) -> Vector<T, 4> {
        let [x, y, z] = self.into_array();
        vec4(x, y, z, value)
    }

    /// Computes the cross product of `self` and `other`.
    ///
    /// The result is a vector that is perpendicular to both `self` and `other`, following the
    /// right-hand rule. Swapping the arguments inverts its direction. The same operation is
    /// available as the `^` operator.
    ///
    /// # Examples
    ///
    /// ```
    /// # use math_utils::*;
    /// let x = Vector3f::X;
    /// let y = Vector3f::Y;
    /// let z = Vector3f::Z;
    /// assert_eq!(x.cross(y), z);
    /// assert_eq!(y.cross(x), -z);
    /// assert_eq!(x ^ y, z);
    /// ```
    pub fn cross(self, other: Self) -> Self {
        let [a1, a2, a3] = self.into_array();
        let [b1, b2, b3] = other.into_array();

        #[rustfmt::skip]
        let cross = vec3(
            a2 * b3 - a3 * b2,
            a3 * b1 - a1 * b3,
            a1 * b2 - a2 * b1,
        );
        cross
    }

    /// Replaces `self` with the cross product of `self` and `other`.
    pub fn cross_assign(&mut self, other: Self) {
        *self = self.cross(other);
    }
}

impl<T: Element> Vector<T, 4> {
    /// Returns the unit vector pointing along `axis`.
    pub fn axis(axis: Axis) -> Self {
        match axis {
            Axis::X => Self::X,
            Axis::Y => Self::Y,
            Axis::Z => Self::Z,
        }
    }

    /// Removes the last element of this vector, yielding a vector with 3 elements.
    pub fn truncate(self) -> Vector<T, 3> {
        let [x, y, z, ..] = self.into_array();
        vec3(x, y, z)
    }

    /// Computes the cross product of the X, Y and Z components of `self` and `other`.
    ///
    /// The W component of the result is always zero. The same operation is available as the `^`
    /// operator.
    ///
    /// # Examples
    ///
    /// ```
    /// # use math_utils::*;
    /// let a = vec4(1.0, 0.0, 0.0, 5.0);
    /// let b = vec4(0.0, 1.0, 0.0, 7.0);
    /// assert_eq!(a.cross(b), Vector4f::Z);
    /// ```
    pub fn cross(self, other: Self) -> Self {
        self.truncate().cross(other.truncate()).extend(T::ZERO)
    }

    /// Replaces `self` with the cross product of `self` and `other`.
    pub fn cross_assign(&mut self, other: Self) {
        *self = self.cross(other);
    }

    /// Performs the homogeneous divide in place, dividing every component by W.
    ///
    /// If W is zero the vector is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// # use math_utils::*;
    /// let mut v = vec4(2.0, 4.0, 6.0, 2.0);
    /// v.homogenize();
    /// assert_eq!(v, vec4(1.0, 2.0, 3.0, 1.0));
    ///
    /// let mut v = vec4(1.0, 2.0, 3.0, 0.0);
    /// v.homogenize();
    /// assert_eq!(v, vec4(1.0, 2.0, 3.0, 0.0));
    /// ```
    pub fn homogenize(&mut self) {
        let w = self.w;
        if w.is_zero() {
            log::trace!("skipping homogeneous divide of {:?} (w = 0)", self);
            return;
        }
        *self /= w;
    }

    /// Returns the result of [`Vector::homogenize`] without modifying `self`.
    pub fn homogenized(mut self) -> Self {
        self.homogenize();
        self
    }
}

impl<T: Element, const N: usize> Default for Vector<T, N> {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl<T: Element, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(value: [T; N]) -> Self {
        Self(value)
    }
}

impl<T: Element, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(value: Vector<T, N>) -> Self {
        value.0
    }
}

/// Zero-fills Z.
impl<T: Element> From<Vector<T, 2>> for Vector<T, 3> {
    #[inline]
    fn from(value: Vector<T, 2>) -> Self {
        value.resize()
    }
}

/// Zero-fills Z and W.
impl<T: Element> From<Vector<T, 2>> for Vector<T, 4> {
    #[inline]
    fn from(value: Vector<T, 2>) -> Self {
        value.resize()
    }
}

/// Zero-fills W.
impl<T: Element> From<Vector<T, 3>> for Vector<T, 4> {
    #[inline]
    fn from(value: Vector<T, 3>) -> Self {
        value.resize()
    }
}

/// Drops Z.
impl<T: Element> From<Vector<T, 3>> for Vector<T, 2> {
    #[inline]
    fn from(value: Vector<T, 3>) -> Self {
        value.resize()
    }
}

/// Drops Z and W.
impl<T: Element> From<Vector<T, 4>> for Vector<T, 2> {
    #[inline]
    fn from(value: Vector<T, 4>) -> Self {
        value.resize()
    }
}

/// Drops W.
impl<T: Element> From<Vector<T, 4>> for Vector<T, 3> {
    #[inline]
    fn from(value: Vector<T, 4>) -> Self {
        value.resize()
    }
}

impl<T: Element, const N: usize> fmt::Debug for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(elem);
        }
        tup.finish()
    }
}

impl<T, const N: usize> fmt::Display for Vector<T, N>
where
    T: Element + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct DebugViaDisplay<D>(D);
        impl<D: fmt::Display> fmt::Debug for DebugViaDisplay<D> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(&DebugViaDisplay(elem));
        }
        tup.finish()
    }
}

impl<T: Element, const N: usize> AsRef<[T]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T: Element, const N: usize> AsRef<[T; N]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T; N] {
        &self.0
    }
}

impl<T: Element, const N: usize> AsMut<[T]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.0
    }
}

impl<T: Element, const N: usize> AsMut<[T; N]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T; N] {
        &mut self.0
    }
}

/// Constructs a [`Vector2`] from its two elements.
#[inline]
pub const fn vec2<T: Element>(x: T, y: T) -> Vector2<T> {
    Vector([x, y])
}

/// Constructs a [`Vector3`] from its three elements.
#[inline]
pub const fn vec3<T: Element>(x: T, y: T, z: T) -> Vector3<T> {
    Vector([x, y, z])
}

/// Constructs a [`Vector4`] from its four elements.
#[inline]
pub const fn vec4<T: Element>(x: T, y: T, z: T, w: T) -> Vector4<T> {
    Vector([x, y, z, w])
}
