/// One of the three coordinate axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Returns the component index this axis corresponds to (`X = 0`, `Y = 1`, `Z = 2`).
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

/// A plane spanned by two coordinate axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AxisPlane {
    /// The plane spanned by the X and Y axes.
    XOY,
    /// The plane spanned by the Y and Z axes.
    YOZ,
    /// The plane spanned by the X and Z axes.
    XOZ,
}

impl AxisPlane {
    /// Returns the two axes spanning this plane.
    pub const fn axes(self) -> [Axis; 2] {
        match self {
            AxisPlane::XOY => [Axis::X, Axis::Y],
            AxisPlane::YOZ => [Axis::Y, Axis::Z],
            AxisPlane::XOZ => [Axis::X, Axis::Z],
        }
    }

    /// Returns the axis perpendicular to this plane.
    ///
    /// # Examples
    ///
    /// ```
    /// # use math_utils::*;
    /// assert_eq!(AxisPlane::XOY.normal(), Axis::Z);
    /// assert_eq!(Vector3f::axis(AxisPlane::YOZ.normal()), Vector3f::X);
    /// ```
    pub const fn normal(self) -> Axis {
        match self {
            AxisPlane::XOY => Axis::Z,
            AxisPlane::YOZ => Axis::X,
            AxisPlane::XOZ => Axis::Y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normal_is_not_spanning() {
        for plane in [AxisPlane::XOY, AxisPlane::YOZ, AxisPlane::XOZ] {
            let normal = plane.normal();
            assert!(!plane.axes().contains(&normal), "{plane:?}");
        }
    }

    #[test]
    fn indices() {
        assert_eq!(Axis::X.index(), 0);
        assert_eq!(Axis::Y.index(), 1);
        assert_eq!(Axis::Z.index(), 2);
    }
}
