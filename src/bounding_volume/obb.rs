//! Oriented Bounding Box.

use crate::bounding_volume::Aabb;
use crate::math::{Isometry, Matrix, Point, Real, Rotation, Translation, Vector};
use crate::utils::half_box_area;
use approx::{AbsDiffEq, RelativeEq};

/// An Oriented Bounding Box (OBB).
///
/// The box is the image of the axis-aligned box `[-half_extents, half_extents]`
/// by the rotation `rotation` followed by the translation to `center`. Its
/// `i`-th axis is thus the `i`-th column of the rotation matrix.
///
/// # Example
///
/// ```rust
/// # #[cfg(feature = "f32")] {
/// use dito3d::bounding_volume::OrientedBoundingBox;
/// use dito3d::math::{Point, Real, Rotation, Vector};
///
/// let obb = OrientedBoundingBox::new(
///     Point::new(1.0, 2.0, 3.0),
///     Vector::new(2.0, 1.0, 0.5),
///     Rotation::from_axis_angle(&Vector::z_axis(), std::f32::consts::FRAC_PI_2 as Real),
/// );
///
/// assert!(obb.contains_point(&Point::new(1.5, 3.9, 3.0)));
/// assert!(!obb.contains_point(&Point::new(3.9, 2.0, 3.0)));
/// # }
/// ```
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct OrientedBoundingBox {
    /// The center of the box.
    pub center: Point<Real>,
    /// The half-lengths of the box along each of its axes.
    ///
    /// All components are non-negative.
    pub half_extents: Vector<Real>,
    /// The orientation of the box.
    pub rotation: Rotation<Real>,
}

impl Default for OrientedBoundingBox {
    /// The empty box: centered at the origin, with zero half-extents and no rotation.
    fn default() -> Self {
        Self {
            center: Point::origin(),
            half_extents: Vector::zeros(),
            rotation: Rotation::identity(),
        }
    }
}

impl From<Aabb> for OrientedBoundingBox {
    fn from(aabb: Aabb) -> Self {
        Self::new(aabb.center(), aabb.half_extents(), Rotation::identity())
    }
}

impl OrientedBoundingBox {
    /// Creates a new oriented bounding box.
    #[inline]
    pub fn new(center: Point<Real>, half_extents: Vector<Real>, rotation: Rotation<Real>) -> Self {
        Self {
            center,
            half_extents,
            rotation,
        }
    }

    /// The rotation of this box, as a rotation matrix.
    ///
    /// The quaternion is renormalized first, so that a box whose rotation
    /// drifted after deserialization or repeated composition still yields an
    /// orthonormal matrix.
    #[inline]
    pub fn rotation_matrix(&self) -> Matrix<Real> {
        Rotation::new_normalize(*self.rotation.quaternion())
            .to_rotation_matrix()
            .into_inner()
    }

    /// The three unit axes of this box.
    #[inline]
    pub fn axes(&self) -> [Vector<Real>; 3] {
        let m = self.rotation_matrix();
        [
            m.column(0).into_owned(),
            m.column(1).into_owned(),
            m.column(2).into_owned(),
        ]
    }

    /// The half-axes of this box: the matrix whose `i`-th column is the `i`-th
    /// axis scaled by the `i`-th half-extent.
    #[inline]
    pub fn half_axes(&self) -> Matrix<Real> {
        self.rotation_matrix() * Matrix::from_diagonal(&self.half_extents)
    }

    /// The half-axes of this box, flattened in column-major order.
    pub fn half_axes_column_major(&self) -> [Real; 9] {
        let mut result = [0.0; 9];
        result.copy_from_slice(self.half_axes().as_slice());
        result
    }

    /// The rotation of this box as a quaternion laid out `[x, y, z, w]`.
    #[inline]
    pub fn quaternion_xyzw(&self) -> [Real; 4] {
        let q = self.rotation.quaternion();
        [q.i, q.j, q.k, q.w]
    }

    /// The position of this box: the rigid transform mapping the local
    /// axis-aligned box `[-half_extents, half_extents]` to this box.
    #[inline]
    pub fn position(&self) -> Isometry<Real> {
        Isometry::from_parts(Translation::from(self.center.coords), self.rotation)
    }

    /// The full extents of this box.
    #[inline]
    pub fn extents(&self) -> Vector<Real> {
        self.half_extents * 2.0
    }

    /// The half area of this box, `l0·l1 + l0·l2 + l1·l2` for the extents `l`.
    #[inline]
    pub fn half_area(&self) -> Real {
        half_box_area(&self.extents())
    }

    /// The volume of this box.
    #[inline]
    pub fn volume(&self) -> Real {
        self.extents().product()
    }

    /// The eight corners of this box.
    ///
    /// They are ordered like the vertices of [`Aabb::vertices`], taken in the
    /// local frame of the box.
    pub fn vertices(&self) -> [Point<Real>; 8] {
        let local = Aabb::from_half_extents(Point::origin(), self.half_extents);
        let pos = self.position();
        local.vertices().map(|pt| pos * pt)
    }

    /// Tests if the given point is inside of this box, boundary included.
    #[inline]
    pub fn contains_point(&self, pt: &Point<Real>) -> bool {
        let local = self.rotation.inverse_transform_vector(&(pt - self.center));
        local
            .iter()
            .zip(self.half_extents.iter())
            .all(|(l, h)| l.abs() <= *h)
    }

    /// Returns a copy of this box enlarged by `amount` along each of its axes.
    #[inline]
    pub fn loosened(&self, amount: Real) -> Self {
        assert!(amount >= 0.0, "The loosening margin must be positive.");
        Self {
            half_extents: self.half_extents.add_scalar(amount),
            ..*self
        }
    }

    /// The smallest axis-aligned box enclosing this box.
    #[inline]
    pub fn aabb(&self) -> Aabb {
        let ws_half_extents = self.rotation_matrix().abs() * self.half_extents;
        Aabb::from_half_extents(self.center, ws_half_extents)
    }

    /// This box transformed by `m`.
    #[inline]
    pub fn transform_by(&self, m: &Isometry<Real>) -> Self {
        Self {
            center: m * self.center,
            half_extents: self.half_extents,
            rotation: m.rotation * self.rotation,
        }
    }
}

impl AbsDiffEq for OrientedBoundingBox {
    type Epsilon = Real;

    fn default_epsilon() -> Self::Epsilon {
        Real::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.center.abs_diff_eq(&other.center, epsilon)
            && self.half_extents.abs_diff_eq(&other.half_extents, epsilon)
            && self.rotation.abs_diff_eq(&other.rotation, epsilon)
    }
}

impl RelativeEq for OrientedBoundingBox {
    fn default_max_relative() -> Self::Epsilon {
        Real::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.center.relative_eq(&other.center, epsilon, max_relative)
            && self
                .half_extents
                .relative_eq(&other.half_extents, epsilon, max_relative)
            && self
                .rotation
                .relative_eq(&other.rotation, epsilon, max_relative)
    }
}
