use crate::bounding_volume::OrientedBoundingBox;
use crate::math::{Point, Real, Vector};
use crate::points::PointSource;
use crate::utils::{point_cloud_basis_bounds, rotation_from_basis};

/// Computes the box enclosing all of `points` with the given orthonormal,
/// right-handed `axes`.
///
/// `points` must not be empty.
pub fn obb_from_basis<S>(points: &S, axes: &[Vector<Real>; 3]) -> OrientedBoundingBox
where
    S: PointSource + ?Sized,
{
    let (mins, maxs) = point_cloud_basis_bounds(axes, points);
    let half_extents = (maxs - mins) * 0.5;
    let local_center = na::center(&mins, &maxs);
    let center = axes[0] * local_center.x + axes[1] * local_center.y + axes[2] * local_center.z;

    OrientedBoundingBox::new(
        Point::from(center),
        half_extents,
        rotation_from_basis(axes),
    )
}
