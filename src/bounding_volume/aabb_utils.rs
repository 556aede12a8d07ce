use crate::bounding_volume::Aabb;
use crate::math::{Point, Real};
use crate::points::PointSource;

/// Computes the AABB of a set of points.
///
/// Returns [`Aabb::new_invalid`] if `pts` yields no point.
pub fn local_point_cloud_aabb<I>(pts: I) -> Aabb
where
    I: IntoIterator<Item = Point<Real>>,
{
    let mut it = pts.into_iter();

    let Some(p0) = it.next() else {
        return Aabb::new_invalid();
    };
    let mut min = p0;
    let mut max = p0;

    for pt in it {
        min = min.inf(&pt);
        max = max.sup(&pt);
    }

    Aabb::new(min, max)
}

/// Computes the AABB of all the points of a [`PointSource`].
pub fn point_source_aabb<S>(points: &S) -> Aabb
where
    S: PointSource + ?Sized,
{
    local_point_cloud_aabb(points.iter_points())
}
