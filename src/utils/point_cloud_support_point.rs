use crate::math::{Point, Real, Vector};
use crate::points::PointSource;

/// The extreme projections of a point cloud on a direction, and the points achieving them.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SupportRange {
    /// The smallest projection.
    pub min: Real,
    /// The largest projection.
    pub max: Real,
    /// Index of the first point achieving `min`.
    pub min_id: usize,
    /// Index of the first point achieving `max`.
    pub max_id: usize,
}

/// Computes the extreme projections of `points` on `dir` and the indices of
/// the points achieving them.
///
/// The first point reaching an extremum is retained. Panics if `points` is empty.
pub fn point_cloud_support_range<S>(dir: &Vector<Real>, points: &S) -> SupportRange
where
    S: PointSource + ?Sized,
{
    let first = points.point(0).coords.dot(dir);
    let mut range = SupportRange {
        min: first,
        max: first,
        min_id: 0,
        max_id: 0,
    };

    for i in 1..points.len() {
        let proj = points.point(i).coords.dot(dir);

        if proj < range.min {
            range.min = proj;
            range.min_id = i;
        }
        if proj > range.max {
            range.max = proj;
            range.max_id = i;
        }
    }

    range
}

/// Computes the extreme projections `(min, max)` of `points` on `dir`.
///
/// Returns `(+∞, -∞)` if `points` is empty.
#[inline]
pub fn point_cloud_projection_range<S>(dir: &Vector<Real>, points: &S) -> (Real, Real)
where
    S: PointSource + ?Sized,
{
    points
        .iter_points()
        .fold((Real::INFINITY, Real::NEG_INFINITY), |(min, max), pt| {
            let proj = pt.coords.dot(dir);
            (min.min(proj), max.max(proj))
        })
}

/// Computes, in a single pass, the extreme projections of `points` on each
/// of the three `axes`.
///
/// The returned points hold the minimum and maximum coordinates of the point
/// cloud expressed in the (not necessarily orthonormal) frame `axes`.
pub fn point_cloud_basis_bounds<S>(axes: &[Vector<Real>; 3], points: &S) -> (Point<Real>, Point<Real>)
where
    S: PointSource + ?Sized,
{
    let mut mins = Vector::repeat(Real::INFINITY);
    let mut maxs = Vector::repeat(Real::NEG_INFINITY);

    for pt in points.iter_points() {
        for (k, axis) in axes.iter().enumerate() {
            let proj = pt.coords.dot(axis);
            mins[k] = mins[k].min(proj);
            maxs[k] = maxs[k].max(proj);
        }
    }

    (mins.into(), maxs.into())
}
