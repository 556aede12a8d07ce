use super::ExtremalPoints;
use crate::math::{Point, Real, Vector, DITO_EPSILON};
use crate::points::PointSource;
use crate::utils::safe_normalize;

/// The large triangle DiTO-14 builds from the extremal points.
///
/// `edges[0]` goes from `vertices[1]` to `vertices[0]`, `edges[1]` from
/// `vertices[2]` to `vertices[1]`, and `edges[2]` from `vertices[0]` to
/// `vertices[2]`. All edges and the normal are unit vectors.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BaseTriangle {
    /// The three vertices `p0`, `p1`, `p2`.
    pub vertices: [Point<Real>; 3],
    /// The unit edge directions `e0`, `e1`, `e2`.
    pub edges: [Vector<Real>; 3],
    /// The unit normal `normalize(e1 × e0)`.
    pub normal: Vector<Real>,
}

/// The result of the base triangle construction.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum BaseTriangleOutcome {
    /// All the extremal points are (nearly) at the same location.
    PointLike,
    /// All the points lie (nearly) on a line with the given unit direction.
    LineLike {
        /// The direction of the line.
        axis: Vector<Real>,
    },
    /// A non-degenerate triangle was found.
    Triangle(BaseTriangle),
}

/// Builds the base triangle from the extremal points and the searched points.
///
/// The first edge joins the furthest pair of extremal vertices. The third
/// vertex is the searched point the furthest away from the line supporting
/// that edge.
pub fn build_base_triangle<S>(extremals: &ExtremalPoints, points: &S) -> BaseTriangleOutcome
where
    S: PointSource + ?Sized,
{
    let (p0, p1) = extremals.furthest_pair();

    if na::distance_squared(&p0, &p1) < DITO_EPSILON {
        return BaseTriangleOutcome::PointLike;
    }

    let e0 = safe_normalize(&(p0 - p1));
    let (p2, dist2) = furthest_point_from_line(points, &p0, &e0);

    if dist2 < DITO_EPSILON {
        return BaseTriangleOutcome::LineLike { axis: e0 };
    }

    let e1 = safe_normalize(&(p1 - p2));
    let e2 = safe_normalize(&(p2 - p0));
    let normal = safe_normalize(&e1.cross(&e0));

    BaseTriangleOutcome::Triangle(BaseTriangle {
        vertices: [p0, p1, p2],
        edges: [e0, e1, e2],
        normal,
    })
}

/// Finds the point of `points` with the largest squared distance to the
/// infinite line through `origin` with direction `dir`.
///
/// Returns the point and its squared distance. The first point reaching the
/// maximum is kept. `points` must not be empty.
pub fn furthest_point_from_line<S>(
    points: &S,
    origin: &Point<Real>,
    dir: &Vector<Real>,
) -> (Point<Real>, Real)
where
    S: PointSource + ?Sized,
{
    let sq_len_dir = dir.norm_squared();
    let mut best = points.point(0);
    let mut max_dist2 = Real::NEG_INFINITY;

    for pt in points.iter_points() {
        let u = pt - origin;
        let t = dir.dot(&u);
        let dist2 = u.norm_squared() - t * t / sq_len_dir;

        if dist2 > max_dist2 {
            max_dist2 = dist2;
            best = pt;
        }
    }

    (best, max_dist2)
}
