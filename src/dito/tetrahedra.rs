use super::{BaseTriangle, CandidateBasis};
use crate::math::{Point, Real, DITO_EPSILON};
use crate::points::PointSource;
use crate::utils::{point_cloud_support_range, safe_normalize};
use arrayvec::ArrayVec;

/// The apexes of the tetrahedra raised on both sides of the base triangle.
///
/// The point with the largest projection on the triangle normal comes first,
/// then the point with the smallest one. An apex is dropped if it lies within
/// `DITO_EPSILON` of the triangle plane.
pub fn tetrahedra_apexes<S>(points: &S, triangle: &BaseTriangle) -> ArrayVec<Point<Real>, 2>
where
    S: PointSource + ?Sized,
{
    let range = point_cloud_support_range(&triangle.normal, points);
    let tri_proj = triangle.vertices[0].coords.dot(&triangle.normal);
    let mut apexes = ArrayVec::new();

    if range.max - DITO_EPSILON > tri_proj {
        apexes.push(points.point(range.max_id));
    }
    if range.min + DITO_EPSILON < tri_proj {
        apexes.push(points.point(range.min_id));
    }

    apexes
}

/// Improves `best` with the three side triangles of each tetrahedron raised
/// from `triangle`.
///
/// Returns the number of tetrahedra evaluated.
pub fn refine_with_tetrahedra<S>(
    points: &S,
    triangle: &BaseTriangle,
    best: &mut CandidateBasis,
) -> usize
where
    S: PointSource + ?Sized,
{
    let [p0, p1, p2] = triangle.vertices;
    let [e0, e1, e2] = triangle.edges;
    let apexes = tetrahedra_apexes(points, triangle);

    for q in &apexes {
        let f0 = safe_normalize(&(q - p0));
        let f1 = safe_normalize(&(q - p1));
        let f2 = safe_normalize(&(q - p2));

        let n0 = safe_normalize(&f1.cross(&e0));
        let n1 = safe_normalize(&f2.cross(&e1));
        let n2 = safe_normalize(&f0.cross(&e2));

        let _ = best.improve_with_triangle(points, &n0, [&e0, &f1, &f0]);
        let _ = best.improve_with_triangle(points, &n1, [&e1, &f2, &f1]);
        let _ = best.improve_with_triangle(points, &n2, [&e2, &f0, &f2]);
    }

    apexes.len()
}
