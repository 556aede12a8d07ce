//! The DiTO-14 oriented bounding box computation.
//!
//! DiTO-14 (*Ditetrahedron OBB*, Larsson & Källberg) finds the extremal points
//! of the input along seven fixed directions, builds a large triangle from
//! them, raises a tetrahedron on each side of that triangle, and keeps the
//! tightest of the orientations defined by the faces and edges of this
//! ditetrahedron. The box extents are then recomputed over all the points.
//!
//! Every step is a linear scan over the input, and the result is
//! deterministic.

pub use self::base_triangle::{
    build_base_triangle, furthest_point_from_line, BaseTriangle, BaseTriangleOutcome,
};
pub use self::basis::CandidateBasis;
pub use self::extremal_points::{
    slab_direction, ExtremalPoints, NUM_EXTREMAL_VERTICES, NUM_SLABS, SLAB_DIRECTIONS,
};
pub use self::finalize::obb_from_basis;
pub use self::tetrahedra::{refine_with_tetrahedra, tetrahedra_apexes};
pub use self::workspace::{DitoOutcome, DitoWorkspace};

use crate::bounding_volume::OrientedBoundingBox;
use crate::math::Real;
use crate::points::{PointBufferError, PointSource, StridedPoints};

mod base_triangle;
mod basis;
mod extremal_points;
mod finalize;
mod tetrahedra;
mod workspace;

/// Computes the DiTO-14 oriented bounding box of a set of points.
///
/// The returned box contains every point, and its half area (the sum of the
/// pairwise products of its extents) is never larger than the one of the
/// axis-aligned bounding box. An empty set yields
/// [`OrientedBoundingBox::default`].
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use dito3d::dito::compute_obb;
/// use dito3d::math::{Point, Real, Vector};
///
/// let cube: Vec<Point<Real>> = (0..8)
///     .map(|i| Point::new((i & 1) as Real, ((i >> 1) & 1) as Real, ((i >> 2) & 1) as Real))
///     .collect();
/// let obb = compute_obb(&cube);
///
/// assert_eq!(obb.center, Point::new(0.5, 0.5, 0.5));
/// assert_eq!(obb.half_extents, Vector::new(0.5, 0.5, 0.5));
/// assert_eq!(obb.quaternion_xyzw(), [0.0, 0.0, 0.0, 1.0]);
/// # }
/// ```
pub fn compute_obb<S>(points: &S) -> OrientedBoundingBox
where
    S: PointSource + ?Sized,
{
    DitoWorkspace::new().compute(points)
}

/// Computes the DiTO-14 oriented bounding box of the points stored in a
/// tightly packed `[x0, y0, z0, x1, y1, z1, ...]` buffer.
///
/// Fails if the length of `coords` is not a multiple of 3.
pub fn compute_obb_from_flat(coords: &[Real]) -> Result<OrientedBoundingBox, PointBufferError> {
    let points = StridedPoints::packed(coords)?;
    Ok(compute_obb(&points))
}

/// Computes the DiTO-14 oriented bounding box of the points stored in an
/// interleaved buffer.
///
/// The `i`-th point is read from the three scalars starting at
/// `offset + i * stride`. A trailing vertex that does not fit in `coords` is
/// ignored. Fails if `stride < 3` or `offset > coords.len()`.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use dito3d::dito::{compute_obb_from_flat, compute_obb_strided};
/// use dito3d::math::Real;
///
/// // Each vertex is a position followed by a normal.
/// let interleaved: [Real; 12] = [
///     0.0, 0.0, 0.0, 0.0, 0.0, 1.0,
///     2.0, 1.0, 0.0, 0.0, 0.0, 1.0,
/// ];
/// let packed: [Real; 6] = [0.0, 0.0, 0.0, 2.0, 1.0, 0.0];
///
/// assert_eq!(
///     compute_obb_strided(&interleaved, 0, 6),
///     compute_obb_from_flat(&packed)
/// );
/// # }
/// ```
pub fn compute_obb_strided(
    coords: &[Real],
    offset: usize,
    stride: usize,
) -> Result<OrientedBoundingBox, PointBufferError> {
    let points = StridedPoints::new(coords, offset, stride)?;
    Ok(compute_obb(&points))
}

/// Computes the DiTO-14 oriented bounding boxes of many independent point
/// sets in parallel.
///
/// Each rayon worker reuses a single [`DitoWorkspace`]. The `i`-th box of the
/// result is the box of `point_sets[i]`.
#[cfg(feature = "parallel")]
pub fn par_compute_obbs<S>(point_sets: &[S]) -> Vec<OrientedBoundingBox>
where
    S: PointSource + Sync,
{
    use rayon::prelude::*;

    point_sets
        .par_iter()
        .map_init(DitoWorkspace::new, |workspace, points| {
            workspace.compute(points)
        })
        .collect()
}
