use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector};
use crate::points::PointSource;

/// The number of slab directions scanned by DiTO-14.
pub const NUM_SLABS: usize = 7;

/// The number of extremal vertices found by DiTO-14, two per slab.
pub const NUM_EXTREMAL_VERTICES: usize = 2 * NUM_SLABS;

/// The (unnormalized) slab directions scanned by DiTO-14.
///
/// The first three are the coordinate axes, so their extremal projections
/// form the axis-aligned bounding box of the point set.
pub const SLAB_DIRECTIONS: [[Real; 3]; NUM_SLABS] = [
    [1.0, 0.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, 0.0, 1.0],
    [1.0, 1.0, 1.0],
    [1.0, 1.0, -1.0],
    [1.0, -1.0, 1.0],
    [1.0, -1.0, -1.0],
];

/// The slab direction with index `i`, as a vector.
#[inline]
pub fn slab_direction(i: usize) -> Vector<Real> {
    Vector::from(SLAB_DIRECTIONS[i])
}

/// The extreme projections of a point set on each of the seven slab
/// directions, together with the points achieving them.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ExtremalPoints {
    /// The smallest projection on each slab direction.
    pub min_proj: [Real; NUM_SLABS],
    /// The largest projection on each slab direction.
    pub max_proj: [Real; NUM_SLABS],
    /// Index, in the scanned point set, of the first point achieving `min_proj`.
    pub min_ids: [usize; NUM_SLABS],
    /// Index, in the scanned point set, of the first point achieving `max_proj`.
    pub max_ids: [usize; NUM_SLABS],
    /// The points achieving `min_proj`.
    pub min_vertices: [Point<Real>; NUM_SLABS],
    /// The points achieving `max_proj`.
    pub max_vertices: [Point<Real>; NUM_SLABS],
}

impl ExtremalPoints {
    /// Scans `points` once and records, for each slab direction, the first
    /// point with minimal and the first point with maximal projection.
    ///
    /// Returns `None` if `points` is empty.
    pub fn from_points<S>(points: &S) -> Option<Self>
    where
        S: PointSource + ?Sized,
    {
        if points.is_empty() {
            return None;
        }

        let mut min_proj = [Real::INFINITY; NUM_SLABS];
        let mut max_proj = [Real::NEG_INFINITY; NUM_SLABS];
        let mut min_ids = [0; NUM_SLABS];
        let mut max_ids = [0; NUM_SLABS];

        for (id, pt) in points.iter_points().enumerate() {
            let projs = [
                pt.x,
                pt.y,
                pt.z,
                pt.x + pt.y + pt.z,
                pt.x + pt.y - pt.z,
                pt.x - pt.y + pt.z,
                pt.x - pt.y - pt.z,
            ];

            for k in 0..NUM_SLABS {
                if projs[k] < min_proj[k] {
                    min_proj[k] = projs[k];
                    min_ids[k] = id;
                }
                if projs[k] > max_proj[k] {
                    max_proj[k] = projs[k];
                    max_ids[k] = id;
                }
            }
        }

        Some(Self {
            min_proj,
            max_proj,
            min_ids,
            max_ids,
            min_vertices: min_ids.map(|id| points.point(id)),
            max_vertices: max_ids.map(|id| points.point(id)),
        })
    }

    /// The axis-aligned bounding box of the scanned points.
    #[inline]
    pub fn aabb(&self) -> Aabb {
        Aabb::new(
            Point::new(self.min_proj[0], self.min_proj[1], self.min_proj[2]),
            Point::new(self.max_proj[0], self.max_proj[1], self.max_proj[2]),
        )
    }

    /// The pair of extremal vertices `(min, max)` of the slab whose two
    /// vertices are the furthest apart.
    ///
    /// Ties are resolved in favor of the first slab.
    pub fn furthest_pair(&self) -> (Point<Real>, Point<Real>) {
        let mut best = 0;
        let mut max_dist2 = na::distance_squared(&self.max_vertices[0], &self.min_vertices[0]);

        for i in 1..NUM_SLABS {
            let dist2 = na::distance_squared(&self.max_vertices[i], &self.min_vertices[i]);

            if dist2 > max_dist2 {
                max_dist2 = dist2;
                best = i;
            }
        }

        (self.min_vertices[best], self.max_vertices[best])
    }

    /// The fourteen extremal vertices: all the minimal ones followed by all
    /// the maximal ones. Duplicates are kept.
    pub fn vertices(&self) -> [Point<Real>; NUM_EXTREMAL_VERTICES] {
        let mut result = [Point::origin(); NUM_EXTREMAL_VERTICES];
        result[..NUM_SLABS].copy_from_slice(&self.min_vertices);
        result[NUM_SLABS..].copy_from_slice(&self.max_vertices);
        result
    }
}
