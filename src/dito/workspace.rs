use super::{
    build_base_triangle, obb_from_basis, refine_with_tetrahedra, BaseTriangle,
    BaseTriangleOutcome, CandidateBasis, ExtremalPoints, NUM_EXTREMAL_VERTICES,
};
use crate::bounding_volume::OrientedBoundingBox;
use crate::points::PointSource;
use crate::utils::complete_orthonormal_basis;

/// The final state reached by a DiTO-14 computation.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum DitoOutcome {
    /// The point set was empty; the default box was returned.
    #[default]
    Empty,
    /// The extremal points all coincide; the axis-aligned box was returned.
    AxisAligned,
    /// The points are colinear; the box is aligned with their line.
    LineAligned,
    /// The best orientation found improves on the axis-aligned box.
    Refined,
    /// No orientation improved on the axis-aligned box, which was returned.
    ///
    /// This includes nearly colinear points whose line-aligned box is worse
    /// than the axis-aligned one.
    RefinementRejected,
}

impl DitoOutcome {
    /// Was the returned box axis-aligned?
    pub fn is_axis_aligned(self) -> bool {
        matches!(
            self,
            DitoOutcome::Empty | DitoOutcome::AxisAligned | DitoOutcome::RefinementRejected
        )
    }
}

/// The scratch state of the DiTO-14 algorithm.
///
/// A workspace can be reused for any number of computations, which keeps
/// the intermediate state of the last one available for inspection. It is
/// taken by `&mut` so that a single workspace never serves two computations
/// at the same time.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use dito3d::dito::{DitoOutcome, DitoWorkspace};
/// use dito3d::math::{Point, Real};
///
/// let mut workspace = DitoWorkspace::new();
///
/// let same: Vec<Point<Real>> = vec![Point::new(1.0, 2.0, 3.0); 4];
/// let obb = workspace.compute(&same);
/// assert_eq!(workspace.outcome(), DitoOutcome::AxisAligned);
/// assert_eq!(obb.center, Point::new(1.0, 2.0, 3.0));
///
/// let line: Vec<Point<Real>> = (0..4).map(|i| Point::new(i as Real, 0.0, 0.0)).collect();
/// let _ = workspace.compute(&line);
/// assert_eq!(workspace.outcome(), DitoOutcome::LineAligned);
/// # }
/// ```
#[derive(Clone, Debug, Default)]
pub struct DitoWorkspace {
    extremals: Option<ExtremalPoints>,
    triangle: Option<BaseTriangle>,
    best: Option<CandidateBasis>,
    outcome: DitoOutcome,
}

impl DitoWorkspace {
    /// Creates an empty workspace.
    pub fn new() -> Self {
        Self::default()
    }

    /// The final state reached by the last computation.
    pub fn outcome(&self) -> DitoOutcome {
        self.outcome
    }

    /// The extremal points found by the last computation.
    pub fn extremal_points(&self) -> Option<&ExtremalPoints> {
        self.extremals.as_ref()
    }

    /// The base triangle built by the last computation, if it got that far.
    pub fn base_triangle(&self) -> Option<&BaseTriangle> {
        self.triangle.as_ref()
    }

    /// The best orientation found by the last computation, if it got to the
    /// orientation search.
    ///
    /// Its quality is the one measured on the searched points, which are the
    /// fourteen extremal vertices for inputs of fewer than fourteen points.
    pub fn best_basis(&self) -> Option<&CandidateBasis> {
        self.best.as_ref()
    }

    fn reset(&mut self) {
        self.extremals = None;
        self.triangle = None;
        self.best = None;
        self.outcome = DitoOutcome::Empty;
    }

    /// Computes the DiTO-14 oriented bounding box of `points`.
    ///
    /// The result always contains every point of `points`, and its half area
    /// never exceeds the one of the axis-aligned bounding box. An empty point
    /// set yields [`OrientedBoundingBox::default`].
    pub fn compute<S>(&mut self, points: &S) -> OrientedBoundingBox
    where
        S: PointSource + ?Sized,
    {
        self.reset();

        let Some(extremals) = ExtremalPoints::from_points(points) else {
            log::debug!("Empty point set: returning the default OBB.");
            return OrientedBoundingBox::default();
        };
        self.extremals = Some(extremals);
        log::trace!("Extremal points found for {} points.", points.len());

        if points.len() < NUM_EXTREMAL_VERTICES {
            let reduced = extremals.vertices();
            self.search_and_finalize(points, &reduced[..], &extremals)
        } else {
            self.search_and_finalize(points, points, &extremals)
        }
    }

    /// Runs the orientation search on `search_points`, then computes the final
    /// box over all of `points`.
    fn search_and_finalize<S, T>(
        &mut self,
        points: &S,
        search_points: &T,
        extremals: &ExtremalPoints,
    ) -> OrientedBoundingBox
    where
        S: PointSource + ?Sized,
        T: PointSource + ?Sized,
    {
        let aabb = extremals.aabb();
        let aabb_quality = aabb.half_area();

        let triangle = match build_base_triangle(extremals, search_points) {
            BaseTriangleOutcome::PointLike => {
                log::debug!("Extremal points coincide: falling back to the AABB.");
                self.outcome = DitoOutcome::AxisAligned;
                return OrientedBoundingBox::from(aabb);
            }
            BaseTriangleOutcome::LineLike { axis } => {
                log::debug!(
                    "Points are colinear along {:?}: aligning the OBB with their line.",
                    axis
                );
                let obb = obb_from_basis(points, &complete_orthonormal_basis(&axis));

                // Exactly colinear points along a coordinate axis tie with the AABB.
                if obb.half_area() > aabb_quality {
                    log::debug!(
                        "Line-aligned OBB quality {} is worse than the AABB quality {}: keeping the AABB.",
                        obb.half_area(),
                        aabb_quality
                    );
                    self.outcome = DitoOutcome::RefinementRejected;
                    return OrientedBoundingBox::from(aabb);
                }

                self.outcome = DitoOutcome::LineAligned;
                return obb;
            }
            BaseTriangleOutcome::Triangle(triangle) => triangle,
        };
        self.triangle = Some(triangle);

        let mut best = CandidateBasis::axis_aligned(aabb_quality);
        let [e0, e1, e2] = &triangle.edges;
        let _ = best.improve_with_triangle(search_points, &triangle.normal, [e0, e1, e2]);
        log::trace!("Base triangle evaluated, best quality: {}.", best.quality);

        let num_tetrahedra = refine_with_tetrahedra(search_points, &triangle, &mut best);
        log::trace!(
            "{} tetrahedra evaluated, best quality: {}.",
            num_tetrahedra,
            best.quality
        );
        self.best = Some(best);

        let obb = obb_from_basis(points, &best.axes());
        let quality = obb.half_area();

        if quality < aabb_quality {
            self.outcome = DitoOutcome::Refined;
            obb
        } else {
            log::debug!(
                "OBB quality {} does not improve on the AABB quality {}: keeping the AABB.",
                quality,
                aabb_quality
            );
            self.outcome = DitoOutcome::RefinementRejected;
            OrientedBoundingBox::from(aabb)
        }
    }
}
