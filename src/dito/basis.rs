use crate::math::{Real, Vector, DITO_EPSILON};
use crate::points::PointSource;
use crate::utils::{half_box_area, point_cloud_projection_range};

/// An orthonormal candidate orientation for the OBB, and its quality.
///
/// The quality is the half area of the box enclosing the searched points
/// along `b0`, `b1` and `b2`. Lower is better.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CandidateBasis {
    /// The first axis.
    pub b0: Vector<Real>,
    /// The second axis.
    pub b1: Vector<Real>,
    /// The third axis.
    pub b2: Vector<Real>,
    /// The half area of the box along these axes.
    pub quality: Real,
}

impl CandidateBasis {
    /// The canonical basis, with the given quality.
    #[inline]
    pub fn axis_aligned(quality: Real) -> Self {
        Self {
            b0: Vector::x(),
            b1: Vector::y(),
            b2: Vector::z(),
            quality,
        }
    }

    /// The three axes of this basis.
    #[inline]
    pub fn axes(&self) -> [Vector<Real>; 3] {
        [self.b0, self.b1, self.b2]
    }

    /// Evaluates the three orientations defined by the unit normal `n` of a
    /// triangle and each of its unit `edges`, and keeps the best one if it
    /// improves this basis.
    ///
    /// For each edge `e` the candidate basis is `(e, n, e × n)`. Nothing is
    /// evaluated if `n` is (nearly) zero. Returns `true` if this basis was
    /// replaced.
    pub fn improve_with_triangle<S>(
        &mut self,
        points: &S,
        n: &Vector<Real>,
        edges: [&Vector<Real>; 3],
    ) -> bool
    where
        S: PointSource + ?Sized,
    {
        if n.norm_squared() < DITO_EPSILON {
            return false;
        }

        let (n_min, n_max) = point_cloud_projection_range(n, points);
        let n_len = n_max - n_min;
        let mut improved = false;

        for e in edges {
            let m = e.cross(n);
            let (e_min, e_max) = point_cloud_projection_range(e, points);
            let (m_min, m_max) = point_cloud_projection_range(&m, points);
            let quality = half_box_area(&Vector::new(e_max - e_min, n_len, m_max - m_min));

            if quality < self.quality {
                *self = Self {
                    b0: *e,
                    b1: *n,
                    b2: m,
                    quality,
                };
                improved = true;
            }
        }

        improved
    }
}
