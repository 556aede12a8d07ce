use crate::math::{Matrix, Real, Rotation, Vector};
use na::{Quaternion, Unit};

/// Computes the rotation mapping the canonical axes to the given orthonormal `axes`.
///
/// The matrix with columns `axes` is converted with the trace-based method:
/// the trace is used directly when positive, otherwise the computation
/// starts from the largest diagonal entry. The result is normalized.
pub fn rotation_from_basis(axes: &[Vector<Real>; 3]) -> Rotation<Real> {
    let m = Matrix::from_columns(axes);
    let trace = m.trace();

    let quat = if trace > 0.0 {
        let root = (trace + 1.0).sqrt();
        let w = 0.5 * root;
        let f = 0.5 / root;
        Quaternion::new(
            w,
            (m[(2, 1)] - m[(1, 2)]) * f,
            (m[(0, 2)] - m[(2, 0)]) * f,
            (m[(1, 0)] - m[(0, 1)]) * f,
        )
    } else {
        let mut i = 0;
        if m[(1, 1)] > m[(0, 0)] {
            i = 1;
        }
        if m[(2, 2)] > m[(i, i)] {
            i = 2;
        }
        let j = (i + 1) % 3;
        let k = (i + 2) % 3;

        let root = (m[(i, i)] - m[(j, j)] - m[(k, k)] + 1.0).sqrt();
        let f = 0.5 / root;

        let mut v = Vector::zeros();
        v[i] = 0.5 * root;
        v[j] = (m[(j, i)] + m[(i, j)]) * f;
        v[k] = (m[(k, i)] + m[(i, k)]) * f;
        let w = (m[(k, j)] - m[(j, k)]) * f;

        Quaternion::from_parts(w, v)
    };

    Unit::new_normalize(quat)
}
