use super::safe_normalize;
use crate::math::{Real, Vector, DITO_EPSILON};

/// Completes the unit vector `u` into a right-handed orthonormal basis `[u, v, w]`.
///
/// A helper direction is obtained by zeroing the dominant component of `u`
/// (falling back to `(1, 1, 1)` when that leaves almost nothing), then
/// `v = normalize(u × r)` and `w = normalize(u × v)`.
pub fn complete_orthonormal_basis(u: &Vector<Real>) -> [Vector<Real>; 3] {
    let mut r = *u;
    let abs = u.abs();

    if abs.x > abs.y && abs.x > abs.z {
        r.x = 0.0;
    } else if abs.y > abs.z {
        r.y = 0.0;
    } else {
        r.z = 0.0;
    }

    if r.norm_squared() < DITO_EPSILON {
        r = Vector::repeat(1.0);
    }

    let v = safe_normalize(&u.cross(&r));
    let w = safe_normalize(&u.cross(&v));

    [*u, v, w]
}
