use crate::math::{Real, Vector};

/// Normalizes `v`, or returns it unchanged if its norm is zero.
///
/// Callers relying on a unit vector must treat a returned zero vector as the
/// marker of a degenerate direction.
#[inline]
pub fn safe_normalize(v: &Vector<Real>) -> Vector<Real> {
    let sq_norm = v.norm_squared();

    if sq_norm > 0.0 {
        v / sq_norm.sqrt()
    } else {
        *v
    }
}
