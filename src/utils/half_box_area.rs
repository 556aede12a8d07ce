use crate::math::{Real, Vector};

/// Half the surface area of a box with the given full extents.
///
/// For extents `(l0, l1, l2)` this is `l0·l1 + l0·l2 + l1·l2`. It is the
/// quality metric used to rank candidate orientations: lower is tighter.
#[inline]
pub fn half_box_area(extents: &Vector<Real>) -> Real {
    extents.x * (extents.y + extents.z) + extents.y * extents.z
}
