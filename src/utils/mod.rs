//! Various small geometrical operators used by the DiTO-14 algorithm.

pub use self::half_box_area::half_box_area;
pub use self::normalize::safe_normalize;
pub use self::orthonormal_basis::complete_orthonormal_basis;
pub use self::point_cloud_support_point::{
    point_cloud_basis_bounds, point_cloud_projection_range, point_cloud_support_range,
    SupportRange,
};
pub use self::rotation_from_basis::rotation_from_basis;

mod half_box_area;
mod normalize;
mod orthonormal_basis;
mod point_cloud_support_point;
mod rotation_from_basis;
