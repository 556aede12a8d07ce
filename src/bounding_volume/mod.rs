//! Bounding volumes.

#[doc(inline)]
pub use crate::bounding_volume::aabb::Aabb;
#[doc(inline)]
pub use crate::bounding_volume::obb::OrientedBoundingBox;

#[doc(hidden)]
pub mod aabb;
mod aabb_utils;
#[doc(hidden)]
pub mod obb;

/// Free functions for some special cases of bounding-volume computation.
pub mod details {
    pub use super::aabb_utils::{local_point_cloud_aabb, point_source_aabb};
}
