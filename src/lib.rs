/*!
dito3d
========

**dito3d** computes tight oriented bounding boxes (OBB) of 3-dimensional point
sets with the DiTO-14 heuristic, written with the rust programming language.

DiTO-14 is deterministic and non-iterative: a handful of linear scans over the
points give a box that is close to the minimum-volume OBB in practice, without
principal-component analysis or brute-force search over orientations.

```
# #[cfg(feature = "f32")] {
use dito3d::dito::compute_obb;
use dito3d::math::{Point, Real};

let points: [Point<Real>; 8] = [
    Point::new(0.0, 1.0, 0.0),
    Point::new(2.0, 5.0, 0.0),
    Point::new(4.0, 4.0, 0.0),
    Point::new(2.0, 0.0, 0.0),
    Point::new(0.0, 1.0, 1.0),
    Point::new(2.0, 5.0, 1.0),
    Point::new(4.0, 4.0, 1.0),
    Point::new(2.0, 0.0, 1.0),
];

let obb = compute_obb(&points);
assert!(obb.half_area() < obb.aabb().half_area());
# }
```
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.
#![doc(html_root_url = "http://docs.rs/dito3d/0.1.0")]

#[cfg(all(feature = "f32", feature = "f64"))]
std::compile_error!("The `f32` and `f64` features are mutually exclusive. Please use the `dito3d` crate for `f32` and `dito3d-f64` for `f64`.");

#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;
extern crate num_traits as num;

pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod dito;
pub mod points;
pub mod utils;

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub use f64 as Real;

    /// The scalar type used throughout this crate.
    #[cfg(feature = "f32")]
    pub use f32 as Real;
}

/// Compilation flags dependent aliases for mathematical types.
pub mod math {
    pub use super::real::*;
    pub use na::{Isometry3, Matrix3, Point3, Translation3, UnitQuaternion, Vector3};

    /// The tolerance used by the DiTO-14 degeneracy tests.
    ///
    /// It is compared against squared lengths and squared distances, as well as
    /// against the distance of the tetrahedron apexes to the base triangle plane.
    pub const DITO_EPSILON: Real = 1.0e-6;

    /// The dimension of the space.
    pub const DIM: usize = 3;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;

    /// The matrix type.
    pub use Matrix3 as Matrix;

    /// The transformation matrix type.
    pub use Isometry3 as Isometry;

    /// The rotation type.
    pub type Rotation<N> = UnitQuaternion<N>;

    /// The translation type.
    pub use Translation3 as Translation;
}
