//! Read-only access to the point sets bounded by this crate.
//!
//! Every algorithm of this crate reads its input through the [`PointSource`]
//! trait: a point set of known length that can be queried by index. It is
//! implemented for slices and arrays of points, for slices of coordinate
//! triples, for flat or interleaved scalar buffers ([`StridedPoints`]), and for
//! arbitrary closures ([`FnPoints`]).

pub use self::error::PointBufferError;
pub use self::point_source::{FnPoints, PointSource, PointSourceIter};
pub use self::strided_points::StridedPoints;

mod error;
mod point_source;
mod strided_points;
