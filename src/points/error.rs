/// Errors that can occur when a scalar buffer is viewed as a set of 3D points.
///
/// These are only raised while building a [`StridedPoints`](super::StridedPoints)
/// view. Once a view exists, reading its points cannot fail.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use dito3d::math::Real;
/// use dito3d::points::{PointBufferError, StridedPoints};
///
/// let coords: [Real; 4] = [0.0, 1.0, 2.0, 3.0];
///
/// assert_eq!(
///     StridedPoints::packed(&coords).unwrap_err(),
///     PointBufferError::TruncatedPoint { len: 4 }
/// );
/// assert_eq!(
///     StridedPoints::new(&coords, 0, 2).unwrap_err(),
///     PointBufferError::InvalidStride { stride: 2 }
/// );
/// # }
/// ```
#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum PointBufferError {
    /// The stride between two consecutive points cannot hold three coordinates.
    #[error("Invalid stride {stride}: a point needs at least 3 scalar components.")]
    InvalidStride {
        /// The rejected stride, in scalars.
        stride: usize,
    },

    /// The offset of the first point lies past the end of the buffer.
    #[error("Offset {offset} is out of bounds for a buffer of {len} scalars.")]
    OffsetOutOfBounds {
        /// The rejected offset, in scalars.
        offset: usize,
        /// The length of the buffer, in scalars.
        len: usize,
    },

    /// A tightly packed buffer ends in the middle of a point.
    #[error("A packed buffer of {len} scalars is not a whole number of 3D points.")]
    TruncatedPoint {
        /// The length of the buffer, in scalars.
        len: usize,
    },
}
