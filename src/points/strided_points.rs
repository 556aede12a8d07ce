use super::{PointBufferError, PointSource};
use crate::math::{Point, Real};

/// A view of a flat scalar buffer as a set of 3D points.
///
/// The `i`-th point reads the three consecutive scalars starting at
/// `offset + i * stride`. This covers tightly packed coordinate arrays
/// (offset 0, stride 3) as well as interleaved vertex buffers where positions
/// are mixed with other attributes.
///
/// A trailing vertex whose three coordinates do not fit in the buffer is
/// ignored.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use dito3d::math::{Point, Real};
/// use dito3d::points::{PointSource, StridedPoints};
///
/// // Interleaved [u, v, x, y, z] vertices.
/// let vertices: [Real; 10] = [
///     0.0, 0.0, 1.0, 2.0, 3.0,
///     1.0, 0.0, 4.0, 5.0, 6.0,
/// ];
/// let positions = StridedPoints::new(&vertices, 2, 5).unwrap();
///
/// assert_eq!(positions.len(), 2);
/// assert_eq!(positions.point(1), Point::new(4.0, 5.0, 6.0));
/// # }
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StridedPoints<'a> {
    data: &'a [Real],
    offset: usize,
    stride: usize,
    len: usize,
}

impl<'a> StridedPoints<'a> {
    /// The number of scalar components of each point.
    pub const COMPONENTS: usize = 3;

    /// Views `data` as points starting at `offset`, `stride` scalars apart.
    ///
    /// Fails if `stride < 3` or if `offset > data.len()`.
    pub fn new(data: &'a [Real], offset: usize, stride: usize) -> Result<Self, PointBufferError> {
        if stride < Self::COMPONENTS {
            return Err(PointBufferError::InvalidStride { stride });
        }

        if offset > data.len() {
            return Err(PointBufferError::OffsetOutOfBounds {
                offset,
                len: data.len(),
            });
        }

        let available = data.len() - offset;
        let len = if available >= Self::COMPONENTS {
            (available - Self::COMPONENTS) / stride + 1
        } else {
            0
        };

        Ok(Self {
            data,
            offset,
            stride,
            len,
        })
    }

    /// Views a tightly packed `[x0, y0, z0, x1, y1, z1, ...]` buffer as points.
    ///
    /// Fails if the length of `data` is not a multiple of 3.
    pub fn packed(data: &'a [Real]) -> Result<Self, PointBufferError> {
        if data.len() % Self::COMPONENTS != 0 {
            return Err(PointBufferError::TruncatedPoint { len: data.len() });
        }

        Self::new(data, 0, Self::COMPONENTS)
    }

    /// The underlying scalar buffer.
    pub fn data(&self) -> &'a [Real] {
        self.data
    }

    /// The index of the first coordinate of the first point.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The number of scalars between the starts of two consecutive points.
    pub fn stride(&self) -> usize {
        self.stride
    }
}

impl PointSource for StridedPoints<'_> {
    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    #[inline]
    fn point(&self, i: usize) -> Point<Real> {
        assert!(i < self.len, "Point index {} out of bounds.", i);
        let start = self.offset + i * self.stride;
        Point::new(
            self.data[start],
            self.data[start + 1],
            self.data[start + 2],
        )
    }
}
