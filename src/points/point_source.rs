use crate::math::{Point, Real};
use core::iter::FusedIterator;

/// A read-only set of 3D points accessible by index.
///
/// This is the only capability the OBB computation requires from its input:
/// the number of points, and the coordinates of the `i`-th point. The point
/// set is borrowed for the duration of a computation and never modified.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use dito3d::math::{Point, Real};
/// use dito3d::points::PointSource;
///
/// let triples: Vec<[Real; 3]> = vec![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
///
/// assert_eq!(PointSource::len(&triples), 2);
/// assert_eq!(triples.point(1), Point::new(4.0, 5.0, 6.0));
/// # }
/// ```
pub trait PointSource {
    /// The number of points of this set.
    fn len(&self) -> usize;

    /// The `i`-th point of this set.
    ///
    /// Implementations may panic if `i >= self.len()`.
    fn point(&self, i: usize) -> Point<Real>;

    /// Does this set contain no point at all?
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// An iterator through all the points of this set, in index order.
    fn iter_points(&self) -> PointSourceIter<'_, Self> {
        PointSourceIter {
            source: self,
            curr: 0,
            end: self.len(),
        }
    }
}

/// Iterator through the points of a [`PointSource`].
pub struct PointSourceIter<'a, S: ?Sized> {
    source: &'a S,
    curr: usize,
    end: usize,
}

impl<S: PointSource + ?Sized> Iterator for PointSourceIter<'_, S> {
    type Item = Point<Real>;

    #[inline]
    fn next(&mut self) -> Option<Point<Real>> {
        if self.curr < self.end {
            let pt = self.source.point(self.curr);
            self.curr += 1;
            Some(pt)
        } else {
            None
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.curr;
        (remaining, Some(remaining))
    }
}

impl<S: PointSource + ?Sized> ExactSizeIterator for PointSourceIter<'_, S> {}
impl<S: PointSource + ?Sized> FusedIterator for PointSourceIter<'_, S> {}

impl<S: PointSource + ?Sized> PointSource for &S {
    #[inline]
    fn len(&self) -> usize {
        S::len(*self)
    }

    #[inline]
    fn point(&self, i: usize) -> Point<Real> {
        S::point(*self, i)
    }
}

impl PointSource for [Point<Real>] {
    #[inline]
    fn len(&self) -> usize {
        <[Point<Real>]>::len(self)
    }

    #[inline]
    fn point(&self, i: usize) -> Point<Real> {
        self[i]
    }
}

impl<const N: usize> PointSource for [Point<Real>; N] {
    #[inline]
    fn len(&self) -> usize {
        N
    }

    #[inline]
    fn point(&self, i: usize) -> Point<Real> {
        self[i]
    }
}

impl PointSource for Vec<Point<Real>> {
    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn point(&self, i: usize) -> Point<Real> {
        self[i]
    }
}

impl PointSource for [[Real; 3]] {
    #[inline]
    fn len(&self) -> usize {
        <[[Real; 3]]>::len(self)
    }

    #[inline]
    fn point(&self, i: usize) -> Point<Real> {
        Point::from(self[i])
    }
}

impl PointSource for Vec<[Real; 3]> {
    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn point(&self, i: usize) -> Point<Real> {
        Point::from(self[i])
    }
}

/// A point set whose points are produced on demand by a closure.
///
/// This adapts any storage layout (struct-of-arrays, a list of user-defined
/// point types, a memory-mapped file…) without copying it first.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use dito3d::math::{Point, Real};
/// use dito3d::points::{FnPoints, PointSource};
///
/// struct Vertex {
///     position: (Real, Real, Real),
///     _color: u32,
/// }
///
/// let vertices = vec![
///     Vertex { position: (0.0, 0.0, 0.0), _color: 0xff0000 },
///     Vertex { position: (1.0, 2.0, 3.0), _color: 0x00ff00 },
/// ];
/// let source = FnPoints::new(vertices.len(), |i| {
///     let (x, y, z) = vertices[i].position;
///     Point::new(x, y, z)
/// });
///
/// assert_eq!(source.len(), 2);
/// assert_eq!(source.point(1), Point::new(1.0, 2.0, 3.0));
/// # }
/// ```
#[derive(Copy, Clone)]
pub struct FnPoints<F> {
    len: usize,
    f: F,
}

impl<F> FnPoints<F>
where
    F: Fn(usize) -> Point<Real>,
{
    /// Creates a point set of `len` points, where the `i`-th point is `f(i)`.
    pub fn new(len: usize, f: F) -> Self {
        Self { len, f }
    }
}

impl<F> PointSource for FnPoints<F>
where
    F: Fn(usize) -> Point<Real>,
{
    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    #[inline]
    fn point(&self, i: usize) -> Point<Real> {
        (self.f)(i)
    }
}
