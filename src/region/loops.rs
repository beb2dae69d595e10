//! Closed polygon loops.

use crate::config::TIGHT_TOLERANCE;
use crate::primitives::{Point3, Segment3};
use num_traits::Float;

/// A closed polygon represented as a vertex sequence.
///
/// The edge from the last vertex back to the first is implicit; loops never
/// store a duplicated closing vertex except transiently inside algorithms
/// that require one.
#[derive(Debug, Clone, PartialEq)]
pub struct Loop<F> {
    /// The vertices of the loop.
    pub points: Vec<Point3<F>>,
}

impl<F: Float> Loop<F> {
    /// Creates a loop from vertices.
    ///
    /// A trailing vertex duplicating the first one is dropped so the
    /// closing edge stays implicit.
    pub fn new(mut points: Vec<Point3<F>>) -> Self {
        let eps = F::from(TIGHT_TOLERANCE).unwrap_or_else(F::epsilon);
        if points.len() > 1 {
            let first = points[0];
            if let Some(last) = points.last().copied() {
                if first.almost_equal(last, eps) {
                    points.pop();
                }
            }
        }
        Self { points }
    }

    /// Creates an empty loop.
    #[inline]
    pub fn empty() -> Self {
        Self { points: Vec::new() }
    }

    /// Returns true if the loop has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the number of vertices (equal to the number of edges).
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns edge `i`, wrapping from the last vertex back to the first.
    #[inline]
    pub fn edge(&self, i: usize) -> Segment3<F> {
        let n = self.points.len();
        Segment3::new(self.points[i % n], self.points[(i + 1) % n])
    }

    /// Returns the signed area of the XY projection (shoelace formula).
    ///
    /// Positive for CCW winding, negative for CW winding.
    pub fn signed_area_xy(&self) -> F {
        if self.points.len() < 3 {
            return F::zero();
        }

        let mut area = F::zero();
        let n = self.points.len();
        for i in 0..n {
            let j = (i + 1) % n;
            area = area + self.points[i].x * self.points[j].y;
            area = area - self.points[j].x * self.points[i].y;
        }

        area / (F::one() + F::one())
    }

    /// Ensures the loop winds counter-clockwise in XY.
    pub fn ensure_ccw(&mut self) {
        if self.signed_area_xy() < F::zero() {
            self.points.reverse();
        }
    }

    /// Returns the index of the vertex coinciding with `p`, if any.
    pub fn vertex_index_of(&self, p: Point3<F>, eps: F) -> Option<usize> {
        self.points.iter().position(|v| v.almost_equal(p, eps))
    }

    /// Inserts `p` as a vertex if it lies on some edge without already
    /// being a vertex.
    ///
    /// Returns true when an insertion happened. The point is placed between
    /// the endpoints of the first edge it lies on, so vertex order stays
    /// consistent with traversal order.
    pub fn insert_if_on_edge(&mut self, p: Point3<F>, eps: F) -> bool {
        if self.vertex_index_of(p, eps).is_some() {
            return false;
        }

        for i in 0..self.points.len() {
            if point_on_segment(p, self.edge(i), eps) {
                self.points.insert(i + 1, p);
                return true;
            }
        }

        false
    }

    /// Returns the vertices immediately before and after vertex `index`,
    /// wrapping around the closing edge.
    pub fn neighbors(&self, index: usize) -> (Point3<F>, Point3<F>) {
        let n = self.points.len();
        let before = self.points[(index + n - 1) % n];
        let after = self.points[(index + 1) % n];
        (before, after)
    }

    /// Returns the total length of the loop's edges.
    pub fn perimeter(&self) -> F {
        if self.points.len() < 2 {
            return F::zero();
        }

        let mut length = F::zero();
        for i in 0..self.points.len() {
            length = length + self.edge(i).length();
        }
        length
    }
}

/// Tests whether a point lies on a segment within tolerance.
///
/// Uses the distance-sum criterion: the point is on the segment when its
/// distances to both endpoints add up to the segment length.
#[inline]
pub(crate) fn point_on_segment<F: Float>(p: Point3<F>, s: Segment3<F>, eps: F) -> bool {
    (p.distance(s.start) + p.distance(s.end) - s.length()).abs() <= eps
}
