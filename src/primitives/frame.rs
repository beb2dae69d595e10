//! Local coordinate frame aligned to a segment.

use super::{Point3, Segment3};
use num_traits::Float;

/// The rigid XY transform that carries a segment onto the unit X axis.
///
/// Built by composing a translation to the segment start, a uniform scale
/// by the segment length, and a rotation by the signed angle between the X
/// axis and the segment direction, then inverting the product. Applying the
/// frame maps `segment.start` to the origin and `segment.end` to (1, 0),
/// leaving z coordinates untouched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame<F> {
    origin: Point3<F>,
    cos: F,
    sin: F,
    inv_scale: F,
}

impl<F: Float> Frame<F> {
    /// Builds the frame for a segment.
    ///
    /// Returns `None` for a degenerate segment (the scale component would
    /// not be invertible).
    pub fn to_unit_x(segment: Segment3<F>) -> Option<Self> {
        let length = segment.length();
        if length <= F::epsilon() {
            return None;
        }

        let direction = segment.direction();
        Some(Self {
            origin: segment.start,
            cos: direction.x / length,
            sin: direction.y / length,
            inv_scale: F::one() / length,
        })
    }

    /// Applies the frame to a point.
    #[inline]
    pub fn apply(&self, p: Point3<F>) -> Point3<F> {
        let dx = p.x - self.origin.x;
        let dy = p.y - self.origin.y;
        Point3::new(
            (self.cos * dx + self.sin * dy) * self.inv_scale,
            (-self.sin * dx + self.cos * dy) * self.inv_scale,
            p.z,
        )
    }

    /// Applies the frame to both endpoints of a segment.
    #[inline]
    pub fn apply_segment(&self, s: Segment3<F>) -> Segment3<F> {
        Segment3::new(self.apply(s.start), self.apply(s.end))
    }
}
