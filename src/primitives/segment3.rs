//! 3D line segment type.

use super::{Point3, Range3, Vec3};
use num_traits::Float;

/// A 3D line segment defined by two endpoints.
///
/// Generic over floating-point types (`f32` or `f64`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment3<F> {
    pub start: Point3<F>,
    pub end: Point3<F>,
}

impl<F: Float> Segment3<F> {
    /// Creates a new segment from two points.
    #[inline]
    pub fn new(start: Point3<F>, end: Point3<F>) -> Self {
        Self { start, end }
    }

    /// Creates a degenerate segment whose endpoints are the same point.
    #[inline]
    pub fn from_point(p: Point3<F>) -> Self {
        Self { start: p, end: p }
    }

    /// Returns the direction vector from start to end.
    #[inline]
    pub fn direction(self) -> Vec3<F> {
        self.end - self.start
    }

    /// Returns the squared length of the segment.
    #[inline]
    pub fn length_squared(self) -> F {
        self.start.distance_squared(self.end)
    }

    /// Returns the length of the segment.
    #[inline]
    pub fn length(self) -> F {
        self.start.distance(self.end)
    }

    /// Returns the segment in parametric form `(origin, direction)`.
    ///
    /// The segment is the set of points `origin + t * direction`, with
    /// `t = 0` at `start` and `t = 1` at `end`.
    #[inline]
    pub fn parametric_form(self) -> (Vec3<F>, Vec3<F>) {
        (self.start.to_vec(), self.end - self.start)
    }

    /// Returns the point at parameter `t` along the segment.
    ///
    /// Values outside [0, 1] extrapolate beyond the segment.
    #[inline]
    pub fn point_at(self, t: F) -> Point3<F> {
        self.start.lerp(self.end, t)
    }

    /// Returns the axis-aligned bounding range of the segment.
    #[inline]
    pub fn range(self) -> Range3<F> {
        Range3::from_points(self.start, self.end)
    }

    /// Returns `true` if the segment is degenerate (start equals end within
    /// tolerance).
    #[inline]
    pub fn is_degenerate(self, eps: F) -> bool {
        self.start.almost_equal(self.end, eps)
    }

    /// Computes the closest point on the segment to the given point.
    ///
    /// Returns a tuple of (closest_point, parameter_t) where t is clamped
    /// to [0, 1].
    pub fn closest_point(self, p: Point3<F>) -> (Point3<F>, F) {
        let v = self.direction();
        let len_sq = v.magnitude_squared();

        // Degenerate segment (start == end)
        if len_sq <= F::epsilon() {
            return (self.start, F::zero());
        }

        let t = (p - self.start).dot(v) / len_sq;
        let t_clamped = t.max(F::zero()).min(F::one());

        (self.point_at(t_clamped), t_clamped)
    }

    /// Computes the distance from a point to this segment.
    ///
    /// A single-point segment measures from its one point.
    #[inline]
    pub fn distance_to_point(self, p: Point3<F>) -> F {
        let (closest, _) = self.closest_point(p);
        p.distance(closest)
    }

    /// Returns the segment shrunk symmetrically from both ends by
    /// `magnitude`.
    ///
    /// Returns the segment unchanged when shrinking would invert it
    /// (`2 * magnitude > length`) or when the direction cannot be
    /// normalized.
    pub fn shrink_from_both_ends(self, magnitude: F) -> Self {
        let two = F::one() + F::one();
        if two * magnitude > self.length() {
            return self;
        }

        match self.direction().scale_to_length(magnitude) {
            Some(inward) => Self {
                start: self.start + inward,
                end: self.end - inward,
            },
            None => self,
        }
    }
}

/// Evaluates a parametric line `origin + t * direction` at parameter `t`.
#[inline]
pub fn point_from_parametric_form<F: Float>(
    origin: Vec3<F>,
    direction: Vec3<F>,
    t: F,
) -> Point3<F> {
    Point3::from(origin + direction * t)
}

impl<F: Float> From<(Point3<F>, Point3<F>)> for Segment3<F> {
    fn from((start, end): (Point3<F>, Point3<F>)) -> Self {
        Self::new(start, end)
    }
}
