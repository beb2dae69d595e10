//! Axis-aligned bounding range in 3D.

use super::Point3;
use num_traits::Float;

/// An axis-aligned box spanning `[low, high]` on every axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range3<F> {
    pub low: Point3<F>,
    pub high: Point3<F>,
}

impl<F: Float> Range3<F> {
    /// Creates the bounding range of two points.
    pub fn from_points(a: Point3<F>, b: Point3<F>) -> Self {
        Self {
            low: Point3::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z)),
            high: Point3::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z)),
        }
    }

    /// Tests whether a point lies within the range, padded by `tol` on
    /// every axis.
    pub fn contains_with_tolerance(&self, p: Point3<F>, tol: F) -> bool {
        p.x + tol >= self.low.x
            && p.y + tol >= self.low.y
            && p.z + tol >= self.low.z
            && p.x - tol <= self.high.x
            && p.y - tol <= self.high.y
            && p.z - tol <= self.high.z
    }

    /// Computes the intersection box of two ranges.
    ///
    /// Returns `None` when the ranges do not overlap on some axis.
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        let low = Point3::new(
            self.low.x.max(other.low.x),
            self.low.y.max(other.low.y),
            self.low.z.max(other.low.z),
        );
        let high = Point3::new(
            self.high.x.min(other.high.x),
            self.high.y.min(other.high.y),
            self.high.z.min(other.high.z),
        );

        if low.x > high.x || low.y > high.y || low.z > high.z {
            return None;
        }

        Some(Self { low, high })
    }
}
