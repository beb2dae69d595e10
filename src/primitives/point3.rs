//! 3D point type.
//!
//! Containment and intersection tests in this crate operate in the XY
//! plane; the z coordinate is carried through unchanged.

use super::Vec3;
use num_traits::Float;
use std::ops::{Add, Sub};

/// A 3D point with x, y, and z coordinates.
///
/// Generic over floating-point types (`f32` or `f64`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point3<F> {
    pub x: F,
    pub y: F,
    pub z: F,
}

impl<F: Float> Point3<F> {
    /// Creates a new point.
    #[inline]
    pub fn new(x: F, y: F, z: F) -> Self {
        Self { x, y, z }
    }

    /// Creates a point in the XY plane (z = 0).
    #[inline]
    pub fn xy(x: F, y: F) -> Self {
        Self {
            x,
            y,
            z: F::zero(),
        }
    }

    /// Creates a point at the origin (0, 0, 0).
    #[inline]
    pub fn origin() -> Self {
        Self {
            x: F::zero(),
            y: F::zero(),
            z: F::zero(),
        }
    }

    /// Computes the squared distance to another point.
    #[inline]
    pub fn distance_squared(self, other: Self) -> F {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        let dz = other.z - self.z;
        dx * dx + dy * dy + dz * dz
    }

    /// Computes the Euclidean distance to another point.
    #[inline]
    pub fn distance(self, other: Self) -> F {
        self.distance_squared(other).sqrt()
    }

    /// Tests whether two points coincide within tolerance.
    #[inline]
    pub fn almost_equal(self, other: Self, eps: F) -> bool {
        self.distance_squared(other) <= eps * eps
    }

    /// Linearly interpolates between `self` and `other`.
    ///
    /// When `t = 0`, returns `self`. When `t = 1`, returns `other`.
    #[inline]
    pub fn lerp(self, other: Self, t: F) -> Self {
        Self {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
            z: self.z + (other.z - self.z) * t,
        }
    }

    /// Converts this point to a vector from the origin.
    #[inline]
    pub fn to_vec(self) -> Vec3<F> {
        Vec3::new(self.x, self.y, self.z)
    }
}

// Point - Point = Vec3
impl<F: Float> Sub for Point3<F> {
    type Output = Vec3<F>;

    #[inline]
    fn sub(self, other: Self) -> Vec3<F> {
        Vec3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

// Point + Vec3 = Point
impl<F: Float> Add<Vec3<F>> for Point3<F> {
    type Output = Self;

    #[inline]
    fn add(self, v: Vec3<F>) -> Self {
        Self {
            x: self.x + v.x,
            y: self.y + v.y,
            z: self.z + v.z,
        }
    }
}

// Point - Vec3 = Point
impl<F: Float> Sub<Vec3<F>> for Point3<F> {
    type Output = Self;

    #[inline]
    fn sub(self, v: Vec3<F>) -> Self {
        Self {
            x: self.x - v.x,
            y: self.y - v.y,
            z: self.z - v.z,
        }
    }
}

impl<F: Float> Default for Point3<F> {
    fn default() -> Self {
        Self::origin()
    }
}

impl<F: Float> From<Vec3<F>> for Point3<F> {
    fn from(v: Vec3<F>) -> Self {
        Self {
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance() {
        let a: Point3<f64> = Point3::origin();
        let b = Point3::new(2.0, 3.0, 6.0);
        assert_eq!(a.distance_squared(b), 49.0);
        assert_eq!(a.distance(b), 7.0);
    }

    #[test]
    fn test_xy() {
        let p: Point3<f64> = Point3::xy(1.0, 2.0);
        assert_eq!(p.z, 0.0);
    }

    #[test]
    fn test_almost_equal() {
        let a: Point3<f64> = Point3::new(1.0, 1.0, 0.0);
        let b = Point3::new(1.0 + 1e-10, 1.0, 0.0);
        let c = Point3::new(1.1, 1.0, 0.0);
        assert!(a.almost_equal(b, 1e-8));
        assert!(!a.almost_equal(c, 1e-8));
    }

    #[test]
    fn test_lerp() {
        let a: Point3<f64> = Point3::origin();
        let b = Point3::new(10.0, 20.0, 30.0);
        let mid = a.lerp(b, 0.5);
        assert_eq!(mid.x, 5.0);
        assert_eq!(mid.y, 10.0);
        assert_eq!(mid.z, 15.0);
    }

    #[test]
    fn test_point_vector_arithmetic() {
        let a: Point3<f64> = Point3::new(1.0, 2.0, 3.0);
        let b = Point3::new(4.0, 6.0, 9.0);

        let v = b - a;
        assert_eq!(v.x, 3.0);
        assert_eq!(v.y, 4.0);
        assert_eq!(v.z, 6.0);

        let back = a + v;
        assert_eq!(back, b);

        let forth = b - v;
        assert_eq!(forth, a);
    }
}
