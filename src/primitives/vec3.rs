//! 3D vector type for directions and offsets.

use num_traits::Float;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A 3D vector representing a direction or offset.
///
/// Generic over floating-point types (`f32` or `f64`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec3<F> {
    pub x: F,
    pub y: F,
    pub z: F,
}

impl<F: Float> Vec3<F> {
    /// Creates a new vector.
    #[inline]
    pub fn new(x: F, y: F, z: F) -> Self {
        Self { x, y, z }
    }

    /// Creates a zero vector.
    #[inline]
    pub fn zero() -> Self {
        Self {
            x: F::zero(),
            y: F::zero(),
            z: F::zero(),
        }
    }

    /// Creates a unit vector along the X axis.
    #[inline]
    pub fn unit_x() -> Self {
        Self {
            x: F::one(),
            y: F::zero(),
            z: F::zero(),
        }
    }

    /// Computes the dot product with another vector.
    #[inline]
    pub fn dot(self, other: Self) -> F {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Computes the cross product with another vector.
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Computes the 2D cross product of the XY projections.
    ///
    /// Positive means `other` is counter-clockwise from `self` in the XY
    /// plane.
    #[inline]
    pub fn cross_xy(self, other: Self) -> F {
        self.x * other.y - self.y * other.x
    }

    /// Returns the squared magnitude (length squared).
    #[inline]
    pub fn magnitude_squared(self) -> F {
        self.dot(self)
    }

    /// Returns the magnitude (length) of the vector.
    #[inline]
    pub fn magnitude(self) -> F {
        self.magnitude_squared().sqrt()
    }

    /// Returns a normalized (unit length) vector.
    ///
    /// Returns `None` if the vector is zero or too small to normalize
    /// reliably.
    #[inline]
    pub fn normalize(self) -> Option<Self> {
        let mag = self.magnitude();
        if mag > F::epsilon() {
            Some(self / mag)
        } else {
            None
        }
    }

    /// Returns a vector with the same direction scaled to the given length.
    ///
    /// Returns `None` for a zero vector.
    #[inline]
    pub fn scale_to_length(self, length: F) -> Option<Self> {
        self.normalize().map(|unit| unit * length)
    }

    /// Tests whether this vector is parallel to another within tolerance.
    ///
    /// Parallel means the full 3D cross product is negligible relative to
    /// the magnitudes of the inputs. Anti-parallel vectors count as
    /// parallel.
    pub fn is_parallel_to(self, other: Self, eps: F) -> bool {
        let cross = self.cross(other);
        cross.magnitude_squared() <= eps * self.magnitude_squared() * other.magnitude_squared()
    }

    /// Returns the signed angle from this vector to `other` in the XY plane.
    ///
    /// Positive is counter-clockwise. Z components are ignored.
    #[inline]
    pub fn angle_to_xy(self, other: Self) -> F {
        self.cross_xy(other).atan2(
            self.x * other.x + self.y * other.y,
        )
    }
}

/// Computes the determinant of a 2x2 matrix given in row-major order.
///
/// ```text
/// det = | a11 a12 | = a11 * a22 - a21 * a12
///       | a21 a22 |
/// ```
#[inline]
pub fn det2x2<F: Float>(a11: F, a12: F, a21: F, a22: F) -> F {
    a11 * a22 - a21 * a12
}

impl<F: Float> Add for Vec3<F> {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl<F: Float> Sub for Vec3<F> {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl<F: Float> Mul<F> for Vec3<F> {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: F) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
            z: self.z * scalar,
        }
    }
}

impl<F: Float> Div<F> for Vec3<F> {
    type Output = Self;

    #[inline]
    fn div(self, scalar: F) -> Self {
        Self {
            x: self.x / scalar,
            y: self.y / scalar,
            z: self.z / scalar,
        }
    }
}

impl<F: Float> Neg for Vec3<F> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl<F: Float> Default for Vec3<F> {
    fn default() -> Self {
        Self::zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_dot_product() {
        let a: Vec3<f64> = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(a.dot(b), 32.0);
    }

    #[test]
    fn test_cross_xy() {
        let a: Vec3<f64> = Vec3::new(1.0, 0.0, 0.0);
        let b = Vec3::new(0.0, 1.0, 0.0);
        assert_eq!(a.cross_xy(b), 1.0);
        assert_eq!(b.cross_xy(a), -1.0);
    }

    #[test]
    fn test_magnitude() {
        let v: Vec3<f64> = Vec3::new(2.0, 3.0, 6.0);
        assert_eq!(v.magnitude_squared(), 49.0);
        assert_eq!(v.magnitude(), 7.0);
    }

    #[test]
    fn test_normalize() {
        let v: Vec3<f64> = Vec3::new(3.0, 0.0, 4.0);
        let n = v.normalize().unwrap();
        assert_relative_eq!(n.magnitude(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(n.x, 0.6, epsilon = 1e-12);
        assert_relative_eq!(n.z, 0.8, epsilon = 1e-12);
    }

    #[test]
    fn test_normalize_zero() {
        let v: Vec3<f64> = Vec3::zero();
        assert!(v.normalize().is_none());
    }

    #[test]
    fn test_scale_to_length() {
        let v: Vec3<f64> = Vec3::new(3.0, 4.0, 0.0);
        let scaled = v.scale_to_length(10.0).unwrap();
        assert_relative_eq!(scaled.magnitude(), 10.0, epsilon = 1e-12);
        assert_relative_eq!(scaled.x, 6.0, epsilon = 1e-12);
        assert_relative_eq!(scaled.y, 8.0, epsilon = 1e-12);
    }

    #[test]
    fn test_is_parallel_to() {
        let a: Vec3<f64> = Vec3::new(1.0, 2.0, 0.0);
        let b = Vec3::new(3.0, 6.0, 0.0);
        let c = Vec3::new(-2.0, -4.0, 0.0);
        let d = Vec3::new(1.0, 0.0, 0.0);
        assert!(a.is_parallel_to(b, 1e-8));
        assert!(a.is_parallel_to(c, 1e-8));
        assert!(!a.is_parallel_to(d, 1e-8));
    }

    #[test]
    fn test_angle_to_xy() {
        let x: Vec3<f64> = Vec3::unit_x();
        let y = Vec3::new(0.0, 1.0, 0.0);
        assert_relative_eq!(x.angle_to_xy(y), std::f64::consts::FRAC_PI_2, epsilon = 1e-12);
        assert_relative_eq!(y.angle_to_xy(x), -std::f64::consts::FRAC_PI_2, epsilon = 1e-12);
    }

    #[test]
    fn test_det2x2() {
        assert_eq!(det2x2(1.0_f64, 2.0, 3.0, 4.0), -2.0);
        assert_eq!(det2x2(2.0_f64, 0.0, 0.0, 2.0), 4.0);
    }

    #[test]
    fn test_arithmetic() {
        let a: Vec3<f64> = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);

        let sum = a + b;
        assert_eq!(sum.x, 5.0);
        assert_eq!(sum.z, 9.0);

        let diff = b - a;
        assert_eq!(diff.x, 3.0);

        let scaled = a * 2.0;
        assert_eq!(scaled.y, 4.0);

        let divided = b / 2.0;
        assert_eq!(divided.x, 2.0);

        let neg = -a;
        assert_eq!(neg.z, -3.0);
    }
}
