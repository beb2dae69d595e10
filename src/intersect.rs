//! Segment/segment intersection, including parallel and collinear cases.

use crate::primitives::{det2x2, point_from_parametric_form, Segment3};
use num_traits::Float;

/// Computes the intersection of two segments.
///
/// Returns `None` when the segments do not meet. A transversal crossing
/// yields a degenerate result segment (both endpoints equal to the
/// intersection point); collinear overlapping segments yield the overlap
/// span.
///
/// The system is solved in the XY plane with Cramer's rule and the implied
/// Z coordinates are then checked against each other, so segments that
/// cross in projection but are skew in 3D do not intersect.
///
/// # Example
///
/// ```
/// use clearpath::config::TIGHT_TOLERANCE;
/// use clearpath::intersect::intersect;
/// use clearpath::primitives::{Point3, Segment3};
///
/// let s1 = Segment3::new(Point3::xy(0.0, 0.0), Point3::xy(1.0, 1.0));
/// let s2 = Segment3::new(Point3::xy(0.0, 1.0), Point3::xy(1.0, 0.0));
///
/// let hit = intersect(s1, s2, TIGHT_TOLERANCE).unwrap();
/// assert!(hit.is_degenerate(TIGHT_TOLERANCE));
/// assert!((hit.start.x - 0.5).abs() < 1e-12);
/// ```
pub fn intersect<F: Float>(s1: Segment3<F>, s2: Segment3<F>, eps: F) -> Option<Segment3<F>> {
    let (v1, d1) = s1.parametric_form();
    let (v2, d2) = s2.parametric_form();

    // The segments intersect when there are a and b with
    // v1 + a*d1 = v2 + b*d2. Solving the XY rows of that system:
    //
    //   | d1.x  -d2.x | | a |   | v2.x - v1.x |
    //   | d1.y  -d2.y | | b | = | v2.y - v1.y |
    let det = det2x2(d1.x, -d2.x, d1.y, -d2.y);
    if det == F::zero() {
        // Parallel in XY: either never intersecting or coincident.
        return coincident_overlap(s1, s2, eps);
    }

    let det_a = det2x2(v2.x - v1.x, -d2.x, v2.y - v1.y, -d2.y);
    let a = det_a / det;

    let det_b = det2x2(d1.x, v2.x - v1.x, d1.y, v2.y - v1.y);
    let b = det_b / det;

    // The XY solution must also hold on the Z axis, else the segments are
    // skew in 3D.
    let z1 = v1.z + a * d1.z;
    let z2 = v2.z + b * d2.z;
    if (z1 - z2).abs() > eps {
        return None;
    }

    let point = point_from_parametric_form(v1, d1, a);

    // So far only the infinite-line extensions intersect; the point must lie
    // within the bounding range of both actual segments.
    if !s1.range().contains_with_tolerance(point, eps)
        || !s2.range().contains_with_tolerance(point, eps)
    {
        return None;
    }

    Some(Segment3::from_point(point))
}

/// Intersection of two XY-parallel segments.
///
/// If the carrying lines coincide, the result is the intersection of both
/// segments' bounding ranges; otherwise there is no intersection.
fn coincident_overlap<F: Float>(s1: Segment3<F>, s2: Segment3<F>, eps: F) -> Option<Segment3<F>> {
    if !s1.direction().is_parallel_to(s2.direction(), eps) {
        return None;
    }

    let (v2, d2) = s2.parametric_form();
    let p = s1.start;

    // Parametrize s1's start against s2: t such that p = v2 + t*d2, solved
    // on the first axis where d2 is non-zero.
    let t = if d2.x != F::zero() {
        (p.x - v2.x) / d2.x
    } else if d2.y != F::zero() {
        (p.y - v2.y) / d2.y
    } else if d2.z != F::zero() {
        (p.z - v2.z) / d2.z
    } else {
        // s2 is a single point.
        let point = s2.start;
        if !s1.range().contains_with_tolerance(point, eps) {
            return None;
        }
        return Some(Segment3::from_point(point));
    };

    // The lines coincide only if s2's parametric form predicts s1's start.
    let predicted = point_from_parametric_form(v2, d2, t);
    if !p.almost_equal(predicted, eps) {
        return None;
    }

    let overlap = s1.range().intersection(&s2.range())?;
    Some(Segment3::new(overlap.low, overlap.high))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TIGHT_TOLERANCE;
    use crate::primitives::Point3;
    use approx::assert_relative_eq;

    fn seg(x1: f64, y1: f64, x2: f64, y2: f64) -> Segment3<f64> {
        Segment3::new(Point3::xy(x1, y1), Point3::xy(x2, y2))
    }

    #[test]
    fn test_crossing_diagonals() {
        let hit = intersect(seg(0.0, 0.0, 1.0, 1.0), seg(0.0, 1.0, 1.0, 0.0), TIGHT_TOLERANCE)
            .unwrap();
        assert!(hit.is_degenerate(TIGHT_TOLERANCE));
        assert_relative_eq!(hit.start.x, 0.5, epsilon = 1e-12);
        assert_relative_eq!(hit.start.y, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_collinear_overlap() {
        let hit = intersect(seg(0.0, 0.0, 5.0, 0.0), seg(3.0, 0.0, 8.0, 0.0), TIGHT_TOLERANCE)
            .unwrap();
        assert_relative_eq!(hit.start.x, 3.0, epsilon = 1e-12);
        assert_relative_eq!(hit.end.x, 5.0, epsilon = 1e-12);
        assert_relative_eq!(hit.start.y, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_collinear_disjoint() {
        assert!(intersect(seg(0.0, 0.0, 2.0, 0.0), seg(5.0, 0.0, 8.0, 0.0), TIGHT_TOLERANCE)
            .is_none());
    }

    #[test]
    fn test_parallel_not_collinear() {
        assert!(intersect(seg(0.0, 0.0, 5.0, 0.0), seg(0.0, 1.0, 5.0, 1.0), TIGHT_TOLERANCE)
            .is_none());
    }

    #[test]
    fn test_lines_cross_outside_segments() {
        // The infinite lines meet at (5, 5), beyond both segments.
        assert!(intersect(seg(0.0, 0.0, 1.0, 1.0), seg(10.0, 0.0, 6.0, 4.0), TIGHT_TOLERANCE)
            .is_none());
    }

    #[test]
    fn test_t_junction_endpoint() {
        let hit = intersect(seg(0.0, 0.0, 10.0, 0.0), seg(5.0, -5.0, 5.0, 0.0), TIGHT_TOLERANCE)
            .unwrap();
        assert!(hit.is_degenerate(TIGHT_TOLERANCE));
        assert_relative_eq!(hit.start.x, 5.0, epsilon = 1e-12);
        assert_relative_eq!(hit.start.y, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_skew_in_3d() {
        // Crossing in XY projection but at different heights.
        let s1 = Segment3::new(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 1.0, 0.0));
        let s2 = Segment3::new(Point3::new(0.0, 1.0, 2.0), Point3::new(1.0, 0.0, 2.0));
        assert!(intersect(s1, s2, TIGHT_TOLERANCE).is_none());
    }

    #[test]
    fn test_second_segment_single_point() {
        let point = Segment3::from_point(Point3::xy(2.0, 0.0));
        let hit = intersect(seg(0.0, 0.0, 5.0, 0.0), point, TIGHT_TOLERANCE).unwrap();
        assert!(hit.is_degenerate(TIGHT_TOLERANCE));
        assert_relative_eq!(hit.start.x, 2.0, epsilon = 1e-12);

        let off = Segment3::from_point(Point3::xy(2.0, 1.0));
        assert!(intersect(seg(0.0, 0.0, 5.0, 0.0), off, TIGHT_TOLERANCE).is_none());
    }
}
