//! Directed offsetting of planar areas with miter joins.

use num_traits::Float;

use crate::primitives::{det2x2, Point3, Vec3};
use crate::region::{Loop, Region};

/// Joins sharper than this multiple of the offset distance get beveled.
const MITER_LIMIT: f64 = 4.0;

/// Rewinds every loop in the region counterclockwise.
pub fn reduce_to_ccw<F: Float>(region: &Region<F>) -> Region<F> {
    match region {
        Region::Outer(lp) => {
            let mut lp = lp.clone();
            lp.ensure_ccw();
            Region::Outer(lp)
        }
        Region::Inner(lp) => {
            let mut lp = lp.clone();
            lp.ensure_ccw();
            Region::Inner(lp)
        }
        Region::Composite(children) => {
            Region::Composite(children.iter().map(reduce_to_ccw).collect())
        }
    }
}

/// Offsets every loop of a counterclockwise region by `distance`.
///
/// Positive distances grow the area, negative distances shrink it. Returns
/// `None` when any loop collapses (fewer than three usable vertices, or the
/// shrunken loop inverts its winding).
pub fn area_offset<F: Float>(region: &Region<F>, distance: F) -> Option<Region<F>> {
    match region {
        Region::Outer(lp) => offset_loop(lp, distance).map(Region::Outer),
        Region::Inner(lp) => offset_loop(lp, distance).map(Region::Inner),
        Region::Composite(children) => {
            let mut out = Vec::with_capacity(children.len());
            for child in children {
                out.push(area_offset(child, distance)?);
            }
            Some(Region::Composite(out))
        }
    }
}

fn offset_loop<F: Float>(lp: &Loop<F>, distance: F) -> Option<Loop<F>> {
    let n = lp.len();
    if n < 3 {
        return None;
    }
    let mut ccw = lp.clone();
    ccw.ensure_ccw();

    let miter_limit = F::from(MITER_LIMIT)?;
    // Per vertex: the point ending the incoming offset edge and the point
    // starting the outgoing one (equal for a miter join, distinct for a
    // bevel).
    let mut joins: Vec<(Point3<F>, Point3<F>)> = Vec::with_capacity(n);
    for i in 0..n {
        let prev = ccw.points[(i + n - 1) % n];
        let curr = ccw.points[i];
        let next = ccw.points[(i + 1) % n];

        let n1 = outward_normal(prev, curr)?;
        let n2 = outward_normal(curr, next)?;

        let a1 = prev + n1 * distance;
        let a2 = curr + n2 * distance;
        let d1 = curr - prev;
        let d2 = next - curr;

        // Intersect the two offset edge lines.
        let det = det2x2(d1.x, -d2.x, d1.y, -d2.y);
        if det.abs() <= F::epsilon() * (d1.magnitude() * d2.magnitude()) {
            let p = curr + n1 * distance;
            joins.push((p, p));
            continue;
        }
        let rhs = a2 - a1;
        let t = det2x2(rhs.x, -d2.x, rhs.y, -d2.y) / det;
        let miter = a1 + d1 * t;
        if curr.distance(miter) > miter_limit * distance.abs() {
            joins.push((curr + n1 * distance, curr + n2 * distance));
        } else {
            joins.push((miter, miter));
        }
    }

    // An offset edge that stalls or reverses against its source edge means
    // the loop collapsed through itself. Winding alone cannot detect this:
    // over-shrinking point-reflects every corner through the center, which
    // keeps the loop CCW.
    for i in 0..n {
        let source = ccw.points[(i + 1) % n] - ccw.points[i];
        let shifted = joins[(i + 1) % n].0 - joins[i].1;
        if shifted.dot(source) <= F::zero() {
            return None;
        }
    }

    let mut points = Vec::with_capacity(n);
    for (incoming, outgoing) in joins {
        points.push(incoming);
        if outgoing != incoming {
            points.push(outgoing);
        }
    }

    let result = Loop::new(points);
    if result.len() < 3 || result.signed_area_xy() <= F::zero() {
        return None;
    }
    Some(result)
}

// Unit normal pointing away from the interior of a counterclockwise loop.
fn outward_normal<F: Float>(a: Point3<F>, b: Point3<F>) -> Option<Vec3<F>> {
    let d = b - a;
    Vec3::new(d.y, -d.x, F::zero()).normalize()
}
