//! Segment-in-area containment for the walkable region.

use num_traits::Float;

use crate::area::{classify_point_in_loop, classify_point_in_region, PointPosition};
use crate::config::CONTAINMENT_TOLERANCE;
use crate::intersect::intersect;
use crate::primitives::{Frame, Point3, Segment3};
use crate::region::{split_loops, Loop, Region};

/// Decides whether `segment` lies entirely inside the walkable area.
///
/// Both endpoints must classify inside or on the region. The segment is
/// then mapped onto the unit X axis, every region loop is carried into
/// that frame, and containment reduces to inspecting where each loop
/// crosses the Y = 0 line:
///
/// - a crossing strictly between X = 0 and X = 1 (beyond tolerance) means
///   the segment pierces a boundary, so it is not contained;
/// - a crossing at either end means the boundary merely touches an
///   endpoint, and a copy of the segment shrunk away from both ends is
///   re-classified to decide which side it continues on.
pub fn segment_fully_inside<F: Float>(region: &Region<F>, segment: Segment3<F>) -> bool {
    let ctol = containment_tolerance();
    if classify_point_in_region(region, segment.start, ctol) == PointPosition::Out {
        return false;
    }
    if classify_point_in_region(region, segment.end, ctol) == PointPosition::Out {
        return false;
    }
    let Some(frame) = Frame::to_unit_x(segment) else {
        // Single-point segment: the endpoint classification above decides.
        return true;
    };

    let (inner, outer) = split_loops(region);
    let inner: Vec<Loop<F>> = inner.iter().map(|lp| transformed(lp, &frame)).collect();
    let outer: Vec<Loop<F>> = outer.iter().map(|lp| transformed(lp, &frame)).collect();

    // Inside at least one outer loop, outside every inner loop.
    segment_avoids(&outer, segment, &frame, PointPosition::Out, false)
        && segment_avoids(&inner, segment, &frame, PointPosition::In, true)
}

/// True if `line` crosses a boundary edge of `lp` somewhere other than at
/// its own endpoints.
pub fn segment_intersects_loop<F: Float>(lp: &Loop<F>, line: Segment3<F>, eps: F) -> bool {
    for i in 0..lp.len() {
        let Some(hit) = intersect(line, lp.edge(i), eps) else {
            continue;
        };
        let touches_end =
            |p: Point3<F>| p.almost_equal(line.start, eps) || p.almost_equal(line.end, eps);
        if touches_end(hit.start) || touches_end(hit.end) {
            continue;
        }
        return true;
    }
    false
}

fn containment_tolerance<F: Float>() -> F {
    F::from(CONTAINMENT_TOLERANCE).unwrap_or_else(F::epsilon)
}

// Checks that the segment (already mapped to the unit X axis) never ends up
// in the `forbidden` position relative to the given loops. With
// `require_all` the verdict must hold for every loop, otherwise one loop
// suffices.
fn segment_avoids<F: Float>(
    loops: &[Loop<F>],
    segment: Segment3<F>,
    frame: &Frame<F>,
    forbidden: PointPosition,
    require_all: bool,
) -> bool {
    let ctol = containment_tolerance();
    let one = F::one();
    let mut verdict = require_all;
    for lp in loops {
        let crossings = x_axis_crossings(lp, ctol);
        if crossings
            .iter()
            .any(|p| p.x - ctol > F::zero() && p.x + ctol < one)
        {
            // The boundary cuts through the segment interior.
            return false;
        }
        let mut current = true;
        let touches_end = crossings
            .iter()
            .any(|p| p.x.abs() <= ctol || (p.x - one).abs() <= ctol);
        if touches_end {
            let shrunk = frame.apply_segment(segment.shrink_from_both_ends(ctol));
            current = classify_point_in_loop(lp, shrunk.start, ctol) != forbidden
                && classify_point_in_loop(lp, shrunk.end, ctol) != forbidden;
        }
        verdict = if require_all {
            verdict && current
        } else {
            verdict || current
        };
        if require_all && !verdict {
            return false;
        }
    }
    verdict
}

// Points where the loop boundary meets the Y = 0 line: vertices within
// tolerance of the line, plus proper crossings of edges whose endpoints
// sit on opposite sides.
fn x_axis_crossings<F: Float>(lp: &Loop<F>, tol: F) -> Vec<Point3<F>> {
    let n = lp.len();
    let mut crossings = Vec::new();
    for p in &lp.points {
        if p.y.abs() <= tol {
            crossings.push(*p);
        }
    }
    for i in 0..n {
        let a = lp.points[i];
        let b = lp.points[(i + 1) % n];
        if a.y.abs() <= tol || b.y.abs() <= tol {
            continue;
        }
        if (a.y > F::zero()) != (b.y > F::zero()) {
            let v = b - a;
            let k = -a.y / v.y;
            crossings.push(a + v * k);
        }
    }
    crossings
}

fn transformed<F: Float>(lp: &Loop<F>, frame: &Frame<F>) -> Loop<F> {
    Loop {
        points: lp.points.iter().map(|p| frame.apply(*p)).collect(),
    }
}
