//! Point-versus-area classification in the XY plane.

use num_traits::Float;

use crate::primitives::{Point3, Segment3};
use crate::region::{split_loops, Loop, Region};

/// Position of a point relative to a planar area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointPosition {
    /// Strictly inside the area.
    In,
    /// Within tolerance of the boundary.
    On,
    /// Strictly outside the area.
    Out,
    /// The query could not be answered (degenerate loop, empty region).
    Unknown,
}

/// Classifies `point` against a single loop by XY ray casting.
///
/// A point within `eps` (measured in the XY plane) of any boundary edge
/// reports [`PointPosition::On`]. Loops with fewer than three vertices
/// report [`PointPosition::Unknown`].
pub fn classify_point_in_loop<F: Float>(
    lp: &Loop<F>,
    point: Point3<F>,
    eps: F,
) -> PointPosition {
    let n = lp.len();
    if n < 3 {
        return PointPosition::Unknown;
    }
    for i in 0..n {
        if xy_distance_to_edge(point, lp.edge(i)) <= eps {
            return PointPosition::On;
        }
    }
    // Even-odd crossing count on a ray toward +X.
    let mut inside = false;
    for i in 0..n {
        let a = lp.points[i];
        let b = lp.points[(i + 1) % n];
        if (a.y > point.y) != (b.y > point.y) {
            let t = (point.y - a.y) / (b.y - a.y);
            let x = a.x + t * (b.x - a.x);
            if point.x < x {
                inside = !inside;
            }
        }
    }
    if inside {
        PointPosition::In
    } else {
        PointPosition::Out
    }
}

/// Classifies `point` against a full region, honoring holes.
///
/// The region boundary (outer or inner) wins: a point within `eps` of any
/// loop is [`PointPosition::On`]. Otherwise the point is `In` when it lies
/// inside some outer loop and inside no inner loop.
pub fn classify_point_in_region<F: Float>(
    region: &Region<F>,
    point: Point3<F>,
    eps: F,
) -> PointPosition {
    let (inner, outer) = split_loops(region);
    if inner.is_empty() && outer.is_empty() {
        return PointPosition::Unknown;
    }
    for lp in inner.iter().chain(outer.iter()) {
        if classify_point_in_loop(lp, point, eps) == PointPosition::On {
            return PointPosition::On;
        }
    }
    let in_outer = outer
        .iter()
        .any(|lp| classify_point_in_loop(lp, point, eps) == PointPosition::In);
    if !in_outer {
        return PointPosition::Out;
    }
    let in_inner = inner
        .iter()
        .any(|lp| classify_point_in_loop(lp, point, eps) == PointPosition::In);
    if in_inner {
        PointPosition::Out
    } else {
        PointPosition::In
    }
}

/// Projects `point` onto the closest boundary edge of `lp`.
///
/// Returns `None` for loops without edges.
pub fn closest_point_on_loop<F: Float>(lp: &Loop<F>, point: Point3<F>) -> Option<Point3<F>> {
    let mut best: Option<(Point3<F>, F)> = None;
    for i in 0..lp.len() {
        let (candidate, _) = lp.edge(i).closest_point(point);
        let d = point.distance_squared(candidate);
        match best {
            Some((_, best_d)) if best_d <= d => {}
            _ => best = Some((candidate, d)),
        }
    }
    best.map(|(p, _)| p)
}

/// Projects `point` onto the closest boundary loop of the whole region.
///
/// Inner and outer boundaries compete equally. Returns `None` for a
/// region without loops.
pub fn closest_point_on_region_boundary<F: Float>(
    region: &Region<F>,
    point: Point3<F>,
) -> Option<Point3<F>> {
    let (inner, outer) = split_loops(region);
    let mut best: Option<(Point3<F>, F)> = None;
    for lp in inner.iter().chain(outer.iter()) {
        let Some(candidate) = closest_point_on_loop(lp, point) else {
            continue;
        };
        let d = point.distance_squared(candidate);
        match best {
            Some((_, best_d)) if best_d <= d => {}
            _ => best = Some((candidate, d)),
        }
    }
    best.map(|(p, _)| p)
}

fn xy_distance_to_edge<F: Float>(point: Point3<F>, edge: Segment3<F>) -> F {
    let flat = Segment3::new(
        Point3::xy(edge.start.x, edge.start.y),
        Point3::xy(edge.end.x, edge.end.y),
    );
    flat.distance_to_point(Point3::xy(point.x, point.y))
}
