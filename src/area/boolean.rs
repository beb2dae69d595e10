//! Boolean union and difference of planar areas.
//!
//! Containment and disjoint configurations are handled exactly. Partially
//! overlapping loops are merged with a vertex-collection approximation:
//! keep the vertices of each loop outside the other (or outside the hole,
//! for differences), add the pairwise edge intersection points, and order
//! the result by angle around the centroid.

use num_traits::Float;

use crate::config::TIGHT_TOLERANCE;
use crate::intersect::intersect;
use crate::primitives::Point3;
use crate::region::{split_loops, Loop, Region};

use super::classify::{classify_point_in_loop, PointPosition};

/// Union of two solid areas.
///
/// Both operands are read as solid regardless of their boundary tag; the
/// result carries the tag of `a`. Disjoint operands produce a composite of
/// the untouched loops.
pub fn area_union<F: Float>(a: &Region<F>, b: &Region<F>) -> Region<F> {
    let tag_inner = leading_tag_is_inner(a);
    let mut loops = solid_loops(a);
    loops.extend(solid_loops(b));
    let merged = merge_until_stable(loops);
    assemble(merged, tag_inner)
}

/// Subtracts the `inner` area from the `outer` area.
///
/// Holes fully contained in an outer loop survive as inner children. Holes
/// fully outside every outer loop are dropped. A hole crossing an outer
/// boundary clips that boundary instead of becoming a child.
pub fn area_difference<F: Float>(outer: &Region<F>, inner: &Region<F>) -> Region<F> {
    let eps = tight();
    let mut outers = solid_loops(outer);
    let mut holes = Vec::new();

    'hole: for hole in solid_loops(inner) {
        for out in outers.iter_mut() {
            if loops_intersect(out, &hole, eps) {
                *out = clip_difference(out, &hole);
                continue 'hole;
            }
            if loop_contains(out, &hole, eps) {
                holes.push(hole);
                continue 'hole;
            }
        }
        // Fully outside the solid area: nothing to subtract from.
    }

    let mut children: Vec<Region<F>> = outers.into_iter().map(Region::Outer).collect();
    children.extend(holes.into_iter().map(Region::Inner));
    if children.len() == 1 {
        children.pop().unwrap_or(Region::Composite(Vec::new()))
    } else {
        Region::Composite(children)
    }
}

fn tight<F: Float>() -> F {
    F::from(TIGHT_TOLERANCE).unwrap_or_else(F::epsilon)
}

fn leading_tag_is_inner<F: Float>(region: &Region<F>) -> bool {
    let (inner, outer) = split_loops(region);
    !inner.is_empty() && outer.is_empty()
}

fn solid_loops<F: Float>(region: &Region<F>) -> Vec<Loop<F>> {
    let (mut inner, outer) = split_loops(region);
    inner.extend(outer);
    inner
}

fn assemble<F: Float>(loops: Vec<Loop<F>>, tag_inner: bool) -> Region<F> {
    let wrap = |lp| {
        if tag_inner {
            Region::Inner(lp)
        } else {
            Region::Outer(lp)
        }
    };
    let mut children: Vec<Region<F>> = loops.into_iter().map(wrap).collect();
    if children.len() == 1 {
        children.pop().unwrap_or(Region::Composite(Vec::new()))
    } else {
        Region::Composite(children)
    }
}

// Merge loop pairs until no pair overlaps or nests.
fn merge_until_stable<F: Float>(mut loops: Vec<Loop<F>>) -> Vec<Loop<F>> {
    let eps = tight();
    loops.retain(|lp| lp.len() >= 3);
    let mut merged = true;
    while merged {
        merged = false;
        'outer: for i in 0..loops.len() {
            for j in (i + 1)..loops.len() {
                if let Some(union) = union_pair(&loops[i], &loops[j], eps) {
                    loops[i] = union;
                    loops.remove(j);
                    merged = true;
                    break 'outer;
                }
            }
        }
    }
    loops
}

// Union of two loops, or `None` when they are disjoint.
fn union_pair<F: Float>(a: &Loop<F>, b: &Loop<F>, eps: F) -> Option<Loop<F>> {
    let crossings = edge_intersections(a, b, eps);
    if crossings.is_empty() {
        if loop_contains(a, b, eps) {
            return Some(a.clone());
        }
        if loop_contains(b, a, eps) {
            return Some(b.clone());
        }
        return None;
    }

    let mut collected = crossings;
    collected.extend(vertices_with_position(a, b, PointPosition::Out, eps));
    collected.extend(vertices_with_position(b, a, PointPosition::Out, eps));
    Some(angular_hull(collected, eps))
}

// Outer loop with a crossing hole carved out of it, approximated by the
// outer vertices that survive, the hole vertices that reach inside, and
// the boundary crossings.
fn clip_difference<F: Float>(outer: &Loop<F>, hole: &Loop<F>) -> Loop<F> {
    let eps = tight();
    let mut collected = edge_intersections(outer, hole, eps);
    collected.extend(vertices_with_position(outer, hole, PointPosition::Out, eps));
    collected.extend(vertices_with_position(hole, outer, PointPosition::In, eps));
    angular_hull(collected, eps)
}

fn loops_intersect<F: Float>(a: &Loop<F>, b: &Loop<F>, eps: F) -> bool {
    !edge_intersections(a, b, eps).is_empty()
}

// True when every vertex of `candidate` is inside or on `container`.
fn loop_contains<F: Float>(container: &Loop<F>, candidate: &Loop<F>, eps: F) -> bool {
    !candidate.is_empty()
        && candidate
            .points
            .iter()
            .all(|p| classify_point_in_loop(container, *p, eps) != PointPosition::Out)
}

fn edge_intersections<F: Float>(a: &Loop<F>, b: &Loop<F>, eps: F) -> Vec<Point3<F>> {
    let mut out = Vec::new();
    for i in 0..a.len() {
        for j in 0..b.len() {
            if let Some(hit) = intersect(a.edge(i), b.edge(j), eps) {
                out.push(hit.start);
                if !hit.start.almost_equal(hit.end, eps) {
                    out.push(hit.end);
                }
            }
        }
    }
    out
}

fn vertices_with_position<F: Float>(
    of: &Loop<F>,
    against: &Loop<F>,
    wanted: PointPosition,
    eps: F,
) -> Vec<Point3<F>> {
    of.points
        .iter()
        .copied()
        .filter(|p| classify_point_in_loop(against, *p, eps) == wanted)
        .collect()
}

// Deduplicates the collected points and orders them counterclockwise
// around their centroid.
fn angular_hull<F: Float>(mut points: Vec<Point3<F>>, eps: F) -> Loop<F> {
    let mut unique: Vec<Point3<F>> = Vec::with_capacity(points.len());
    for p in points.drain(..) {
        if !unique.iter().any(|q| q.almost_equal(p, eps)) {
            unique.push(p);
        }
    }
    if unique.len() < 3 {
        return Loop::new(unique);
    }

    let count = F::from(unique.len()).unwrap_or_else(F::one);
    let cx = unique.iter().fold(F::zero(), |s, p| s + p.x) / count;
    let cy = unique.iter().fold(F::zero(), |s, p| s + p.y) / count;
    unique.sort_by(|p, q| {
        let ap = (p.y - cy).atan2(p.x - cx);
        let aq = (q.y - cy).atan2(q.x - cx);
        ap.partial_cmp(&aq).unwrap_or(core::cmp::Ordering::Equal)
    });
    Loop::new(unique)
}
