//! Greedy branch-on-conflict shortest-path search through a clearance
//! corridor.
//!
//! The engine keeps a pool of candidate paths, always growing the
//! shortest unfinished one. When the straight line from a path's tip to
//! the target leaves the corridor, the path branches toward correction
//! points taken from the offending boundary, and hopeless paths are
//! dropped. Once every surviving path reaches the target, redundant
//! waypoints are removed, the original (unadjusted) endpoints are
//! restored, and the shortest path wins.

use num_traits::Float;

use crate::area::{classify_point_in_loop, closest_point_on_loop, PointPosition};
use crate::config::{CONTAINMENT_TOLERANCE, DEFAULT_CLEARANCE, MAX_SEARCH_ITERATIONS, TIGHT_TOLERANCE};
use crate::containment::{segment_fully_inside, segment_intersects_loop};
use crate::corridor::build_corridor;
use crate::error::PathError;
use crate::intersect::intersect;
use crate::primitives::{Point3, Segment3};
use crate::region::{split_loops, Loop, Region};

/// Shortest walkable path between two points, honoring the default
/// clearance of [`DEFAULT_CLEARANCE`] (one foot in meters).
///
/// # Example
///
/// ```
/// use clearpath::{find_shortest_path, Point3, Region};
///
/// let room = Region::outer(vec![
///     Point3::xy(0.0, 0.0),
///     Point3::xy(10.0, 0.0),
///     Point3::xy(10.0, 10.0),
///     Point3::xy(0.0, 10.0),
/// ]);
/// let path = find_shortest_path(&room, Point3::xy(1.0, 1.0), Point3::xy(9.0, 9.0)).unwrap();
/// assert_eq!(path, vec![Point3::xy(1.0, 1.0), Point3::xy(9.0, 9.0)]);
/// ```
pub fn find_shortest_path<F: Float>(
    region: &Region<F>,
    source: Point3<F>,
    destination: Point3<F>,
) -> Result<Vec<Point3<F>>, PathError> {
    let clearance = F::from(DEFAULT_CLEARANCE).unwrap_or_else(F::zero);
    find_shortest_path_with_clearance(region, source, destination, clearance)
}

/// Shortest walkable path between two points with an explicit clearance.
///
/// The walkable region is shrunk by `clearance` on every boundary before
/// searching, so the returned path keeps at least that distance from
/// walls and holes (except near its endpoints, which are restored to the
/// caller's exact positions when the local geometry allows).
pub fn find_shortest_path_with_clearance<F: Float>(
    region: &Region<F>,
    source: Point3<F>,
    destination: Point3<F>,
    clearance: F,
) -> Result<Vec<Point3<F>>, PathError> {
    let corridor = build_corridor(region, clearance, -clearance, true)
        .ok_or(PathError::CorridorBuildFailed)?;

    let (original_inner, original_outer) = split_loops(region);
    let mut original_loops = original_inner;
    original_loops.extend(original_outer);

    let (corridor_inner, corridor_outer) = split_loops(&corridor);

    let adjusted_source = adjust_endpoint(source, &corridor_inner, &corridor_outer);
    let adjusted_destination = adjust_endpoint(destination, &corridor_inner, &corridor_outer);

    if !points_in_same_subarea(adjusted_source, adjusted_destination, &corridor_outer) {
        return Err(PathError::DisjointEndpoints);
    }

    let mut all_loops = corridor_inner;
    all_loops.extend(corridor_outer);

    let mut paths = vec![vec![adjusted_source]];
    grow_paths(&mut paths, &corridor, &all_loops, adjusted_destination)?;
    prune_redundant_waypoints(&mut paths, &corridor);
    restore_original_ends(&mut paths, source, destination, &original_loops);
    paths.retain(|p| !p.is_empty());

    match shortest_path_index(&paths, |_| true) {
        Some(i) => Ok(paths.swap_remove(i)),
        None => Err(PathError::NoPathFound),
    }
}

/// Total polyline length of a path.
pub fn path_length<F: Float>(path: &[Point3<F>]) -> F {
    path.windows(2)
        .fold(F::zero(), |acc, w| acc + w[0].distance(w[1]))
}

fn tight<F: Float>() -> F {
    F::from(TIGHT_TOLERANCE).unwrap_or_else(F::epsilon)
}

fn containment_tolerance<F: Float>() -> F {
    F::from(CONTAINMENT_TOLERANCE).unwrap_or_else(F::epsilon)
}

// Moves an endpoint onto the corridor boundary when it fell outside the
// walkable area after offsetting: first away from outer boundaries, then
// out of grown holes.
fn adjust_endpoint<F: Float>(
    point: Point3<F>,
    corridor_inner: &[Loop<F>],
    corridor_outer: &[Loop<F>],
) -> Point3<F> {
    let adjusted = adjust_to_closest_loop(corridor_outer, point, PointPosition::Out);
    if adjusted.almost_equal(point, tight()) {
        return adjust_to_closest_loop(corridor_inner, point, PointPosition::In);
    }
    adjusted
}

// Projects the point onto the nearest loop that classifies it as
// `offending`. A loop that does not consider the point offending cancels
// any adjustment found so far: with several disjoint sub-areas the point
// only moves when every candidate area agrees it is misplaced.
fn adjust_to_closest_loop<F: Float>(
    loops: &[Loop<F>],
    point: Point3<F>,
    offending: PointPosition,
) -> Point3<F> {
    let ctol = containment_tolerance();
    let mut min_distance = F::infinity();
    let mut adjusted = point;
    for lp in loops {
        if classify_point_in_loop(lp, point, ctol) == offending {
            if let Some(projection) = closest_point_on_loop(lp, point) {
                if point.distance(projection) < min_distance {
                    adjusted = projection;
                    min_distance = point.distance(adjusted);
                }
            }
        } else {
            adjusted = point;
            min_distance = F::zero();
        }
    }
    adjusted
}

// Two points can only be connected when no outer loop separates them.
fn points_in_same_subarea<F: Float>(
    p1: Point3<F>,
    p2: Point3<F>,
    outer_loops: &[Loop<F>],
) -> bool {
    let ctol = containment_tolerance();
    for lp in outer_loops {
        let pos1 = classify_point_in_loop(lp, p1, ctol);
        let pos2 = classify_point_in_loop(lp, p2, ctol);
        if pos1 != pos2 && (pos1 == PointPosition::Out || pos2 == PointPosition::Out) {
            return false;
        }
    }
    true
}

// Grows the path pool until every surviving path reaches the target.
fn grow_paths<F: Float>(
    paths: &mut Vec<Vec<Point3<F>>>,
    corridor: &Region<F>,
    loops: &[Loop<F>],
    target: Point3<F>,
) -> Result<(), PathError> {
    let ttol = tight();
    for _ in 0..MAX_SEARCH_ITERATIONS {
        let unfinished = |path: &[Point3<F>]| match path.last() {
            Some(last) => !last.almost_equal(target, ttol),
            None => false,
        };
        let Some(current) = shortest_path_index(paths, unfinished) else {
            return Ok(());
        };
        let last = match paths[current].last() {
            Some(p) => *p,
            None => continue,
        };

        if segment_fully_inside(corridor, Segment3::new(last, target)) {
            paths[current].push(target);
            continue;
        }

        let mut candidates = Vec::new();
        correction_points_by_closest_intersection(&mut candidates, loops, corridor, last, target);
        if candidates.is_empty() {
            correction_points_by_vertex_neighbors(&mut candidates, loops, last, target);
        }
        if branch_paths(paths, current, candidates) == 0 {
            // Dead end: nowhere new to go from here.
            paths.remove(current);
        }
        if paths.is_empty() {
            return Err(PathError::NoPathFound);
        }
    }
    Err(PathError::NoPathFound)
}

// Index of the shortest path satisfying `predicate`; ties keep the
// earliest path in the pool.
fn shortest_path_index<F: Float>(
    paths: &[Vec<Point3<F>>],
    predicate: impl Fn(&[Point3<F>]) -> bool,
) -> Option<usize> {
    let mut min_length = F::infinity();
    let mut shortest = None;
    for (i, path) in paths.iter().enumerate() {
        if !predicate(path) {
            continue;
        }
        let length = path_length(path);
        if length < min_length {
            min_length = length;
            shortest = Some(i);
        }
    }
    shortest
}

// The endpoints of the boundary edge nearest to `source` that blocks the
// straight line to `target`, filtered to those reachable within the
// corridor.
fn correction_points_by_closest_intersection<F: Float>(
    candidates: &mut Vec<Point3<F>>,
    loops: &[Loop<F>],
    corridor: &Region<F>,
    source: Point3<F>,
    target: Point3<F>,
) {
    let Some(edge) = closest_intersecting_edge(loops, Segment3::new(source, target)) else {
        return;
    };
    if edge.is_degenerate(tight()) {
        return;
    }
    if segment_fully_inside(corridor, Segment3::new(source, edge.start)) {
        candidates.push(edge.start);
    }
    if segment_fully_inside(corridor, Segment3::new(source, edge.end)) {
        candidates.push(edge.end);
    }
}

// Fallback for a source sitting on a boundary: walk to the neighbors of
// its vertex on every loop whose boundary still blocks the way.
fn correction_points_by_vertex_neighbors<F: Float>(
    candidates: &mut Vec<Point3<F>>,
    loops: &[Loop<F>],
    source: Point3<F>,
    target: Point3<F>,
) {
    let ttol = tight();
    // Transient copies: a source lying mid-edge becomes a vertex so its
    // neighbors exist, without mutating the search loops.
    let mut local: Vec<Loop<F>> = loops.to_vec();
    for lp in local.iter_mut() {
        lp.insert_if_on_edge(source, ttol);
    }
    for lp in &local {
        let Some(index) = lp.vertex_index_of(source, ttol) else {
            continue;
        };
        if !segment_intersects_loop(lp, Segment3::new(source, target), ttol) {
            continue;
        }
        let (before, after) = lp.neighbors(index);
        candidates.push(before);
        candidates.push(after);
    }
}

// The boundary edge intersecting `line` that lies closest to its start.
// Intersections touching the line's own endpoints do not count.
fn closest_intersecting_edge<F: Float>(
    loops: &[Loop<F>],
    line: Segment3<F>,
) -> Option<Segment3<F>> {
    let ttol = tight();
    let mut min_distance = F::infinity();
    let mut closest = None;
    for lp in loops {
        for i in 0..lp.len() {
            let edge = lp.edge(i);
            let Some(hit) = intersect(line, edge, ttol) else {
                continue;
            };
            let touches_end = |p: Point3<F>| {
                p.almost_equal(line.start, ttol) || p.almost_equal(line.end, ttol)
            };
            if touches_end(hit.start) || touches_end(hit.end) {
                continue;
            }
            let d = edge.distance_to_point(line.start);
            if d < min_distance {
                min_distance = d;
                closest = Some(edge);
            }
        }
    }
    closest
}

// Forks the current path toward each genuinely new candidate. All but the
// last candidate get a clone of the path as it was before branching; the
// last extends the current path in place. Returns how many candidates
// were used.
fn branch_paths<F: Float>(
    paths: &mut Vec<Vec<Point3<F>>>,
    current: usize,
    mut candidates: Vec<Point3<F>>,
) -> usize {
    let ttol = tight();
    candidates.retain(|c| {
        !paths
            .iter()
            .any(|path| path.iter().any(|p| p.almost_equal(*c, ttol)))
    });
    let added = candidates.len();
    let Some(last_candidate) = candidates.pop() else {
        return 0;
    };
    for c in candidates {
        let mut fork = paths[current].clone();
        fork.push(c);
        paths.push(fork);
    }
    paths[current].push(last_candidate);
    added
}

// Removes every interior waypoint whose neighbors connect directly inside
// the corridor, repeating until a full sweep removes nothing.
fn prune_redundant_waypoints<F: Float>(paths: &mut [Vec<Point3<F>>], corridor: &Region<F>) {
    let mut removed = true;
    while removed {
        removed = false;
        for path in paths.iter_mut() {
            let mut i = 1;
            while i + 1 < path.len() {
                let bridge = Segment3::new(path[i - 1], path[i + 1]);
                if segment_fully_inside(corridor, bridge) {
                    path.remove(i);
                    removed = true;
                } else {
                    i += 1;
                }
            }
        }
    }
}

// Swaps the adjusted endpoints back to the caller's originals where the
// original boundaries allow it, inserting an extra waypoint when the
// adjusted point must stay. A path whose end cannot reach the original
// endpoint at all is cleared and later discarded.
fn restore_original_ends<F: Float>(
    paths: &mut [Vec<Point3<F>>],
    source: Point3<F>,
    destination: Point3<F>,
    original_loops: &[Loop<F>],
) {
    let blocked = |from: Point3<F>, to: Point3<F>| {
        closest_intersecting_edge(original_loops, Segment3::new(from, to)).is_some()
    };
    for path in paths.iter_mut() {
        if path.is_empty() {
            continue;
        }
        let second = if path.len() >= 2 { path[1] } else { path[0] };
        if !blocked(source, second) {
            path[0] = source;
        } else if !blocked(source, path[0]) {
            path.insert(0, source);
        } else {
            path.clear();
            continue;
        }

        let n = path.len();
        let penultimate = if n >= 2 { path[n - 2] } else { path[0] };
        if !blocked(destination, penultimate) {
            path[n - 1] = destination;
        } else if !blocked(destination, path[n - 1]) {
            path.push(destination);
        } else {
            path.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn square_region(size: f64) -> Region<f64> {
        Region::outer(vec![
            Point3::xy(0.0, 0.0),
            Point3::xy(size, 0.0),
            Point3::xy(size, size),
            Point3::xy(0.0, size),
        ])
    }

    fn region_with_hole() -> Region<f64> {
        Region::composite(vec![
            Region::outer(vec![
                Point3::xy(0.0, 0.0),
                Point3::xy(10.0, 0.0),
                Point3::xy(10.0, 10.0),
                Point3::xy(0.0, 10.0),
            ]),
            Region::inner(vec![
                Point3::xy(4.0, 4.0),
                Point3::xy(6.0, 4.0),
                Point3::xy(6.0, 6.0),
                Point3::xy(4.0, 6.0),
            ]),
        ])
    }

    #[test]
    fn straight_shot_across_an_open_room() {
        let path =
            find_shortest_path(&square_region(10.0), Point3::xy(1.0, 1.0), Point3::xy(9.0, 9.0))
                .unwrap();
        assert_eq!(path.len(), 2);
        assert!(path[0].almost_equal(Point3::xy(1.0, 1.0), 1e-12));
        assert!(path[1].almost_equal(Point3::xy(9.0, 9.0), 1e-12));
        assert_relative_eq!(path_length(&path), 128.0_f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn detour_around_a_hole() {
        let region = region_with_hole();
        let source = Point3::xy(1.0, 5.0);
        let destination = Point3::xy(9.0, 5.0);
        let clearance = 0.5;
        let path =
            find_shortest_path_with_clearance(&region, source, destination, clearance).unwrap();

        assert!(path.len() >= 3, "expected a detour, got {path:?}");
        assert!(path[0].almost_equal(source, 1e-12));
        assert!(path[path.len() - 1].almost_equal(destination, 1e-12));

        // The detour hugs the grown hole corners.
        let total = path_length(&path);
        assert!(total > 8.0);
        assert_relative_eq!(total, 8.830951894845301, epsilon = 1e-6);

        // Every interior leg stays inside the corridor.
        let corridor = build_corridor(&region, clearance, -clearance, true).unwrap();
        for w in path.windows(2).skip(1).take(path.len().saturating_sub(3)) {
            assert!(segment_fully_inside(&corridor, Segment3::new(w[0], w[1])));
        }
    }

    #[test]
    fn detour_at_default_clearance_hugs_the_grown_corners() {
        let region = region_with_hole();
        let source = Point3::xy(1.0, 5.0);
        let destination = Point3::xy(9.0, 5.0);
        let path = find_shortest_path(&region, source, destination).unwrap();

        let c = DEFAULT_CLEARANCE;
        assert_eq!(path.len(), 4);
        assert!(path[0].almost_equal(source, 1e-12));
        assert!(path[3].almost_equal(destination, 1e-12));

        // The first corner sits on the near face of the grown hole, within
        // the clearance of (4, 4 - c) or (4, 6 + c).
        assert_relative_eq!(path[1].x, 4.0 - c, epsilon = 1e-9);
        let below = path[1].distance(Point3::xy(4.0, 4.0 - c));
        let above = path[1].distance(Point3::xy(4.0, 6.0 + c));
        assert!(below.min(above) <= c + 1e-9, "corner too far out: {:?}", path[1]);
        assert!(path_length(&path) > 8.0);
    }

    #[test]
    fn split_areas_refuse_to_connect() {
        let region = Region::composite(vec![
            Region::outer(vec![
                Point3::xy(0.0, 0.0),
                Point3::xy(4.0, 0.0),
                Point3::xy(4.0, 4.0),
                Point3::xy(0.0, 4.0),
            ]),
            Region::outer(vec![
                Point3::xy(6.0, 0.0),
                Point3::xy(10.0, 0.0),
                Point3::xy(10.0, 4.0),
                Point3::xy(6.0, 4.0),
            ]),
        ]);
        let result = find_shortest_path_with_clearance(
            &region,
            Point3::xy(2.0, 2.0),
            Point3::xy(8.0, 2.0),
            0.5,
        );
        assert_eq!(result, Err(PathError::DisjointEndpoints));
    }

    #[test]
    fn coincident_endpoints_yield_a_single_point() {
        let p = Point3::xy(5.0, 5.0);
        let path = find_shortest_path(&square_region(10.0), p, p).unwrap();
        assert_eq!(path, vec![p]);
    }

    #[test]
    fn oversized_clearance_fails_the_corridor() {
        let result = find_shortest_path(&square_region(0.5), Point3::xy(0.1, 0.1), Point3::xy(0.4, 0.4));
        assert_eq!(result, Err(PathError::CorridorBuildFailed));
    }

    #[test]
    fn sampled_points_along_the_path_stay_walkable() {
        let region = region_with_hole();
        let clearance = 0.5;
        let path = find_shortest_path_with_clearance(
            &region,
            Point3::xy(1.0, 5.0),
            Point3::xy(9.0, 5.0),
            clearance,
        )
        .unwrap();
        // The original region must contain everything the corridor allows.
        use crate::area::classify_point_in_region;
        for w in path.windows(2) {
            for k in 0..=100 {
                let t = k as f64 / 100.0;
                let p = Segment3::new(w[0], w[1]).point_at(t);
                assert_ne!(
                    classify_point_in_region(&region, p, 1e-6),
                    PointPosition::Out,
                    "left the region at {p:?}"
                );
            }
        }
    }

    #[test]
    fn pruning_leaves_a_settled_path_alone() {
        let region = region_with_hole();
        let clearance = 0.5;
        let path = find_shortest_path_with_clearance(
            &region,
            Point3::xy(1.0, 5.0),
            Point3::xy(9.0, 5.0),
            clearance,
        )
        .unwrap();
        let corridor = build_corridor(&region, clearance, -clearance, true).unwrap();
        let mut pool = vec![path.clone()];
        prune_redundant_waypoints(&mut pool, &corridor);
        assert_eq!(pool[0], path);
    }

    #[test]
    fn obstacles_never_shorten_the_path() {
        let source = Point3::xy(1.0, 5.0);
        let destination = Point3::xy(9.0, 5.0);
        let open =
            find_shortest_path_with_clearance(&square_region(10.0), source, destination, 0.5)
                .unwrap();
        let blocked =
            find_shortest_path_with_clearance(&region_with_hole(), source, destination, 0.5)
                .unwrap();
        assert!(path_length(&blocked) >= path_length(&open));
    }

    #[test]
    fn reversing_the_endpoints_mirrors_the_path() {
        // Endpoints below the hole's center make the detour under the hole
        // strictly shorter, so both directions must settle on that one
        // route.
        let region = region_with_hole();
        let a = Point3::xy(1.0, 4.5);
        let b = Point3::xy(9.0, 4.5);
        let forward = find_shortest_path_with_clearance(&region, a, b, 0.5).unwrap();
        let backward = find_shortest_path_with_clearance(&region, b, a, 0.5).unwrap();
        assert_relative_eq!(
            path_length(&forward),
            path_length(&backward),
            epsilon = 1e-9
        );
        assert_eq!(forward.len(), backward.len());
        for (f, b) in forward.iter().zip(backward.iter().rev()) {
            assert!(f.almost_equal(*b, 1e-9), "mismatch: {f:?} vs {b:?}");
        }
    }

    #[test]
    fn endpoints_outside_the_corridor_are_pulled_inside() {
        // Source right next to the wall, inside the region but outside the
        // corridor. The path must still start at the caller's point.
        let region = square_region(10.0);
        let source = Point3::xy(0.1, 5.0);
        let destination = Point3::xy(9.0, 5.0);
        let path =
            find_shortest_path_with_clearance(&region, source, destination, 0.5).unwrap();
        assert!(path[0].almost_equal(source, 1e-12));
        assert!(path[path.len() - 1].almost_equal(destination, 1e-12));
    }
}
