//! Clearance corridor construction.

use num_traits::Float;

use crate::area::{area_difference, area_offset, area_union, reduce_to_ccw};
use crate::region::{split_outer_inner, Region};

/// Shrinks the walkable area away from every boundary.
///
/// Outer boundaries move by `outer_offset` (negative shrinks the solid
/// area) and holes grow by `inner_offset`. With `merge` the offset pieces
/// are unioned per side and the grown holes are subtracted from the
/// shrunken outer area, yielding the final corridor. Returns `None` when
/// any boundary collapses under its offset.
pub fn build_corridor<F: Float>(
    region: &Region<F>,
    inner_offset: F,
    outer_offset: F,
    merge: bool,
) -> Option<Region<F>> {
    let offset = offset_children(region, inner_offset, outer_offset)?;
    if !merge {
        return Some(offset);
    }
    let (inner, outer) = split_outer_inner(&offset);
    let inner_union = union_all(inner);
    let outer_union = union_all(outer);
    match (inner_union, outer_union) {
        (Some(holes), Some(solid)) => Some(area_difference(&solid, &holes)),
        (None, Some(solid)) => Some(solid),
        (holes, None) => holes,
    }
}

fn offset_children<F: Float>(
    region: &Region<F>,
    inner_offset: F,
    outer_offset: F,
) -> Option<Region<F>> {
    match region {
        Region::Inner(_) => area_offset(&reduce_to_ccw(region), inner_offset),
        Region::Outer(_) => area_offset(&reduce_to_ccw(region), outer_offset),
        Region::Composite(children) => {
            let mut out = Vec::with_capacity(children.len());
            for child in children {
                out.push(offset_children(child, inner_offset, outer_offset)?);
            }
            Some(Region::Composite(out))
        }
    }
}

fn union_all<F: Float>(leaves: Vec<Region<F>>) -> Option<Region<F>> {
    let mut iter = leaves.into_iter();
    let first = iter.next()?;
    Some(iter.fold(first, |acc, next| area_union(&acc, &next)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::area::{classify_point_in_region, PointPosition};
    use crate::primitives::Point3;
    use crate::region::split_loops;

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
    fn corridor_pulls_away_from_all_boundaries() {
        let corridor = build_corridor(&region_with_hole(), 1.0, -1.0, true).unwrap();
        let eps = 1e-9;
        // Next to the outer wall: no longer walkable.
        assert_eq!(
            classify_point_in_region(&corridor, Point3::xy(0.5, 5.0), eps),
            PointPosition::Out
        );
        // Next to the hole: no longer walkable.
        assert_eq!(
            classify_point_in_region(&corridor, Point3::xy(3.5, 5.0), eps),
            PointPosition::Out
        );
        // Between the shrunken wall and the grown hole: walkable.
        assert_eq!(
            classify_point_in_region(&corridor, Point3::xy(2.0, 5.0), eps),
            PointPosition::In
        );
    }

    #[test]
    fn unmerged_corridor_keeps_per_child_shapes() {
        let corridor = build_corridor(&region_with_hole(), 1.0, -1.0, false).unwrap();
        let (inner, outer) = split_loops(&corridor);
        assert_eq!(inner.len(), 1);
        assert_eq!(outer.len(), 1);
        // The hole grew.
        assert!(inner[0].signed_area_xy().abs() > 4.0);
        // The outer shrank.
        assert!(outer[0].signed_area_xy().abs() < 100.0);
    }

    #[test]
    fn collapsing_offset_reports_failure() {
        let tiny = Region::outer(vec![
            Point3::xy(0.0, 0.0),
            Point3::xy(1.0, 0.0),
            Point3::xy(1.0, 1.0),
            Point3::xy(0.0, 1.0),
        ]);
        assert!(build_corridor(&tiny, 2.0, -2.0, true).is_none());
    }
}
