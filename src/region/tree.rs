//! The region tree and its decomposition into flat loop lists.

use super::Loop;
use num_traits::Float;

/// A planar region with holes, possibly composed of disjoint sub-areas.
#[derive(Debug, Clone, PartialEq)]
pub enum Region<F> {
    /// A loop bounding solid area.
    Outer(Loop<F>),
    /// A loop bounding a hole (area to subtract).
    Inner(Loop<F>),
    /// A group of child regions.
    Composite(Vec<Region<F>>),
}

impl<F: Float> Region<F> {
    /// Creates an outer region from a vertex list.
    pub fn outer(points: Vec<crate::primitives::Point3<F>>) -> Self {
        Region::Outer(Loop::new(points))
    }

    /// Creates an inner (hole) region from a vertex list.
    pub fn inner(points: Vec<crate::primitives::Point3<F>>) -> Self {
        Region::Inner(Loop::new(points))
    }

    /// Groups child regions under a composite node.
    pub fn composite(children: Vec<Region<F>>) -> Self {
        Region::Composite(children)
    }

    /// Returns true if the region contains no loops at all.
    pub fn is_empty(&self) -> bool {
        match self {
            Region::Outer(lp) | Region::Inner(lp) => lp.is_empty(),
            Region::Composite(children) => children.iter().all(Region::is_empty),
        }
    }
}

/// Flattens a region tree into its inner and outer leaves.
///
/// Returns `(inner, outer)` with each leaf cloned independently. Composite
/// nodes recurse into their children.
pub fn split_outer_inner<F: Float>(region: &Region<F>) -> (Vec<Region<F>>, Vec<Region<F>>) {
    let mut inner = Vec::new();
    let mut outer = Vec::new();
    collect_leaves(region, &mut inner, &mut outer);
    (inner, outer)
}

fn collect_leaves<F: Float>(
    region: &Region<F>,
    inner: &mut Vec<Region<F>>,
    outer: &mut Vec<Region<F>>,
) {
    match region {
        Region::Outer(_) => outer.push(region.clone()),
        Region::Inner(_) => inner.push(region.clone()),
        Region::Composite(children) => {
            for child in children {
                collect_leaves(child, inner, outer);
            }
        }
    }
}

/// Extracts the vertex loop of a leaf region.
///
/// Returns `None` for composite nodes; callers filter the missing entries
/// out.
pub fn extract_loop<F: Float>(region: &Region<F>) -> Option<Loop<F>> {
    match region {
        Region::Outer(lp) | Region::Inner(lp) => Some(lp.clone()),
        Region::Composite(_) => None,
    }
}

/// Flattens a region into `(inner, outer)` loop lists, dropping leaves
/// whose loop could not be extracted or is empty.
pub fn split_loops<F: Float>(region: &Region<F>) -> (Vec<Loop<F>>, Vec<Loop<F>>) {
    let (inner, outer) = split_outer_inner(region);

    let keep = |regions: Vec<Region<F>>| {
        regions
            .iter()
            .filter_map(extract_loop)
            .filter(|lp| !lp.is_empty())
            .collect::<Vec<_>>()
    };

    (keep(inner), keep(outer))
}
