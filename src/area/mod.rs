//! Polygon-area operations backing the path engine.
//!
//! This module plays the role of the geometry-library boundary: winding
//! normalization, directed area offsets, boolean union/difference, and
//! point classification. The boolean operations are exact for the
//! containment and disjoint cases and fall back to a vertex-collection
//! approximation for partially overlapping loops.

mod boolean;
mod classify;
mod offset;

pub use boolean::{area_difference, area_union};
pub use classify::{
    classify_point_in_loop, classify_point_in_region, closest_point_on_loop,
    closest_point_on_region_boundary, PointPosition,
};
pub use offset::{area_offset, reduce_to_ccw};
