//! Planar regions described by nested boundary loops.
//!
//! A [`Region`] is a tree: `Outer` leaves bound solid area, `Inner` leaves
//! bound holes, and `Composite` nodes group children (disjoint sub-areas or
//! parity nesting). The effective solid area is the union of the outer
//! leaves minus the union of the inner leaves, recursively.

mod loops;
mod tree;

pub use loops::Loop;
pub use tree::{extract_loop, split_loops, split_outer_inner, Region};
