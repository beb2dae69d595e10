//! Clearance-aware shortest paths through planar regions with holes.
//!
//! `clearpath` finds the shortest walkable polyline between two points of
//! a polygonal area, keeping a configurable clearance from every wall and
//! obstacle. The area is described as a [`Region`] tree of outer
//! boundaries and holes; the path engine shrinks it into a clearance
//! corridor, then runs a greedy branch-on-conflict search whose candidate
//! paths detour around whichever boundary blocks the straight line.
//!
//! # Quick start
//!
//! ```
//! use clearpath::{find_shortest_path_with_clearance, Point3, Region};
//!
//! // A 10 x 10 room with a square pillar in the middle.
//! let room = Region::composite(vec![
//!     Region::outer(vec![
//!         Point3::xy(0.0, 0.0),
//!         Point3::xy(10.0, 0.0),
//!         Point3::xy(10.0, 10.0),
//!         Point3::xy(0.0, 10.0),
//!     ]),
//!     Region::inner(vec![
//!         Point3::xy(4.0, 4.0),
//!         Point3::xy(6.0, 4.0),
//!         Point3::xy(6.0, 6.0),
//!         Point3::xy(4.0, 6.0),
//!     ]),
//! ]);
//!
//! let path = find_shortest_path_with_clearance(
//!     &room,
//!     Point3::xy(1.0, 5.0),
//!     Point3::xy(9.0, 5.0),
//!     0.5,
//! )
//! .unwrap();
//! assert!(path.len() >= 3); // detours around the pillar
//! ```
//!
//! # Tolerances
//!
//! Geometric predicates never hide an epsilon: every comparison either
//! takes an explicit tolerance parameter or names one of the constants in
//! [`config`]. All types are generic over [`num_traits::Float`], so the
//! engine runs in `f32` or `f64` as the caller chooses.

pub mod area;
pub mod config;
pub mod containment;
pub mod corridor;
mod error;
pub mod intersect;
pub mod primitives;
pub mod region;
pub mod search;

pub use containment::segment_fully_inside;
pub use corridor::build_corridor;
pub use error::PathError;
pub use primitives::{Point3, Segment3, Vec3};
pub use region::{Loop, Region};
pub use search::{find_shortest_path, find_shortest_path_with_clearance, path_length};
