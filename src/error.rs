//! Error types for path search.

use thiserror::Error;

/// Errors reported by the path search engine.
///
/// Internal dead ends during candidate growth are absorbed by the search
/// itself; only these three outcomes reach the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PathError {
    /// The clearance corridor could not be built (offsetting the region
    /// collapsed or self-intersected beyond recovery).
    #[error("corridor construction failed")]
    CorridorBuildFailed,

    /// Source and destination lie in different disjoint sub-areas of the
    /// region, so no walkable path can exist.
    #[error("source and destination are in disjoint sub-areas")]
    DisjointEndpoints,

    /// No candidate path survived growth, pruning, and endpoint restoration.
    #[error("no path found between the given points")]
    NoPathFound,
}
