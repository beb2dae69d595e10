//! Process-wide geometric constants.
//!
//! Low-level predicates take explicit tolerance parameters; the path engine
//! feeds them these named values. Changing them changes which boundary
//! touches count as crossings.

/// Tight tolerance for coincidence and equality decisions.
pub const TIGHT_TOLERANCE: f64 = 1e-8;

/// Looser tolerance for deciding whether a boundary-crossing point counts
/// as lying *on* a region edge rather than passing through it.
pub const CONTAINMENT_TOLERANCE: f64 = 1e-3;

/// Default clearance kept between a path and every boundary edge.
///
/// One foot expressed in metres.
pub const DEFAULT_CLEARANCE: f64 = 0.3048;

/// Upper bound on path-growth iterations before the search reports failure.
///
/// The branch-on-conflict search can blow up combinatorially on regions with
/// many obstacles; the cap converts that into a reportable failure instead
/// of an unbounded loop.
pub const MAX_SEARCH_ITERATIONS: usize = 100_000;
