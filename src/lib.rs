//! Finds all crossings among a set of polylines using adaptive
//! quadrant subdivision.
//!
//! 1. [Usage](#usage)
//! 1. [Algorithm](#algorithm)
//!
//! Testing every pair of segments is quadratic and quickly becomes the
//! bottleneck once curves have a few hundred segments each. This crate
//! instead recursively splits the plane into quadrants, dropping those
//! that cannot hold a crossing, and only runs the brute-force search on
//! small residual sets. It is meant to be cheap enough to re-run on
//! every frame of an animation.
//!
//! # Usage
//!
//! Any type implementing [`Polyline`] can be searched. The geo-type
//! [`LineString`] and plain `Vec`s of [`Coordinate`]s implement it.
//!
//! ```rust
//! use geo::{Coordinate, LineString};
//! use quad_crossings::{all_intersections, pair_intersections, self_intersections};
//!
//! let c1 = LineString::<f64>::from(vec![(0., 0.), (10., 10.)]);
//! let c2 = LineString::<f64>::from(vec![(0., 10.), (10., 0.)]);
//! assert_eq!(pair_intersections(&c1, &c2, false), vec![Coordinate { x: 5., y: 5. }]);
//!
//! let figure_eight = LineString::<f64>::from(vec![(0., 0.), (10., 10.), (0., 10.), (10., 0.)]);
//! assert_eq!(self_intersections(&figure_eight).len(), 1);
//!
//! let curves = vec![c1, c2, figure_eight];
//! for crossing in all_intersections(&curves, true) {
//!     println!("{} x {} at {:?}", crossing.first_id, crossing.second_id, crossing.point);
//! }
//! ```
//!
//! Use [`Options`] to tune the search, and [`Options::search`] to
//! iterate over raw crossings while collecting [`Stats`] or observing
//! each quadrant.
//!
//! # Algorithm
//!
//! The search starts with one quadrant covering all curves. A quadrant
//! whose *density* (number of segments with an end point inside it) is
//! at most the naive threshold is solved by brute force. Otherwise it is
//! split at its midpoint into four; a segment goes to each child holding
//! one of its end points, or whose diagonals it crosses. Children
//! holding fewer than two curves (one, when looking for
//! self-intersections) are dropped. Quadrants are processed breadth
//! first.
//!
//! Crossings are *proper* crossings: segments that merely touch, and
//! collinear overlaps, are not reliably reported. A crossing lying on a
//! quadrant boundary is typically found more than once, so results are
//! deduplicated by rounding to a fixed number of decimals.
//!
//! [`LineString`]: geo::LineString
//! [`Coordinate`]: geo::Coordinate
use geo::Coordinate;

mod arena;
pub use arena::CurveId;

pub mod predicates;

mod polyline;
pub use polyline::{Polyline, Segments};

mod quadrant;

pub mod subdivision;
pub use subdivision::{Intersection, Outcome, QuadrantVisit, Stats, Subdivision};

pub mod dedup;

mod options;
pub use options::{Options, DEFAULT_DECIMALS, DEFAULT_MAX_DEPTH, DEFAULT_NAIVE_THRESHOLD};

#[cfg(test)]
#[path = "../benches/utils/random.rs"]
pub mod random;

/// All points where `curve` crosses itself.
///
/// Segments sharing a vertex are never reported as crossing there.
/// Curves with fewer than two points have no self-intersections.
pub fn self_intersections<C: Polyline + ?Sized>(curve: &C) -> Vec<Coordinate<C::Scalar>> {
    Options::default().self_intersections(curve)
}

/// All points where `first` crosses `second`.
///
/// With `self_intersect`, points where either curve crosses itself are
/// included too.
pub fn pair_intersections<C: Polyline + ?Sized>(
    first: &C,
    second: &C,
    self_intersect: bool,
) -> Vec<Coordinate<C::Scalar>> {
    Options::default().pair_intersections(first, second, self_intersect)
}

/// All crossings among `curves`, tagged with the pair of curves
/// involved.
///
/// Each crossing is reported once per unordered pair of curves, in the
/// order it was discovered. With `self_intersect`, crossings within a
/// single curve are included (with `first_id == second_id`).
pub fn all_intersections<'a, C: Polyline>(
    curves: &'a [C],
    self_intersect: bool,
) -> Vec<Intersection<'a, C>> {
    Options::default().all_intersections(curves, self_intersect)
}
