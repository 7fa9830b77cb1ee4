use std::iter;

use geo::Coordinate;
use log::debug;

use crate::{
    dedup::{unique_intersections, unique_points},
    Intersection, Polyline, Stats, Subdivision,
};

/// Quadrants with at most this many end points are solved by brute force.
pub const DEFAULT_NAIVE_THRESHOLD: usize = 2;

/// Quadrants this deep are solved by brute force regardless of density.
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Decimal digits kept when comparing crossings for duplicates.
pub const DEFAULT_DECIMALS: u32 = 4;

/// Tuning for a crossing search.
///
/// The defaults suit interactive use on polylines of a few hundred
/// segments each. All searches are pure: the same input and options
/// always produce the same output.
///
/// ```rust
/// use geo::LineString;
/// use quad_crossings::Options;
///
/// let figure_eight = LineString::<f64>::from(vec![(0., 0.), (10., 10.), (0., 10.), (10., 0.)]);
/// let points = Options::default()
///     .with_decimals(2)
///     .self_intersections(&figure_eight);
/// assert_eq!(points.len(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    naive_threshold: usize,
    max_depth: usize,
    decimals: u32,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            naive_threshold: DEFAULT_NAIVE_THRESHOLD,
            max_depth: DEFAULT_MAX_DEPTH,
            decimals: DEFAULT_DECIMALS,
        }
    }
}

impl Options {
    /// Set the density at or below which a quadrant is solved by brute
    /// force instead of being split.
    #[must_use]
    pub fn with_naive_threshold(mut self, threshold: usize) -> Self {
        self.naive_threshold = threshold;
        self
    }

    /// Set the subdivision depth at which quadrants are always solved by
    /// brute force. This bounds the work on inputs with many coincident
    /// points, where the density never drops.
    #[must_use]
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Set the number of decimal digits kept when deduplicating.
    #[must_use]
    pub fn with_decimals(mut self, decimals: u32) -> Self {
        self.decimals = decimals;
        self
    }

    pub fn naive_threshold(&self) -> usize {
        self.naive_threshold
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn decimals(&self) -> u32 {
        self.decimals
    }

    /// Start a search over `curves`, yielding raw (not deduplicated)
    /// crossings. Curves are identified by their position in `curves`.
    pub fn search<'a, C, I>(&self, curves: I, self_intersect: bool) -> Subdivision<'a, C>
    where
        C: Polyline + ?Sized + 'a,
        I: IntoIterator<Item = &'a C>,
    {
        Subdivision::new(curves, self_intersect, *self)
    }

    /// All points where `curve` crosses itself.
    pub fn self_intersections<C: Polyline + ?Sized>(&self, curve: &C) -> Vec<Coordinate<C::Scalar>> {
        let raw = self.search(iter::once(curve), true).map(|c| c.point);
        unique_points(raw, self.decimals).collect()
    }

    /// All points where `first` and `second` cross; with
    /// `self_intersect`, also where either crosses itself.
    pub fn pair_intersections<C: Polyline + ?Sized>(
        &self,
        first: &C,
        second: &C,
        self_intersect: bool,
    ) -> Vec<Coordinate<C::Scalar>> {
        let raw = self
            .search(iter::once(first).chain(iter::once(second)), self_intersect)
            .map(|c| c.point);
        unique_points(raw, self.decimals).collect()
    }

    /// All crossings between `curves`, tagged with the curves involved.
    ///
    /// Results are in discovery order; a crossing is reported once per
    /// unordered curve pair.
    pub fn all_intersections<'a, C: Polyline>(
        &self,
        curves: &'a [C],
        self_intersect: bool,
    ) -> Vec<Intersection<'a, C>> {
        self.all_intersections_with_stats(curves, self_intersect).0
    }

    /// Like [`Options::all_intersections`], also returning the work done.
    pub fn all_intersections_with_stats<'a, C: Polyline>(
        &self,
        curves: &'a [C],
        self_intersect: bool,
    ) -> (Vec<Intersection<'a, C>>, Stats) {
        let mut search = self.search(curves, self_intersect);
        let found: Vec<_> = unique_intersections(search.by_ref(), self.decimals).collect();
        let stats = search.stats();
        debug!(
            "all_intersections: {n} curves, {found} crossings, {inspected} quadrants",
            n = curves.len(),
            found = found.len(),
            inspected = stats.inspected,
        );
        (found, stats)
    }
}
