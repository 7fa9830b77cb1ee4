//! Breadth-first quadrant subdivision.
//!
//! The search starts from a single quadrant covering every input
//! segment. Quadrants that are sparse enough are solved by brute force
//! (see [`naive`]); the rest are split into four and the children that
//! could still hold a crossing are queued. Processing is strictly FIFO,
//! so crossings are discovered level by level.
use std::{collections::VecDeque, fmt, iter::FromIterator};

use geo::{Coordinate, GeoFloat, Rect};
use log::{debug, trace};

use crate::{
    arena::{Arena, CurveEntry, CurveId},
    predicates::rect_can_shrink,
    quadrant::Quadrant,
    Options, Polyline,
};

mod naive;

/// A crossing between segments of two (possibly identical) curves.
pub struct Intersection<'a, C: Polyline + ?Sized> {
    /// The curve holding the first segment.
    pub first: &'a C,
    /// Position of `first` in the input.
    pub first_id: CurveId,
    /// The curve holding the second segment; same as `first` for a
    /// self-intersection.
    pub second: &'a C,
    /// Position of `second` in the input.
    pub second_id: CurveId,
    /// Where the segments cross.
    pub point: Coordinate<C::Scalar>,
}

impl<'a, C: Polyline + ?Sized> Intersection<'a, C> {
    pub(crate) fn new(
        first: &CurveEntry<'a, C>,
        second: &CurveEntry<'a, C>,
        point: Coordinate<C::Scalar>,
    ) -> Self {
        Intersection {
            first: first.curve,
            first_id: first.id,
            second: second.curve,
            second_id: second.id,
            point,
        }
    }

    /// Whether both segments belong to the same curve.
    #[inline]
    pub fn is_self_intersection(&self) -> bool {
        self.first_id == self.second_id
    }

    /// The pair of curve ids, smallest first.
    #[inline]
    pub fn curve_pair(&self) -> (CurveId, CurveId) {
        if self.first_id <= self.second_id {
            (self.first_id, self.second_id)
        } else {
            (self.second_id, self.first_id)
        }
    }
}

impl<'a, C: Polyline + ?Sized> Clone for Intersection<'a, C> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<'a, C: Polyline + ?Sized> Copy for Intersection<'a, C> {}

impl<'a, C: Polyline + ?Sized> fmt::Debug for Intersection<'a, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Intersection")
            .field("first", &self.first_id)
            .field("second", &self.second_id)
            .field("point", &self.point)
            .finish()
    }
}

/// Counters collected while running a [`Subdivision`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    /// Quadrants taken off the queue.
    pub inspected: usize,
    /// Quadrants solved by brute force.
    pub solved: usize,
    /// Quadrants split into four.
    pub divided: usize,
    /// Children dropped because they could not hold a crossing.
    pub discarded: usize,
    /// Quadrants solved by brute force only because they could not be
    /// split any further.
    pub capped: usize,
    /// Deepest subdivision level reached.
    pub max_depth: usize,
}

/// What happened to a quadrant taken off the queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Solved by brute force, yielding `crossings` raw crossings.
    Solved {
        /// Raw crossings found in the quadrant.
        crossings: usize,
        /// Set when the quadrant was too deep or too small to split.
        capped: bool,
    },
    /// Split into four, of which `kept` children were queued.
    Divided { kept: usize },
}

/// A quadrant as reported to a visitor; see
/// [`Subdivision::with_visitor`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadrantVisit<T: GeoFloat> {
    /// Region covered by the quadrant.
    pub bounds: Rect<T>,
    /// Number of splits from the root quadrant.
    pub depth: usize,
    /// Segments with an end point inside `bounds`.
    pub density: usize,
    /// Whether it was solved or split.
    pub outcome: Outcome,
}

type Visitor<'a, T> = Box<dyn FnMut(&QuadrantVisit<T>) + 'a>;

/// Iterator over the raw crossings found by quadrant subdivision.
///
/// Crossings are yielded in discovery order and are *not*
/// deduplicated: a crossing near a quadrant boundary is typically found
/// once per quadrant holding both segments. Use the functions at the
/// crate root, or [`Options`], for deduplicated results.
pub struct Subdivision<'a, C: Polyline + ?Sized> {
    arena: Arena<'a, C>,
    queue: VecDeque<Quadrant<C::Scalar>>,
    pending: VecDeque<Intersection<'a, C>>,
    self_intersect: bool,
    options: Options,
    stats: Stats,
    visitor: Option<Visitor<'a, C::Scalar>>,
    done: bool,
}

impl<'a, C: Polyline + ?Sized> Subdivision<'a, C> {
    pub(crate) fn new<I: IntoIterator<Item = &'a C>>(
        iter: I,
        self_intersect: bool,
        options: Options,
    ) -> Self {
        let arena = Arena::new(iter);
        let mut queue = VecDeque::new();
        queue.extend(Quadrant::root(&arena));
        Subdivision {
            arena,
            queue,
            pending: VecDeque::new(),
            self_intersect,
            options,
            stats: Stats::default(),
            visitor: None,
            done: false,
        }
    }

    /// Call `visitor` for every quadrant taken off the queue.
    pub fn with_visitor<F: FnMut(&QuadrantVisit<C::Scalar>) + 'a>(mut self, visitor: F) -> Self {
        self.visitor = Some(Box::new(visitor));
        self
    }

    /// Counters for the work done so far.
    pub fn stats(&self) -> Stats {
        self.stats
    }

    /// Whether this search also reports crossings within a curve.
    pub fn self_intersect(&self) -> bool {
        self.self_intersect
    }

    fn process(&mut self, quad: Quadrant<C::Scalar>) {
        let stats = &mut self.stats;
        stats.inspected += 1;
        stats.max_depth = stats.max_depth.max(quad.depth());

        let sparse = quad.density() <= self.options.naive_threshold();
        let capped = !sparse
            && (quad.depth() >= self.options.max_depth() || !rect_can_shrink(&quad.bounds()));

        let outcome = if sparse || capped {
            if capped {
                stats.capped += 1;
                debug!(
                    "quadrant: solving {density} end points at depth {depth} without split",
                    density = quad.density(),
                    depth = quad.depth(),
                );
            }
            stats.solved += 1;

            let before = self.pending.len();
            let pending = &mut self.pending;
            naive::solve(&quad, &self.arena, self.self_intersect, |crossing| {
                pending.push_back(crossing)
            });
            let crossings = self.pending.len() - before;
            trace!(
                "quadrant: solved {bounds:?} with {n} segments: {crossings} crossings",
                bounds = quad.bounds(),
                n = quad.num_segments(),
            );
            Outcome::Solved { crossings, capped }
        } else {
            stats.divided += 1;
            let min_curves = if self.self_intersect { 1 } else { 2 };

            let mut kept = 0;
            for child in quad.divide(&self.arena) {
                if child.num_curves() >= min_curves {
                    self.queue.push_back(child);
                    kept += 1;
                } else {
                    self.stats.discarded += 1;
                }
            }
            debug!(
                "quadrant: divide {bounds:?} (depth {depth}, density {density}): kept {kept}",
                bounds = quad.bounds(),
                depth = quad.depth(),
                density = quad.density(),
            );
            Outcome::Divided { kept }
        };

        if let Some(visitor) = self.visitor.as_mut() {
            visitor(&QuadrantVisit {
                bounds: quad.bounds(),
                depth: quad.depth(),
                density: quad.density(),
                outcome,
            });
        }
    }
}

/// Search a collection of curves for crossings between distinct
/// curves, with default [`Options`].
impl<'a, C: Polyline + ?Sized> FromIterator<&'a C> for Subdivision<'a, C> {
    fn from_iter<T: IntoIterator<Item = &'a C>>(iter: T) -> Self {
        Subdivision::new(iter, false, Options::default())
    }
}

impl<'a, C: Polyline + ?Sized> Iterator for Subdivision<'a, C> {
    type Item = Intersection<'a, C>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(crossing) = self.pending.pop_front() {
                return Some(crossing);
            }
            match self.queue.pop_front() {
                Some(quad) => self.process(quad),
                None => {
                    if !self.done {
                        self.done = true;
                        debug!("subdivision: finished: {stats:?}", stats = self.stats);
                    }
                    return None;
                }
            }
        }
    }
}
