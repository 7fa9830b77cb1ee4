use geo::{GeoFloat, Rect};
use smallvec::{smallvec, SmallVec};

use crate::{
    arena::Arena,
    predicates::{divide_rect, rect_crossed_by, segment_end_in_rect},
    Polyline,
};

const SEGMENTS_STACK_SIZE: usize = 8;
const CURVES_STACK_SIZE: usize = 4;

pub(crate) type SegmentKeys = SmallVec<[usize; SEGMENTS_STACK_SIZE]>;

/// Segments of one curve that are relevant to a quadrant.
#[derive(Debug, Clone)]
pub(crate) struct CurveSegments {
    pub(crate) curve: usize,
    pub(crate) segments: SegmentKeys,
}

/// A rectangular region along with the segments relevant to it.
///
/// Curve entries are kept sorted by curve key, and segments within an
/// entry in the order they were recorded.
#[derive(Debug, Clone)]
pub(crate) struct Quadrant<T: GeoFloat> {
    bounds: Rect<T>,
    curves: SmallVec<[CurveSegments; CURVES_STACK_SIZE]>,
    density: usize,
    depth: usize,
}

impl<T: GeoFloat> Quadrant<T> {
    fn empty(bounds: Rect<T>, depth: usize) -> Self {
        Quadrant {
            bounds,
            curves: SmallVec::new(),
            density: 0,
            depth,
        }
    }

    /// The root quadrant covering every curve in `arena`.
    ///
    /// The density starts out as the total number of segments. Returns
    /// `None` if the arena holds no segments.
    pub(crate) fn root<C: Polyline<Scalar = T> + ?Sized>(arena: &Arena<'_, C>) -> Option<Self> {
        if arena.num_segments() == 0 {
            return None;
        }
        let mut root = Self::empty(arena.bounds()?, 0);
        for segment in arena.segments() {
            root.record(segment.curve(), segment.key());
        }
        root.density = arena.num_segments();
        Some(root)
    }

    /// Record `segment` under `curve`.
    ///
    /// Segments arrive grouped by curve in ascending key order, so a new
    /// curve is always appended.
    fn record(&mut self, curve: usize, segment: usize) {
        match self.curves.last_mut() {
            Some(last) if last.curve == curve => last.segments.push(segment),
            _ => {
                debug_assert!(self.curves.last().map_or(true, |last| last.curve < curve));
                self.curves.push(CurveSegments {
                    curve,
                    segments: smallvec![segment],
                });
            }
        }
    }

    /// Split into four equally sized children.
    ///
    /// Each segment is handed to every child containing one of its end
    /// points (counting towards that child's density), or failing that,
    /// to every child whose diagonals it crosses (not counted). A
    /// segment straddling a boundary is therefore recorded in more than
    /// one child.
    pub(crate) fn divide<C: Polyline<Scalar = T> + ?Sized>(
        &self,
        arena: &Arena<'_, C>,
    ) -> [Quadrant<T>; 4] {
        let [r0, r1, r2, r3] = divide_rect(&self.bounds);
        let depth = self.depth + 1;
        let mut children = [
            Self::empty(r0, depth),
            Self::empty(r1, depth),
            Self::empty(r2, depth),
            Self::empty(r3, depth),
        ];

        for entry in &self.curves {
            for &key in &entry.segments {
                let geom = &arena.segment(key).geom;
                for child in children.iter_mut() {
                    if segment_end_in_rect(geom, &child.bounds) {
                        child.density += 1;
                    } else if !rect_crossed_by(geom, &child.bounds) {
                        continue;
                    }
                    child.record(entry.curve, key);
                }
            }
        }
        children
    }

    #[inline]
    pub(crate) fn bounds(&self) -> Rect<T> {
        self.bounds
    }

    /// Number of segments recorded here because an end point lies in
    /// the bounds.
    ///
    /// Segments recorded only because they cross the quadrant do not
    /// count, so this is a proxy for the load, not a segment count.
    #[inline]
    pub(crate) fn density(&self) -> usize {
        self.density
    }

    #[inline]
    pub(crate) fn depth(&self) -> usize {
        self.depth
    }

    /// Number of distinct curves with a segment in this quadrant.
    #[inline]
    pub(crate) fn num_curves(&self) -> usize {
        self.curves.len()
    }

    #[inline]
    pub(crate) fn curves(&self) -> &[CurveSegments] {
        &self.curves
    }

    /// Total number of recorded segments (counted per curve entry).
    pub(crate) fn num_segments(&self) -> usize {
        self.curves.iter().map(|e| e.segments.len()).sum()
    }
}
