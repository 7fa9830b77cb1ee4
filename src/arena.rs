use std::fmt;

use geo::{GeoFloat, Line, Rect};
use slab::Slab;

use crate::{
    predicates::{bounding_rect, rect_union},
    Polyline,
};

/// Position of a curve in the input of a search.
///
/// Curves are identified by where they were supplied, never by their
/// geometry: two curves with identical vertices remain distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CurveId(pub(crate) usize);

impl CurveId {
    /// Index of the curve in the slice (or pair) it was supplied in.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for CurveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "c{}", self.0)
    }
}

/// An input curve registered in the arena.
#[derive(Debug)]
pub(crate) struct CurveEntry<'a, C: Polyline + ?Sized> {
    pub(crate) id: CurveId,
    pub(crate) curve: &'a C,
}

/// A single segment of an input curve.
///
/// `index` is the position of the segment's first vertex within its
/// curve, so the segment runs from vertex `index` to `index + 1`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Segment<T: GeoFloat> {
    key: usize,
    curve: usize,
    index: usize,
    pub(crate) geom: Line<T>,
}

impl<T: GeoFloat> Segment<T> {
    /// Get the segment's key.
    #[inline]
    pub(crate) fn key(&self) -> usize {
        self.key
    }

    /// Get the key of the curve this segment belongs to.
    #[inline]
    pub(crate) fn curve(&self) -> usize {
        self.curve
    }

    /// Whether the two segments share an end-point vertex.
    ///
    /// This is decided by vertex identity, not coordinates: segments of
    /// different curves never share a vertex, and consecutive segments
    /// (or a segment and itself) of one curve always do.
    #[inline]
    pub(crate) fn connected(&self, other: &Self) -> bool {
        self.curve == other.curve
            && (self.index == other.index
                || self.index + 1 == other.index
                || other.index + 1 == self.index)
    }
}

/// Equality based on key
impl<T: GeoFloat> PartialEq for Segment<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<T: GeoFloat> Eq for Segment<T> {}

/// Storage for the curves and segments of one search.
///
/// Curves and segments are assigned slab keys as they are registered;
/// everything downstream (quadrants, crossings) refers to them by key.
#[derive(Debug)]
pub(crate) struct Arena<'a, C: Polyline + ?Sized> {
    curves: Slab<CurveEntry<'a, C>>,
    segments: Slab<Segment<C::Scalar>>,
    bounds: Option<Rect<C::Scalar>>,
}

impl<'a, C: Polyline + ?Sized> Arena<'a, C> {
    pub(crate) fn new<I: IntoIterator<Item = &'a C>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let size = {
            let (min_size, max_size) = iter.size_hint();
            max_size.unwrap_or(min_size)
        };

        let mut arena = Arena {
            curves: Slab::with_capacity(size),
            segments: Slab::new(),
            bounds: None,
        };
        for (idx, curve) in iter.enumerate() {
            arena.add_curve(CurveId(idx), curve);
        }
        arena
    }

    /// Register a curve and all of its segments.
    fn add_curve(&mut self, id: CurveId, curve: &'a C) -> usize {
        let curve_key = self.curves.insert(CurveEntry { id, curve });

        if let Some(rect) = bounding_rect(curve.coords().iter().copied()) {
            self.bounds = Some(match self.bounds {
                Some(bounds) => rect_union(&bounds, &rect),
                None => rect,
            });
        }

        let segments = curve.segments();
        if segments.len() == 0 {
            return curve_key;
        }
        self.segments.reserve(segments.len());
        for (index, geom) in segments.enumerate() {
            let entry = self.segments.vacant_entry();
            let segment = Segment {
                key: entry.key(),
                curve: curve_key,
                index,
                geom,
            };
            entry.insert(segment);
        }
        curve_key
    }

    #[inline]
    pub(crate) fn curve(&self, key: usize) -> &CurveEntry<'a, C> {
        &self.curves[key]
    }

    #[inline]
    pub(crate) fn segment(&self, key: usize) -> &Segment<C::Scalar> {
        &self.segments[key]
    }

    /// All segments in key order.
    pub(crate) fn segments(&self) -> impl Iterator<Item = &Segment<C::Scalar>> {
        self.segments.iter().map(|(_, s)| s)
    }

    pub(crate) fn num_segments(&self) -> usize {
        self.segments.len()
    }

    /// Bounding rectangle of every vertex of every curve, including
    /// curves too short to contribute a segment.
    pub(crate) fn bounds(&self) -> Option<Rect<C::Scalar>> {
        self.bounds
    }
}
