//! Brute-force crossing search within a single quadrant.
use log::trace;

use crate::{
    arena::Arena,
    predicates::{line_intersection, segments_intersect},
    quadrant::Quadrant,
    Polyline,
};

use super::Intersection;

/// Test every unordered pair of segments in `quad` and report crossings
/// to `cb`.
///
/// Pairs from distinct curves are always tested. Pairs from the same
/// curve are tested only when `self_intersect` is set, and then pairs
/// sharing a vertex are skipped: consecutive segments of a polyline
/// always touch at their common vertex.
pub(crate) fn solve<'a, C, F>(
    quad: &Quadrant<C::Scalar>,
    arena: &Arena<'a, C>,
    self_intersect: bool,
    mut cb: F,
) where
    C: Polyline + ?Sized,
    F: FnMut(Intersection<'a, C>),
{
    let entries = quad.curves();
    for (idx, entry) in entries.iter().enumerate() {
        let first = arena.curve(entry.curve);

        for (jdx, &key) in entry.segments.iter().enumerate() {
            let segment = arena.segment(key);

            let own: &[usize] = if self_intersect {
                &entry.segments[jdx + 1..]
            } else {
                &[]
            };
            let candidates = own.iter().map(|&k| (entry.curve, k)).chain(
                entries[idx + 1..]
                    .iter()
                    .flat_map(|other| other.segments.iter().map(move |&k| (other.curve, k))),
            );

            for (curve, other_key) in candidates {
                let other = arena.segment(other_key);
                if segment.connected(other) || !segments_intersect(&segment.geom, &other.geom) {
                    continue;
                }
                if let Some(point) = line_intersection(&segment.geom, &other.geom) {
                    trace!(
                        "naive: crossing at {point:?}\n\tsegment1: {s1:?}\n\tsegment2: {s2:?}",
                        s1 = segment,
                        s2 = other,
                    );
                    cb(Intersection::new(first, arena.curve(curve), point));
                }
            }
        }
    }
}
