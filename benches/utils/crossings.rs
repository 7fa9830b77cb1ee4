#![allow(dead_code)]

use geo::{Line, LineString};
use quad_crossings::{
    predicates::{line_intersection, segments_intersect},
    Options, Polyline,
};
use rstar::{RTree, RTreeObject};

struct GeomWithData<R: RTreeObject, T>(R, T);

impl<R: RTreeObject, T> RTreeObject for GeomWithData<R, T> {
    type Envelope = R::Envelope;

    fn envelope(&self) -> Self::Envelope {
        self.0.envelope()
    }
}

/// Raw crossings found by quadrant subdivision, without deduplication.
pub fn count_quad(curves: &[LineString<f64>], options: Options) -> usize {
    options.search(curves, false).count()
}

fn tagged(curves: &[LineString<f64>]) -> Vec<GeomWithData<Line<f64>, usize>> {
    curves
        .iter()
        .enumerate()
        .flat_map(|(i, c)| c.segments().map(move |l| GeomWithData(l, i)))
        .collect()
}

fn crosses(l1: &Line<f64>, l2: &Line<f64>) -> bool {
    segments_intersect(l1, l2) && line_intersection(l1, l2).is_some()
}

pub fn count_brute(curves: &[LineString<f64>]) -> usize {
    let segments = tagged(curves);
    let mut count = 0;
    let n = segments.len();
    for i in 0..n {
        let s1 = &segments[i];
        for s2 in &segments[i + 1..] {
            if s1.1 != s2.1 && crosses(&s1.0, &s2.0) {
                count += 1;
            }
        }
    }
    count
}

pub fn count_rtree(curves: &[LineString<f64>]) -> usize {
    let tree = RTree::bulk_load(tagged(curves));
    tree.intersection_candidates_with_other_tree(&tree)
        .filter(|(s1, s2)| s1.1 < s2.1 && crosses(&s1.0, &s2.0))
        .count()
}
