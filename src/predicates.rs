//! Geometric predicates on segments and axis-aligned rectangles.
//!
//! These are the plain textbook versions: a crossing is a
//! *proper* crossing as decided by strict orientation tests, and
//! touching or collinear configurations are not special-cased.
use geo::{
    kernels::{HasKernel, Kernel, Orientation},
    Coordinate, GeoFloat, Line, Rect,
};

/// Whether `p1 -> p2 -> p3` makes a strict counter-clockwise turn.
///
/// Collinear triples are never reported as a turn.
#[inline]
pub fn ccw<T: GeoFloat>(p1: Coordinate<T>, p2: Coordinate<T>, p3: Coordinate<T>) -> bool {
    <T as HasKernel>::Ker::orient2d(p1, p2, p3) == Orientation::CounterClockwise
}

/// Proper-crossing test for two segments.
///
/// True iff the end points of each segment lie on different sides of
/// the other. Segments that merely touch, or that are collinear, may be
/// reported either way depending on the exact configuration.
#[inline]
pub fn segments_intersect<T: GeoFloat>(s1: &Line<T>, s2: &Line<T>) -> bool {
    let (a, b) = (s1.start, s1.end);
    let (c, d) = (s2.start, s2.end);
    ccw(a, c, d) != ccw(b, c, d) && ccw(a, b, c) != ccw(a, b, d)
}

/// Intersection of the infinite lines through `s1` and `s2`.
///
/// Vertical and horizontal lines are handled by explicit branches.
/// Returns `None` if either segment is a single point, if both lines
/// are vertical or both horizontal, or if the general solve does not
/// produce a finite point. The result is not checked against the
/// extents of the segments: call this only after
/// [`segments_intersect`] has reported a crossing.
pub fn line_intersection<T: GeoFloat>(s1: &Line<T>, s2: &Line<T>) -> Option<Coordinate<T>> {
    let zero = T::zero();
    let (a, b) = (s1.start, s1.end);
    let (c, d) = (s2.start, s2.end);

    let dx1 = a.x - b.x;
    let dy1 = a.y - b.y;
    let dx2 = c.x - d.x;
    let dy2 = c.y - d.y;

    if (dx1 == zero && (dy1 == zero || dx2 == zero))
        || (dy2 == zero && (dx2 == zero || dy1 == zero))
    {
        return None;
    }

    let pt = if dx1 == zero {
        Coordinate {
            x: a.x,
            y: (a.x - d.x) * dy2 / dx2 + d.y,
        }
    } else if dy1 == zero {
        Coordinate {
            x: (a.y - d.y) * dx2 / dy2 + d.x,
            y: a.y,
        }
    } else if dx2 == zero {
        Coordinate {
            x: c.x,
            y: (c.x - b.x) * dy1 / dx1 + b.y,
        }
    } else if dy2 == zero {
        Coordinate {
            x: (c.y - b.y) * dx1 / dy1 + b.x,
            y: c.y,
        }
    } else {
        let yx1 = dy1 / dx1;
        let yx2 = dy2 / dx2;
        let xy1 = yx1.recip();
        let xy2 = yx2.recip();
        Coordinate {
            x: (yx1 * b.x - yx2 * d.x - b.y + d.y) / (yx1 - yx2),
            y: (xy1 * b.y - xy2 * d.y - b.x + d.x) / (xy1 - xy2),
        }
    };

    if pt.x.is_finite() && pt.y.is_finite() {
        Some(pt)
    } else {
        None
    }
}

/// Inclusive point-in-rectangle test.
#[inline]
pub fn point_in_rect<T: GeoFloat>(p: Coordinate<T>, rect: &Rect<T>) -> bool {
    let (min, max) = (rect.min(), rect.max());
    p.x >= min.x && p.x <= max.x && p.y >= min.y && p.y <= max.y
}

/// Whether either end point of `segment` lies in `rect` (inclusive).
#[inline]
pub fn segment_end_in_rect<T: GeoFloat>(segment: &Line<T>, rect: &Rect<T>) -> bool {
    point_in_rect(segment.start, rect) || point_in_rect(segment.end, rect)
}

/// Approximates "segment passes through rectangle".
///
/// The rectangle is replaced by its two diagonals, and the segment is
/// tested for a proper crossing with either. Segments that only graze
/// the boundary (running along an edge, or through a corner) may go
/// undetected.
pub fn rect_crossed_by<T: GeoFloat>(segment: &Line<T>, rect: &Rect<T>) -> bool {
    let (min, max) = (rect.min(), rect.max());
    let diagonal = Line::new(min, max);
    let flipped = Line::new(
        Coordinate { x: min.x, y: max.y },
        Coordinate { x: max.x, y: min.y },
    );
    segments_intersect(segment, &diagonal) || segments_intersect(segment, &flipped)
}

/// Split `rect` at its midpoint into four equal children.
///
/// The order is lower-left, lower-right, upper-left, upper-right.
pub fn divide_rect<T: GeoFloat>(rect: &Rect<T>) -> [Rect<T>; 4] {
    let (min, max) = (rect.min(), rect.max());
    let mid = midpoint(min, max);
    [
        Rect::new(min, mid),
        Rect::new(Coordinate { x: mid.x, y: min.y }, Coordinate { x: max.x, y: mid.y }),
        Rect::new(Coordinate { x: min.x, y: mid.y }, Coordinate { x: mid.x, y: max.y }),
        Rect::new(mid, max),
    ]
}

/// Whether splitting `rect` would produce a strictly smaller child
/// along at least one axis.
pub fn rect_can_shrink<T: GeoFloat>(rect: &Rect<T>) -> bool {
    let (min, max) = (rect.min(), rect.max());
    let mid = midpoint(min, max);
    (mid.x > min.x && mid.x < max.x) || (mid.y > min.y && mid.y < max.y)
}

/// Smallest rectangle containing both `a` and `b`.
pub fn rect_union<T: GeoFloat>(a: &Rect<T>, b: &Rect<T>) -> Rect<T> {
    Rect::new(
        Coordinate {
            x: a.min().x.min(b.min().x),
            y: a.min().y.min(b.min().y),
        },
        Coordinate {
            x: a.max().x.max(b.max().x),
            y: a.max().y.max(b.max().y),
        },
    )
}

/// Bounding rectangle of a sequence of coordinates; `None` if empty.
pub fn bounding_rect<T: GeoFloat, I: IntoIterator<Item = Coordinate<T>>>(
    coords: I,
) -> Option<Rect<T>> {
    coords.into_iter().fold(None, |acc, c| {
        let pt = Rect::new(c, c);
        Some(match acc {
            Some(r) => rect_union(&r, &pt),
            None => pt,
        })
    })
}

#[inline]
fn midpoint<T: GeoFloat>(p: Coordinate<T>, q: Coordinate<T>) -> Coordinate<T> {
    let two = T::one() + T::one();
    Coordinate {
        x: (p.x + q.x) / two,
        y: (p.y + q.y) / two,
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn line(a: (f64, f64), b: (f64, f64)) -> Line<f64> {
        Line::new(a, b)
    }

    #[test]
    fn check_ccw() {
        let o = Coordinate { x: 0., y: 0. };
        let e = Coordinate { x: 1., y: 0. };
        assert!(ccw(o, e, Coordinate { x: 1., y: 1. }));
        assert!(!ccw(o, e, Coordinate { x: 1., y: -1. }));
        // Collinear is never a turn, in either direction.
        assert!(!ccw(o, e, Coordinate { x: 2., y: 0. }));
        assert!(!ccw(e, o, Coordinate { x: 2., y: 0. }));
    }

    #[test]
    fn check_segments_intersect() {
        let s1 = line((0., 0.), (10., 10.));
        let s2 = line((0., 10.), (10., 0.));
        assert!(segments_intersect(&s1, &s2));
        assert!(segments_intersect(&s2, &s1));

        // Parallel
        assert!(!segments_intersect(
            &line((0., 0.), (10., 0.)),
            &line((0., 5.), (10., 5.))
        ));
        // Would cross if extended, but don't.
        assert!(!segments_intersect(
            &line((0., 0.), (1., 1.)),
            &line((0., 10.), (10., 0.))
        ));
        // Degenerate segment
        assert!(!segments_intersect(
            &line((5., 5.), (5., 5.)),
            &line((0., 10.), (10., 0.))
        ));
    }

    #[test]
    fn check_line_intersection() {
        let pt = line_intersection(&line((0., 0.), (10., 10.)), &line((0., 10.), (10., 0.)))
            .expect("diagonals cross");
        assert_relative_eq!(pt.x, 5.);
        assert_relative_eq!(pt.y, 5.);

        let pt = line_intersection(&line((3., -1.), (3., 7.)), &line((0., 0.), (6., 3.)))
            .expect("vertical against sloped");
        assert_relative_eq!(pt.x, 3.);
        assert_relative_eq!(pt.y, 1.5);

        let pt = line_intersection(&line((0., 0.), (6., 3.)), &line((-2., 2.), (8., 2.)))
            .expect("sloped against horizontal");
        assert_relative_eq!(pt.x, 4.);
        assert_relative_eq!(pt.y, 2.);

        let pt = line_intersection(&line((-1., 4.), (9., 4.)), &line((2., 0.), (2., 9.)))
            .expect("horizontal against vertical");
        assert_relative_eq!(pt.x, 2.);
        assert_relative_eq!(pt.y, 4.);

        let pt = line_intersection(&line((0., 1.), (4., 3.)), &line((0., 4.), (4., 0.)))
            .expect("general position");
        assert_relative_eq!(pt.x, 2.);
        assert_relative_eq!(pt.y, 2.);
    }

    #[test]
    fn check_line_intersection_degenerate() {
        // Both vertical
        assert!(line_intersection(&line((0., 0.), (0., 5.)), &line((1., 0.), (1., 5.))).is_none());
        // Both horizontal
        assert!(line_intersection(&line((0., 0.), (5., 0.)), &line((0., 1.), (5., 1.))).is_none());
        // Point segment
        assert!(line_intersection(&line((1., 1.), (1., 1.)), &line((0., 0.), (5., 3.))).is_none());
        // Parallel, sloped
        assert!(line_intersection(&line((0., 0.), (1., 1.)), &line((0., 1.), (1., 2.))).is_none());
    }

    #[test]
    fn check_rect_tests() {
        let rect = Rect::new((0., 0.), (4., 2.));
        assert!(point_in_rect(Coordinate { x: 0., y: 0. }, &rect));
        assert!(point_in_rect(Coordinate { x: 4., y: 2. }, &rect));
        assert!(!point_in_rect(Coordinate { x: 4.1, y: 1. }, &rect));

        assert!(segment_end_in_rect(&line((-5., -5.), (1., 1.)), &rect));
        assert!(!segment_end_in_rect(&line((-5., -5.), (-1., 1.)), &rect));
    }

    #[test]
    fn check_rect_crossed_by() {
        let rect = Rect::new((0., 0.), (10., 10.));
        // Straight through the middle
        assert!(rect_crossed_by(&line((-1., 5.), (11., 5.)), &rect));
        // Cuts off the lower-left corner.
        assert!(rect_crossed_by(&line((-1., 2.), (2., -1.)), &rect));
        // Runs along the top edge.
        assert!(!rect_crossed_by(&line((-1., 10.), (11., 10.)), &rect));
        // Completely outside
        assert!(!rect_crossed_by(&line((20., 0.), (20., 10.)), &rect));
    }

    #[test]
    fn check_divide_rect() {
        let rect = Rect::new((-3., 1.), (5., 7.));
        let children = divide_rect(&rect);

        let area: f64 = children.iter().map(|r| r.width() * r.height()).sum();
        assert_relative_eq!(area, rect.width() * rect.height());

        let union = children[1..]
            .iter()
            .fold(children[0], |acc, r| rect_union(&acc, r));
        assert_eq!(union, rect);

        // Interiors are disjoint: overlaps are at most an edge.
        for (i, r1) in children.iter().enumerate() {
            for r2 in &children[i + 1..] {
                let w = r1.max().x.min(r2.max().x) - r1.min().x.max(r2.min().x);
                let h = r1.max().y.min(r2.max().y) - r1.min().y.max(r2.min().y);
                assert!(w <= 0. || h <= 0., "{:?} overlaps {:?}", r1, r2);
            }
        }

        assert_eq!(children[0].min(), rect.min());
        assert_eq!(children[3].max(), rect.max());
    }

    #[test]
    fn check_rect_can_shrink() {
        assert!(rect_can_shrink(&Rect::new((0., 0.), (1., 1.))));
        // Flat rectangles still shrink along the other axis.
        assert!(rect_can_shrink(&Rect::new((0., 3.), (1., 3.))));
        assert!(!rect_can_shrink(&Rect::new((2., 3.), (2., 3.))));
    }

    #[test]
    fn check_bounding_rect() {
        assert!(bounding_rect::<f64, _>(vec![]).is_none());
        let rect = bounding_rect(vec![
            Coordinate { x: 1., y: -2. },
            Coordinate { x: -4., y: 3. },
            Coordinate { x: 0., y: 0. },
        ])
        .expect("non-empty");
        assert_eq!(rect, Rect::new((-4., -2.), (1., 3.)));
    }
}
