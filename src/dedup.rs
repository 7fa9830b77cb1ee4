//! Canonical keys for removing repeated crossings.
//!
//! The same crossing is usually found from several quadrants, and
//! repeated computations of one analytic crossing may differ in the last
//! few bits. Points are therefore compared after rounding to a fixed
//! number of decimal digits.
use geo::{Coordinate, GeoFloat};
use itertools::Itertools;

use crate::{arena::CurveId, Intersection, Polyline};

/// A point rounded to a fixed number of decimal digits.
///
/// Each coordinate is scaled by `10^decimals` and rounded half away from
/// zero; `-0.0` and `0.0` map to the same key. The rounded values are
/// kept as floats, so coordinates of any magnitude stay distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PointKey {
    x: u64,
    y: u64,
}

impl PointKey {
    pub fn new<T: GeoFloat>(point: Coordinate<T>, decimals: u32) -> Self {
        let scale = 10f64.powi(decimals as i32);
        PointKey {
            x: round_scaled(point.x, scale),
            y: round_scaled(point.y, scale),
        }
    }
}

/// Rounded point plus the curve pair, smallest id first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IntersectionKey {
    point: PointKey,
    curves: (CurveId, CurveId),
}

impl IntersectionKey {
    pub fn new<C: Polyline + ?Sized>(crossing: &Intersection<'_, C>, decimals: u32) -> Self {
        IntersectionKey {
            point: PointKey::new(crossing.point, decimals),
            curves: crossing.curve_pair(),
        }
    }
}

#[inline]
fn round_scaled<T: GeoFloat>(v: T, scale: f64) -> u64 {
    let rounded = v.to_f64().map_or(0., |v| (v * scale).round());
    // Fold -0.0 into 0.0 before comparing bit patterns.
    if rounded == 0. {
        0f64.to_bits()
    } else {
        rounded.to_bits()
    }
}

/// Drop points equal (after rounding) to an earlier one.
pub fn unique_points<T, I>(iter: I, decimals: u32) -> impl Iterator<Item = Coordinate<T>>
where
    T: GeoFloat,
    I: IntoIterator<Item = Coordinate<T>>,
{
    iter.into_iter()
        .unique_by(move |p| PointKey::new(*p, decimals))
}

/// Drop crossings with the same rounded point and curve pair as an
/// earlier one. The order of the curves within a pair is ignored.
pub fn unique_intersections<'a, C, I>(
    iter: I,
    decimals: u32,
) -> impl Iterator<Item = Intersection<'a, C>>
where
    C: Polyline + ?Sized + 'a,
    I: IntoIterator<Item = Intersection<'a, C>>,
{
    iter.into_iter()
        .unique_by(move |c| IntersectionKey::new(c, decimals))
}
