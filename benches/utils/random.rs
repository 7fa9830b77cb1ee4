#![allow(dead_code)]
use std::f64::consts::PI;

use geo::{Coordinate, LineString, Rect};

use rand::Rng;
use rand_distr::{Distribution, Standard, Uniform};

#[inline]
pub fn uniform_point<R: Rng>(rng: &mut R, bounds: Rect<f64>) -> Coordinate<f64> {
    let coords: [f64; 2] = rng.sample(Standard);
    let dims = bounds.max() - bounds.min();
    Coordinate {
        x: bounds.min().x + dims.x * coords[0],
        y: bounds.min().y + dims.y * coords[1],
    }
}

#[inline]
pub fn uniform_step<R: Rng>(rng: &mut R, length: f64) -> Coordinate<f64> {
    let angle = rng.sample::<f64, _>(Standard) * 2. * PI;
    Coordinate {
        x: length * angle.cos(),
        y: length * angle.sin(),
    }
}

/// Fold `v` back into `[min, max]`, assuming it overshoots by less than
/// the width of the interval.
#[inline]
fn reflect(v: f64, min: f64, max: f64) -> f64 {
    if v < min {
        2. * min - v
    } else if v > max {
        2. * max - v
    } else {
        v
    }
}

/// A random walk of `num_points` points inside `bounds`, each step of
/// length at most `max_step` in a uniformly random direction. Steps
/// leaving `bounds` are reflected back in.
pub fn random_polyline<R: Rng>(
    rng: &mut R,
    bounds: Rect<f64>,
    num_points: usize,
    max_step: f64,
) -> LineString<f64> {
    let step_dist = Uniform::new(0.1 * max_step, max_step);
    let mut curr = uniform_point(rng, bounds);
    let mut coords = Vec::with_capacity(num_points);
    for _ in 0..num_points {
        coords.push(curr);
        let length = step_dist.sample(rng);
        let delta = uniform_step(rng, length);
        curr = Coordinate {
            x: reflect(curr.x + delta.x, bounds.min().x, bounds.max().x),
            y: reflect(curr.y + delta.y, bounds.min().y, bounds.max().y),
        };
    }
    coords.into()
}

/// Pre-generated inputs, cycled through by benchmark iterations.
pub struct Samples<T>(Vec<T>);

impl<T> Samples<T> {
    pub fn from_fn<F: FnMut() -> T>(size: usize, mut proc: F) -> Self {
        Self((0..size).map(|_| proc()).collect())
    }

    pub fn sampler<'a>(&'a self) -> impl FnMut() -> &'a T {
        let mut curr = 0;
        move || {
            let ret = &self.0[curr];
            curr += 1;
            curr %= self.0.len();
            ret
        }
    }
}
