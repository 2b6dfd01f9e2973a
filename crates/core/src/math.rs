//! Scalar helpers shared by every other module: range mapping, clamping,
//! interpolation, randomization, distance and angle normalization.
//!
//! None of these validate their input. Degenerate arguments (a zero-length
//! source range in [`map_range`], for instance) produce NaN or infinity.

use crate::prng::RandomSource;
use std::f64::consts::PI;

/// 2π.
pub const TWO_PI: f64 = PI * 2.0;
/// π/2.
pub const HALF_PI: f64 = PI / 2.0;

/// Affinely remaps `value` from `[start1, stop1]` onto `[start2, stop2]`.
///
/// Not clamped. `start1 == stop1` divides by zero.
pub fn map_range(value: f64, start1: f64, stop1: f64, start2: f64, stop2: f64) -> f64 {
    start2 + (stop2 - start2) * ((value - start1) / (stop1 - start1))
}

/// Uniform value in `[min, max)`.
pub fn random_range(rng: &mut dyn RandomSource, min: f64, max: f64) -> f64 {
    rng.next_f64() * (max - min) + min
}

/// Uniform integer in `[min, max]`, both ends inclusive.
pub fn random_int(rng: &mut dyn RandomSource, min: i64, max: i64) -> i64 {
    (rng.next_f64() * (max - min + 1) as f64).floor() as i64 + min
}

/// Clamps `value` into `[min, max]`.
///
/// Evaluated as `max(min, min(max, value))`, so an inverted range returns
/// `min` instead of panicking like [`f64::clamp`].
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    min.max(max.min(value))
}

/// Linear interpolation. `t` is not clamped.
pub fn lerp(start: f64, end: f64, t: f64) -> f64 {
    start + (end - start) * t
}

/// Euclidean distance between two points.
pub fn distance(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    let dx = x2 - x1;
    let dy = y2 - y1;
    (dx * dx + dy * dy).sqrt()
}

/// Wraps an angle in radians into `[0, 2π)`.
pub fn normalize_angle(angle: f64) -> f64 {
    let wrapped = ((angle % TWO_PI) + TWO_PI) % TWO_PI;
    // Tiny negative inputs round up to exactly 2π.
    if wrapped >= TWO_PI {
        0.0
    } else {
        wrapped
    }
}
