//! Value noise over 1D and 2D integer lattices.
//!
//! Lattice points are hashed with the classic shader "fake hash"
//! `fract(sin(dot) * 43758.5453)` and blended with the smoothstep weight
//! `f²(3 - 2f)`. The hash is periodic and unevenly distributed; it is kept
//! bit-for-bit so sketches reproduce the same fields everywhere.
//!
//! Every function here is pure: same input, same output, no state.

use crate::math::lerp;

const HASH_X: f64 = 12.9898;
const HASH_Y: f64 = 78.233;
const HASH_SCALE: f64 = 43758.5453;

/// Fractional part, `v - floor(v)`. Always in [0, 1) for finite `v`.
fn fract(v: f64) -> f64 {
    v - v.floor()
}

/// Hash of 1D lattice point `i`.
pub fn hash1(i: f64) -> f64 {
    fract((i * HASH_X + HASH_Y).sin() * HASH_SCALE)
}

/// Hash of 2D lattice point `(i, j)`.
pub fn hash2(i: f64, j: f64) -> f64 {
    fract((i * HASH_X + j * HASH_Y).sin() * HASH_SCALE)
}

/// Cubic Hermite blend `f²(3 - 2f)`.
pub fn smoothstep_weight(f: f64) -> f64 {
    f * f * (3.0 - 2.0 * f)
}

/// Smooth 1D value noise in [0, 1).
pub fn noise1d(x: f64) -> f64 {
    let i = x.floor();
    let f = x - i;
    lerp(hash1(i), hash1(i + 1.0), smoothstep_weight(f))
}

/// Smooth 2D value noise in [0, 1), bilinear over the four cell corners.
pub fn noise2d(x: f64, y: f64) -> f64 {
    let i = x.floor();
    let j = y.floor();
    let u = smoothstep_weight(x - i);
    let v = smoothstep_weight(y - j);

    let a = hash2(i, j);
    let b = hash2(i + 1.0, j);
    let c = hash2(i, j + 1.0);
    let d = hash2(i + 1.0, j + 1.0);

    lerp(lerp(a, b, u), lerp(c, d, u), v)
}

/// Multi-octave [`noise2d`], normalized by the total amplitude so the
/// result stays in [0, 1).
///
/// `octaves == 0` returns 0.
pub fn fractal_noise2d(x: f64, y: f64, octaves: u32, persistence: f64, lacunarity: f64) -> f64 {
    let (sum, norm, _, _) = (0..octaves).fold(
        (0.0, 0.0, 1.0, 1.0),
        |(sum, norm, amp, freq), _| {
            (
                sum + noise2d(x * freq, y * freq) * amp,
                norm + amp,
                amp * persistence,
                freq * lacunarity,
            )
        },
    );
    if norm > 0.0 {
        sum / norm
    } else {
        0.0
    }
}
