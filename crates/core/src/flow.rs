//! Flow sources: deterministic 2D displacement fields for steering motion.
//!
//! A [`FlowSource`] returns a [`Vector2D`] at any point in space and time.
//! Owners of moving things (a particle system, typically) sample a source
//! and feed the result into a velocity between updates. Sources never hold
//! mutable state, so the same inputs always give the same output.

use crate::math::TWO_PI;
use crate::value_noise::noise2d;
use crate::vector::Vector2D;
use ::noise::{NoiseFn, Perlin};

/// A source of displacement vectors.
pub trait FlowSource: Send + Sync {
    /// Displacement at `(x, y)` at `time`.
    fn sample(&self, x: f64, y: f64, time: f64) -> Vector2D;
}

/// Distances below this are treated as zero.
const SINGULARITY_EPS: f64 = 1e-10;

/// Classic flow field: [`noise2d`] picks a heading, `strength` sets the length.
///
/// Time scrolls the noise along the y axis.
#[derive(Debug, Clone, Copy)]
pub struct ValueNoiseFlow {
    pub scale: f64,
    pub strength: f64,
    /// Full rotations spanned by the noise range; more turns, more swirl.
    pub turns: f64,
}

impl ValueNoiseFlow {
    pub fn new(scale: f64, strength: f64) -> Self {
        Self {
            scale,
            strength,
            turns: 1.0,
        }
    }

    pub fn with_turns(mut self, turns: f64) -> Self {
        self.turns = turns;
        self
    }
}

impl FlowSource for ValueNoiseFlow {
    fn sample(&self, x: f64, y: f64, time: f64) -> Vector2D {
        let n = noise2d(x * self.scale, y * self.scale + time);
        Vector2D::from_angle(n * TWO_PI * self.turns, self.strength)
    }
}

/// Perlin gradient noise, one offset sample per axis.
pub struct PerlinFlow {
    noise: Perlin,
    scale: f64,
    strength: f64,
}

impl PerlinFlow {
    pub fn new(scale: f64, strength: f64, seed: u32) -> Self {
        Self {
            noise: Perlin::new(seed),
            scale,
            strength,
        }
    }
}

impl FlowSource for PerlinFlow {
    fn sample(&self, x: f64, y: f64, time: f64) -> Vector2D {
        let sx = x * self.scale;
        let sy = y * self.scale;
        Vector2D::new(
            self.noise.get([sx, sy, time]) * self.strength,
            self.noise.get([sx + 100.0, sy + 100.0, time]) * self.strength,
        )
    }
}

/// Curl of a scalar Perlin field: swirling, approximately divergence-free.
pub struct CurlFlow {
    noise: Perlin,
    scale: f64,
    strength: f64,
    eps: f64,
}

impl CurlFlow {
    pub fn new(scale: f64, strength: f64, seed: u32) -> Self {
        Self {
            noise: Perlin::new(seed),
            scale,
            strength,
            eps: 0.001,
        }
    }
}

impl FlowSource for CurlFlow {
    fn sample(&self, x: f64, y: f64, time: f64) -> Vector2D {
        let sx = x * self.scale;
        let sy = y * self.scale;
        let eps = self.eps * self.scale;
        if eps.abs() < SINGULARITY_EPS {
            return Vector2D::zero();
        }
        // curl F = (dF/dy, -dF/dx)
        let df_dy = (self.noise.get([sx, sy + eps, time]) - self.noise.get([sx, sy - eps, time]))
            / (2.0 * eps);
        let df_dx = (self.noise.get([sx + eps, sy, time]) - self.noise.get([sx - eps, sy, time]))
            / (2.0 * eps);
        Vector2D::new(df_dy * self.strength, -df_dx * self.strength)
    }
}

/// Pull toward a point, weakening as `strength / (1 + dist / radius)`.
///
/// A negative strength repels.
#[derive(Debug, Clone, Copy)]
pub struct PointAttractor {
    pub x: f64,
    pub y: f64,
    pub strength: f64,
    pub radius: f64,
}

impl FlowSource for PointAttractor {
    fn sample(&self, x: f64, y: f64, _time: f64) -> Vector2D {
        let mut toward = Vector2D::new(self.x - x, self.y - y);
        let dist = toward.magnitude();
        if dist < SINGULARITY_EPS || self.radius.abs() < SINGULARITY_EPS {
            return Vector2D::zero();
        }
        let magnitude = self.strength / (1.0 + dist / self.radius);
        *toward.divide(dist).multiply(magnitude)
    }
}

/// Counter-clockwise swirl around a center with Gaussian falloff.
#[derive(Debug, Clone, Copy)]
pub struct Vortex {
    pub x: f64,
    pub y: f64,
    pub strength: f64,
    pub radius: f64,
}

impl FlowSource for Vortex {
    fn sample(&self, x: f64, y: f64, _time: f64) -> Vector2D {
        let rx = x - self.x;
        let ry = y - self.y;
        let dist_sq = rx * rx + ry * ry;
        let dist = dist_sq.sqrt();
        if dist < SINGULARITY_EPS || self.radius.abs() < SINGULARITY_EPS {
            return Vector2D::zero();
        }
        let falloff = (-dist_sq / (2.0 * self.radius * self.radius)).exp();
        let scale = self.strength * falloff / dist;
        Vector2D::new(-ry * scale, rx * scale)
    }
}

/// Sum of several sources.
#[derive(Default)]
pub struct CompositeFlow {
    sources: Vec<Box<dyn FlowSource>>,
}

impl CompositeFlow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a source (builder style).
    #[allow(clippy::should_implement_trait)]
    pub fn add(mut self, source: Box<dyn FlowSource>) -> Self {
        self.sources.push(source);
        self
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

impl FlowSource for CompositeFlow {
    fn sample(&self, x: f64, y: f64, time: f64) -> Vector2D {
        self.sources
            .iter()
            .fold(Vector2D::zero(), |acc, source| acc + source.sample(x, y, time))
    }
}
