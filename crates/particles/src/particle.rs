//! A time-limited point that fades out over a fixed number of frames.
//!
//! Each call to [`Particle::update`] is one frame: `life` goes up by one,
//! the position moves by the velocity, and `alpha` is recomputed as
//! `1 - life / max_life`. The particle is alive while `life < max_life`.
//!
//! Nothing stops a caller from updating a dead particle. `life` keeps
//! counting and `alpha` goes negative; the owner is expected to discard or
//! respawn the particle the first time `update` returns false.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sketchkit_core::color::Rgba;
use sketchkit_core::error::SketchError;
use sketchkit_core::math::{random_int, random_range};
use sketchkit_core::palette::{self, Palette, DEFAULT_PALETTE};
use sketchkit_core::params::{opt_f64, opt_u64};
use sketchkit_core::prng::RandomSource;
use sketchkit_core::vector::Vector2D;

/// Range for a randomized velocity component.
pub const VELOCITY_RANGE: (f64, f64) = (-2.0, 2.0);
/// Range for a randomized radius.
pub const RADIUS_RANGE: (f64, f64) = (2.0, 5.0);
/// Inclusive range for a randomized lifetime, in frames.
pub const MAX_LIFE_RANGE: (u32, u32) = (50, 150);

/// Per-particle overrides. Every `None` is randomized at spawn time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vx: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vy: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Rgba>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_life: Option<u32>,
}

impl ParticleOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn velocity(mut self, vx: f64, vy: f64) -> Self {
        self.vx = Some(vx);
        self.vy = Some(vy);
        self
    }

    pub fn radius(mut self, radius: f64) -> Self {
        self.radius = Some(radius);
        self
    }

    pub fn color(mut self, color: Rgba) -> Self {
        self.color = Some(color);
        self
    }

    pub fn max_life(mut self, max_life: u32) -> Self {
        self.max_life = Some(max_life);
        self
    }

    /// Reads overrides from a flat JSON object.
    ///
    /// Recognized keys: `vx`, `vy`, `radius` (numbers), `color` and
    /// `max_life` (positive integer). `color` is either a hex string (alpha 1)
    /// or the `{r, g, b, a}` object that serializing the options produces.
    /// Missing or mistyped numeric keys stay `None`. A malformed `color`, or a
    /// `max_life` of 0 or beyond `u32::MAX`, is an error.
    pub fn from_json(params: &Value) -> Result<Self, SketchError> {
        let max_life = match opt_u64(params, "max_life") {
            Some(0) => {
                return Err(SketchError::InvalidConfig(
                    "max_life must be at least 1".to_string(),
                ))
            }
            Some(v) => Some(u32::try_from(v).map_err(|_| {
                SketchError::InvalidConfig(format!("max_life {v} is out of range"))
            })?),
            None => None,
        };
        Ok(Self {
            vx: opt_f64(params, "vx"),
            vy: opt_f64(params, "vy"),
            radius: opt_f64(params, "radius"),
            color: color_from_json(params.get("color"))?,
            max_life,
        })
    }
}

fn color_from_json(value: Option<&Value>) -> Result<Option<Rgba>, SketchError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(hex)) => Rgba::from_hex(hex, 1.0).map(Some),
        Some(obj @ Value::Object(_)) => serde_json::from_value(obj.clone())
            .map(Some)
            .map_err(|e| SketchError::InvalidColor(format!("invalid color object: {e}"))),
        Some(other) => Err(SketchError::InvalidColor(format!(
            "expected hex string or {{r, g, b, a}} object, got {other}"
        ))),
    }
}

/// What a renderer needs to paint one particle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderState {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub color: Rgba,
    pub alpha: f64,
}

impl RenderState {
    /// The particle color with its fade folded into the alpha channel,
    /// clamped to [0, 1].
    pub fn fill(&self) -> Rgba {
        self.color
            .with_alpha((self.color.a * self.alpha).clamp(0.0, 1.0))
    }
}

/// A point with velocity, radius, color and a frame-counted lifetime.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub radius: f64,
    pub color: Rgba,
    life: u32,
    max_life: u32,
    alpha: f64,
}

impl Particle {
    /// Spawns at `(x, y)`. Missing options are drawn from `rng`; a missing
    /// color is a random swatch from the default palette.
    pub fn new(x: f64, y: f64, options: &ParticleOptions, rng: &mut dyn RandomSource) -> Self {
        let mut particle = Self::spawn(x, y, options, rng);
        if options.color.is_none() {
            particle.color =
                palette::random_named_color(DEFAULT_PALETTE, rng).unwrap_or(Rgba::WHITE);
        }
        particle
    }

    /// Like [`Particle::new`], but a missing color is picked from `palette`.
    pub fn with_palette(
        x: f64,
        y: f64,
        options: &ParticleOptions,
        palette: &Palette,
        rng: &mut dyn RandomSource,
    ) -> Self {
        let mut particle = Self::spawn(x, y, options, rng);
        if options.color.is_none() {
            particle.color = palette.random_color(rng);
        }
        particle
    }

    /// Resolves everything except a missing color, which is left white.
    fn spawn(x: f64, y: f64, options: &ParticleOptions, rng: &mut dyn RandomSource) -> Self {
        let (v_min, v_max) = VELOCITY_RANGE;
        let (r_min, r_max) = RADIUS_RANGE;
        let (l_min, l_max) = MAX_LIFE_RANGE;

        let vx = options
            .vx
            .unwrap_or_else(|| random_range(rng, v_min, v_max));
        let vy = options
            .vy
            .unwrap_or_else(|| random_range(rng, v_min, v_max));
        let radius = options
            .radius
            .unwrap_or_else(|| random_range(rng, r_min, r_max));
        let max_life = options
            .max_life
            .unwrap_or_else(|| random_int(rng, l_min as i64, l_max as i64) as u32)
            .max(1);

        Self {
            x,
            y,
            vx,
            vy,
            radius,
            color: options.color.unwrap_or(Rgba::WHITE),
            life: 0,
            max_life,
            alpha: 1.0,
        }
    }

    /// Advances one frame. Returns whether the particle is still alive.
    pub fn update(&mut self) -> bool {
        self.life = self.life.saturating_add(1);
        self.x += self.vx;
        self.y += self.vy;
        self.alpha = 1.0 - self.life as f64 / self.max_life as f64;
        self.is_alive()
    }

    pub fn is_alive(&self) -> bool {
        self.life < self.max_life
    }

    /// Frames elapsed.
    pub fn life(&self) -> u32 {
        self.life
    }

    pub fn max_life(&self) -> u32 {
        self.max_life
    }

    /// Opacity, `1 - life / max_life`. Negative once updated past death.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// `life / max_life`, for driving an easing curve over the lifetime.
    pub fn progress(&self) -> f64 {
        self.life as f64 / self.max_life as f64
    }

    pub fn position(&self) -> Vector2D {
        Vector2D::new(self.x, self.y)
    }

    pub fn velocity(&self) -> Vector2D {
        Vector2D::new(self.vx, self.vy)
    }

    pub fn set_velocity(&mut self, v: Vector2D) {
        self.vx = v.x;
        self.vy = v.y;
    }

    /// Adds `(dx, dy)` to the velocity. Never called by `update`.
    pub fn apply_force(&mut self, dx: f64, dy: f64) {
        self.vx += dx;
        self.vy += dy;
    }

    /// Caps the speed at `max`, keeping direction.
    pub fn limit_speed(&mut self, max: f64) {
        let mut v = self.velocity();
        v.limit(max);
        self.set_velocity(v);
    }

    pub fn render_state(&self) -> RenderState {
        RenderState {
            x: self.x,
            y: self.y,
            radius: self.radius,
            color: self.color,
            alpha: self.alpha,
        }
    }
}
