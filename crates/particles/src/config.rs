//! Emitter configuration: where particles spawn, how many, and from which seed.

use crate::particle::ParticleOptions;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use sketchkit_core::error::SketchError;
use sketchkit_core::palette::{Palette, DEFAULT_PALETTE};
use sketchkit_core::params::{opt_f64, param_bool, param_f64, param_string, param_u64, param_usize};

pub const DEFAULT_CAPACITY: usize = 200;
pub const DEFAULT_SEED: u64 = 42;

/// Everything needed to rebuild a particle system bit for bit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmitterConfig {
    pub origin_x: f64,
    pub origin_y: f64,
    /// Particles spawned up front. With `respawn` on this stays the live count.
    pub capacity: usize,
    pub seed: u64,
    /// Catalog name used for randomized colors.
    pub palette: String,
    pub options: ParticleOptions,
    /// Replace dead particles at the origin instead of dropping them.
    pub respawn: bool,
    /// Speed cap applied after flow steering. `None` leaves speed unbounded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_speed: Option<f64>,
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self {
            origin_x: 0.0,
            origin_y: 0.0,
            capacity: DEFAULT_CAPACITY,
            seed: DEFAULT_SEED,
            palette: DEFAULT_PALETTE.to_string(),
            options: ParticleOptions::default(),
            respawn: true,
            max_speed: None,
        }
    }
}

impl EmitterConfig {
    pub fn at(origin_x: f64, origin_y: f64) -> Self {
        Self {
            origin_x,
            origin_y,
            ..Self::default()
        }
    }

    /// Reads a flat parameter object; missing keys take defaults.
    ///
    /// Particle overrides live under `"options"`. The result is validated.
    pub fn from_json(params: &Value) -> Result<Self, SketchError> {
        let defaults = Self::default();
        let options = match params.get("options") {
            Some(v) => ParticleOptions::from_json(v)?,
            None => ParticleOptions::default(),
        };
        let config = Self {
            origin_x: param_f64(params, "origin_x", defaults.origin_x),
            origin_y: param_f64(params, "origin_y", defaults.origin_y),
            capacity: param_usize(params, "capacity", defaults.capacity),
            seed: param_u64(params, "seed", defaults.seed),
            palette: param_string(params, "palette", &defaults.palette),
            options,
            respawn: param_bool(params, "respawn", defaults.respawn),
            max_speed: opt_f64(params, "max_speed"),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), SketchError> {
        if self.capacity == 0 {
            return Err(SketchError::InvalidConfig(
                "capacity must be at least 1".to_string(),
            ));
        }
        if self.options.max_life == Some(0) {
            return Err(SketchError::InvalidConfig(
                "max_life must be at least 1".to_string(),
            ));
        }
        if let Some(r) = self.options.radius {
            if !(r.is_finite() && r >= 0.0) {
                return Err(SketchError::InvalidConfig(format!(
                    "radius must be a non-negative number, got {r}"
                )));
            }
        }
        if let Some(s) = self.max_speed {
            if !(s.is_finite() && s > 0.0) {
                return Err(SketchError::InvalidConfig(format!(
                    "max_speed must be positive, got {s}"
                )));
            }
        }
        if !Palette::list_names().contains(&self.palette.as_str()) {
            return Err(SketchError::UnknownPalette(self.palette.clone()));
        }
        Ok(())
    }

    /// Parameter schema in the shape `Simulation::param_schema` returns.
    pub fn schema() -> Value {
        json!({
            "origin_x": {"type": "number", "default": 0.0},
            "origin_y": {"type": "number", "default": 0.0},
            "capacity": {"type": "integer", "min": 1, "default": DEFAULT_CAPACITY},
            "seed": {"type": "integer", "min": 0, "default": DEFAULT_SEED},
            "palette": {
                "type": "string",
                "enum": Palette::list_names(),
                "default": DEFAULT_PALETTE
            },
            "respawn": {"type": "boolean", "default": true},
            "max_speed": {"type": "number", "min": 0.0, "optional": true},
            "options": {
                "vx": {"type": "number", "optional": true, "default_range": [-2.0, 2.0]},
                "vy": {"type": "number", "optional": true, "default_range": [-2.0, 2.0]},
                "radius": {"type": "number", "min": 0.0, "optional": true, "default_range": [2.0, 5.0]},
                "color": {
                    "type": ["string", "object"],
                    "format": "hex or {r, g, b, a}",
                    "optional": true
                },
                "max_life": {"type": "integer", "min": 1, "optional": true, "default_range": [50, 150]}
            }
        })
    }
}
