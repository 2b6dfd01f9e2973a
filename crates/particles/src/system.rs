//! An owning collection of particles advanced together, frame by frame.
//!
//! All randomness comes from one `Xorshift64` seeded by the config, and
//! particles are visited in index order, so a given [`EmitterConfig`] always
//! produces the same sequence of states.

use crate::config::EmitterConfig;
use crate::particle::{Particle, RenderState};
use serde_json::Value;
use sketchkit_core::error::SketchError;
use sketchkit_core::flow::FlowSource;
use sketchkit_core::palette::Palette;
use sketchkit_core::prng::Xorshift64;
use sketchkit_core::Simulation;
use tracing::{debug, trace};

/// Flow-field time advanced per frame.
const FLOW_TIME_STEP: f64 = 0.01;

pub struct ParticleSystem {
    config: EmitterConfig,
    palette: Palette,
    rng: Xorshift64,
    particles: Vec<Particle>,
    flow: Option<Box<dyn FlowSource>>,
    frame: u64,
}

impl std::fmt::Debug for ParticleSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParticleSystem")
            .field("config", &self.config)
            .field("live", &self.particles.len())
            .field("flow", &self.flow.is_some())
            .field("frame", &self.frame)
            .finish()
    }
}

impl ParticleSystem {
    /// Validates `config` and spawns `capacity` particles at the origin.
    pub fn new(config: EmitterConfig) -> Result<Self, SketchError> {
        config.validate()?;
        let palette = Palette::from_name(&config.palette)?;
        let mut rng = Xorshift64::new(config.seed);
        let particles = (0..config.capacity)
            .map(|_| spawn(&config, &palette, &mut rng))
            .collect();
        debug!(
            capacity = config.capacity,
            seed = config.seed,
            palette = %config.palette,
            respawn = config.respawn,
            "particle system created"
        );
        Ok(Self {
            config,
            palette,
            rng,
            particles,
            flow: None,
            frame: 0,
        })
    }

    /// Builds a system from a JSON parameter object. See [`EmitterConfig::from_json`].
    pub fn from_json(params: &Value) -> Result<Self, SketchError> {
        Self::new(EmitterConfig::from_json(params)?)
    }

    /// Steers every particle by `flow` before each update.
    pub fn with_flow(mut self, flow: Box<dyn FlowSource>) -> Self {
        self.flow = Some(flow);
        self
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn live_count(&self) -> usize {
        self.particles.len()
    }

    pub fn config(&self) -> &EmitterConfig {
        &self.config
    }

    pub fn render_states(&self) -> impl Iterator<Item = RenderState> + '_ {
        self.particles.iter().map(Particle::render_state)
    }

    /// Flow-field time for the current frame.
    fn flow_time(&self) -> f64 {
        self.frame as f64 * FLOW_TIME_STEP
    }
}

fn spawn(config: &EmitterConfig, palette: &Palette, rng: &mut Xorshift64) -> Particle {
    Particle::with_palette(
        config.origin_x,
        config.origin_y,
        &config.options,
        palette,
        rng,
    )
}

impl Simulation for ParticleSystem {
    fn step(&mut self) {
        let time = self.flow_time();
        let Self {
            config,
            palette,
            rng,
            particles,
            flow,
            ..
        } = self;

        let mut respawned = 0_usize;
        for p in particles.iter_mut() {
            if let Some(source) = flow.as_deref() {
                let force = source.sample(p.x, p.y, time);
                p.apply_force(force.x, force.y);
                if let Some(max) = config.max_speed {
                    p.limit_speed(max);
                }
            }
            if !p.update() && config.respawn {
                *p = spawn(config, palette, rng);
                respawned += 1;
            }
        }
        if !config.respawn {
            particles.retain(Particle::is_alive);
        }

        self.frame += 1;
        trace!(
            frame = self.frame,
            live = self.particles.len(),
            respawned,
            "particle step"
        );
    }

    fn frame(&self) -> u64 {
        self.frame
    }

    fn params(&self) -> Value {
        serde_json::to_value(&self.config).unwrap_or(Value::Null)
    }

    fn param_schema(&self) -> Value {
        EmitterConfig::schema()
    }
}
