#![deny(unsafe_code)]
//! Fading, frame-stepped particles and a seeded particle system.
//!
//! [`Particle`] is a point with velocity, radius, color and a fixed lifetime;
//! [`ParticleSystem`] owns a population spawned from an [`EmitterConfig`],
//! optionally steered by a [`FlowSource`](sketchkit_core::FlowSource), and
//! implements [`Simulation`](sketchkit_core::Simulation).

pub mod config;
pub mod particle;
pub mod system;

pub use config::EmitterConfig;
pub use particle::{Particle, ParticleOptions, RenderState};
pub use system::ParticleSystem;
