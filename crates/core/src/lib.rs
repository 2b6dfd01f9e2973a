#![deny(unsafe_code)]
//! Procedural animation primitives for 2D generative sketches.
//!
//! Scalar helpers (`math`), the easing catalog, a chainable `Vector2D`,
//! trigonometric-hash value noise, colors and named palettes, frame timers,
//! flow sources for steering, the `Simulation` trait, and a seedable
//! `Xorshift64` behind the `RandomSource` injection seam.

pub mod color;
pub mod easing;
pub mod error;
pub mod flow;
pub mod math;
pub mod palette;
pub mod params;
pub mod prng;
pub mod simulation;
pub mod timer;
pub mod value_noise;
pub mod vector;

pub use color::{Rgba, Srgb};
pub use easing::Easing;
pub use error::SketchError;
pub use flow::FlowSource;
pub use palette::Palette;
pub use prng::{RandomSource, Xorshift64};
pub use simulation::Simulation;
pub use timer::{FrameTimer, Interval};
pub use value_noise::{noise1d, noise2d};
pub use vector::Vector2D;
