//! Named color palettes.
//!
//! The built-in catalog is a `static` table of hex swatches, read-only for
//! the life of the process. A [`Palette`] keeps each swatch both as the
//! exact 8-bit [`Rgba`] (for picking discrete colors) and as OKLCh (for
//! smooth sampling with shortest-arc hue interpolation).

use crate::color::{oklch_to_srgb, srgb_to_oklch, OkLch, Rgba, Srgb};
use crate::error::SketchError;
use crate::prng::RandomSource;

/// Name → hex swatches. Order is the order reported by [`Palette::list_names`].
static CATALOG: &[(&str, &[&str])] = &[
    (
        "sunset",
        &["#ff6b6b", "#feca57", "#ff9ff3", "#f368e0", "#ff9f43"],
    ),
    (
        "ocean",
        &["#001f3f", "#0074d9", "#7fdbff", "#39cccc", "#3d9970"],
    ),
    (
        "forest",
        &["#2d5016", "#3e6b1f", "#5a8f29", "#7cb342", "#aed581"],
    ),
    (
        "neon",
        &["#ff00ff", "#00ffff", "#ffff00", "#ff0080", "#00ff41"],
    ),
    (
        "pastel",
        &["#ffd1dc", "#ffe4b5", "#e0bbe4", "#b5ead7", "#c7ceea"],
    ),
    (
        "monochrome",
        &["#000000", "#404040", "#808080", "#c0c0c0", "#ffffff"],
    ),
    (
        "fire",
        &["#800000", "#cc0000", "#ff4500", "#ff8c00", "#ffd700"],
    ),
    (
        "vapor",
        &["#7b2d8e", "#c77dff", "#ff9ebb", "#80ced6", "#a0e7e5"],
    ),
];

/// Palette used when nothing else is specified.
pub const DEFAULT_PALETTE: &str = "sunset";

/// An ordered set of color stops.
#[derive(Debug, Clone)]
pub struct Palette {
    colors: Vec<OkLch>,
    swatches: Vec<Rgba>,
}

impl Palette {
    /// Builds a palette from OKLCh stops. Requires at least one color.
    pub fn new(colors: Vec<OkLch>) -> Result<Self, SketchError> {
        if colors.is_empty() {
            return Err(SketchError::InvalidPalette(
                "palette requires at least 1 color".to_string(),
            ));
        }
        let swatches = colors
            .iter()
            .map(|&c| Rgba::from(oklch_to_srgb(c)))
            .collect();
        Ok(Self { colors, swatches })
    }

    /// Builds a palette from hex strings. Requires at least one color.
    pub fn from_hex(hexes: &[&str]) -> Result<Self, SketchError> {
        if hexes.is_empty() {
            return Err(SketchError::InvalidPalette(
                "palette requires at least 1 color".to_string(),
            ));
        }
        let swatches = hexes
            .iter()
            .map(|h| Rgba::from_hex(h, 1.0))
            .collect::<Result<Vec<_>, _>>()?;
        let colors = swatches.iter().map(|s| srgb_to_oklch(s.to_srgb())).collect();
        Ok(Self { colors, swatches })
    }

    /// Looks up a built-in palette.
    pub fn from_name(name: &str) -> Result<Self, SketchError> {
        let hexes = catalog_entry(name)?;
        Self::from_hex(hexes)
    }

    /// Names of every built-in palette.
    pub fn list_names() -> Vec<&'static str> {
        CATALOG.iter().map(|&(name, _)| name).collect()
    }

    pub fn len(&self) -> usize {
        self.swatches.len()
    }

    /// Always false for a constructed palette.
    pub fn is_empty(&self) -> bool {
        self.swatches.is_empty()
    }

    /// Swatch `i`, wrapping past the end.
    pub fn color(&self, i: usize) -> Rgba {
        self.swatches[i % self.swatches.len()]
    }

    pub fn swatches(&self) -> &[Rgba] {
        &self.swatches
    }

    /// One swatch chosen uniformly at random.
    pub fn random_color(&self, rng: &mut dyn RandomSource) -> Rgba {
        self.swatches[random_index(rng, self.swatches.len())]
    }

    /// Samples the gradient through all stops at `t` in [0, 1].
    ///
    /// `t` is clamped; NaN is treated as 0.
    pub fn sample(&self, t: f64) -> Srgb {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let n = self.colors.len();
        if n == 1 {
            return oklch_to_srgb(self.colors[0]);
        }

        let scaled = t * (n - 1) as f64;
        let idx = (scaled as usize).min(n - 2);
        let frac = scaled - idx as f64;

        let from = self.colors[idx];
        let to = self.colors[idx + 1];
        oklch_to_srgb(OkLch {
            l: from.l + frac * (to.l - from.l),
            c: from.c + frac * (to.c - from.c),
            h: interpolate_hue(from.h, to.h, frac),
        })
    }

    /// [`Palette::sample`] as an [`Rgba`] with the given alpha.
    pub fn sample_rgba(&self, t: f64, alpha: f64) -> Rgba {
        Rgba::from(self.sample(t)).with_alpha(alpha)
    }
}

fn catalog_entry(name: &str) -> Result<&'static [&'static str], SketchError> {
    CATALOG
        .iter()
        .find(|&&(n, _)| n == name)
        .map(|&(_, hexes)| hexes)
        .ok_or_else(|| SketchError::UnknownPalette(name.to_string()))
}

/// Picks a random swatch from a named palette without building the palette.
pub fn random_named_color(name: &str, rng: &mut dyn RandomSource) -> Result<Rgba, SketchError> {
    let hexes = catalog_entry(name)?;
    Rgba::from_hex(hexes[random_index(rng, hexes.len())], 1.0)
}

/// Uniform index into a non-empty list of `len` items.
fn random_index(rng: &mut dyn RandomSource, len: usize) -> usize {
    ((rng.next_f64() * len as f64) as usize).min(len.saturating_sub(1))
}

/// Shortest-arc hue interpolation in degrees, result in [0, 360).
fn interpolate_hue(h0: f64, h1: f64, t: f64) -> f64 {
    let delta = match h1 - h0 {
        d if d > 180.0 => d - 360.0,
        d if d < -180.0 => d + 360.0,
        d => d,
    };
    (h0 + t * delta).rem_euclid(360.0)
}
