//! Color values handed to particles and renderers.
//!
//! [`Rgba`] is the opaque color a particle carries: 8-bit channels plus a
//! fractional alpha, formatted as a CSS `rgba(...)` string for a canvas
//! renderer. [`Srgb`] and the OKLab/OKLCh conversions exist so palettes can
//! interpolate in a perceptual space.

use crate::error::SketchError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// sRGB color with components in [0, 1].
///
/// Serializes as `"#rrggbb"`; the hex form quantizes to 8 bits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Srgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// Linear (gamma-decoded) RGB.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// OKLab perceptual color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OkLab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

/// OKLCh, the cylindrical form of OKLab. Hue in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OkLch {
    pub l: f64,
    pub c: f64,
    pub h: f64,
}

/// Parses `#rgb`, `#rrggbb`, `rgb` or `rrggbb` into 8-bit channels.
fn parse_hex_channels(hex: &str) -> Result<[u8; 3], SketchError> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if !digits.is_ascii() {
        return Err(SketchError::InvalidColor(format!(
            "non-ascii hex color: {hex}"
        )));
    }
    let expanded: String = match digits.len() {
        3 => digits.chars().flat_map(|c| [c, c]).collect(),
        6 => digits.to_string(),
        n => {
            return Err(SketchError::InvalidColor(format!(
                "expected 3 or 6 hex digits, got {n}"
            )))
        }
    };
    let channel = |range: std::ops::Range<usize>, name: &str| {
        u8::from_str_radix(&expanded[range], 16)
            .map_err(|e| SketchError::InvalidColor(format!("invalid {name} component: {e}")))
    };
    Ok([
        channel(0..2, "red")?,
        channel(2..4, "green")?,
        channel(4..6, "blue")?,
    ])
}

impl Srgb {
    /// Parses a hex color (case insensitive, `#` optional, 3 or 6 digits).
    pub fn from_hex(hex: &str) -> Result<Srgb, SketchError> {
        let [r, g, b] = parse_hex_channels(hex)?;
        Ok(Srgb {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
        })
    }

    /// Formats as `"#rrggbb"`, clamping and rounding each channel.
    pub fn to_hex(self) -> String {
        let [r, g, b] = self.to_bytes();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// Quantizes to 8-bit channels.
    pub fn to_bytes(self) -> [u8; 3] {
        let q = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b)]
    }
}

impl Serialize for Srgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Srgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Srgb::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// 8-bit RGB with fractional alpha, the color a particle carries.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::new(255, 255, 255, 1.0);
    pub const BLACK: Rgba = Rgba::new(0, 0, 0, 1.0);

    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Parses a hex color and attaches `alpha`.
    pub fn from_hex(hex: &str, alpha: f64) -> Result<Self, SketchError> {
        let [r, g, b] = parse_hex_channels(hex)?;
        Ok(Self::new(r, g, b, alpha))
    }

    /// Same channels, different alpha.
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self { a: alpha, ..self }
    }

    /// CSS functional notation, e.g. `rgba(255, 128, 0, 0.5)`.
    ///
    /// Alpha is written as-is; a renderer fading a dead particle may pass a
    /// negative value, which CSS clamps to 0.
    pub fn to_css(self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }

    /// Drops alpha and converts channels to [0, 1].
    pub fn to_srgb(self) -> Srgb {
        Srgb {
            r: self.r as f64 / 255.0,
            g: self.g as f64 / 255.0,
            b: self.b as f64 / 255.0,
        }
    }
}

impl From<Srgb> for Rgba {
    fn from(c: Srgb) -> Self {
        let [r, g, b] = c.to_bytes();
        Rgba::new(r, g, b, 1.0)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

/// Hex string straight to a CSS `rgba(...)` string.
pub fn hex_to_rgba(hex: &str, alpha: f64) -> Result<String, SketchError> {
    Rgba::from_hex(hex, alpha).map(Rgba::to_css)
}

fn decode_gamma(c: f64) -> f64 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

fn encode_gamma(c: f64) -> f64 {
    if c <= 0.0031308 {
        c * 12.92
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

pub fn srgb_to_linear(c: Srgb) -> LinearRgb {
    LinearRgb {
        r: decode_gamma(c.r),
        g: decode_gamma(c.g),
        b: decode_gamma(c.b),
    }
}

pub fn linear_to_srgb(c: LinearRgb) -> Srgb {
    Srgb {
        r: encode_gamma(c.r),
        g: encode_gamma(c.g),
        b: encode_gamma(c.b),
    }
}

/// Björn Ottosson's forward OKLab transform.
pub fn linear_to_oklab(c: LinearRgb) -> OkLab {
    let l = (0.4122214708 * c.r + 0.5363325363 * c.g + 0.0514459929 * c.b).cbrt();
    let m = (0.2119034982 * c.r + 0.6806995451 * c.g + 0.1073969566 * c.b).cbrt();
    let s = (0.0883024619 * c.r + 0.2817188376 * c.g + 0.6299787005 * c.b).cbrt();

    OkLab {
        l: 0.2104542553 * l + 0.7936177850 * m - 0.0040720468 * s,
        a: 1.9779984951 * l - 2.4285922050 * m + 0.4505937099 * s,
        b: 0.0259040371 * l + 0.7827717662 * m - 0.8086757660 * s,
    }
}

pub fn oklab_to_linear(c: OkLab) -> LinearRgb {
    let l = (c.l + 0.3963377774 * c.a + 0.2158037573 * c.b).powi(3);
    let m = (c.l - 0.1055613458 * c.a - 0.0638541728 * c.b).powi(3);
    let s = (c.l - 0.0894841775 * c.a - 1.2914855480 * c.b).powi(3);

    LinearRgb {
        r: 4.0767416621 * l - 3.3077115913 * m + 0.2309699292 * s,
        g: -1.2684380046 * l + 2.6097574011 * m - 0.3413193965 * s,
        b: -0.0041960863 * l - 0.7034186147 * m + 1.7076147010 * s,
    }
}

/// Achromatic colors (chroma below 1e-10) get hue 0 instead of an
/// arbitrary `atan2(0, 0)`.
pub fn oklab_to_oklch(c: OkLab) -> OkLch {
    let chroma = c.a.hypot(c.b);
    let h = if chroma < 1e-10 {
        0.0
    } else {
        c.b.atan2(c.a).to_degrees().rem_euclid(360.0)
    };
    OkLch { l: c.l, c: chroma, h }
}

pub fn oklch_to_oklab(c: OkLch) -> OkLab {
    let (sin, cos) = c.h.to_radians().sin_cos();
    OkLab {
        l: c.l,
        a: c.c * cos,
        b: c.c * sin,
    }
}

pub fn srgb_to_oklch(c: Srgb) -> OkLch {
    oklab_to_oklch(linear_to_oklab(srgb_to_linear(c)))
}

/// OKLCh back to sRGB, clamped into gamut.
pub fn oklch_to_srgb(c: OkLch) -> Srgb {
    let srgb = linear_to_srgb(oklab_to_linear(oklch_to_oklab(c)));
    Srgb {
        r: srgb.r.clamp(0.0, 1.0),
        g: srgb.g.clamp(0.0, 1.0),
        b: srgb.b.clamp(0.0, 1.0),
    }
}
