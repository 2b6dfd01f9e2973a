//! Easing curves: pure functions remapping normalized progress.
//!
//! Formulas follow the Robert Penner catalog. Input outside [0, 1] is not
//! rejected; the formula is evaluated as-is and may overshoot.
//!
//! The catalog is a `static` table and never changes at runtime, so name
//! lookups are safe from any thread without synchronization.

use crate::error::SketchError;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;

/// Signature shared by every easing function.
pub type EasingFn = fn(f64) -> f64;

pub fn linear(t: f64) -> f64 {
    t
}

pub fn ease_in_quad(t: f64) -> f64 {
    t * t
}

pub fn ease_out_quad(t: f64) -> f64 {
    t * (2.0 - t)
}

pub fn ease_in_out_quad(t: f64) -> f64 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        -1.0 + (4.0 - 2.0 * t) * t
    }
}

pub fn ease_in_cubic(t: f64) -> f64 {
    t * t * t
}

pub fn ease_out_cubic(t: f64) -> f64 {
    let u = t - 1.0;
    u * u * u + 1.0
}

pub fn ease_in_out_cubic(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        (t - 1.0) * (2.0 * t - 2.0) * (2.0 * t - 2.0) + 1.0
    }
}

pub fn ease_in_sine(t: f64) -> f64 {
    1.0 - (t * PI / 2.0).cos()
}

pub fn ease_out_sine(t: f64) -> f64 {
    (t * PI / 2.0).sin()
}

pub fn ease_in_out_sine(t: f64) -> f64 {
    -((PI * t).cos() - 1.0) / 2.0
}

/// Exactly 0 at `t == 0`; the bare formula would give 2^-10 there.
pub fn ease_in_expo(t: f64) -> f64 {
    if t == 0.0 {
        0.0
    } else {
        2f64.powf(10.0 * t - 10.0)
    }
}

/// Exactly 1 at `t == 1`.
pub fn ease_out_expo(t: f64) -> f64 {
    if t == 1.0 {
        1.0
    } else {
        1.0 - 2f64.powf(-10.0 * t)
    }
}

/// Returns `t` unchanged at exactly 0 and 1, switching halves at 0.5.
pub fn ease_in_out_expo(t: f64) -> f64 {
    if t == 0.0 || t == 1.0 {
        t
    } else if t < 0.5 {
        2f64.powf(20.0 * t - 10.0) / 2.0
    } else {
        (2.0 - 2f64.powf(-20.0 * t + 10.0)) / 2.0
    }
}

/// Name → function table, in catalog order.
static CATALOG: [(&str, EasingFn); 13] = [
    ("linear", linear),
    ("easeInQuad", ease_in_quad),
    ("easeOutQuad", ease_out_quad),
    ("easeInOutQuad", ease_in_out_quad),
    ("easeInCubic", ease_in_cubic),
    ("easeOutCubic", ease_out_cubic),
    ("easeInOutCubic", ease_in_out_cubic),
    ("easeInSine", ease_in_sine),
    ("easeOutSine", ease_out_sine),
    ("easeInOutSine", ease_in_out_sine),
    ("easeInExpo", ease_in_expo),
    ("easeOutExpo", ease_out_expo),
    ("easeInOutExpo", ease_in_out_expo),
];

/// Looks up an easing function by its catalog name (e.g. `"easeInOutExpo"`).
pub fn lookup(name: &str) -> Option<EasingFn> {
    CATALOG
        .iter()
        .find(|(n, _)| *n == name)
        .map(|&(_, f)| f)
}

/// Catalog names in order.
pub fn names() -> impl Iterator<Item = &'static str> {
    CATALOG.iter().map(|&(n, _)| n)
}

/// Typed handle onto one catalog entry.
///
/// Serializes as the catalog name, so configs can say `"easing": "easeOutSine"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Easing {
    #[default]
    Linear,
    EaseInQuad,
    EaseOutQuad,
    EaseInOutQuad,
    EaseInCubic,
    EaseOutCubic,
    EaseInOutCubic,
    EaseInSine,
    EaseOutSine,
    EaseInOutSine,
    EaseInExpo,
    EaseOutExpo,
    EaseInOutExpo,
}

impl Easing {
    /// Every variant, in catalog order.
    pub const ALL: [Easing; 13] = [
        Easing::Linear,
        Easing::EaseInQuad,
        Easing::EaseOutQuad,
        Easing::EaseInOutQuad,
        Easing::EaseInCubic,
        Easing::EaseOutCubic,
        Easing::EaseInOutCubic,
        Easing::EaseInSine,
        Easing::EaseOutSine,
        Easing::EaseInOutSine,
        Easing::EaseInExpo,
        Easing::EaseOutExpo,
        Easing::EaseInOutExpo,
    ];

    fn index(self) -> usize {
        self as usize
    }

    /// The catalog name of this curve.
    pub fn name(self) -> &'static str {
        CATALOG[self.index()].0
    }

    /// The underlying function pointer.
    pub fn function(self) -> EasingFn {
        CATALOG[self.index()].1
    }

    /// Evaluates the curve at `t`.
    pub fn apply(self, t: f64) -> f64 {
        (self.function())(t)
    }

    /// Parses a catalog name.
    pub fn from_name(name: &str) -> Result<Self, SketchError> {
        CATALOG
            .iter()
            .position(|(n, _)| *n == name)
            .map(|i| Self::ALL[i])
            .ok_or_else(|| SketchError::UnknownEasing(name.to_string()))
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn all_curves_pin_endpoints() {
        for e in Easing::ALL {
            assert!(approx_eq(e.apply(0.0), 0.0), "{e} at 0 = {}", e.apply(0.0));
            assert!(approx_eq(e.apply(1.0), 1.0), "{e} at 1 = {}", e.apply(1.0));
        }
    }

    #[test]
    fn in_out_expo_boundaries_are_exact() {
        assert_eq!(ease_in_out_expo(0.0), 0.0);
        assert_eq!(ease_in_out_expo(1.0), 1.0);
    }

    #[test]
    fn in_out_expo_switches_at_midpoint() {
        // Both halves meet at 0.5
        assert!(approx_eq(ease_in_out_expo(0.5), 0.5));
        let below = 2f64.powf(20.0 * 0.25 - 10.0) / 2.0;
        assert!(approx_eq(ease_in_out_expo(0.25), below));
        let above = (2.0 - 2f64.powf(-20.0 * 0.75 + 10.0)) / 2.0;
        assert!(approx_eq(ease_in_out_expo(0.75), above));
    }

    #[test]
    fn quad_and_cubic_known_values() {
        assert!(approx_eq(ease_in_quad(0.5), 0.25));
        assert!(approx_eq(ease_out_quad(0.5), 0.75));
        assert!(approx_eq(ease_in_out_quad(0.25), 0.125));
        assert!(approx_eq(ease_in_out_quad(0.75), 0.875));
        assert!(approx_eq(ease_in_cubic(0.5), 0.125));
        assert!(approx_eq(ease_out_cubic(0.5), 0.875));
        assert!(approx_eq(ease_in_out_cubic(0.25), 0.0625));
        assert!(approx_eq(ease_in_out_cubic(0.75), 0.9375));
    }

    #[test]
    fn sine_midpoints() {
        assert!(approx_eq(ease_in_out_sine(0.5), 0.5));
        assert!(approx_eq(ease_out_sine(0.5), (PI / 4.0).sin()));
        assert!(approx_eq(ease_in_sine(0.5), 1.0 - (PI / 4.0).cos()));
    }

    #[test]
    fn out_of_range_input_extrapolates() {
        assert!(approx_eq(ease_in_quad(2.0), 4.0));
        assert!(approx_eq(ease_out_quad(-1.0), -3.0));
        assert!(approx_eq(linear(-0.5), -0.5));
    }

    #[test]
    fn lookup_finds_every_catalog_name() {
        for name in names() {
            assert!(lookup(name).is_some(), "missing {name}");
        }
        assert!(lookup("easeInBounce").is_none());
    }

    #[test]
    fn from_name_round_trips_every_variant() {
        for e in Easing::ALL {
            assert_eq!(Easing::from_name(e.name()).unwrap(), e);
        }
    }

    #[test]
    fn from_name_unknown_returns_error() {
        assert!(matches!(
            Easing::from_name("bogus"),
            Err(SketchError::UnknownEasing(_))
        ));
    }

    #[test]
    fn serde_uses_catalog_names() {
        let json = serde_json::to_string(&Easing::EaseInOutExpo).unwrap();
        assert_eq!(json, "\"easeInOutExpo\"");
        let back: Easing = serde_json::from_str("\"easeOutSine\"").unwrap();
        assert_eq!(back, Easing::EaseOutSine);
    }

    #[test]
    fn enum_function_matches_lookup() {
        for e in Easing::ALL {
            let f = lookup(e.name()).unwrap();
            assert_eq!(f(0.3), e.apply(0.3));
        }
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn linear_is_identity(t in -10.0_f64..10.0) {
                prop_assert_eq!(linear(t), t);
            }

            #[test]
            fn curves_without_overshoot_stay_in_unit_interval(t in 0.0_f64..=1.0) {
                for e in Easing::ALL {
                    let v = e.apply(t);
                    prop_assert!(
                        (-1e-12..=1.0 + 1e-12).contains(&v),
                        "{} at {} = {}", e, t, v
                    );
                }
            }
        }
    }
}
