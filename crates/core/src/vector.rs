//! Mutable 2D vector with chainable in-place arithmetic.
//!
//! Mutating methods take `&mut self` and return `&mut Self`, so steps can be
//! chained (`v.add(&w).limit(4.0)`). Callers who prefer values use the
//! operator overloads or [`Vector2D::copy`] followed by a chain.
//!
//! The operator traits are implemented by path and not imported here: with
//! `std::ops::Add` in scope, `v.add(&w)` would resolve to the by-value
//! operator instead of the in-place method.

use crate::math::TWO_PI;
use crate::prng::RandomSource;
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// A 2D vector with public, mutable components.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector2D {
    pub x: f64,
    pub y: f64,
}

impl Vector2D {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Unit vector at a uniformly random angle in `[0, 2π)`.
    pub fn random(rng: &mut dyn RandomSource) -> Self {
        Self::from_angle(rng.next_f64() * TWO_PI, 1.0)
    }

    /// Vector of length `magnitude` pointing along `angle` (radians).
    pub fn from_angle(angle: f64, magnitude: f64) -> Self {
        Self {
            x: angle.cos() * magnitude,
            y: angle.sin() * magnitude,
        }
    }

    /// Unit vector along `angle`.
    pub fn unit(angle: f64) -> Self {
        Self::from_angle(angle, 1.0)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn add(&mut self, v: &Vector2D) -> &mut Self {
        self.x += v.x;
        self.y += v.y;
        self
    }

    pub fn subtract(&mut self, v: &Vector2D) -> &mut Self {
        self.x -= v.x;
        self.y -= v.y;
        self
    }

    pub fn multiply(&mut self, scalar: f64) -> &mut Self {
        self.x *= scalar;
        self.y *= scalar;
        self
    }

    /// Divides both components. A zero divisor yields infinite or NaN components.
    pub fn divide(&mut self, scalar: f64) -> &mut Self {
        self.x /= scalar;
        self.y /= scalar;
        self
    }

    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn magnitude_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Scales to unit length. A zero vector is left unchanged.
    pub fn normalize(&mut self) -> &mut Self {
        let mag = self.magnitude();
        if mag > 0.0 {
            self.divide(mag);
        }
        self
    }

    /// Rescales to exactly `max` if currently longer; otherwise no-op.
    pub fn limit(&mut self, max: f64) -> &mut Self {
        if self.magnitude() > max {
            self.normalize().multiply(max);
        }
        self
    }

    /// Rescales to `magnitude`, keeping direction. Zero vectors stay zero.
    pub fn set_magnitude(&mut self, magnitude: f64) -> &mut Self {
        self.normalize().multiply(magnitude)
    }

    /// Rotates to `angle`, keeping the current magnitude.
    pub fn set_angle(&mut self, angle: f64) -> &mut Self {
        let mag = self.magnitude();
        self.x = angle.cos() * mag;
        self.y = angle.sin() * mag;
        self
    }

    /// Heading in radians, `atan2(y, x)`, in `(-π, π]`.
    pub fn angle(&self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Independent copy. Equivalent to dereferencing, kept for call-site clarity.
    pub fn copy(&self) -> Self {
        *self
    }

    pub fn dot(&self, v: &Vector2D) -> f64 {
        self.x * v.x + self.y * v.y
    }

    pub fn distance(&self, v: &Vector2D) -> f64 {
        crate::math::distance(self.x, self.y, v.x, v.y)
    }

    /// Moves toward `v` by fraction `t` (unclamped).
    pub fn lerp(&mut self, v: &Vector2D, t: f64) -> &mut Self {
        self.x = crate::math::lerp(self.x, v.x, t);
        self.y = crate::math::lerp(self.y, v.y, t);
        self
    }
}

impl std::ops::Add for Vector2D {
    type Output = Vector2D;

    fn add(self, rhs: Vector2D) -> Vector2D {
        Vector2D::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::Sub for Vector2D {
    type Output = Vector2D;

    fn sub(self, rhs: Vector2D) -> Vector2D {
        Vector2D::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl std::ops::Mul<f64> for Vector2D {
    type Output = Vector2D;

    fn mul(self, rhs: f64) -> Vector2D {
        Vector2D::new(self.x * rhs, self.y * rhs)
    }
}

impl std::ops::Div<f64> for Vector2D {
    type Output = Vector2D;

    fn div(self, rhs: f64) -> Vector2D {
        Vector2D::new(self.x / rhs, self.y / rhs)
    }
}

impl std::ops::Neg for Vector2D {
    type Output = Vector2D;

    fn neg(self) -> Vector2D {
        Vector2D::new(-self.x, -self.y)
    }
}

impl From<DVec2> for Vector2D {
    fn from(v: DVec2) -> Self {
        Vector2D::new(v.x, v.y)
    }
}

impl From<Vector2D> for DVec2 {
    fn from(v: Vector2D) -> Self {
        DVec2::new(v.x, v.y)
    }
}

impl From<(f64, f64)> for Vector2D {
    fn from((x, y): (f64, f64)) -> Self {
        Vector2D::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prng::{SequenceSource, Xorshift64};
    use std::f64::consts::PI;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn default_is_zero() {
        assert_eq!(Vector2D::default(), Vector2D::zero());
    }

    #[test]
    fn add_and_subtract_are_component_wise() {
        let mut v = Vector2D::new(1.0, 2.0);
        v.add(&Vector2D::new(3.0, 4.0));
        assert_eq!(v, Vector2D::new(4.0, 6.0));
        v.subtract(&Vector2D::new(1.0, 1.0));
        assert_eq!(v, Vector2D::new(3.0, 5.0));
    }

    #[test]
    fn mutators_chain() {
        let mut v = Vector2D::new(1.0, 0.0);
        v.add(&Vector2D::new(1.0, 0.0)).multiply(3.0).divide(2.0);
        assert_eq!(v, Vector2D::new(3.0, 0.0));
    }

    #[test]
    fn divide_by_zero_is_not_guarded() {
        let mut v = Vector2D::new(1.0, 0.0);
        v.divide(0.0);
        assert!(v.x.is_infinite());
        assert!(v.y.is_nan());
    }

    #[test]
    fn magnitude_of_3_4() {
        assert!(approx_eq(Vector2D::new(3.0, 4.0).magnitude(), 5.0));
        assert!(approx_eq(Vector2D::new(3.0, 4.0).magnitude_squared(), 25.0));
    }

    #[test]
    fn normalize_zero_vector_is_no_op() {
        let mut v = Vector2D::zero();
        v.normalize();
        assert_eq!(v, Vector2D::zero());
    }

    #[test]
    fn limit_shrinks_long_vectors() {
        let mut v = Vector2D::new(30.0, 40.0);
        v.limit(5.0);
        assert!(approx_eq(v.magnitude(), 5.0));
        assert!(approx_eq(v.x, 3.0));
        assert!(approx_eq(v.y, 4.0));
    }

    #[test]
    fn limit_leaves_short_vectors_unchanged() {
        let mut v = Vector2D::new(1.0, 1.0);
        v.limit(10.0);
        assert_eq!(v, Vector2D::new(1.0, 1.0));
    }

    #[test]
    fn set_angle_preserves_magnitude() {
        let mut v = Vector2D::new(0.0, 2.0);
        v.set_angle(0.0);
        assert!(approx_eq(v.x, 2.0));
        assert!(approx_eq(v.y, 0.0));
    }

    #[test]
    fn set_magnitude_keeps_direction() {
        let mut v = Vector2D::new(0.0, 3.0);
        v.set_magnitude(7.0);
        assert!(approx_eq(v.y, 7.0));
        assert!(approx_eq(v.x, 0.0));
    }

    #[test]
    fn angle_points_along_axes() {
        assert!(approx_eq(Vector2D::new(1.0, 0.0).angle(), 0.0));
        assert!(approx_eq(Vector2D::new(0.0, 1.0).angle(), PI / 2.0));
        assert!(approx_eq(Vector2D::new(-1.0, 0.0).angle(), PI));
    }

    #[test]
    fn copy_is_independent() {
        let v = Vector2D::new(1.0, 2.0);
        let mut c = v.copy();
        c.multiply(10.0);
        assert_eq!(v, Vector2D::new(1.0, 2.0));
        assert_eq!(c, Vector2D::new(10.0, 20.0));
    }

    #[test]
    fn random_is_unit_length() {
        let mut rng = Xorshift64::new(3);
        for _ in 0..100 {
            assert!(approx_eq(Vector2D::random(&mut rng).magnitude(), 1.0));
        }
    }

    #[test]
    fn random_uses_injected_angle() {
        let mut src = SequenceSource::new(vec![0.25]);
        let v = Vector2D::random(&mut src);
        assert!(approx_eq(v.x, 0.0));
        assert!(approx_eq(v.y, 1.0));
    }

    #[test]
    fn dot_and_distance() {
        let a = Vector2D::new(1.0, 2.0);
        let b = Vector2D::new(4.0, 6.0);
        assert!(approx_eq(a.dot(&b), 16.0));
        assert!(approx_eq(a.distance(&b), 5.0));
    }

    #[test]
    fn lerp_moves_toward_target() {
        let mut v = Vector2D::zero();
        v.lerp(&Vector2D::new(10.0, -10.0), 0.5);
        assert_eq!(v, Vector2D::new(5.0, -5.0));
    }

    #[test]
    fn operators_return_new_values() {
        let a = Vector2D::new(1.0, 2.0);
        let b = Vector2D::new(3.0, 5.0);
        assert_eq!(a + b, Vector2D::new(4.0, 7.0));
        assert_eq!(b - a, Vector2D::new(2.0, 3.0));
        assert_eq!(a * 2.0, Vector2D::new(2.0, 4.0));
        assert_eq!(b / 2.0, Vector2D::new(1.5, 2.5));
        assert_eq!(-a, Vector2D::new(-1.0, -2.0));
        assert_eq!(a, Vector2D::new(1.0, 2.0));
    }

    #[test]
    fn glam_conversion_round_trip() {
        let v = Vector2D::new(1.5, -2.5);
        let g: DVec2 = v.into();
        assert_eq!(g, DVec2::new(1.5, -2.5));
        assert_eq!(Vector2D::from(g), v);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn component() -> impl Strategy<Value = f64> {
            -1e4_f64..1e4
        }

        proptest! {
            #[test]
            fn copy_equals_and_is_independent(x in component(), y in component()) {
                let v = Vector2D::new(x, y);
                let mut c = v.copy();
                prop_assert_eq!(c, v);
                c.add(&Vector2D::new(1.0, 1.0));
                prop_assert_eq!(v, Vector2D::new(x, y));
            }

            #[test]
            fn normalize_yields_unit_length(x in component(), y in component()) {
                prop_assume!(x.abs() > 1e-6 || y.abs() > 1e-6);
                let mut v = Vector2D::new(x, y);
                v.normalize();
                prop_assert!((v.magnitude() - 1.0).abs() < 1e-9);
            }

            #[test]
            fn limit_bounds_magnitude(
                x in component(),
                y in component(),
                max in 0.0_f64..1e4,
            ) {
                let original = Vector2D::new(x, y);
                let mut v = original;
                v.limit(max);
                prop_assert!(v.magnitude() <= max + 1e-9 * max.max(1.0));
                if original.magnitude() <= max {
                    prop_assert_eq!(v, original);
                }
            }

            #[test]
            fn from_angle_round_trips(
                theta in -3.14159_f64..3.14159,
                m in 0.01_f64..1e3,
            ) {
                let v = Vector2D::from_angle(theta, m);
                prop_assert!((v.angle() - theta).abs() < 1e-9);
                prop_assert!((v.magnitude() - m).abs() < 1e-9 * m.max(1.0));
            }
        }
    }
}
