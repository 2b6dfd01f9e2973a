//! The `Simulation` trait: anything an animation driver advances frame by frame.
//!
//! Object safe, so a driver can hold `Box<dyn Simulation>` and swap between
//! particle systems (or anything else stepped per frame) at runtime.

use serde_json::Value;

/// A stepped, frame-based simulation.
pub trait Simulation {
    /// Advances exactly one frame. Never fails.
    fn step(&mut self);

    /// Number of frames advanced so far.
    fn frame(&self) -> u64;

    /// Current parameter values as a JSON object.
    fn params(&self) -> Value;

    /// Schema describing each parameter: type, range, default.
    fn param_schema(&self) -> Value;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct Counter {
        frame: u64,
        stride: u64,
        total: u64,
    }

    impl Simulation for Counter {
        fn step(&mut self) {
            self.frame += 1;
            self.total += self.stride;
        }

        fn frame(&self) -> u64 {
            self.frame
        }

        fn params(&self) -> Value {
            json!({"stride": self.stride})
        }

        fn param_schema(&self) -> Value {
            json!({
                "stride": {"type": "integer", "min": 1, "default": 1}
            })
        }
    }

    fn counter() -> Counter {
        Counter {
            frame: 0,
            stride: 3,
            total: 0,
        }
    }

    #[test]
    fn simulation_trait_is_object_safe() {
        let mut sim: Box<dyn Simulation> = Box::new(counter());
        sim.step();
        sim.step();
        assert_eq!(sim.frame(), 2);
    }

    #[test]
    fn step_advances_state() {
        let mut c = counter();
        (0..4).for_each(|_| c.step());
        assert_eq!(c.total, 12);
    }

    #[test]
    fn params_and_schema_share_keys() {
        let c = counter();
        assert_eq!(c.params()["stride"], 3);
        assert_eq!(c.param_schema()["stride"]["type"], "integer");
    }
}
