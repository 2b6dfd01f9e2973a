//! Typed lookups into a JSON parameter object.
//!
//! The `param_*` helpers fall back to a default when the key is missing or
//! has the wrong type, so they never fail. The `opt_*` helpers return `None`
//! in the same situations, for settings whose default is generated later
//! (randomized particle options, for instance).

use serde_json::Value;

/// `params[name]` as f64; integers are widened.
pub fn param_f64(params: &Value, name: &str, default: f64) -> f64 {
    opt_f64(params, name).unwrap_or(default)
}

/// `params[name]` as a non-negative integer.
pub fn param_u64(params: &Value, name: &str, default: u64) -> u64 {
    opt_u64(params, name).unwrap_or(default)
}

/// `params[name]` as usize. Only non-negative integers qualify.
pub fn param_usize(params: &Value, name: &str, default: usize) -> usize {
    opt_u64(params, name)
        .map(|v| v as usize)
        .unwrap_or(default)
}

pub fn param_bool(params: &Value, name: &str, default: bool) -> bool {
    params.get(name).and_then(Value::as_bool).unwrap_or(default)
}

pub fn param_string(params: &Value, name: &str, default: &str) -> String {
    opt_string(params, name).unwrap_or_else(|| default.to_owned())
}

pub fn opt_f64(params: &Value, name: &str) -> Option<f64> {
    params.get(name).and_then(Value::as_f64)
}

pub fn opt_u64(params: &Value, name: &str) -> Option<u64> {
    params.get(name).and_then(Value::as_u64)
}

pub fn opt_string(params: &Value, name: &str) -> Option<String> {
    params.get(name).and_then(Value::as_str).map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn param_f64_reads_floats_and_integers() {
        let params = json!({"speed": 2.5, "count": 10});
        assert_eq!(param_f64(&params, "speed", 1.0), 2.5);
        assert_eq!(param_f64(&params, "count", 0.0), 10.0);
    }

    #[test]
    fn param_f64_falls_back_on_missing_or_mistyped() {
        let params = json!({"speed": "fast", "drag": null});
        assert_eq!(param_f64(&params, "speed", 1.0), 1.0);
        assert_eq!(param_f64(&params, "drag", 0.3), 0.3);
        assert_eq!(param_f64(&params, "absent", 7.0), 7.0);
    }

    #[test]
    fn param_f64_on_non_object_returns_default() {
        assert_eq!(param_f64(&json!("not an object"), "speed", 4.0), 4.0);
    }

    #[test]
    fn param_u64_rejects_negative_and_fractional() {
        let params = json!({"neg": -1, "frac": 2.5, "ok": 99});
        assert_eq!(param_u64(&params, "neg", 5), 5);
        assert_eq!(param_u64(&params, "frac", 6), 6);
        assert_eq!(param_u64(&params, "ok", 0), 99);
    }

    #[test]
    fn param_usize_reads_integers() {
        let params = json!({"capacity": 300});
        assert_eq!(param_usize(&params, "capacity", 1), 300);
        assert_eq!(param_usize(&params, "missing", 1), 1);
    }

    #[test]
    fn param_bool_reads_only_booleans() {
        let params = json!({"respawn": false, "numeric": 1});
        assert!(!param_bool(&params, "respawn", true));
        assert!(param_bool(&params, "numeric", true));
    }

    #[test]
    fn param_string_reads_strings() {
        let params = json!({"palette": "ocean", "empty": "", "num": 3});
        assert_eq!(param_string(&params, "palette", "sunset"), "ocean");
        assert_eq!(param_string(&params, "empty", "sunset"), "");
        assert_eq!(param_string(&params, "num", "sunset"), "sunset");
    }

    #[test]
    fn opt_helpers_return_none_when_absent() {
        let params = json!({"vx": 1.5, "color": "#fff"});
        assert_eq!(opt_f64(&params, "vx"), Some(1.5));
        assert_eq!(opt_f64(&params, "vy"), None);
        assert_eq!(opt_string(&params, "color").as_deref(), Some("#fff"));
        assert_eq!(opt_u64(&params, "max_life"), None);
    }
}
