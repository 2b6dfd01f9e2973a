//! Error types for sketchkit.
//!
//! The math, easing, vector, noise and particle paths are total and never
//! produce these. Errors only surface where user-supplied strings or
//! configuration enter the system.

use thiserror::Error;

/// Errors produced at the configuration and color-parsing edges.
#[derive(Debug, Error)]
pub enum SketchError {
    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// A palette could not be constructed from the given colors.
    #[error("invalid palette: {0}")]
    InvalidPalette(String),

    /// A palette name was not found in the built-in catalog.
    #[error("unknown palette: {0}")]
    UnknownPalette(String),

    /// An easing name was not found in the easing catalog.
    #[error("unknown easing: {0}")]
    UnknownEasing(String),

    /// An emitter or system configuration value was out of range.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_color_includes_message() {
        let err = SketchError::InvalidColor("bad hex".into());
        let msg = format!("{err}");
        assert!(msg.contains("bad hex"), "missing message in: {msg}");
    }

    #[test]
    fn invalid_palette_includes_message() {
        let err = SketchError::InvalidPalette("empty".into());
        let msg = format!("{err}");
        assert!(msg.contains("empty"), "missing message in: {msg}");
    }

    #[test]
    fn unknown_palette_includes_name() {
        let err = SketchError::UnknownPalette("mauve".into());
        let msg = format!("{err}");
        assert!(msg.contains("mauve"), "missing palette name in: {msg}");
    }

    #[test]
    fn unknown_easing_includes_name() {
        let err = SketchError::UnknownEasing("easeInBounce".into());
        let msg = format!("{err}");
        assert!(
            msg.contains("easeInBounce"),
            "missing easing name in: {msg}"
        );
    }

    #[test]
    fn invalid_config_includes_message() {
        let err = SketchError::InvalidConfig("capacity must be non-zero".into());
        let msg = format!("{err}");
        assert!(msg.contains("capacity"), "missing message in: {msg}");
    }

    #[test]
    fn sketch_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SketchError>();
    }

    #[test]
    fn sketch_error_implements_std_error() {
        fn assert_std_error<T: std::error::Error>() {}
        assert_std_error::<SketchError>();
    }
}
