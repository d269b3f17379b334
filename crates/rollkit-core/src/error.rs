#![forbid(unsafe_code)]

//! Error types for contract violations.
//!
//! Every error here is a caller mistake: a negative duration or an
//! orientation code outside the known set. They are reported synchronously at
//! the call that introduced them and are never retried or clamped.

use thiserror::Error;

/// Result alias for carousel operations.
pub type Result<T> = std::result::Result<T, CarouselError>;

/// A rejected carousel configuration or input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CarouselError {
    /// A timing knob was set to a value outside its domain.
    #[error("invalid configuration: {field} must be non-negative, got {value}")]
    InvalidConfiguration {
        /// Name of the offending knob (`each_time_ms` or `pause_ms`).
        field: &'static str,
        /// The rejected raw value.
        value: i64,
    },

    /// A raw orientation code did not name one of the four orientations.
    #[error("unknown orientation code {0}")]
    UnknownOrientation(i32),

    /// An orientation name did not match any known spelling.
    #[error("unknown orientation name {0:?}")]
    UnknownOrientationName(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_configuration_names_field_and_value() {
        let err = CarouselError::InvalidConfiguration {
            field: "pause_ms",
            value: -5,
        };
        assert_eq!(
            err.to_string(),
            "invalid configuration: pause_ms must be non-negative, got -5"
        );
    }

    #[test]
    fn unknown_orientation_display() {
        assert_eq!(
            CarouselError::UnknownOrientation(42).to_string(),
            "unknown orientation code 42"
        );
        assert_eq!(
            CarouselError::UnknownOrientationName("sideways".into()).to_string(),
            "unknown orientation name \"sideways\""
        );
    }
}
