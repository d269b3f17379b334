#![forbid(unsafe_code)]

//! Carousel configuration as data.
//!
//! The three tunable knobs (orientation, each-time, pause) grouped into a
//! single [`CarouselConfig`] that can be built in code or, with the `config`
//! feature, loaded from TOML or JSON at startup.
//!
//! # Loading
//!
//! ```toml
//! # rollkit.toml
//! orientation = "right_to_left"
//! each_time_ms = 300
//! pause_ms = 2000
//! ```
//!
//! ```rust,ignore
//! let config = CarouselConfig::from_toml_file("rollkit.toml")?;
//! let config = CarouselConfig::from_json_str(json)?;
//! ```
//!
//! # Defaults
//!
//! Missing keys fall back to `bottom_to_top`, 500 ms and 1000 ms. Timing is
//! kept as signed milliseconds until [`CarouselConfig::timing`] validates it,
//! so a negative value in a file surfaces as
//! [`CarouselError::InvalidConfiguration`] rather than a parse error.

#[cfg(feature = "config")]
use std::path::Path;

use thiserror::Error;

use crate::error::{CarouselError, Result};
use crate::orientation::Orientation;
use crate::timing::Timing;

/// Orientation and raw timing for a carousel.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CarouselConfig {
    /// Slide direction.
    pub orientation: Orientation,
    /// Duration of one enter/exit animation in milliseconds.
    pub each_time_ms: i64,
    /// Interval between advances in milliseconds.
    pub pause_ms: i64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            orientation: Orientation::default(),
            each_time_ms: 500,
            pause_ms: 1000,
        }
    }
}

impl CarouselConfig {
    /// Build a config from an orientation and already-validated timing.
    #[must_use]
    pub fn from_parts(orientation: Orientation, timing: Timing) -> Self {
        Self {
            orientation,
            each_time_ms: saturating_millis(timing.each_time()),
            pause_ms: saturating_millis(timing.pause()),
        }
    }

    /// Set the orientation.
    #[must_use]
    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Set the each-time in milliseconds.
    #[must_use]
    pub fn each_time_ms(mut self, ms: i64) -> Self {
        self.each_time_ms = ms;
        self
    }

    /// Set the pause in milliseconds.
    #[must_use]
    pub fn pause_ms(mut self, ms: i64) -> Self {
        self.pause_ms = ms;
        self
    }

    /// Validated timing.
    pub fn timing(&self) -> Result<Timing> {
        Timing::from_millis(self.each_time_ms, self.pause_ms)
    }

    /// Check every knob is within its domain.
    pub fn validate(&self) -> Result<()> {
        self.timing().map(|_| ())
    }

    /// Load from a TOML string.
    #[cfg(feature = "config")]
    pub fn from_toml_str(s: &str) -> std::result::Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        tracing::debug!(
            orientation = %config.orientation,
            each_time_ms = config.each_time_ms,
            pause_ms = config.pause_ms,
            "Loaded carousel config from TOML"
        );
        Ok(config)
    }

    /// Load from a TOML file on disk.
    #[cfg(feature = "config")]
    pub fn from_toml_file(path: impl AsRef<Path>) -> std::result::Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Load from a JSON string.
    #[cfg(feature = "config")]
    pub fn from_json_str(s: &str) -> std::result::Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        tracing::debug!(
            orientation = %config.orientation,
            each_time_ms = config.each_time_ms,
            pause_ms = config.pause_ms,
            "Loaded carousel config from JSON"
        );
        Ok(config)
    }

    /// Load from a JSON file on disk.
    #[cfg(feature = "config")]
    pub fn from_json_file(path: impl AsRef<Path>) -> std::result::Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }

    /// Serialize to a TOML string.
    #[cfg(feature = "config")]
    pub fn to_toml_string(&self) -> std::result::Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }
}

fn saturating_millis(d: std::time::Duration) -> i64 {
    i64::try_from(d.as_millis()).unwrap_or(i64::MAX)
}

/// Errors that can occur when loading a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error reading a file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parse error.
    #[cfg(feature = "config")]
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    /// TOML serialize error.
    #[cfg(feature = "config")]
    #[error("TOML serialize error: {0}")]
    TomlSer(#[from] toml::ser::Error),
    /// JSON parse error.
    #[cfg(feature = "config")]
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    /// The file parsed but a knob is out of range.
    #[error(transparent)]
    Invalid(#[from] CarouselError),
}
