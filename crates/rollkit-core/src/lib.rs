#![forbid(unsafe_code)]

//! Core: orientation, slide effects, timing, and configuration.
//!
//! # Role in rollkit
//! `rollkit-core` is the pure layer. It owns the orientation enum, the fixed
//! orientation-to-effect mapping, the validated timing pair, and the optional
//! file-backed configuration. Nothing here holds state across calls.
//!
//! # How it fits in the system
//! `rollkit-widgets` builds the carousel state machine on top of these types,
//! and `rollkit-runtime` supplies the real-time clock that drives it. This
//! crate depends on neither.

pub mod config;
pub mod effect;
pub mod error;
pub mod orientation;
pub mod timing;
pub mod transition;

pub use config::{CarouselConfig, ConfigError};
pub use effect::{Effect, Offset, ease_out};
pub use error::{CarouselError, Result};
pub use orientation::Orientation;
pub use timing::Timing;
pub use transition::{TransitionSelector, TransitionSpec};
