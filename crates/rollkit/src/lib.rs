#![forbid(unsafe_code)]

//! rollkit public facade crate.
//!
//! Re-exports the carousel, its core types and the real-time runtime under
//! one roof, plus a prelude for day-to-day usage.

// --- Core re-exports -------------------------------------------------------

pub use rollkit_core::{
    CarouselConfig, CarouselError, ConfigError, Effect, Offset, Orientation, Timing,
    TransitionSelector, TransitionSpec,
};

// --- Runtime re-exports ----------------------------------------------------

pub use rollkit_runtime::{Clock, FramePump, ManualClock, SystemClock, Tickable, Ticker};

// --- Widget re-exports -----------------------------------------------------

pub use rollkit_widgets::{
    ActiveTransition, Carousel, CarouselControl, CarouselPhase, ChangeEvent, ChildEntry,
    ChildProvider, ClickEvent, ListenerId, NullSurface, RecordingSurface, SurfaceCall,
    TransitionSurface,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for rollkit hosts.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Rejected carousel settings.
    #[error(transparent)]
    Carousel(#[from] CarouselError),
    /// Configuration file could not be read or parsed.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Standard result type for rollkit hosts.
pub type Result<T> = std::result::Result<T, Error>;

// --- Config loading --------------------------------------------------------

/// Load a configuration file, picking the format from its extension.
///
/// `.json` files are parsed as JSON; anything else as TOML.
#[cfg(feature = "config")]
pub fn load_config(path: impl AsRef<std::path::Path>) -> Result<CarouselConfig> {
    let path = path.as_ref();
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let config = if is_json {
        CarouselConfig::from_json_file(path)?
    } else {
        CarouselConfig::from_toml_file(path)?
    };
    Ok(config)
}

/// Build an idle carousel from a configuration file.
#[cfg(feature = "config")]
pub fn carousel_from_file<V, S: TransitionSurface<V>>(
    surface: S,
    path: impl AsRef<std::path::Path>,
) -> Result<Carousel<V, S>> {
    let config = load_config(path)?;
    Ok(Carousel::with_config(surface, &config)?)
}

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Carousel, CarouselConfig, CarouselControl, ChangeEvent, ClickEvent, Effect, Error,
        FramePump, Orientation, Result, Tickable, Timing, TransitionSurface,
    };

    pub use crate::{core, runtime, widgets};
}

pub use rollkit_core as core;
pub use rollkit_runtime as runtime;
pub use rollkit_widgets as widgets;
