#![forbid(unsafe_code)]

//! Validated timing knobs.
//!
//! Hosts often hand over timing as signed integers straight from layout
//! attributes or preference files. [`Timing::from_millis`] is the single
//! gate where those raw values are checked; past it, durations are
//! [`Duration`]s and cannot be negative.

use std::time::Duration;

use crate::error::{CarouselError, Result};

/// Default duration of one enter/exit animation.
pub const DEFAULT_EACH_TIME: Duration = Duration::from_millis(500);
/// Default interval between advances.
pub const DEFAULT_PAUSE: Duration = Duration::from_millis(1000);

/// Animation duration and timer period, shared by all orientations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Timing {
    each_time: Duration,
    pause: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            each_time: DEFAULT_EACH_TIME,
            pause: DEFAULT_PAUSE,
        }
    }
}

impl Timing {
    /// Create timing from already-validated durations.
    #[must_use]
    pub const fn new(each_time: Duration, pause: Duration) -> Self {
        Self { each_time, pause }
    }

    /// Create timing from raw milliseconds, rejecting negative values.
    pub fn from_millis(each_time_ms: i64, pause_ms: i64) -> Result<Self> {
        Ok(Self {
            each_time: millis("each_time_ms", each_time_ms)?,
            pause: millis("pause_ms", pause_ms)?,
        })
    }

    /// Duration of a single enter/exit animation.
    #[must_use]
    pub const fn each_time(&self) -> Duration {
        self.each_time
    }

    /// Timer period between advances.
    #[must_use]
    pub const fn pause(&self) -> Duration {
        self.pause
    }

    /// Replace the animation duration.
    #[must_use]
    pub const fn with_each_time(mut self, each_time: Duration) -> Self {
        self.each_time = each_time;
        self
    }

    /// Replace the timer period.
    #[must_use]
    pub const fn with_pause(mut self, pause: Duration) -> Self {
        self.pause = pause;
        self
    }

    /// A zero each-time means children swap without visible motion.
    #[must_use]
    pub const fn is_instant(&self) -> bool {
        self.each_time.is_zero()
    }
}

/// Convert a raw millisecond count, naming `field` on rejection.
pub(crate) fn millis(field: &'static str, value: i64) -> Result<Duration> {
    u64::try_from(value)
        .map(Duration::from_millis)
        .map_err(|_| CarouselError::InvalidConfiguration { field, value })
}
