#![forbid(unsafe_code)]

//! Runtime: wall-clock tick source for host event loops.
//!
//! # Role in rollkit
//! Widgets in `rollkit-widgets` are deterministic: they only move when the
//! host hands them elapsed time through [`Tickable::tick`]. This crate is the
//! optional bridge to real time. A [`Ticker`] fires on a background thread
//! and posts [`Tick`] messages over a channel; a [`FramePump`] drains those
//! messages on the host thread, measures elapsed time with a [`Clock`], and
//! forwards it to the widget.
//!
//! Widget state is never touched off the host thread: the background thread
//! only sends messages.

pub mod clock;
pub mod pump;
pub mod ticker;

use std::time::Duration;

pub use clock::{Clock, ManualClock, SystemClock};
pub use pump::{DEFAULT_FRAME_INTERVAL, FramePump};
pub use ticker::{StopSignal, Tick, Ticker, TickerHandle};

/// Something that advances with elapsed time.
pub trait Tickable {
    /// Advance internal clocks by `dt`.
    fn tick(&mut self, dt: Duration);

    /// Whether the target currently has anything to advance.
    ///
    /// Pumps may skip delivering time to targets that return `false`.
    fn wants_ticks(&self) -> bool {
        true
    }
}
