#![forbid(unsafe_code)]

//! Frame pump: turns ticker fires into elapsed time on the host thread.
//!
//! # Usage
//!
//! ```ignore
//! let mut pump = FramePump::new();
//! pump.start();
//! loop {
//!     pump.wait(&mut carousel, Duration::from_millis(100));
//!     // render...
//! }
//! ```
//!
//! # Invariants
//!
//! 1. Every delivered `dt` is measured from the previous delivery (or from
//!    `start`), so time is never delivered twice.
//! 2. Several pending ticks are folded into one delivery.
//! 3. Nothing is delivered while stopped.

use std::time::Duration;

use web_time::Instant;

use crate::Tickable;
use crate::clock::{Clock, SystemClock};
use crate::ticker::{Ticker, TickerHandle};

/// Default frame cadence (~60 Hz).
pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Feeds measured wall-clock time into a [`Tickable`].
#[derive(Debug)]
pub struct FramePump<C: Clock = SystemClock> {
    clock: C,
    interval: Duration,
    ticker: Option<TickerHandle>,
    last: Option<Instant>,
}

impl Default for FramePump<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl FramePump<SystemClock> {
    /// Pump on the system clock at [`DEFAULT_FRAME_INTERVAL`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(SystemClock, DEFAULT_FRAME_INTERVAL)
    }
}

impl<C: Clock> FramePump<C> {
    /// Pump on a custom clock and cadence.
    #[must_use]
    pub fn with_clock(clock: C, interval: Duration) -> Self {
        Self {
            clock,
            interval,
            ticker: None,
            last: None,
        }
    }

    /// Frame cadence.
    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Whether the background ticker is running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.ticker.is_some()
    }

    /// Start the background ticker. No-op if already running.
    pub fn start(&mut self) {
        if self.ticker.is_some() {
            return;
        }
        self.ticker = Some(Ticker::new(self.interval).spawn());
        self.last = Some(self.clock.now());
    }

    /// Stop the background ticker. No-op if not running.
    pub fn stop(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.stop();
        }
        self.last = None;
    }

    /// Deliver elapsed time if any ticks are pending. Never blocks.
    ///
    /// Returns the number of ticks folded into the delivery.
    pub fn pump<T: Tickable + ?Sized>(&mut self, target: &mut T) -> usize {
        let pending = match &self.ticker {
            Some(ticker) => ticker.drain().len(),
            None => return 0,
        };
        if pending > 0 {
            self.deliver(target);
        }
        pending
    }

    /// Block for up to `timeout` waiting for a tick, then deliver.
    ///
    /// Returns the number of ticks folded into the delivery (0 on timeout or
    /// when stopped).
    pub fn wait<T: Tickable + ?Sized>(&mut self, target: &mut T, timeout: Duration) -> usize {
        let pending = match &self.ticker {
            Some(ticker) => match ticker.recv_timeout(timeout) {
                Some(_) => 1 + ticker.drain().len(),
                None => 0,
            },
            None => return 0,
        };
        if pending > 0 {
            self.deliver(target);
        }
        pending
    }

    /// Run for `duration` of wall time, delivering every frame.
    ///
    /// Returns the number of deliveries made. The deadline is read from the
    /// pump's clock, so a [`ManualClock`](crate::ManualClock) that nobody
    /// advances never reaches it.
    pub fn run_for<T: Tickable + ?Sized>(&mut self, target: &mut T, duration: Duration) -> usize {
        let deadline = self.clock.now() + duration;
        let mut deliveries = 0;
        while self.is_running() {
            let now = self.clock.now();
            if now >= deadline {
                break;
            }
            if self.wait(target, deadline - now) > 0 {
                deliveries += 1;
            }
        }
        deliveries
    }

    fn deliver<T: Tickable + ?Sized>(&mut self, target: &mut T) {
        let now = self.clock.now();
        let dt = self
            .last
            .map_or(Duration::ZERO, |last| now.saturating_duration_since(last));
        self.last = Some(now);
        if target.wants_ticks() {
            tracing::trace!(dt_us = dt.as_micros() as u64, "Delivering frame");
            target.tick(dt);
        }
    }
}

impl<C: Clock> Drop for FramePump<C> {
    fn drop(&mut self) {
        self.stop();
    }
}
